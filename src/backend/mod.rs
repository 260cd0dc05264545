//! # Backend Module
//!
//! HTTP clients for the GiveMeASong API. The API does the cross-platform matching;
//! the client only talks to two endpoints:
//!
//! - `GET {api}/resolve?url=<link>` - maps a raw platform link to a song id
//! - `GET {api}/song/{id}` - returns the aggregated song record
//!
//! ```text
//! Workflow (management::workflow)
//!          ↓
//! SongApi trait
//!          ↓
//! HttpSongApi (reqwest, JSON)
//!          ↓
//! GiveMeASong API
//! ```
//!
//! ## Error Handling
//!
//! Failures come back as [`ResolutionError`] or [`FetchError`]. Nothing is retried:
//! a failed call is reported once and the user decides whether to try again. No
//! timeout is set beyond the transport's defaults.
//!
//! ## Testing
//!
//! The workflow only depends on [`SongApi`], so tests swap in a scripted fake; the
//! HTTP implementation is tested against an in-process fake server.

mod resolve;
mod song;

use async_trait::async_trait;
use reqwest::{Client, header};
use url::Url;

use crate::{
    errors::{ConfigError, FetchError, ResolutionError},
    types::{SongId, SongRecord},
};

/// The two remote operations the workflow depends on.
#[async_trait]
pub trait SongApi: Send + Sync {
    /// Maps a raw platform link to the canonical song id.
    async fn resolve(&self, raw_url: &str) -> Result<SongId, ResolutionError>;

    /// Retrieves the aggregated record of a song.
    async fn fetch_song(&self, id: &SongId) -> Result<SongRecord, FetchError>;
}

/// [`SongApi`] over HTTP.
#[derive(Debug, Clone)]
pub struct HttpSongApi {
    http: Client,
    base: Url,
}

impl HttpSongApi {
    /// Builds a client for the API rooted at `api_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiUrl`] when `api_url` is not an absolute
    /// URL that can carry a path, e.g. `mailto:` or a bare host name.
    pub fn new(api_url: &str) -> Result<Self, ConfigError> {
        let base = Url::parse(api_url).map_err(|e| ConfigError::InvalidApiUrl {
            url: api_url.to_string(),
            reason: e.to_string(),
        })?;
        if base.cannot_be_a_base() {
            return Err(ConfigError::InvalidApiUrl {
                url: api_url.to_string(),
                reason: "url cannot be a base".to_string(),
            });
        }

        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            )),
        );
        let http = Client::builder().default_headers(headers).build()?;

        Ok(Self { http, base })
    }

    /// Builds a client from the configured API base url.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::new(&crate::config::api_url())
    }

    /// Appends `segments` to the base path, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

#[async_trait]
impl SongApi for HttpSongApi {
    async fn resolve(&self, raw_url: &str) -> Result<SongId, ResolutionError> {
        resolve::resolve(self, raw_url).await
    }

    async fn fetch_song(&self, id: &SongId) -> Result<SongRecord, FetchError> {
        song::fetch_song(self, id).await
    }
}
