use reqwest::header;
use tracing::debug;

use crate::{
    errors::ResolutionError,
    types::{ErrorResponse, ResolveResponse, SongId},
};

use super::HttpSongApi;

/// Resolves a raw platform link to its canonical song id.
///
/// Sends `GET {api}/resolve?url=<raw_url>` with `Accept: application/json`. The
/// link itself is not validated here; the server decides whether it is usable.
///
/// # Returns
///
/// - `Ok(SongId)` - the `id` field of a 2xx JSON body
/// - `Err(ResolutionError::Rejected)` - non-2xx with an `error` message, verbatim
/// - `Err(ResolutionError::Status)` - non-2xx without a readable error message
/// - `Err(ResolutionError::Network)` - no response at all
/// - `Err(ResolutionError::Malformed)` - 2xx body without a usable `id`
pub(super) async fn resolve(api: &HttpSongApi, raw_url: &str) -> Result<SongId, ResolutionError> {
    let endpoint = api.endpoint(&["resolve"]);
    debug!(%endpoint, raw_url, "resolving song link");

    let response = api
        .http
        .get(endpoint)
        .query(&[("url", raw_url)])
        .header(header::ACCEPT, "application/json")
        .send()
        .await
        .map_err(|e| ResolutionError::Network(e.to_string()))?;

    let status = response.status();
    let body = response
        .bytes()
        .await
        .map_err(|e| ResolutionError::Network(e.to_string()))?;

    if !status.is_success() {
        let message = serde_json::from_slice::<ErrorResponse>(&body)
            .ok()
            .and_then(|b| b.error)
            .filter(|m| !m.is_empty());
        debug!(status = status.as_u16(), ?message, "resolve rejected");

        return Err(match message {
            Some(message) => ResolutionError::Rejected(message),
            None => ResolutionError::Status(status.as_u16()),
        });
    }

    let res: ResolveResponse =
        serde_json::from_slice(&body).map_err(|e| ResolutionError::Malformed(e.to_string()))?;
    if res.id.is_empty() {
        return Err(ResolutionError::Malformed("empty song id".to_string()));
    }

    Ok(SongId::from(res.id))
}
