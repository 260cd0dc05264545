use tracing::debug;

use crate::{
    errors::FetchError,
    types::{SongId, SongRecord},
};

use super::HttpSongApi;

/// Retrieves the aggregated song record for `id`.
///
/// Sends `GET {api}/song/{id}`. A 2xx body is trusted to be a song record; any
/// non-2xx status becomes [`FetchError::Status`] regardless of the body.
pub(super) async fn fetch_song(api: &HttpSongApi, id: &SongId) -> Result<SongRecord, FetchError> {
    let endpoint = api.endpoint(&["song", id.as_str()]);
    debug!(%endpoint, "fetching song");

    let response = api
        .http
        .get(endpoint)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        debug!(status = status.as_u16(), "song fetch failed");
        return Err(FetchError::Status(status.as_u16()));
    }

    let body = response
        .bytes()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    serde_json::from_slice::<SongRecord>(&body).map_err(|e| FetchError::Malformed(e.to_string()))
}
