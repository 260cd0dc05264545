#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use givemeasong::{
    backend::SongApi,
    errors::{FetchError, ResolutionError},
    types::{SongId, SongRecord},
};
use serde_json::json;
use tokio::sync::oneshot;

// Helper function to build a song record from the wire JSON
pub fn song_from_json(value: serde_json::Value) -> SongRecord {
    serde_json::from_value(value).unwrap()
}

pub fn sample_song() -> SongRecord {
    song_from_json(json!({
        "id": "xyz",
        "title": "Song",
        "artist": "Artist",
        "platforms": {
            "spotify": { "url": "https://open.spotify.com/track/abc" },
            "deezer": null
        }
    }))
}

/// Scripted backend: answers from fixed tables, optionally holding a call until
/// the test releases it. Clones share gates and the call log, so a test keeps a
/// handle after moving the fake into a workflow.
#[derive(Default, Clone)]
pub struct FakeApi {
    pub resolutions: HashMap<String, Result<SongId, ResolutionError>>,
    pub songs: HashMap<String, Result<SongRecord, FetchError>>,
    pub gates: Arc<Mutex<HashMap<String, oneshot::Receiver<()>>>>,
    pub calls: Arc<Mutex<Vec<String>>>,
}

impl FakeApi {
    pub fn with_resolution(mut self, url: &str, result: Result<SongId, ResolutionError>) -> Self {
        self.resolutions.insert(url.to_string(), result);
        self
    }

    pub fn with_song(mut self, id: &str, result: Result<SongRecord, FetchError>) -> Self {
        self.songs.insert(id.to_string(), result);
        self
    }

    /// Holds the call for `key` (a url or song id) until the returned sender fires.
    pub fn gate(&self, key: &str) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().unwrap().insert(key.to_string(), rx);
        tx
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    async fn wait_gate(&self, key: &str) {
        let gate = self.gates.lock().unwrap().remove(key);
        if let Some(gate) = gate {
            let _ = gate.await;
        }
    }
}

#[async_trait]
impl SongApi for FakeApi {
    async fn resolve(&self, raw_url: &str) -> Result<SongId, ResolutionError> {
        self.calls.lock().unwrap().push(format!("resolve:{raw_url}"));
        self.wait_gate(raw_url).await;
        self.resolutions
            .get(raw_url)
            .cloned()
            .unwrap_or_else(|| Err(ResolutionError::Status(500)))
    }

    async fn fetch_song(&self, id: &SongId) -> Result<SongRecord, FetchError> {
        self.calls.lock().unwrap().push(format!("song:{id}"));
        self.wait_gate(id.as_str()).await;
        self.songs
            .get(id.as_str())
            .cloned()
            .unwrap_or_else(|| Err(FetchError::Status(404)))
    }
}
