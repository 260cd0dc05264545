use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::watch;
use tracing::debug;

use crate::{
    backend::SongApi,
    types::{SongId, SongRecord},
};

/// Lifecycle of one lookup, published to renderers.
///
/// A single variant at a time: loading and failure can never be set together,
/// and a song is only present once it is ready.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum WorkflowState {
    #[default]
    Idle,
    /// Resolve request in flight.
    Submitting { url: String },
    /// The link resolved; the song view for `id` is the navigation target.
    Resolved { id: SongId },
    /// Song fetch in flight.
    LoadingSong { id: SongId },
    Ready { song: SongRecord },
    Failed { message: String },
}

impl WorkflowState {
    pub fn song(&self) -> Option<&SongRecord> {
        match self {
            WorkflowState::Ready { song } => Some(song),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            WorkflowState::Failed { message } => Some(message),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(
            self,
            WorkflowState::Submitting { .. } | WorkflowState::LoadingSong { .. }
        )
    }

    pub fn name(&self) -> &'static str {
        match self {
            WorkflowState::Idle => "idle",
            WorkflowState::Submitting { .. } => "submitting",
            WorkflowState::Resolved { .. } => "resolved",
            WorkflowState::LoadingSong { .. } => "loading_song",
            WorkflowState::Ready { .. } => "ready",
            WorkflowState::Failed { .. } => "failed",
        }
    }
}

/// Drives resolve and fetch calls and owns every state transition.
///
/// Commands take `&self`, so a second command may start while the first one is
/// still waiting on the network. Every command opens a new attempt; a result is
/// applied only while its attempt is the latest one, so a slow stale response
/// can never replace the state of a newer request.
pub struct SongWorkflow<A> {
    api: A,
    state: watch::Sender<WorkflowState>,
    attempt: AtomicU64,
}

impl<A: SongApi> SongWorkflow<A> {
    pub fn new(api: A) -> Self {
        let (state, _) = watch::channel(WorkflowState::Idle);
        Self {
            api,
            state,
            attempt: AtomicU64::new(0),
        }
    }

    /// Receiver that is notified on every transition.
    pub fn subscribe(&self) -> watch::Receiver<WorkflowState> {
        self.state.subscribe()
    }

    pub fn state(&self) -> WorkflowState {
        self.state.borrow().clone()
    }

    /// Resolves `raw_url` and returns the song id to navigate to.
    ///
    /// The link is sent as given. The caller guarantees a non-empty link; a blank
    /// one is ignored without a transition. On failure the state becomes `Failed` with the error message
    /// and `None` is returned. `None` is also returned when a newer command took
    /// over while the request was in flight.
    pub async fn submit(&self, raw_url: &str) -> Option<SongId> {
        if raw_url.trim().is_empty() {
            debug!("ignoring blank link");
            return None;
        }

        let attempt = self.begin(WorkflowState::Submitting {
            url: raw_url.to_string(),
        });

        match self.api.resolve(raw_url).await {
            Ok(id) => self
                .apply(attempt, WorkflowState::Resolved { id: id.clone() })
                .then_some(id),
            Err(e) => {
                debug!(error = ?e, "resolve failed");
                self.apply(
                    attempt,
                    WorkflowState::Failed {
                        message: e.to_string(),
                    },
                );
                None
            }
        }
    }

    /// Loads the song view for `id`, ending in `Ready` or `Failed`.
    pub async fn mount(&self, id: SongId) {
        let attempt = self.begin(WorkflowState::LoadingSong { id: id.clone() });

        let next = match self.api.fetch_song(&id).await {
            Ok(song) => WorkflowState::Ready { song },
            Err(e) => {
                debug!(error = ?e, %id, "song fetch failed");
                WorkflowState::Failed {
                    message: e.to_string(),
                }
            }
        };
        self.apply(attempt, next);
    }

    /// Leaves the current view: drops the song and supersedes in-flight requests.
    pub fn leave(&self) {
        self.begin(WorkflowState::Idle);
    }

    /// Numbers the attempt and publishes its first state under the same lock, so
    /// a superseded attempt can never overwrite a newer result.
    fn begin(&self, next: WorkflowState) -> u64 {
        let mut attempt = 0;
        self.state.send_modify(|state| {
            attempt = self.attempt.fetch_add(1, Ordering::SeqCst) + 1;
            debug!(attempt, state = next.name(), "transition");
            *state = next;
        });
        attempt
    }

    fn apply(&self, attempt: u64, next: WorkflowState) -> bool {
        self.state.send_if_modified(|state| {
            let latest = self.attempt.load(Ordering::SeqCst);
            if latest != attempt {
                debug!(attempt, latest, "discarding superseded result");
                return false;
            }
            debug!(attempt, state = next.name(), "transition");
            *state = next;
            true
        })
    }
}
