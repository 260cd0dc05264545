//! # CLI Module
//!
//! Command-line surface of GiveMeASong. It is the presentation layer over the
//! workflow in [`crate::management`]: commands issue `submit`/`mount`, a
//! [`Renderer`] draws every published state, and a song view owns the terminal
//! title for as long as it is shown.
//!
//! ## Commands
//!
//! - [`resolve`] - resolve a link, then show the song it maps to
//! - [`song`] - show a song by its id
//! - [`search`] - interactive prompt; failed lookups keep the prompt usable
//! - [`platforms`] - list the platform display table
//!
//! ## Flow
//!
//! ```text
//! link → submit → Resolved(id) → song view: mount(id) → Ready | Failed
//! ```
//!
//! One-shot commands exit with status 1 when the lookup ends in `Failed`.

mod platforms;
mod render;
mod resolve;
mod search;
mod song;

use tokio::sync::watch;

use crate::{backend::HttpSongApi, error, management::WorkflowState};

pub use platforms::platforms;
pub use render::RecordingRenderer;
pub use render::Renderer;
pub use render::TerminalRenderer;
pub use resolve::resolve;
pub use search::search;
pub use song::show_song;
pub use song::song;

/// Runs `task` while handing every state it publishes to `on_change`.
///
/// The last state is delivered before the task's output is returned, so a
/// renderer always sees the final transition.
pub async fn drive<F, O>(
    task: F,
    mut states: watch::Receiver<WorkflowState>,
    mut on_change: impl FnMut(&WorkflowState),
) -> O
where
    F: Future<Output = O>,
{
    tokio::pin!(task);
    states.mark_unchanged();

    loop {
        tokio::select! {
            biased;
            changed = states.changed() => {
                if changed.is_err() {
                    return task.await;
                }
                on_change(&*states.borrow_and_update());
            }
            output = &mut task => {
                if states.has_changed().unwrap_or(false) {
                    on_change(&*states.borrow_and_update());
                }
                return output;
            }
        }
    }
}

fn backend() -> HttpSongApi {
    match HttpSongApi::from_env() {
        Ok(api) => api,
        Err(e) => error!("Cannot set up the API client. Err: {}", e),
    }
}
