use crate::{
    error,
    management::{DocumentDefaults, DocumentSync, SongWorkflow, TerminalDocument},
};

use super::{Renderer, TerminalRenderer, backend, drive, show_song};

/// Resolves `url` and shows the song it maps to.
pub async fn resolve(url: String, json: bool, open: Option<String>) {
    if url.trim().is_empty() {
        error!("Song link must not be empty.");
    }

    let workflow = SongWorkflow::new(backend());
    let mut renderer = TerminalRenderer::new(json);

    let resolved = drive(workflow.submit(&url), workflow.subscribe(), |state| {
        renderer.render(state)
    })
    .await;

    let Some(id) = resolved else {
        std::process::exit(1);
    };

    let mut document = DocumentSync::new(TerminalDocument::default(), DocumentDefaults::default());
    if !show_song(&workflow, id, &mut renderer, &mut document, open.as_deref()).await {
        std::process::exit(1);
    }
}
