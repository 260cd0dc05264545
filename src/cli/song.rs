use crate::{
    backend::SongApi,
    management::{DocumentDefaults, DocumentHost, DocumentSync, SongWorkflow, TerminalDocument},
    platforms::{LinkSection, link_section},
    success,
    types::{SongId, SongRecord},
    utils, warning,
};

use super::{Renderer, TerminalRenderer, backend, drive};

/// Shows the song with `id`, optionally opening one of its links.
pub async fn song(id: String, json: bool, open: Option<String>) {
    let id = id.trim();
    if id.is_empty() {
        crate::error!("Song id must not be empty.");
    }

    let workflow = SongWorkflow::new(backend());
    let mut renderer = TerminalRenderer::new(json);
    let mut document = DocumentSync::new(TerminalDocument::default(), DocumentDefaults::default());

    let ready = show_song(
        &workflow,
        SongId::from(id),
        &mut renderer,
        &mut document,
        open.as_deref(),
    )
    .await;

    if !ready {
        std::process::exit(1);
    }
}

/// Mounts a song view for `id` and renders it until the fetch settles.
///
/// The view owns the document for its whole lifetime; the defaults are restored
/// when this function returns, whatever the outcome. Returns `true` when the
/// song is ready.
pub async fn show_song<A, H, R>(
    workflow: &SongWorkflow<A>,
    id: SongId,
    renderer: &mut R,
    document: &mut DocumentSync<H>,
    open: Option<&str>,
) -> bool
where
    A: SongApi,
    H: DocumentHost,
    R: Renderer,
{
    let mut view = document.enter();

    drive(workflow.mount(id), workflow.subscribe(), |state| {
        renderer.render(state);
        view.observe(state);
    })
    .await;

    let state = workflow.state();
    let Some(song) = state.song() else {
        return false;
    };

    if let Some(query) = open {
        open_link(song, query);
    }
    true
}

fn open_link(song: &SongRecord, query: &str) {
    let LinkSection::Buttons(buttons) = link_section(song) else {
        warning!("No links available yet.");
        return;
    };

    let Some(button) = buttons
        .iter()
        .find(|b| utils::matches_platform(b.key, b.display.label, query))
    else {
        warning!("No {} link for {}.", query, song.title);
        return;
    };

    match webbrowser::open(button.url) {
        Ok(_) => success!("Opened {} in the browser.", button.display.label),
        Err(e) => warning!("Cannot open {}. Err: {}", button.url, e),
    }
}
