use std::io::Write;

use colored::Colorize;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::{
    info,
    management::{DocumentDefaults, DocumentSync, SongWorkflow, TerminalDocument},
    warning,
};

use super::{Renderer, TerminalRenderer, backend, drive, show_song};

/// Interactive search: one song link per line until `q` or end of input.
///
/// A failed lookup only prints its message; the prompt comes back for the next
/// link. Each resolved song opens a fresh song view that is left again before
/// the next prompt.
pub async fn search() {
    let workflow = SongWorkflow::new(backend());
    let mut renderer = TerminalRenderer::new(false);
    let mut document = DocumentSync::new(TerminalDocument::default(), DocumentDefaults::default());
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    info!("Paste a song link from any platform (q to quit).");

    loop {
        print!("{} ", ">".purple().bold());
        let _ = std::io::stdout().flush();

        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                warning!("Cannot read input. Err: {}", e);
                break;
            }
        };

        let link = line.trim();
        if link.is_empty() {
            continue;
        }
        if link.eq_ignore_ascii_case("q") || link.eq_ignore_ascii_case("quit") {
            break;
        }

        let resolved = drive(workflow.submit(link), workflow.subscribe(), |state| {
            renderer.render(state)
        })
        .await;

        if let Some(id) = resolved {
            show_song(&workflow, id, &mut renderer, &mut document, None).await;
            workflow.leave();
        }
    }
}
