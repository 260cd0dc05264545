use colored::{Color, Colorize};
use indicatif::ProgressBar;

use crate::{
    management::WorkflowState,
    platforms::{LinkSection, link_section},
    success,
    types::SongRecord,
    utils, warning,
};

/// Presentation layer consuming the workflow's published state.
///
/// Renderers only read state; transitions stay inside the workflow.
pub trait Renderer {
    fn render(&mut self, state: &WorkflowState);
}

/// Renders to the terminal: a spinner while loading, one line per platform link when ready.
#[derive(Default)]
pub struct TerminalRenderer {
    json: bool,
    spinner: Option<ProgressBar>,
}

impl TerminalRenderer {
    /// With `json`, a ready song is printed as its JSON record instead of the link list.
    pub fn new(json: bool) -> Self {
        Self {
            json,
            spinner: None,
        }
    }

    fn start_spinner(&mut self, message: String) {
        self.stop_spinner();
        self.spinner = Some(utils::spinner(message));
    }

    fn stop_spinner(&mut self) {
        if let Some(pb) = self.spinner.take() {
            pb.finish_and_clear();
        }
    }

    fn print_song(&self, song: &SongRecord) {
        if self.json {
            match serde_json::to_string_pretty(song) {
                Ok(json) => println!("{}", json),
                Err(e) => warning!("Cannot encode song {}. Err: {}", song.id, e),
            }
            return;
        }

        println!();
        println!("{}", song.title.bold());
        println!("by {}", song.artist.purple().bold());
        if let Some(cover) = song.cover_url.as_deref().filter(|c| !c.is_empty()) {
            println!("{}", cover.dimmed());
        }
        println!();

        match link_section(song) {
            LinkSection::Buttons(buttons) => {
                for button in buttons {
                    let (r, g, b) = button.display.rgb();
                    let length = button
                        .link
                        .length_seconds
                        .map(utils::format_length)
                        .unwrap_or_default();
                    println!(
                        "  {} {} {} {}",
                        "●".color(Color::TrueColor { r, g, b }),
                        format!("{:<14}", button.display.label).bold(),
                        button.url,
                        length.dimmed()
                    );
                }
            }
            LinkSection::NoLinks => warning!("No links available yet."),
        }
    }
}

impl Renderer for TerminalRenderer {
    fn render(&mut self, state: &WorkflowState) {
        match state {
            WorkflowState::Idle => self.stop_spinner(),
            WorkflowState::Submitting { url } => {
                self.start_spinner(format!("Resolving {}...", url))
            }
            WorkflowState::Resolved { id } => {
                self.stop_spinner();
                if !self.json {
                    success!("Resolved to song {}", id);
                }
            }
            WorkflowState::LoadingSong { id } => {
                self.start_spinner(format!("Loading song {}...", id))
            }
            WorkflowState::Ready { song } => {
                self.stop_spinner();
                self.print_song(song);
            }
            WorkflowState::Failed { message } => {
                self.stop_spinner();
                warning!("{}", message);
            }
        }
    }
}

impl Drop for TerminalRenderer {
    fn drop(&mut self) {
        self.stop_spinner();
    }
}

/// Renderer that keeps every state it is shown, for headless use and tests.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub states: Vec<WorkflowState>,
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, state: &WorkflowState) {
        self.states.push(state.clone());
    }
}
