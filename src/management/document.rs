//! Mirrors the displayed song into the host document's title and favicon.
//!
//! The document is process-wide state owned by whichever song view is mounted.
//! A view takes ownership with [`DocumentSync::enter`] and gets a
//! [`MetadataOverride`] guard back; the guard restores the defaults exactly once,
//! either through [`MetadataOverride::release`] or when it is dropped, so every
//! exit path (ready, failed, navigation away, early return) reverts the document.

use std::io::{IsTerminal, Write};

use tracing::debug;

use crate::{config, management::WorkflowState};

/// Something with a title and a favicon.
pub trait DocumentHost {
    fn set_title(&mut self, title: &str);
    fn set_favicon(&mut self, href: &str);
}

/// Title and favicon shown while no song is displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentDefaults {
    pub title: String,
    pub favicon: String,
}

impl Default for DocumentDefaults {
    fn default() -> Self {
        Self {
            title: config::APP_TITLE.to_string(),
            favicon: config::DEFAULT_FAVICON.to_string(),
        }
    }
}

pub struct DocumentSync<H> {
    host: H,
    defaults: DocumentDefaults,
}

impl<H: DocumentHost> DocumentSync<H> {
    pub fn new(host: H, defaults: DocumentDefaults) -> Self {
        Self { host, defaults }
    }

    /// Takes over the document for one view mount.
    pub fn enter(&mut self) -> MetadataOverride<'_, H> {
        MetadataOverride {
            sync: self,
            released: false,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn defaults(&self) -> &DocumentDefaults {
        &self.defaults
    }

    fn restore(&mut self) {
        debug!(title = %self.defaults.title, "restoring document defaults");
        self.host.set_title(&self.defaults.title);
        self.host.set_favicon(&self.defaults.favicon);
    }
}

/// Scoped ownership of the document's title and favicon.
pub struct MetadataOverride<'a, H: DocumentHost> {
    sync: &'a mut DocumentSync<H>,
    released: bool,
}

impl<H: DocumentHost> MetadataOverride<'_, H> {
    /// Reacts to a workflow transition.
    ///
    /// Entering `Ready` sets the song's title and its cover as favicon (the
    /// default favicon when there is no cover). Other states leave the document
    /// untouched; restoring happens when the override ends.
    pub fn observe(&mut self, state: &WorkflowState) {
        if let Some(song) = state.song() {
            let title = song.document_title();
            let favicon = song
                .cover_url
                .as_deref()
                .filter(|url| !url.is_empty())
                .unwrap_or(self.sync.defaults.favicon.as_str())
                .to_string();
            debug!(%title, %favicon, "document override");
            self.sync.host.set_title(&title);
            self.sync.host.set_favicon(&favicon);
        }
    }

    /// Ends the override now instead of at drop.
    pub fn release(mut self) {
        self.finish();
    }

    fn finish(&mut self) {
        if !self.released {
            self.released = true;
            self.sync.restore();
        }
    }
}

impl<H: DocumentHost> Drop for MetadataOverride<'_, H> {
    fn drop(&mut self) {
        self.finish();
    }
}

/// Terminal window as a document: the title goes to the window title bar.
///
/// Terminals have no favicon, the reference is only logged.
#[derive(Debug, Default)]
pub struct TerminalDocument;

impl DocumentHost for TerminalDocument {
    fn set_title(&mut self, title: &str) {
        let mut stdout = std::io::stdout();
        if stdout.is_terminal() {
            // OSC 2: set window title
            let _ = write!(stdout, "\x1b]2;{title}\x07");
            let _ = stdout.flush();
        }
    }

    fn set_favicon(&mut self, href: &str) {
        debug!(href, "favicon");
    }
}

/// In-memory document that records every write, for headless renderers and tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryDocument {
    pub title: String,
    pub favicon: String,
    pub writes: Vec<DocumentWrite>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentWrite {
    Title(String),
    Favicon(String),
}

impl MemoryDocument {
    pub fn with_defaults(defaults: &DocumentDefaults) -> Self {
        Self {
            title: defaults.title.clone(),
            favicon: defaults.favicon.clone(),
            writes: Vec::new(),
        }
    }
}

impl DocumentHost for MemoryDocument {
    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
        self.writes.push(DocumentWrite::Title(title.to_string()));
    }

    fn set_favicon(&mut self, href: &str) {
        self.favicon = href.to_string();
        self.writes.push(DocumentWrite::Favicon(href.to_string()));
    }
}
