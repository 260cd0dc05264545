//! Display metadata for streaming platforms.
//!
//! Platform keys in a song record are open-ended strings. [`display_for`] maps
//! every key to a label, an icon reference and an accent color, falling back to a
//! generic entry for keys it does not know. [`link_section`] projects a song onto
//! the buttons a renderer should show.

use crate::types::{PlatformLink, SongRecord};

/// How one platform is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformDisplay {
    pub label: &'static str,
    /// Icon reference, e.g. a Font Awesome id.
    pub icon: &'static str,
    /// Accent color as `#rrggbb`.
    pub color: &'static str,
}

impl PlatformDisplay {
    /// Accent color as an RGB triple.
    pub fn rgb(&self) -> (u8, u8, u8) {
        let hex = self.color.trim_start_matches('#');
        let channel = |range: std::ops::Range<usize>| {
            hex.get(range)
                .and_then(|c| u8::from_str_radix(c, 16).ok())
                .unwrap_or(0)
        };
        (channel(0..2), channel(2..4), channel(4..6))
    }
}

pub static RECOGNIZED: [(&str, PlatformDisplay); 4] = [
    (
        "spotify",
        PlatformDisplay {
            label: "Spotify",
            icon: "fa-spotify",
            color: "#22c55e",
        },
    ),
    (
        "youtube_music",
        PlatformDisplay {
            label: "YouTube Music",
            icon: "fa-youtube",
            color: "#dc2626",
        },
    ),
    (
        "deezer",
        PlatformDisplay {
            label: "Deezer",
            icon: "fa-deezer",
            color: "#ec4899",
        },
    ),
    (
        "soundcloud",
        PlatformDisplay {
            label: "SoundCloud",
            icon: "fa-soundcloud",
            color: "#f97316",
        },
    ),
];

pub static DEFAULT_DISPLAY: PlatformDisplay = PlatformDisplay {
    label: "Listen",
    icon: "fa-music",
    color: "#3b82f6",
};

/// Display metadata for a platform key; unknown keys get [`DEFAULT_DISPLAY`].
pub fn display_for(platform_key: &str) -> &'static PlatformDisplay {
    RECOGNIZED
        .iter()
        .find(|(key, _)| *key == platform_key)
        .map(|(_, display)| display)
        .unwrap_or(&DEFAULT_DISPLAY)
}

/// One link button of a ready song.
#[derive(Debug, Clone, PartialEq)]
pub struct PlatformButton<'a> {
    pub key: &'a str,
    pub url: &'a str,
    pub display: &'static PlatformDisplay,
    /// The entry the button was built from, for renderers showing its metadata.
    pub link: &'a PlatformLink,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LinkSection<'a> {
    Buttons(Vec<PlatformButton<'a>>),
    /// No platform entry has a url; renderers show a "no links available" note.
    NoLinks,
}

pub fn link_section(song: &SongRecord) -> LinkSection<'_> {
    let buttons: Vec<PlatformButton<'_>> = song
        .renderable_links()
        .filter_map(|(key, link)| {
            link.url.as_deref().map(|url| PlatformButton {
                key,
                url,
                display: display_for(key),
                link,
            })
        })
        .collect();

    if buttons.is_empty() {
        LinkSection::NoLinks
    } else {
        LinkSection::Buttons(buttons)
    }
}
