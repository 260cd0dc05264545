use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Deserializer, Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};
use tabled::Tabled;

/// Canonical song identifier assigned by the resolution service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SongId(String);

impl SongId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SongId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for SongId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for SongId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl AsRef<str> for SongId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// One aggregated song with its links across streaming platforms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SongRecord {
    pub id: SongId,
    pub title: String,
    pub artist: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
    /// Platform key to link; `None` entries mark platforms without a match.
    #[serde(default)]
    pub platforms: Option<BTreeMap<String, Option<PlatformLink>>>,
}

impl SongRecord {
    /// Title shown in the host document while this song is displayed.
    pub fn document_title(&self) -> String {
        format!(
            "{} by {} | {}",
            self.title,
            self.artist,
            crate::config::APP_TITLE
        )
    }

    /// Platforms whose entry carries a non-empty url, in key order.
    pub fn renderable_links(&self) -> impl Iterator<Item = (&str, &PlatformLink)> {
        self.platforms
            .iter()
            .flatten()
            .filter_map(|(key, link)| match link {
                Some(link) if link.is_renderable() => Some((key.as_str(), link)),
                _ => None,
            })
    }
}

/// A song's page on one platform.
///
/// Only `url` matters for rendering; the rest is platform-specific metadata kept
/// as received, unknown fields included. Metadata of an unexpected type reads as
/// absent instead of failing the whole record.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PlatformLink {
    #[serde(default, deserialize_with = "lenient")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub artists: Option<Artists>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub album: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
    /// Track length in seconds.
    #[serde(
        default,
        rename = "length",
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub length_seconds: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

impl PlatformLink {
    pub fn is_renderable(&self) -> bool {
        self.url.as_deref().is_some_and(|url| !url.is_empty())
    }
}

/// Artist credit of a platform link; platforms send either one string or a list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Artists {
    One(String),
    Many(Vec<String>),
}

impl fmt::Display for Artists {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Artists::One(name) => f.write_str(name),
            Artists::Many(names) => f.write_str(&names.join(", ")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolveResponse {
    pub id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Tabled)]
pub struct PlatformTableRow {
    pub key: String,
    pub label: String,
    pub icon: String,
    pub color: String,
}
