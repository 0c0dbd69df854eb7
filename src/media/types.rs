//! Media item data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use super::timestamp::parse_timestamp;

/// Reserved type label meaning "no type restriction"
///
/// Never a valid item type; the store rejects catalogs that use it.
pub const WILDCARD_TYPE: &str = "all";

/// Stable identifier of a media item
///
/// Catalogs may spell ids as numbers or strings; both normalize to the same
/// string form so `1` and `"1"` refer to the same item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "RawId", into = "String")]
pub struct MediaId(String);

impl MediaId {
    /// Create an id from anything string-like
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the id as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MediaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MediaId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for MediaId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<u64> for MediaId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl From<MediaId> for String {
    fn from(id: MediaId) -> Self {
        id.0
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Int(i64),
    Str(String),
}

impl From<RawId> for MediaId {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Int(n) => Self(n.to_string()),
            RawId::Str(s) => Self(s),
        }
    }
}

/// Treat an explicit `null` the same as a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One entry of the media catalog
///
/// Read-only to the filtering engine. Optional fields use `Option` and are
/// checked with the `has_*` helpers rather than by inspecting empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaItem {
    pub id: MediaId,

    pub title: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Category label (never the `all` wildcard)
    #[serde(rename = "type")]
    pub media_type: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,

    /// Raw access timestamp; only used for ordering
    pub date_accessed: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl MediaItem {
    /// Create an item with the required fields; optional fields start empty
    #[must_use]
    pub fn new(
        id: impl Into<MediaId>,
        title: impl Into<String>,
        media_type: impl Into<String>,
        date_accessed: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            notes: None,
            media_type: media_type.into(),
            tags: Vec::new(),
            date_accessed: date_accessed.into(),
            image: None,
            link: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    #[must_use]
    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    /// Parsed access time, `None` when `date_accessed` is unparseable
    #[must_use]
    pub fn accessed_at(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.date_accessed)
    }

    /// Notes text when present and non-empty
    #[must_use]
    pub fn notes_text(&self) -> Option<&str> {
        self.notes.as_deref().filter(|n| !n.is_empty())
    }

    #[must_use]
    pub fn has_notes(&self) -> bool {
        self.notes_text().is_some()
    }

    #[must_use]
    pub fn has_tags(&self) -> bool {
        !self.tags.is_empty()
    }

    /// Link when present and non-empty
    #[must_use]
    pub fn link_url(&self) -> Option<&str> {
        self.link.as_deref().filter(|l| !l.is_empty())
    }

    /// Image when present and non-empty
    #[must_use]
    pub fn image_url(&self) -> Option<&str> {
        self.image.as_deref().filter(|i| !i.is_empty())
    }
}

/// Type filter selection: the `all` wildcard or one exact label
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TypeSelection {
    /// No type restriction
    #[default]
    All,
    /// Only items whose type equals this label (case-sensitive)
    Only(String),
}

impl TypeSelection {
    /// Selection restricted to a single label
    #[must_use]
    pub fn only(label: impl Into<String>) -> Self {
        Self::from(label.into())
    }

    #[must_use]
    pub const fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// The label as shown in type pickers (`all` for the wildcard)
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::All => WILDCARD_TYPE,
            Self::Only(label) => label,
        }
    }
}

impl From<String> for TypeSelection {
    fn from(label: String) -> Self {
        if label == WILDCARD_TYPE {
            Self::All
        } else {
            Self::Only(label)
        }
    }
}

impl From<&str> for TypeSelection {
    fn from(label: &str) -> Self {
        Self::from(label.to_string())
    }
}

impl From<TypeSelection> for String {
    fn from(selection: TypeSelection) -> Self {
        match selection {
            TypeSelection::All => WILDCARD_TYPE.to_string(),
            TypeSelection::Only(label) => label,
        }
    }
}

impl FromStr for TypeSelection {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for TypeSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
