//! Bookmark value type and URL validity check

use serde::{Deserialize, Deserializer, Serialize};
use url::Url;

use super::error::StoreError;

/// A named shortcut to a URL
///
/// Field order is the order written to `bookmarks.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    /// Display name, unique within its category
    pub name: String,

    /// Absolute URL with scheme and host
    pub url: String,

    /// Icon path or reference; empty means no icon
    #[serde(default, deserialize_with = "null_as_empty")]
    pub icon: String,
}

/// Other writers emit `null` for an absent icon
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Bookmark {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            icon: String::new(),
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    pub fn has_icon(&self) -> bool {
        !self.icon.is_empty()
    }
}

/// Partial replacement for [`Bookmark`] fields; `None` keeps the current value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookmarkPatch {
    pub name: Option<String>,
    pub url: Option<String>,
    pub icon: Option<String>,
}

impl BookmarkPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.url.is_none() && self.icon.is_none()
    }
}

/// Check that a URL string has both a scheme and a host
pub fn is_valid_url(url: &str) -> bool {
    match Url::parse(url) {
        Ok(parsed) => parsed.host_str().is_some_and(|host| !host.is_empty()),
        Err(_) => false,
    }
}

/// Like [`is_valid_url`], but as a `Result` for the store's write paths
pub fn validate_url(url: &str) -> Result<(), StoreError> {
    if is_valid_url(url) {
        Ok(())
    } else {
        Err(StoreError::InvalidUrl(url.to_string()))
    }
}

pub(crate) fn validate_name(name: &str) -> Result<(), StoreError> {
    if name.trim().is_empty() {
        Err(StoreError::EmptyName)
    } else {
        Ok(())
    }
}
