//! Bundled default dataset, used when no bookmarks file exists yet

use super::storage::{self, Categories};

/// The default bookmarks document, embedded at build time
pub const DEFAULT_BOOKMARKS_JSON: &str = include_str!("../../assets/default_bookmarks.json");

/// Parse the bundled dataset
pub fn default_categories() -> serde_json::Result<Categories> {
    storage::parse_categories(DEFAULT_BOOKMARKS_JSON).map(storage::normalize)
}
