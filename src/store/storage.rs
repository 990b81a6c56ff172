//! JSON persistence for the category mapping
//!
//! The backing file is a single JSON object mapping category names to arrays
//! of `{"name", "url", "icon"}` records. Object key order is the display order.

use indexmap::IndexMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::bookmark::Bookmark;
use super::error::StoreError;

/// Ordered category -> bookmarks mapping
pub type Categories = IndexMap<String, Vec<Bookmark>>;

/// Read the mapping from `path`
///
/// Returns `Ok(None)` when the file does not exist. Unreadable files and
/// malformed JSON are reported as [`StoreError::Load`].
pub fn read_categories(path: &Path) -> Result<Option<Categories>, StoreError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(StoreError::Load {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })
        }
    };

    parse_categories(&content)
        .map(|categories| Some(normalize(categories)))
        .map_err(|e| StoreError::Load {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
}

/// Parse a bookmarks document without normalizing it
pub fn parse_categories(content: &str) -> serde_json::Result<Categories> {
    serde_json::from_str(content)
}

/// Overwrite `path` with the pretty-printed mapping
pub fn write_categories(path: &Path, categories: &Categories) -> Result<(), StoreError> {
    let persistence = |source: io::Error| StoreError::Persistence {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(persistence)?;
    }

    let mut content = serde_json::to_string_pretty(categories)
        .map_err(|e| persistence(io::Error::from(e)))?;
    content.push('\n');

    fs::write(path, content).map_err(persistence)
}

/// Copy `path` to `<path>.bak`, replacing an older backup
pub fn backup_file(path: &Path) -> io::Result<PathBuf> {
    let mut backup = path.as_os_str().to_owned();
    backup.push(".bak");
    let backup = PathBuf::from(backup);
    fs::copy(path, &backup)?;
    Ok(backup)
}

/// Bring a hand-edited document in line with the store invariants
///
/// Empty categories are dropped and a repeated name within a category
/// replaces the earlier entry in place.
pub fn normalize(categories: Categories) -> Categories {
    let mut normalized = Categories::with_capacity(categories.len());

    for (category, bookmarks) in categories {
        let mut kept: Vec<Bookmark> = Vec::with_capacity(bookmarks.len());
        for bookmark in bookmarks {
            match kept.iter_mut().find(|b| b.name == bookmark.name) {
                Some(existing) => {
                    log::warn!(
                        "duplicate bookmark {:?} in category {:?}; keeping the last one",
                        bookmark.name,
                        category
                    );
                    *existing = bookmark;
                }
                None => kept.push(bookmark),
            }
        }

        if kept.is_empty() {
            log::warn!("dropping empty category {:?}", category);
            continue;
        }
        normalized.insert(category, kept);
    }

    normalized
}
