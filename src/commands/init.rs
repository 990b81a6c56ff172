//! Init command - Write the bundled default bookmarks to disk

use anyhow::{bail, Context, Result};
use bookmark_launcher::store::defaults;
use bookmark_launcher::store::BookmarkStore;
use owo_colors::OwoColorize;
use std::path::Path;

/// Execute the init command
pub fn execute(path: &Path, force: bool) -> Result<String> {
    if path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    let categories =
        defaults::default_categories().context("Bundled bookmarks are malformed")?;
    let store = BookmarkStore::new(path, categories);
    store.save()?;

    Ok(format!(
        "{} {} bookmarks in {} categories to {}",
        "Wrote".green(),
        store.len(),
        store.categories().len(),
        path.display()
    ))
}
