//! Open command - Launch a bookmark in the browser

use anyhow::{bail, Result};
use bookmark_launcher::launcher::{self, UrlOpener};
use bookmark_launcher::store::{Bookmark, BookmarkStore};
use owo_colors::OwoColorize;

/// Find the bookmark to open
///
/// With a category: exact name, then case-insensitive name, within it.
/// Without: first case-insensitive name match, then a unique search hit.
pub fn resolve<'a>(
    store: &'a BookmarkStore,
    name: &str,
    category: Option<&str>,
) -> Result<(&'a str, &'a Bookmark)> {
    if let Some(category) = category {
        let Some((category, bookmarks)) = store.as_map().get_key_value(category) else {
            bail!("No such category: {}", category);
        };
        let wanted = name.to_lowercase();
        return bookmarks
            .iter()
            .find(|b| b.name == name)
            .or_else(|| bookmarks.iter().find(|b| b.name.to_lowercase() == wanted))
            .map(|b| (category.as_str(), b))
            .ok_or_else(|| anyhow::anyhow!("No bookmark named \"{}\" in {}", name, category));
    }

    if let Some(found) = store.find(name) {
        return Ok(found);
    }

    let hits: Vec<_> = store.search(name).collect();
    match hits.as_slice() {
        [] => bail!("No bookmark matches \"{}\"", name),
        [single] => Ok(*single),
        many => {
            let candidates = many
                .iter()
                .map(|(category, b)| format!("{} ({})", b.name, category))
                .collect::<Vec<_>>()
                .join(", ");
            bail!("\"{}\" is ambiguous: {}", name, candidates)
        }
    }
}

/// Execute the open command
///
/// With `print_only` the URL is returned instead of opened.
pub fn execute(
    store: &BookmarkStore,
    opener: &dyn UrlOpener,
    name: &str,
    category: Option<&str>,
    print_only: bool,
) -> Result<String> {
    let (category, bookmark) = resolve(store, name, category)?;

    if print_only {
        return Ok(bookmark.url.clone());
    }

    launcher::launch(opener, bookmark)?;
    Ok(format!(
        "{} {} ({}) {}",
        "Opened:".green(),
        bookmark.name,
        category,
        bookmark.url.dimmed()
    ))
}
