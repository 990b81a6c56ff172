//! Add command - Add or replace a bookmark

use anyhow::Result;
use bookmark_launcher::store::{Bookmark, BookmarkStore};
use owo_colors::OwoColorize;

/// Execute the add command
pub fn execute(
    store: &mut BookmarkStore,
    category: &str,
    name: &str,
    url: &str,
    icon: Option<&str>,
) -> Result<String> {
    let replacing = store.bookmarks_in(category).iter().any(|b| b.name == name);
    let bookmark = Bookmark::new(name, url).with_icon(icon.unwrap_or_default());

    store.add(category, bookmark)?;

    let verb = if replacing { "Replaced:" } else { "Added:" };
    Ok(format!("{} {} -> {}", verb.green(), name, category))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixtures::sample_store;
    use bookmark_launcher::store::StoreError;
    use tempfile::tempdir;

    #[test]
    fn test_add_new_category() {
        let dir = tempdir().unwrap();
        let mut store = sample_store(&dir);

        let output = execute(
            &mut store,
            "Translate",
            "DeepL",
            "https://www.deepl.com/translator",
            Some("icons/deepl.png"),
        )
        .unwrap();

        assert!(output.contains("Added:"));
        assert_eq!(store.categories().last(), Some(&"Translate"));
        assert_eq!(store.bookmarks_in("Translate")[0].icon, "icons/deepl.png");
        assert!(store.path().exists());
    }

    #[test]
    fn test_add_replaces() {
        let dir = tempdir().unwrap();
        let mut store = sample_store(&dir);

        let output = execute(&mut store, "Dev", "GitHub", "https://github.com/trending", None)
            .unwrap();

        assert!(output.contains("Replaced:"));
        assert_eq!(store.bookmarks_in("Dev")[0].url, "https://github.com/trending");
    }

    #[test]
    fn test_add_invalid_url() {
        let dir = tempdir().unwrap();
        let mut store = sample_store(&dir);

        let err = execute(&mut store, "Dev", "Broken", "not a url", None).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<StoreError>(),
            Some(StoreError::InvalidUrl(_))
        ));
        assert!(!store.path().exists());
    }
}
