//! Update command - Change fields of an existing bookmark

use anyhow::{bail, Result};
use bookmark_launcher::store::{BookmarkPatch, BookmarkStore};
use owo_colors::OwoColorize;

/// Execute the update command
pub fn execute(
    store: &mut BookmarkStore,
    category: &str,
    name: &str,
    patch: BookmarkPatch,
) -> Result<String> {
    if patch.is_empty() {
        bail!("Nothing to update: pass --name, --url or --icon");
    }

    let new_name = patch.name.clone();
    if !store.update(category, name, patch)? {
        return Ok(format!("No bookmark named \"{}\" in {}", name, category));
    }

    Ok(match new_name {
        Some(new_name) if new_name != name => format!(
            "{} {} -> {} in {}",
            "Updated:".green(),
            name,
            new_name,
            category
        ),
        _ => format!("{} {} in {}", "Updated:".green(), name, category),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixtures::sample_store;
    use tempfile::tempdir;

    #[test]
    fn test_update_url() {
        let dir = tempdir().unwrap();
        let mut store = sample_store(&dir);

        let patch = BookmarkPatch {
            url: Some("https://gemini.google.com".to_string()),
            ..Default::default()
        };
        let output = execute(&mut store, "AI", "Google Gemini", patch).unwrap();

        assert!(output.contains("Updated:"));
        assert_eq!(store.bookmarks_in("AI")[1].url, "https://gemini.google.com");
    }

    #[test]
    fn test_update_rename() {
        let dir = tempdir().unwrap();
        let mut store = sample_store(&dir);

        let patch = BookmarkPatch {
            name: Some("Gemini".to_string()),
            ..Default::default()
        };
        let output = execute(&mut store, "AI", "Google Gemini", patch).unwrap();

        assert!(output.contains("Google Gemini -> Gemini in AI"));
        assert_eq!(store.bookmarks_in("AI")[1].name, "Gemini");
    }

    #[test]
    fn test_update_requires_a_field() {
        let dir = tempdir().unwrap();
        let mut store = sample_store(&dir);

        assert!(execute(&mut store, "AI", "ChatGPT", BookmarkPatch::default()).is_err());
    }

    #[test]
    fn test_update_missing() {
        let dir = tempdir().unwrap();
        let mut store = sample_store(&dir);

        let patch = BookmarkPatch {
            icon: Some("icons/x.png".to_string()),
            ..Default::default()
        };
        let output = execute(&mut store, "AI", "Nope", patch).unwrap();
        assert_eq!(output, "No bookmark named \"Nope\" in AI");
    }
}
