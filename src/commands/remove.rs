//! Remove command - Delete a bookmark after confirmation

use anyhow::Result;
use bookmark_launcher::store::BookmarkStore;
use owo_colors::OwoColorize;

/// Execute the remove command
///
/// `prompt` is asked first unless `yes` is set; declining leaves the store alone.
pub fn execute<F>(
    store: &mut BookmarkStore,
    category: &str,
    name: &str,
    yes: bool,
    prompt: F,
) -> Result<String>
where
    F: FnOnce(&str) -> Result<bool>,
{
    if !store.bookmarks_in(category).iter().any(|b| b.name == name) {
        return Ok(format!("No bookmark named \"{}\" in {}", name, category));
    }

    if !yes && !prompt(&format!("Remove bookmark \"{}\" from {}?", name, category))? {
        return Ok("Aborted.".to_string());
    }

    if store.remove(category, name)? {
        Ok(format!("{} {} from {}", "Removed:".green(), name, category))
    } else {
        Ok(format!("No bookmark named \"{}\" in {}", name, category))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixtures::sample_store;
    use tempfile::tempdir;

    #[test]
    fn test_remove_confirmed() {
        let dir = tempdir().unwrap();
        let mut store = sample_store(&dir);
        let mut asked = None;

        let output = execute(&mut store, "Dev", "GitLab", false, |question| {
            asked = Some(question.to_string());
            Ok(true)
        })
        .unwrap();

        assert!(output.contains("Removed:"));
        assert_eq!(
            asked.as_deref(),
            Some("Remove bookmark \"GitLab\" from Dev?")
        );
        assert_eq!(store.bookmarks_in("Dev").len(), 1);
    }

    #[test]
    fn test_remove_declined() {
        let dir = tempdir().unwrap();
        let mut store = sample_store(&dir);

        let output = execute(&mut store, "Dev", "GitLab", false, |_| Ok(false)).unwrap();

        assert_eq!(output, "Aborted.");
        assert_eq!(store.bookmarks_in("Dev").len(), 2);
        assert!(!store.path().exists());
    }

    #[test]
    fn test_remove_with_yes_skips_prompt() {
        let dir = tempdir().unwrap();
        let mut store = sample_store(&dir);

        execute(&mut store, "Mail", "Gmail", true, |_| {
            panic!("prompt should not be shown")
        })
        .unwrap();

        assert!(!store.contains_category("Mail"));
    }

    #[test]
    fn test_remove_missing_does_not_prompt() {
        let dir = tempdir().unwrap();
        let mut store = sample_store(&dir);

        let output = execute(&mut store, "Dev", "Nope", false, |_| {
            panic!("prompt should not be shown")
        })
        .unwrap();

        assert_eq!(output, "No bookmark named \"Nope\" in Dev");
        assert!(!store.path().exists());
    }
}
