//! Bookmark store
//!
//! Owns the ordered mapping from category name to bookmarks, writes it through
//! to a JSON file after every successful mutation, and notifies registered
//! listeners so a presentation layer can re-render the affected category.

pub mod bookmark;
pub mod defaults;
pub mod error;
pub mod storage;

use std::fmt;
use std::path::{Path, PathBuf};

pub use bookmark::{is_valid_url, validate_url, Bookmark, BookmarkPatch};
pub use error::StoreError;
pub use storage::Categories;

use bookmark::validate_name;

/// What to start from when the backing file does not exist
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    Empty,
    Defaults,
}

/// How [`BookmarkStore::load`] obtained its contents
#[derive(Debug)]
pub enum LoadStatus {
    /// Read from the backing file
    Loaded,
    /// No backing file; started from the fallback dataset
    Missing,
    /// The file could not be read or parsed; started empty
    Recovered(StoreError),
}

/// A successful mutation, delivered to listeners
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    Added {
        category: String,
        name: String,
        /// An existing bookmark with the same name was replaced
        replaced: bool,
    },
    Removed {
        category: String,
        name: String,
        /// The category became empty and was deleted
        category_removed: bool,
    },
    Updated {
        category: String,
        old_name: String,
        name: String,
    },
}

impl StoreEvent {
    /// The category affected by this change
    pub fn category(&self) -> &str {
        match self {
            Self::Added { category, .. }
            | Self::Removed { category, .. }
            | Self::Updated { category, .. } => category,
        }
    }
}

type Listener = Box<dyn FnMut(&StoreEvent)>;

/// In-memory bookmarks with write-through JSON persistence
pub struct BookmarkStore {
    path: PathBuf,
    categories: Categories,
    listeners: Vec<Listener>,
}

impl fmt::Debug for BookmarkStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BookmarkStore")
            .field("path", &self.path)
            .field("categories", &self.categories)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl BookmarkStore {
    /// Create a store over `path` with the given contents, without touching disk
    pub fn new(path: impl Into<PathBuf>, categories: Categories) -> Self {
        Self {
            path: path.into(),
            categories,
            listeners: Vec::new(),
        }
    }

    /// Load the store backed by `path`
    ///
    /// Never fails: a missing file yields the `fallback` dataset, an unreadable
    /// or malformed one yields an empty store and a [`LoadStatus::Recovered`].
    pub fn load(path: impl Into<PathBuf>, fallback: Fallback) -> (Self, LoadStatus) {
        let path = path.into();

        match storage::read_categories(&path) {
            Ok(Some(categories)) => {
                log::info!(
                    "loaded {} categories from {}",
                    categories.len(),
                    path.display()
                );
                (Self::new(path, categories), LoadStatus::Loaded)
            }
            Ok(None) => {
                log::info!("{} not found, starting from {:?}", path.display(), fallback);
                let categories = match fallback {
                    Fallback::Empty => Categories::new(),
                    Fallback::Defaults => defaults::default_categories().unwrap_or_else(|e| {
                        log::error!("bundled bookmarks are malformed: {}", e);
                        Categories::new()
                    }),
                };
                (Self::new(path, categories), LoadStatus::Missing)
            }
            Err(e) => {
                log::error!("{}; starting with an empty store", e);
                // The next write-through replaces the file, so keep what was there
                if path.exists() {
                    match storage::backup_file(&path) {
                        Ok(backup) => log::warn!("copied unreadable file to {}", backup.display()),
                        Err(err) => log::warn!("could not back up {}: {}", path.display(), err),
                    }
                }
                (Self::new(path, Categories::new()), LoadStatus::Recovered(e))
            }
        }
    }

    /// Write the whole store to the backing file
    pub fn save(&self) -> Result<(), StoreError> {
        storage::write_categories(&self.path, &self.categories)?;
        log::debug!("saved bookmarks to {}", self.path.display());
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Register a callback invoked after every successful mutation
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&StoreEvent) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Category names in display order
    pub fn categories(&self) -> Vec<&str> {
        self.categories.keys().map(String::as_str).collect()
    }

    /// Bookmarks of `category` in display order; empty if the category is absent
    pub fn bookmarks_in(&self, category: &str) -> &[Bookmark] {
        self.categories
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn contains_category(&self, category: &str) -> bool {
        self.categories.contains_key(category)
    }

    /// The full ordered mapping
    pub fn as_map(&self) -> &Categories {
        &self.categories
    }

    /// Total number of bookmarks across all categories
    pub fn len(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Case-insensitive substring search over bookmark names
    ///
    /// Yields `(category, bookmark)` pairs in category order, then in-category
    /// order. Each call scans the current contents.
    pub fn search<'a>(&'a self, query: &str) -> impl Iterator<Item = (&'a str, &'a Bookmark)> + 'a {
        let needle = query.to_lowercase();
        self.categories
            .iter()
            .flat_map(|(category, bookmarks)| {
                bookmarks
                    .iter()
                    .map(move |bookmark| (category.as_str(), bookmark))
            })
            .filter(move |(_, bookmark)| bookmark.name.to_lowercase().contains(&needle))
    }

    /// First bookmark whose name equals `name`, ignoring case
    pub fn find(&self, name: &str) -> Option<(&str, &Bookmark)> {
        let wanted = name.to_lowercase();
        self.categories.iter().find_map(|(category, bookmarks)| {
            bookmarks
                .iter()
                .find(|b| b.name.to_lowercase() == wanted)
                .map(|b| (category.as_str(), b))
        })
    }

    /// Add `bookmark` to `category`, creating the category if needed
    ///
    /// A bookmark with the same name in that category is replaced in place.
    pub fn add(&mut self, category: &str, bookmark: Bookmark) -> Result<(), StoreError> {
        if category.trim().is_empty() {
            return Err(StoreError::EmptyCategory);
        }
        validate_name(&bookmark.name)?;
        validate_url(&bookmark.url)?;

        let name = bookmark.name.clone();
        let bookmarks = self.categories.entry(category.to_string()).or_default();
        let replaced = match bookmarks.iter_mut().find(|b| b.name == bookmark.name) {
            Some(existing) => {
                *existing = bookmark;
                true
            }
            None => {
                bookmarks.push(bookmark);
                false
            }
        };

        log::info!(
            "{} bookmark {:?} in {:?}",
            if replaced { "replaced" } else { "added" },
            name,
            category
        );
        self.commit(StoreEvent::Added {
            category: category.to_string(),
            name,
            replaced,
        })
    }

    /// Remove the bookmark `name` from `category`
    ///
    /// Returns `false` if there was nothing to remove; the file is not written
    /// in that case. A category left empty is deleted.
    pub fn remove(&mut self, category: &str, name: &str) -> Result<bool, StoreError> {
        let Some(bookmarks) = self.categories.get_mut(category) else {
            return Ok(false);
        };
        let Some(index) = bookmarks.iter().position(|b| b.name == name) else {
            return Ok(false);
        };

        bookmarks.remove(index);
        let category_removed = bookmarks.is_empty();
        if category_removed {
            // shift_remove keeps the order of the remaining categories
            self.categories.shift_remove(category);
        }

        log::info!("removed bookmark {:?} from {:?}", name, category);
        self.commit(StoreEvent::Removed {
            category: category.to_string(),
            name: name.to_string(),
            category_removed,
        })?;
        Ok(true)
    }

    /// Replace the supplied fields of the bookmark `old_name` in `category`
    ///
    /// Returns `false` if the bookmark does not exist. Renaming onto the name
    /// of another bookmark in the same category replaces that bookmark.
    pub fn update(
        &mut self,
        category: &str,
        old_name: &str,
        patch: BookmarkPatch,
    ) -> Result<bool, StoreError> {
        if let Some(name) = &patch.name {
            validate_name(name)?;
        }
        if let Some(url) = &patch.url {
            validate_url(url)?;
        }

        let Some(bookmarks) = self.categories.get_mut(category) else {
            return Ok(false);
        };
        let Some(index) = bookmarks.iter().position(|b| b.name == old_name) else {
            return Ok(false);
        };

        let current = &bookmarks[index];
        let updated = Bookmark {
            name: patch.name.unwrap_or_else(|| current.name.clone()),
            url: patch.url.unwrap_or_else(|| current.url.clone()),
            icon: patch.icon.unwrap_or_else(|| current.icon.clone()),
        };
        let name = updated.name.clone();
        bookmarks[index] = updated;

        if name != old_name {
            let mut position = 0;
            bookmarks.retain(|b| {
                let keep = position == index || b.name != name;
                position += 1;
                keep
            });
        }

        log::info!("updated bookmark {:?} in {:?}", old_name, category);
        self.commit(StoreEvent::Updated {
            category: category.to_string(),
            old_name: old_name.to_string(),
            name,
        })?;
        Ok(true)
    }

    /// Persist, then notify; listeners hear about the change even if the write failed
    fn commit(&mut self, event: StoreEvent) -> Result<(), StoreError> {
        let saved = self.save();
        if let Err(e) = &saved {
            log::warn!("{}; keeping in-memory changes", e);
        }

        for listener in &mut self.listeners {
            listener(&event);
        }

        saved
    }
}
