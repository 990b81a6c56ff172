//! Store error types

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by [`BookmarkStore`](super::BookmarkStore) operations
///
/// Lookup misses are not errors; `remove` and `update` report them as `false`.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid URL {0:?}: expected an absolute URL with scheme and host")]
    InvalidUrl(String),

    #[error("bookmark name must not be empty")]
    EmptyName,

    #[error("category name must not be empty")]
    EmptyCategory,

    /// The in-memory store was changed but could not be written out
    #[error("failed to write {}: {source}", .path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to load {}: {reason}", .path.display())]
    Load { path: PathBuf, reason: String },
}
