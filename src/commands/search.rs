//! Search command - Find bookmarks by name

use bookmark_launcher::store::BookmarkStore;

use super::utils;

/// Execute the search command and return formatted output
pub fn execute(store: &BookmarkStore, query: &str) -> String {
    let count = store.search(query).count();
    if count == 0 {
        return format!("No bookmarks match \"{}\"", query);
    }

    let table = utils::bookmarks_table(store.search(query), true);
    format!("{}\n\n{} matches for \"{}\"", table, count, query)
}
