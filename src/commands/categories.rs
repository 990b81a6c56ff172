//! Categories command - Show category names with bookmark counts

use bookmark_launcher::store::BookmarkStore;
use comfy_table::Cell;

use super::utils;

/// Execute the categories command and return formatted output
pub fn execute(store: &BookmarkStore) -> String {
    let mut table = utils::new_table();
    table.set_header(vec![Cell::new("Category"), Cell::new("Bookmarks")]);

    let categories = store.categories();
    for category in &categories {
        table.add_row(vec![
            Cell::new(category),
            Cell::new(store.bookmarks_in(category).len()),
        ]);
    }

    format!("{}\n\n{} categories found", table, categories.len())
}
