//! List command - Show bookmarks by category

use anyhow::Result;
use bookmark_launcher::store::BookmarkStore;
use comfy_table::Cell;

use super::utils;

/// Options for the list command
pub struct ListOptions {
    /// Only show this category
    pub category: Option<String>,
    /// One table with a category column instead of two columns
    pub flat: bool,
}

/// Execute the list command and return formatted output
pub fn execute(store: &BookmarkStore, options: &ListOptions) -> Result<String> {
    if let Some(category) = &options.category {
        if !store.contains_category(category) {
            return Ok(format!("No bookmarks in category \"{}\"", category));
        }
        let mut output = utils::category_table(store, category).to_string();
        output.push_str(&format!(
            "\n\n{} bookmarks in {}",
            store.bookmarks_in(category).len(),
            category
        ));
        return Ok(output);
    }

    if store.is_empty() {
        return Ok("No bookmarks yet. Add one with `bookmark-launcher add`.".to_string());
    }

    let mut output = if options.flat {
        let rows = store.as_map().iter().flat_map(|(category, bookmarks)| {
            bookmarks
                .iter()
                .map(move |bookmark| (category.as_str(), bookmark))
        });
        utils::bookmarks_table(rows, true).to_string()
    } else {
        columns(store)
    };

    output.push_str(&format!(
        "\n\n{} bookmarks in {} categories",
        store.len(),
        store.categories().len()
    ));
    Ok(output)
}

/// Render categories side by side in two columns
fn columns(store: &BookmarkStore) -> String {
    let categories = store.categories();
    let (left, right) = utils::split_columns(&categories);

    let column = |names: &[&str]| {
        names
            .iter()
            .map(|category| utils::category_block(store, category))
            .collect::<Vec<_>>()
            .join("\n\n")
    };

    let mut table = utils::new_table();
    table.add_row(vec![Cell::new(column(left)), Cell::new(column(right))]);
    table.to_string()
}
