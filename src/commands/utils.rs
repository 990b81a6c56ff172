//! Shared rendering and prompting for commands

use anyhow::Result;
use bookmark_launcher::store::{Bookmark, BookmarkStore};
use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, ContentArrangement, Table};
use owo_colors::OwoColorize;
use std::io::{self, Write};

/// Split categories into the two display columns
///
/// The first `len / 2` categories go left, the rest right.
pub fn split_columns<'a, 'b>(categories: &'b [&'a str]) -> (&'b [&'a str], &'b [&'a str]) {
    categories.split_at(categories.len() / 2)
}

/// New table with the preset used throughout the CLI
pub fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Icon column text; `-` when the bookmark has none
pub fn icon_label(bookmark: &Bookmark) -> &str {
    if bookmark.has_icon() {
        bookmark.icon.as_str()
    } else {
        "-"
    }
}

/// A category heading followed by its bookmark names, for column cells
pub fn category_block(store: &BookmarkStore, category: &str) -> String {
    let mut block = format!("▼ {}", category.bold());
    for bookmark in store.bookmarks_in(category) {
        block.push_str("\n  ");
        block.push_str(&bookmark.name);
    }
    block
}

/// Table of bookmarks, with a leading category column if `with_category`
pub fn bookmarks_table<'a, I>(rows: I, with_category: bool) -> Table
where
    I: IntoIterator<Item = (&'a str, &'a Bookmark)>,
{
    let mut table = new_table();

    let mut header = vec![];
    if with_category {
        header.push(Cell::new("Category"));
    }
    header.push(Cell::new("Name"));
    header.push(Cell::new("URL"));
    header.push(Cell::new("Icon"));
    table.set_header(header);

    for (category, bookmark) in rows {
        let mut row = vec![];
        if with_category {
            row.push(Cell::new(category));
        }
        row.push(Cell::new(&bookmark.name));
        row.push(Cell::new(&bookmark.url));
        row.push(Cell::new(icon_label(bookmark)));
        table.add_row(row);
    }

    table
}

/// Table of a single category's bookmarks
pub fn category_table(store: &BookmarkStore, category: &str) -> Table {
    bookmarks_table(
        store
            .bookmarks_in(category)
            .iter()
            .map(|bookmark| (category, bookmark)),
        false,
    )
}

/// Ask a yes/no question on stdin; anything but `y` means no
pub fn confirm(question: &str) -> Result<bool> {
    print!("{} (y/N) ", question);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().eq_ignore_ascii_case("y"))
}
