//! Re-rendering categories after store mutations

use bookmark_launcher::store::{BookmarkStore, StoreEvent};
use owo_colors::OwoColorize;
use std::cell::RefCell;
use std::rc::Rc;

use super::utils;

/// Collects store events so only the affected categories are redrawn
pub struct ChangeFeed {
    events: Rc<RefCell<Vec<StoreEvent>>>,
}

impl ChangeFeed {
    /// Subscribe a new feed to `store`
    pub fn attach(store: &mut BookmarkStore) -> Self {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        store.subscribe(move |event| sink.borrow_mut().push(event.clone()));
        Self { events }
    }

    /// Drain pending events and render each affected category once
    pub fn render(&self, store: &BookmarkStore) -> String {
        let events: Vec<StoreEvent> = self.events.borrow_mut().drain(..).collect();

        let mut seen: Vec<&str> = Vec::new();
        let mut sections = Vec::new();
        for event in &events {
            let category = event.category();
            if seen.contains(&category) {
                continue;
            }
            seen.push(category);

            if store.contains_category(category) {
                sections.push(format!(
                    "{}\n{}",
                    category.bold(),
                    utils::category_table(store, category)
                ));
            } else {
                sections.push(format!("Category {} is now empty and was removed", category.bold()));
            }
        }

        sections.join("\n\n")
    }
}
