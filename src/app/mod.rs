//! Session layer: shared state, background tasks, and the event seam toward
//! whichever front-end hosts the core.
//!
//! A front-end supplies the inputs (picked root, filter strings, kind
//! selection, table selection, destination) and renders what comes back; all
//! search, ordering, and transfer logic lives below this module.

pub mod events;
pub mod proxy;
pub mod state;
pub mod tasks;
pub mod view_model;

use std::sync::{Arc, Mutex};

use crate::core::SortKey;
use state::AppState;
use view_model::TableView;

/// Applies a column-header click and returns the refreshed table.
///
/// Clicking the active column flips the direction; clicking another column
/// switches to it, ascending. Runs synchronously on the caller's context;
/// re-ordering an in-memory list does not need a background task.
pub fn sort_command(state: &Arc<Mutex<AppState>>, key: SortKey) -> TableView {
    let mut guard = state.lock().unwrap();
    guard.toggle_sort(key);
    view_model::table_view(&guard)
}
