//! Ordering of result lists for table display.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::ResultItem;

/// The column a result table is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    Name,
    Path,
    Created,
    Size,
}

/// The current ordering of the result table.
///
/// Mutated only through [`SortState::toggle`], which mirrors clicking a
/// column header: a repeated key flips the direction, a new key starts
/// ascending. The default order is by name, ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub key: SortKey,
    pub descending: bool,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            key: SortKey::Name,
            descending: false,
        }
    }
}

impl SortState {
    pub fn toggle(&mut self, key: SortKey) {
        if self.key == key {
            self.descending = !self.descending;
        } else {
            *self = Self {
                key,
                descending: false,
            };
        }
    }
}

/// Stable sort of a result list under the given state.
///
/// Name and path compare case-insensitively; creation time and size compare
/// numerically, so folders (always 0 bytes) group before any non-empty file
/// under an ascending size order. Ties keep their prior relative order under
/// every key and direction.
pub fn sort_items(items: &mut [ResultItem], state: SortState) {
    items.par_sort_by(|a, b| {
        let ordering = compare(a, b, state.key);
        if state.descending {
            ordering.reverse()
        } else {
            ordering
        }
    });
}

fn compare(a: &ResultItem, b: &ResultItem, key: SortKey) -> Ordering {
    match key {
        SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortKey::Path => a
            .path
            .to_string_lossy()
            .to_lowercase()
            .cmp(&b.path.to_string_lossy().to_lowercase()),
        SortKey::Created => a.created.cmp(&b.created),
        SortKey::Size => a.size_bytes.cmp(&b.size_bytes),
    }
}
