use tracing::warn;

use super::{Cursor, Page};

/// Cursor, aggregate count, and the append-only log of loaded items.
#[derive(Clone, Debug)]
pub struct PaginationState<T> {
    cursor: Option<Cursor>,
    total_count: Option<u64>,
    loaded_items: Vec<T>,
}

impl<T> Default for PaginationState<T> {
    fn default() -> Self {
        Self {
            cursor: None,
            total_count: None,
            loaded_items: Vec::new(),
        }
    }
}

impl<T> PaginationState<T> {
    pub fn cursor(&self) -> Option<&Cursor> {
        self.cursor.as_ref()
    }

    pub fn total_count(&self) -> Option<u64> {
        self.total_count
    }

    pub fn loaded_items(&self) -> &[T] {
        &self.loaded_items
    }

    pub fn len(&self) -> usize {
        self.loaded_items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loaded_items.is_empty()
    }

    /// Appends the page and returns the index of its first item.
    pub(super) fn apply(&mut self, page: Page<T>) -> usize {
        let start = self.loaded_items.len();
        self.loaded_items.extend(page.items);
        self.cursor = page.next_cursor;

        if let Some(reported) = page.total_count {
            match self.total_count {
                Some(known) if reported < known => {
                    warn!(known, reported, "ignoring shrinking total count");
                }
                _ => self.total_count = Some(reported),
            }
        }

        start
    }
}
