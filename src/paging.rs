//! Cursor-based incremental list loading.
//!
//! A [`PagedListLoader`] asks a [`PageSource`] for one [`Page`] at a time and
//! appends each page to an ordered item log. Requests are serialized: a new
//! page can only be requested once the previous response has been merged or
//! abandoned, so pages always merge in the order they were issued.

use serde::{Deserialize, Serialize};

mod loader;
mod state;

pub use self::loader::{PageRequest, PageSource, PagedListLoader};
pub use self::state::PaginationState;

/// Opaque server token naming the next page.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawCursor", into = "String")]
pub struct Cursor(String);

impl Cursor {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<u64> for Cursor {
    fn from(page: u64) -> Self {
        Self(page.to_string())
    }
}

impl From<Cursor> for String {
    fn from(cursor: Cursor) -> Self {
        cursor.0
    }
}

// Page-number servers send an integer, token servers a string.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawCursor {
    Number(u64),
    Text(String),
}

impl From<RawCursor> for Cursor {
    fn from(raw: RawCursor) -> Self {
        match raw {
            RawCursor::Number(n) => Self::from(n),
            RawCursor::Text(s) => Self(s),
        }
    }
}

/// One fetch response: a batch of items plus pagination metadata.
#[derive(Clone, Debug, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub next_cursor: Option<Cursor>,
    pub total_count: Option<u64>,
}

#[cfg(test)]
#[path = "tests/paging/loader_tests.rs"]
mod tests;
