use std::num::NonZeroU32;

use tracing::{debug, warn};

use super::{Cursor, Page, PaginationState};
use crate::error::{LoadError, TransportError};

/// Anything that can answer a page request.
pub trait PageSource<T> {
    fn fetch_page(&self, request: &PageRequest) -> Result<Page<T>, TransportError>;
}

impl<T, F> PageSource<T> for F
where
    F: Fn(&PageRequest) -> Result<Page<T>, TransportError>,
{
    fn fetch_page(&self, request: &PageRequest) -> Result<Page<T>, TransportError> {
        self(request)
    }
}

/// Ticket for the single outstanding page request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageRequest {
    pub limit: NonZeroU32,
    /// `None` on the first request.
    pub cursor: Option<Cursor>,
    pub page_number: u32,
    seq: u64,
}

pub struct PagedListLoader<T> {
    state: PaginationState<T>,
    started: bool,
    pages_loaded: u32,
    last_page_size: Option<NonZeroU32>,
    in_flight: Option<u64>,
    next_seq: u64,
}

impl<T> Default for PagedListLoader<T> {
    fn default() -> Self {
        Self {
            state: PaginationState::default(),
            started: false,
            pages_loaded: 0,
            last_page_size: None,
            in_flight: None,
            next_seq: 0,
        }
    }
}

impl<T> PagedListLoader<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &PaginationState<T> {
        &self.state
    }

    pub fn items(&self) -> &[T] {
        self.state.loaded_items()
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Fetches and merges the next page through `source`.
    ///
    /// Returns the newly appended items. On any error the state is untouched.
    pub fn load_next<S>(&mut self, source: &S, page_size: NonZeroU32) -> Result<&[T], LoadError>
    where
        S: PageSource<T> + ?Sized,
    {
        let request = self.begin(page_size)?;
        let result = source.fetch_page(&request);
        self.finish(request, result)
    }

    /// Reserves the in-flight slot and describes the request to issue.
    pub fn begin(&mut self, page_size: NonZeroU32) -> Result<PageRequest, LoadError> {
        if self.in_flight.is_some() {
            warn!("page request rejected: previous request still in flight");
            return Err(LoadError::Busy);
        }
        // A cursor alone does not keep the list open once the reported total is reached.
        if self.started && !self.has_more() {
            return Err(LoadError::Exhausted);
        }

        let seq = self.next_seq;
        self.next_seq += 1;
        self.in_flight = Some(seq);

        let request = PageRequest {
            limit: page_size,
            cursor: self.state.cursor().cloned(),
            page_number: self.pages_loaded + 1,
            seq,
        };
        debug!(
            page = request.page_number,
            cursor = ?request.cursor,
            limit = page_size.get(),
            "requesting page"
        );
        Ok(request)
    }

    /// Completes the outstanding request, merging on success.
    pub fn finish(
        &mut self,
        request: PageRequest,
        result: Result<Page<T>, TransportError>,
    ) -> Result<&[T], LoadError> {
        if self.in_flight != Some(request.seq) {
            return Err(LoadError::StaleRequest);
        }
        self.in_flight = None;

        let page = result.inspect_err(|err| {
            warn!(page = request.page_number, error = %err, "page request failed");
        })?;

        self.pages_loaded += 1;
        self.last_page_size = Some(request.limit);
        let start = self.merge(page);
        Ok(&self.state.loaded_items()[start..])
    }

    /// Releases the in-flight slot without merging. Returns false for a stale ticket.
    pub fn abandon(&mut self, request: &PageRequest) -> bool {
        if self.in_flight == Some(request.seq) {
            self.in_flight = None;
            true
        } else {
            false
        }
    }

    /// Appends a page as-is. Merging the same page twice duplicates its items.
    pub fn merge(&mut self, page: Page<T>) -> usize {
        self.started = true;
        let start = self.state.apply(page);
        debug!(
            loaded = self.state.len(),
            total = ?self.state.total_count(),
            has_more = self.has_more(),
            "merged page"
        );
        start
    }

    pub fn has_more(&self) -> bool {
        let loaded = self.state.len() as u64;
        self.state.cursor().is_some()
            && self.state.total_count().is_none_or(|total| loaded < total)
    }

    /// 1-based count of successful loads.
    pub fn current_page_number(&self) -> u32 {
        self.pages_loaded
    }

    pub fn page_size(&self) -> Option<NonZeroU32> {
        self.last_page_size
    }

    /// Page count implied by the known total and the last page size.
    pub fn total_pages(&self) -> Option<u32> {
        let total = self.state.total_count()?;
        let size = u64::from(self.last_page_size?.get());
        u32::try_from(total.div_ceil(size)).ok()
    }
}
