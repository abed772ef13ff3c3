use serde::Serialize;
use time::UtcOffset;
use tracing::debug;

use super::Navigation;
use crate::config::ClientConfig;
use crate::date_fmt;
use crate::error::{LoadError, TransportError};
use crate::model::Notice;
use crate::paging::{Page, PageRequest, PageSource, PagedListLoader};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NoticeRow {
    pub notice_id: u64,
    pub subject: String,
    pub category: Option<String>,
    /// `YYYY-MM-DD`
    pub date: String,
    pub link: String,
}

/// "More" control: `present / total` pages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct MoreButton {
    pub visible: bool,
    pub present: u32,
    pub total: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListUpdate {
    /// Count of newly appended rows (may be zero).
    Appended(usize),
    /// Nothing requested or merged: busy, exhausted, unmounted, or stale.
    Unchanged,
    Navigate(Navigation),
}

pub struct NoticeListScreen {
    loader: PagedListLoader<Notice>,
    config: ClientConfig,
    active: bool,
    offset: UtcOffset,
}

impl NoticeListScreen {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            loader: PagedListLoader::new(),
            config: config.clone(),
            active: true,
            offset: date_fmt::local_offset(),
        }
    }

    /// Renders dates in `offset` instead of the local zone.
    pub fn with_offset(mut self, offset: UtcOffset) -> Self {
        self.offset = offset;
        self
    }

    pub fn loader(&self) -> &PagedListLoader<Notice> {
        &self.loader
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Later responses are dropped instead of merged.
    pub fn unmount(&mut self) {
        self.active = false;
    }

    pub fn load_more<S>(&mut self, source: &S) -> ListUpdate
    where
        S: PageSource<Notice> + ?Sized,
    {
        let Some(request) = self.begin_load() else {
            return ListUpdate::Unchanged;
        };
        let result = source.fetch_page(&request);
        self.complete_load(request, result)
    }

    /// Reserves the next request, or `None` when no request should be issued.
    pub fn begin_load(&mut self) -> Option<PageRequest> {
        if !self.active {
            return None;
        }
        match self.loader.begin(self.config.page_size) {
            Ok(request) => Some(request),
            Err(err) => {
                debug!(error = %err, "load more ignored");
                None
            }
        }
    }

    pub fn complete_load(
        &mut self,
        request: PageRequest,
        result: Result<Page<Notice>, TransportError>,
    ) -> ListUpdate {
        if !self.active {
            self.loader.abandon(&request);
            debug!(page = request.page_number, "discarding page for unmounted list");
            return ListUpdate::Unchanged;
        }
        match self.loader.finish(request, result) {
            Ok(new_items) => ListUpdate::Appended(new_items.len()),
            Err(LoadError::Transport(_)) => {
                ListUpdate::Navigate(Navigation::ErrorScreen(self.config.error_url()))
            }
            Err(_) => ListUpdate::Unchanged,
        }
    }

    pub fn rows(&self) -> Vec<NoticeRow> {
        self.loader
            .items()
            .iter()
            .map(|notice| NoticeRow {
                notice_id: notice.notice_id,
                subject: notice.subject.clone(),
                category: notice.board_category_name.clone(),
                date: date_fmt::format_timestamp(&notice.created_at, self.offset, "-"),
                link: self.config.notice_link(notice.notice_id),
            })
            .collect()
    }

    /// Shown only when the total spans more than one page and more pages remain.
    pub fn more_button(&self) -> MoreButton {
        let present = self.loader.current_page_number();
        let spans_pages = self
            .loader
            .state()
            .total_count()
            .is_some_and(|total| u64::from(self.config.page_size.get()) < total);
        MoreButton {
            visible: spans_pages && self.loader.has_more(),
            present,
            total: self.loader.total_pages().unwrap_or(present),
        }
    }
}
