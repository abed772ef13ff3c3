use serde::Serialize;
use time::UtcOffset;
use tracing::warn;

use super::Navigation;
use crate::config::ClientConfig;
use crate::date_fmt;
use crate::model::Notice;
use crate::remote::NoticeStore;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NoticeDetailView {
    pub notice_id: u64,
    pub subject: String,
    pub category: Option<String>,
    /// `YYYY-MM-DD`
    pub date: String,
    /// Server-provided HTML body, passed through untouched.
    pub content: String,
}

pub struct NoticeDetailScreen {
    notice_id: u64,
    offset: UtcOffset,
    error_url: String,
}

impl NoticeDetailScreen {
    pub fn new(config: &ClientConfig, notice_id: u64) -> Self {
        Self {
            notice_id,
            offset: date_fmt::local_offset(),
            error_url: config.error_url(),
        }
    }

    pub fn with_offset(mut self, offset: UtcOffset) -> Self {
        self.offset = offset;
        self
    }

    pub fn load<S>(&self, store: &S) -> Result<NoticeDetailView, Navigation>
    where
        S: NoticeStore + ?Sized,
    {
        store
            .notice(self.notice_id)
            .map(|notice| self.view(notice))
            .map_err(|err| {
                warn!(notice_id = self.notice_id, error = %err, "notice fetch failed");
                Navigation::ErrorScreen(self.error_url.clone())
            })
    }

    fn view(&self, notice: Notice) -> NoticeDetailView {
        NoticeDetailView {
            notice_id: notice.notice_id,
            date: date_fmt::format_timestamp(&notice.created_at, self.offset, "-"),
            subject: notice.subject,
            category: notice.board_category_name,
            content: notice.content,
        }
    }
}
