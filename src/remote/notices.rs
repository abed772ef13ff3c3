use std::num::NonZeroU32;

use super::{NoticeStore, RemoteClient};
use crate::error::TransportError;
use crate::model::{Notice, NoticeListResponse};
use crate::paging::{Cursor, Page, PageRequest, PageSource};

/// Optional list filters; the server validates the codes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoticeFilter {
    pub board_type: Option<String>,
    pub board_category: Option<String>,
}

impl RemoteClient {
    pub fn list_notices(
        &self,
        filter: &NoticeFilter,
        limit: NonZeroU32,
        cursor: Option<&Cursor>,
    ) -> Result<NoticeListResponse, TransportError> {
        let mut query = vec![("limit", limit.to_string())];
        if let Some(cursor) = cursor {
            query.push(("cursor", cursor.as_str().to_string()));
        }
        if let Some(board_type) = &filter.board_type {
            query.push(("board_type", board_type.clone()));
        }
        if let Some(category) = &filter.board_category {
            query.push(("board_category", category.clone()));
        }

        let req = self.client.get(self.url("/api/v2/notices")).query(&query);
        self.send_json(req, "list notices")
    }

    pub fn get_notice(&self, notice_id: u64) -> Result<Notice, TransportError> {
        let req = self
            .client
            .get(self.url(&format!("/api/v2/notices/{}", notice_id)));
        self.send_json(req, "get notice")
    }

    pub fn notice_pages(&self, filter: NoticeFilter) -> NoticePages<'_> {
        NoticePages {
            client: self,
            filter,
        }
    }
}

impl NoticeStore for RemoteClient {
    fn notice(&self, notice_id: u64) -> Result<Notice, TransportError> {
        self.get_notice(notice_id)
    }
}

/// The notice list as a [`PageSource`].
pub struct NoticePages<'a> {
    client: &'a RemoteClient,
    filter: NoticeFilter,
}

impl PageSource<Notice> for NoticePages<'_> {
    fn fetch_page(&self, request: &PageRequest) -> Result<Page<Notice>, TransportError> {
        self.client
            .list_notices(&self.filter, request.limit, request.cursor.as_ref())
            .map(Page::from)
    }
}
