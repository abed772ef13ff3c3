use serde::{Deserialize, Serialize};

use crate::paging::{Cursor, Page};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Notice {
    pub notice_id: u64,
    pub board_type_code: String,
    pub board_category_code: String,

    #[serde(default)]
    pub board_category_name: Option<String>,

    pub subject: String,

    #[serde(default)]
    pub content: String,

    pub created_at: String,

    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NoticeCategory {
    pub category_code: String,
    pub category_name: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NoticePaging {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<Cursor>,
}

/// `GET /api/v2/notices` body. `total_count` and `categories` only come with the first page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NoticeListResponse {
    pub notices: Vec<Notice>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_count: Option<u64>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<NoticeCategory>,

    #[serde(default)]
    pub paging: NoticePaging,
}

impl From<NoticeListResponse> for Page<Notice> {
    fn from(resp: NoticeListResponse) -> Self {
        Page {
            items: resp.notices,
            next_cursor: resp.paging.next,
            total_count: resp.total_count,
        }
    }
}
