//! Wire types for the notice and profile endpoints.

mod notice;
mod profile;

pub use self::notice::{Notice, NoticeCategory, NoticeListResponse, NoticePaging};
pub use self::profile::{
    ADDRESS_FIELD, ADDRESS_MORE_FIELD, PROFILE_FIELDS, ZIP_FIELD, profile_fields,
};

/// A single remote record as an ordered key→value mapping.
pub type Entity = serde_json::Map<String, serde_json::Value>;
