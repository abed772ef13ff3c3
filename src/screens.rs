//! Screen controllers: loader/binder state plus a transport, resolved into view models.
//!
//! Every transport failure resolves to [`Navigation::ErrorScreen`]; the host
//! decides how to present it.

mod notice_detail;
mod notice_list;
mod profile_editor;

pub use self::notice_detail::{NoticeDetailScreen, NoticeDetailView};
pub use self::notice_list::{ListUpdate, MoreButton, NoticeListScreen, NoticeRow};
pub use self::profile_editor::{ProfileEditorScreen, SAVED_MESSAGE, SaveOutcome};

/// Where the host should go next.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Navigation {
    /// Generic error page (URL).
    ErrorScreen(String),
    /// App-internal URI.
    DeepLink(String),
}

#[cfg(test)]
#[path = "tests/screens/screens_tests.rs"]
mod tests;
