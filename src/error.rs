//! Error kinds shared by the loader, the form binder, and the transport.

use thiserror::Error;

/// Network or decoding failure of a single remote call.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("{label}: request failed")]
    Request {
        label: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{label}: unexpected status {status}")]
    Status { label: String, status: u16 },

    #[error("{label}: malformed response")]
    Decode {
        label: String,
        #[source]
        source: reqwest::Error,
    },
}

impl TransportError {
    pub fn status(label: impl Into<String>, status: u16) -> Self {
        Self::Status {
            label: label.into(),
            status,
        }
    }
}

/// Reasons a `load_next` did not merge a page.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("a page request is already in flight")]
    Busy,

    #[error("no further pages")]
    Exhausted,

    #[error("page response does not belong to the outstanding request")]
    StaleRequest,

    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// A required field was empty at collect time.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{label} ({field}) is required")]
pub struct ValidationError {
    pub field: String,
    pub label: String,
}

impl ValidationError {
    /// User-facing prompt, e.g. `이름을 입력해주세요.`
    pub fn prompt(&self) -> String {
        format!("{}{} 입력해주세요.", self.label, object_particle(&self.label))
    }
}

/// Picks 을/를 from the final syllable's trailing consonant.
fn object_particle(word: &str) -> &'static str {
    const HANGUL_BASE: u32 = 0xAC00;
    const HANGUL_LAST: u32 = 0xD7A3;
    const JONGSEONG_COUNT: u32 = 28;

    match word.chars().last().map(u32::from) {
        Some(c) if (HANGUL_BASE..=HANGUL_LAST).contains(&c) => {
            if (c - HANGUL_BASE) % JONGSEONG_COUNT == 0 {
                "를"
            } else {
                "을"
            }
        }
        _ => "를",
    }
}

/// Failure of a form submission.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("form is not ready for submission")]
    NotReady,

    #[error("a submission is already in flight")]
    Busy,

    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error("save failed")]
    Transport(#[source] TransportError),
}

#[cfg(test)]
#[path = "tests/error_tests.rs"]
mod tests;
