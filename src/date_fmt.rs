//! Calendar-date rendering for list rows and detail headers.

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};
use tracing::debug;

/// RFC 3339, or the same layout with a colon-less `±HHMM` offset.
pub fn parse_timestamp(raw: &str) -> Result<OffsetDateTime, time::error::Parse> {
    // `%Y-%m-%dT%H:%M:%S%z` output, e.g. `+0900`.
    let compact = format_description!(
        "[year]-[month]-[day]T[hour]:[minute]:[second][offset_hour sign:mandatory][offset_minute]"
    );
    let compact_fraction = format_description!(
        "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond][offset_hour sign:mandatory][offset_minute]"
    );
    OffsetDateTime::parse(raw, &Rfc3339).or_else(|err| {
        OffsetDateTime::parse(raw, compact)
            .or_else(|_| OffsetDateTime::parse(raw, compact_fraction))
            .map_err(|_| err)
    })
}

/// `YYYY<sep>MM<sep>DD` of `at` as seen from `offset`.
pub fn format_ymd(at: OffsetDateTime, offset: UtcOffset, sep: &str) -> String {
    let local = at.to_offset(offset);
    format!(
        "{:04}{sep}{:02}{sep}{:02}",
        local.year(),
        u8::from(local.month()),
        local.day()
    )
}

/// The process's local offset, or UTC when it cannot be determined.
pub fn local_offset() -> UtcOffset {
    UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC)
}

pub fn format_local(at: OffsetDateTime, sep: &str) -> String {
    format_ymd(at, local_offset(), sep)
}

/// Formats a server timestamp; unparseable input is returned unchanged.
pub fn format_timestamp(raw: &str, offset: UtcOffset, sep: &str) -> String {
    match parse_timestamp(raw) {
        Ok(at) => format_ymd(at, offset, sep),
        Err(err) => {
            debug!(raw, error = %err, "unrecognized timestamp");
            raw.to_string()
        }
    }
}

#[cfg(test)]
#[path = "tests/date_fmt_tests.rs"]
mod tests;
