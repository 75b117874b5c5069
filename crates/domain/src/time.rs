//! Time and date helpers.

use chrono::{DateTime, NaiveDate, Utc};

/// UTC timestamp recorded by the store when a record is created.
pub type Timestamp = DateTime<Utc>;

/// Wire and storage format for calendar dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Parse a `YYYY-MM-DD` calendar date.
///
/// # Errors
///
/// Returns the underlying [`chrono::ParseError`] when `value` is not a valid date.
pub fn parse_date(value: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
}
