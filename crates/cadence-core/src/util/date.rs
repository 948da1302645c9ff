//! Canonical calendar-date text form.
//!
//! ## Summary
//! Dates cross the wire and appear in logs as zero-padded `YYYY-MM-DD`
//! strings, independent of locale. Comparison of two dates through this form
//! agrees with comparison of the dates themselves for four-digit years.

use chrono::NaiveDate;

use crate::constants::DATE_FORMAT;
use crate::error::{CoreError, CoreResult};

/// Formats a date as `YYYY-MM-DD`.
///
/// Examples:
/// - 2024-01-05 -> "2024-01-05"
/// - 0987-12-31 -> "0987-12-31"
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// ## Summary
/// Parses a `YYYY-MM-DD` string into a calendar date.
///
/// ## Errors
/// Returns `CoreError::ParseError` if the input is not a valid calendar date
/// in the canonical form (including dates such as `2023-02-29`).
pub fn parse_date(input: &str) -> CoreResult<NaiveDate> {
    NaiveDate::parse_from_str(input, DATE_FORMAT)
        .map_err(|err| CoreError::ParseError(format!("invalid date '{input}': {err}")))
}
