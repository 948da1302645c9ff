//! Calendar-month arithmetic with day-of-month clamping.

use chrono::{Datelike, NaiveDate};

/// Returns the number of days in `month` (1-12) of `year`, or `None` for an
/// invalid month or a year outside the supported calendar range.
#[must_use]
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 => {
            NaiveDate::from_ymd_opt(year, 1, 1)?;
            Some(if NaiveDate::from_ymd_opt(year, 2, 29).is_some() {
                29
            } else {
                28
            })
        }
        _ => None,
    }
}

/// ## Summary
/// Adds `months` calendar months to `date`, clamping the day-of-month to the
/// last day of the target month.
///
/// The day is `min(date.day(), days_in_month(target))`, so the result never
/// rolls over into the month after the target. Repeated stepping must always
/// start from the same original date (`add_months_clamped(start, n)`), not
/// from a previous clamped result, or the day drifts down permanently after
/// the first short month.
///
/// Examples:
/// - 2024-01-31 + 1 -> 2024-02-29
/// - 2024-01-31 + 2 -> 2024-03-31
/// - 2024-02-29 + 12 -> 2025-02-28
///
/// Returns `None` if the target falls outside the supported calendar range.
#[must_use]
pub fn add_months_clamped(date: NaiveDate, months: u32) -> Option<NaiveDate> {
    let total = i64::from(date.year()) * 12 + i64::from(date.month0()) + i64::from(months);
    let year = i32::try_from(total.div_euclid(12)).ok()?;
    let month = u32::try_from(total.rem_euclid(12)).ok()? + 1;
    let day = date.day().min(days_in_month(year, month)?);

    NaiveDate::from_ymd_opt(year, month, day)
}
