//! Human-readable recurrence summaries, as shown next to an event.

use chrono::{Datelike, NaiveDate};

use cadence_core::util::format_date;

use crate::model::{RecurrenceRule, RepeatType};

/// ## Summary
/// Describes how an event starting on `start` repeats under `rule`.
///
/// A monthly rule starting on the 31st lands on the last day of every month,
/// and is described that way. A recurring rule without an end date expands
/// to the start occurrence only, so it is described as not repeating.
///
/// Examples:
/// - none -> "Does not repeat"
/// - daily without an end date -> "Does not repeat (no end date)"
/// - weekly from 2024-01-15 -> "Repeats weekly on Monday"
/// - monthly from 2024-01-31, ending 2024-04-30, interval 4 ->
///   "Repeats monthly on the last day, until 2024-04-30, up to 4 times"
#[must_use]
pub fn describe(rule: &RecurrenceRule, start: NaiveDate) -> String {
    let Some(end_date) = rule.end_date.filter(|_| rule.is_recurring()) else {
        return match rule.repeat_type {
            RepeatType::None => "Does not repeat".to_string(),
            _ => "Does not repeat (no end date)".to_string(),
        };
    };

    let mut text = match rule.repeat_type {
        RepeatType::None => return "Does not repeat".to_string(),
        RepeatType::Daily => "Repeats daily".to_string(),
        RepeatType::Weekly => format!("Repeats weekly on {}", start.format("%A")),
        RepeatType::Monthly if start.day() == 31 => "Repeats monthly on the last day".to_string(),
        RepeatType::Monthly => format!("Repeats monthly on day {}", start.day()),
    };

    text.push_str(&format!(", until {}", format_date(end_date)));
    if rule.interval.get() > 1 {
        text.push_str(&format!(", up to {} times", rule.interval));
    }

    text
}
