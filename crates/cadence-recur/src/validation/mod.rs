//! Rule validation for callers that want bad rules rejected.
//!
//! Expansion itself never fails: an end date before the start simply yields
//! the start occurrence. These checks let the form layer surface the problem
//! to the user instead.

use chrono::NaiveDate;

use cadence_core::util::format_date;

use crate::error::{RecurError, RecurResult};
use crate::model::{RecurrenceRule, RecurringEvent};

/// ## Summary
/// Validates a recurrence rule against the event's start date.
///
/// Non-recurring rules always pass, whatever end date they carry.
///
/// ## Errors
/// Returns `RecurError::ValidationError` if the rule repeats and its end date
/// precedes `start`.
pub fn validate_rule(rule: &RecurrenceRule, start: NaiveDate) -> RecurResult<()> {
    if !rule.is_recurring() {
        return Ok(());
    }

    if let Some(end_date) = rule.end_date.filter(|end_date| *end_date < start) {
        return Err(RecurError::ValidationError(format!(
            "end date {} is before start date {}",
            format_date(end_date),
            format_date(start)
        )));
    }

    Ok(())
}

/// ## Summary
/// Validates the rule carried by `event`.
///
/// ## Errors
/// See [`validate_rule`].
pub fn validate_event<E: RecurringEvent>(event: &E) -> RecurResult<()> {
    validate_rule(&event.repeat(), event.start_date())
}
