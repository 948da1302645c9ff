//! Expansion of a recurring event into dated occurrences.
//!
//! Every generator emits the start date first, then steps one unit at a
//! time (a day, seven days, a calendar month) until the next candidate
//! falls after the inclusive end date or the occurrence limit is reached.

use std::num::NonZeroU32;

use cadence_core::config::ExpansionConfig;
use cadence_core::constants::DEFAULT_MAX_OCCURRENCES;
use cadence_core::error::CoreError;
use cadence_core::util::format_date;
use chrono::{Days, NaiveDate};

use super::calendar::add_months_clamped;
use crate::error::{RecurError, RecurResult};
use crate::model::{RecurringEvent, RepeatType};

/// ## Summary
/// Expands recurring events, bounded by a hard occurrence cap.
///
/// The cap applies on top of each rule's own `interval`, so a rule asking for
/// more occurrences than the cap is truncated (with a warning) rather than
/// allowed to allocate without limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expander {
    max_occurrences: NonZeroU32,
}

const DEFAULT_LIMIT: NonZeroU32 = match NonZeroU32::new(DEFAULT_MAX_OCCURRENCES) {
    Some(limit) => limit,
    None => NonZeroU32::MIN,
};

impl Default for Expander {
    fn default() -> Self {
        Self::new(DEFAULT_LIMIT)
    }
}

impl TryFrom<&ExpansionConfig> for Expander {
    type Error = RecurError;

    fn try_from(config: &ExpansionConfig) -> RecurResult<Self> {
        let max_occurrences = NonZeroU32::new(config.max_occurrences).ok_or_else(|| {
            CoreError::InvalidConfiguration(
                "expansion.max_occurrences must be at least 1".to_string(),
            )
        })?;
        Ok(Self::new(max_occurrences))
    }
}

impl Expander {
    #[must_use]
    pub const fn new(max_occurrences: NonZeroU32) -> Self {
        Self { max_occurrences }
    }

    #[must_use]
    pub const fn max_occurrences(&self) -> NonZeroU32 {
        self.max_occurrences
    }

    /// ## Summary
    /// Expands `event` into its ordered occurrences.
    ///
    /// - A non-recurring event yields a single copy of itself.
    /// - A recurring event without an end date yields only the start
    ///   occurrence; it is never expanded indefinitely.
    /// - An end date before the start yields only the start occurrence.
    ///
    /// Each occurrence is an independent copy of `event` with only the start
    /// date replaced. The input is never modified.
    #[must_use]
    pub fn expand<E: RecurringEvent>(&self, event: &E) -> Vec<E> {
        let rule = event.repeat();
        let start = event.start_date();

        if !rule.is_recurring() {
            tracing::trace!(start = %format_date(start), "Event does not repeat");
            return vec![event.clone()];
        }

        let Some(end_date) = rule.end_date else {
            tracing::debug!(
                repeat_type = %rule.repeat_type,
                start = %format_date(start),
                "Recurring event has no end date, emitting start occurrence only"
            );
            return vec![event.clone()];
        };

        if end_date < start {
            tracing::warn!(
                start = %format_date(start),
                end_date = %format_date(end_date),
                "Recurrence ends before it starts, emitting start occurrence only"
            );
        }

        let limit = self.limit_for(rule.interval);
        let dates = match rule.repeat_type {
            RepeatType::None => vec![start],
            RepeatType::Daily => daily_dates(start, end_date, limit),
            RepeatType::Weekly => weekly_dates(start, end_date, limit),
            RepeatType::Monthly => monthly_dates(start, end_date, limit),
        };

        tracing::debug!(
            repeat_type = %rule.repeat_type,
            start = %format_date(start),
            end_date = %format_date(end_date),
            occurrences = dates.len(),
            "Expanded recurring event"
        );

        dates
            .into_iter()
            .map(|date| event.with_start_date(date))
            .collect()
    }

    /// ## Summary
    /// Validates `event` for expansion with this expander's limits.
    ///
    /// ## Errors
    /// Returns `RecurError::ValidationError` if the rule's end date precedes
    /// the start date or its interval exceeds the occurrence cap.
    pub fn validate<E: RecurringEvent>(&self, event: &E) -> RecurResult<()> {
        crate::validation::validate_event(event)?;

        let rule = event.repeat();
        if rule.is_recurring() && rule.interval > self.max_occurrences {
            return Err(RecurError::ValidationError(format!(
                "interval {} exceeds the maximum of {} occurrences",
                rule.interval, self.max_occurrences
            )));
        }
        Ok(())
    }

    fn limit_for(&self, interval: NonZeroU32) -> NonZeroU32 {
        if interval > self.max_occurrences {
            tracing::warn!(
                interval = interval.get(),
                max_occurrences = self.max_occurrences.get(),
                "Interval exceeds occurrence cap, truncating"
            );
            self.max_occurrences
        } else {
            interval
        }
    }
}

/// ## Summary
/// Expands `event` with the default occurrence cap.
///
/// See [`Expander::expand`].
#[must_use]
pub fn expand<E: RecurringEvent>(event: &E) -> Vec<E> {
    Expander::default().expand(event)
}

/// Dates one day apart, starting at `start`.
#[must_use]
pub fn daily_dates(start: NaiveDate, end_date: NaiveDate, limit: NonZeroU32) -> Vec<NaiveDate> {
    generate(start, end_date, limit, |step| {
        start.checked_add_days(Days::new(u64::from(step)))
    })
}

/// Dates seven days apart, starting at `start`.
#[must_use]
pub fn weekly_dates(start: NaiveDate, end_date: NaiveDate, limit: NonZeroU32) -> Vec<NaiveDate> {
    generate(start, end_date, limit, |step| {
        start.checked_add_days(Days::new(7 * u64::from(step)))
    })
}

/// Dates one calendar month apart, starting at `start`.
///
/// Each date is computed from `start` itself, so a start on the 31st lands
/// on the 31st of every month that has one and on the last day otherwise.
#[must_use]
pub fn monthly_dates(start: NaiveDate, end_date: NaiveDate, limit: NonZeroU32) -> Vec<NaiveDate> {
    generate(start, end_date, limit, |step| add_months_clamped(start, step))
}

fn generate<F>(start: NaiveDate, end_date: NaiveDate, limit: NonZeroU32, nth: F) -> Vec<NaiveDate>
where
    F: Fn(u32) -> Option<NaiveDate>,
{
    let mut dates = vec![start];

    for step in 1..limit.get() {
        let Some(date) = nth(step) else {
            tracing::warn!(step, "Occurrence falls outside the calendar range, stopping");
            break;
        };
        if date > end_date {
            break;
        }
        dates.push(date);
    }

    dates
}
