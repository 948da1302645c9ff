use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::model::RecurringEvent;

/// ## Summary
/// Groups occurrences by their start date, in date order.
///
/// Occurrences on the same date keep their input order. This is the shape a
/// month or week view renders from.
#[must_use]
pub fn group_by_date<E, I>(occurrences: I) -> BTreeMap<NaiveDate, Vec<E>>
where
    E: RecurringEvent,
    I: IntoIterator<Item = E>,
{
    let mut grouped: BTreeMap<NaiveDate, Vec<E>> = BTreeMap::new();
    for occurrence in occurrences {
        grouped
            .entry(occurrence.start_date())
            .or_default()
            .push(occurrence);
    }
    grouped
}
