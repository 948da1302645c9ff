//! Recurrence expansion for calendar events.
//!
//! This module turns an event with a daily, weekly or monthly rule into its
//! dated occurrences, and groups occurrences by date for calendar views.

mod calendar;
mod expander;
mod group;

pub use calendar::{add_months_clamped, days_in_month};
pub use expander::{Expander, daily_dates, expand, monthly_dates, weekly_dates};
pub use group::group_by_date;
