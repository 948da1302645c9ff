//! Recurring-event expansion.
//!
//! Turns one event carrying a daily, weekly or monthly [`RecurrenceRule`]
//! into the ordered list of dated occurrences it stands for, clamping
//! day-of-month overflow to the last day of shorter months.

pub mod error;
pub mod expand;
pub mod model;
pub mod summary;
pub mod validation;

pub use expand::{Expander, add_months_clamped, days_in_month, expand, group_by_date};
pub use model::{Event, RecurrenceRule, RecurringEvent, RepeatType};
pub use summary::describe;
pub use validation::{validate_event, validate_rule};
