//! Recurrence data model.
//!
//! `RecurrenceRule` and `Event` keep the camelCase record shape used by the
//! event form, so an event serialized by the form layer deserializes here
//! without a mapping step.

mod event;
mod rule;

pub use event::{Event, RecurringEvent};
pub use rule::{RecurrenceRule, RepeatType};
