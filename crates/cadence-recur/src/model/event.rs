//! Event record and the seam the expander works against.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::rule::RecurrenceRule;

/// ## Summary
/// A record that can be expanded into dated occurrences.
///
/// The expander only reads the start date and the rule, and builds each
/// occurrence through [`RecurringEvent::with_start_date`]. Everything else
/// on the record is carried through untouched.
pub trait RecurringEvent: Clone {
    fn start_date(&self) -> NaiveDate;

    fn repeat(&self) -> RecurrenceRule;

    /// Returns an independent copy of the record dated `date`.
    #[must_use]
    fn with_start_date(&self, date: NaiveDate) -> Self;
}

/// A calendar event as submitted by the event form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(default)]
    pub id: String,
    pub title: String,
    /// Start date of the event (and of the first occurrence).
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub repeat: RecurrenceRule,
    /// Minutes before the start at which to notify.
    #[serde(default)]
    pub notification_time: u32,
}

impl RecurringEvent for Event {
    fn start_date(&self) -> NaiveDate {
        self.date
    }

    fn repeat(&self) -> RecurrenceRule {
        self.repeat
    }

    fn with_start_date(&self, date: NaiveDate) -> Self {
        Self {
            date,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RepeatType;

    const FORM_JSON: &str = r#"{
        "id": "1",
        "title": "Team sync",
        "date": "2024-01-15",
        "startTime": "09:00",
        "endTime": "10:00",
        "description": "",
        "location": "Room A",
        "category": "work",
        "repeat": { "type": "weekly", "interval": 4, "endDate": "2024-02-15" },
        "notificationTime": 10
    }"#;

    #[test]
    fn test_event_from_form_json() {
        let event: Event = serde_json::from_str(FORM_JSON).expect("valid event");

        assert_eq!(event.start_date(), NaiveDate::from_ymd_opt(2024, 1, 15).expect("date"));
        assert_eq!(event.start_time, "09:00");
        assert_eq!(event.notification_time, 10);
        assert_eq!(event.repeat().repeat_type, RepeatType::Weekly);
        assert_eq!(event.repeat().interval.get(), 4);
    }

    #[test]
    fn test_event_round_trips_field_names() {
        let event: Event = serde_json::from_str(FORM_JSON).expect("valid event");
        let json = serde_json::to_value(&event).expect("serialize");

        assert_eq!(json["startTime"], "09:00");
        assert_eq!(json["notificationTime"], 10);
        assert_eq!(json["repeat"]["endDate"], "2024-02-15");
    }

    #[test]
    fn test_event_without_repeat_defaults_to_none() {
        let event: Event = serde_json::from_str(
            r#"{"title":"Lunch","date":"2024-03-01","startTime":"12:00","endTime":"13:00"}"#,
        )
        .expect("valid event");

        assert!(!event.repeat.is_recurring());
        assert!(event.id.is_empty());
    }

    #[test]
    fn test_malformed_date_is_rejected() {
        let result = serde_json::from_str::<Event>(
            r#"{"title":"Bad","date":"2024-13-01","startTime":"12:00","endTime":"13:00"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_with_start_date_copies_other_fields() {
        let event: Event = serde_json::from_str(FORM_JSON).expect("valid event");
        let moved = event.with_start_date(NaiveDate::from_ymd_opt(2024, 1, 22).expect("date"));

        assert_eq!(moved.title, event.title);
        assert_eq!(moved.repeat, event.repeat);
        assert_eq!(moved.location, event.location);
        assert_ne!(moved.date, event.date);
        assert_eq!(event.date, NaiveDate::from_ymd_opt(2024, 1, 15).expect("date"));
    }
}
