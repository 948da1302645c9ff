//! Recurrence rule value type.

use std::fmt;
use std::num::NonZeroU32;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// How an event repeats.
///
/// Unrecognized wire names deserialize to [`RepeatType::None`] rather than
/// failing, so a record from a newer form layer still renders as a single
/// event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RepeatType {
    #[default]
    None,
    Daily,
    Weekly,
    Monthly,
}

impl RepeatType {
    /// Returns the wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }

    /// Parses a wire name (case-insensitive), falling back to `None`.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "daily" => Self::Daily,
            "weekly" => Self::Weekly,
            "monthly" => Self::Monthly,
            _ => Self::None,
        }
    }
}

impl fmt::Display for RepeatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for RepeatType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        let parsed = Self::parse(&raw);
        if parsed == Self::None && !raw.eq_ignore_ascii_case("none") {
            tracing::debug!(repeat_type = %raw, "Unrecognized repeat type, treating as none");
        }
        Ok(parsed)
    }
}

/// A recurrence rule: what kind of repetition, how many occurrences at
/// most, and an optional inclusive end date.
///
/// `interval` bounds the number of generated occurrences; consecutive
/// occurrences are always one unit apart (a day, a week or a month).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurrenceRule {
    #[serde(rename = "type")]
    pub repeat_type: RepeatType,

    #[serde(default = "default_interval")]
    pub interval: NonZeroU32,

    /// Last date (inclusive) on which an occurrence may fall.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

const fn default_interval() -> NonZeroU32 {
    NonZeroU32::MIN
}

impl Default for RecurrenceRule {
    fn default() -> Self {
        Self::none()
    }
}

impl RecurrenceRule {
    #[must_use]
    pub const fn new(repeat_type: RepeatType, interval: NonZeroU32) -> Self {
        Self {
            repeat_type,
            interval,
            end_date: None,
        }
    }

    /// A rule that does not repeat.
    #[must_use]
    pub const fn none() -> Self {
        Self::new(RepeatType::None, NonZeroU32::MIN)
    }

    #[must_use]
    pub const fn daily(interval: NonZeroU32) -> Self {
        Self::new(RepeatType::Daily, interval)
    }

    #[must_use]
    pub const fn weekly(interval: NonZeroU32) -> Self {
        Self::new(RepeatType::Weekly, interval)
    }

    #[must_use]
    pub const fn monthly(interval: NonZeroU32) -> Self {
        Self::new(RepeatType::Monthly, interval)
    }

    /// Sets the inclusive end date.
    #[must_use]
    pub const fn with_end_date(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self
    }

    /// Returns `true` unless the rule is [`RepeatType::None`].
    #[must_use]
    pub const fn is_recurring(&self) -> bool {
        !matches!(self.repeat_type, RepeatType::None)
    }
}
