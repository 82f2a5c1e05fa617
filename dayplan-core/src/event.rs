//! Event types.
//!
//! An event is a named, categorized time interval within a single day. The
//! date it belongs to is not part of the event; it is the key of the day
//! bucket holding it (see [`crate::store`]).

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

const MINUTES_PER_DAY: u16 = 24 * 60;

/// A time of day with minute precision, ordered by minutes since midnight.
///
/// Written and read as 24-hour `HH:MM` text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    pub fn from_hm(hour: u16, minute: u16) -> Option<Self> {
        if hour < 24 && minute < 60 {
            Some(TimeOfDay(hour * 60 + minute))
        } else {
            None
        }
    }

    pub fn from_minutes(minutes: u16) -> Option<Self> {
        (minutes < MINUTES_PER_DAY).then_some(TimeOfDay(minutes))
    }

    pub fn minutes_since_midnight(self) -> u16 {
        self.0
    }

    pub fn hour(self) -> u16 {
        self.0 / 60
    }

    pub fn minute(self) -> u16 {
        self.0 % 60
    }
}

impl FromStr for TimeOfDay {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let time = NaiveTime::parse_from_str(s.trim(), "%H:%M")
            .map_err(|_| ValidationError::InvalidTime(s.to_string()))?;

        let minutes = (time.hour() * 60 + time.minute()) as u16;
        debug_assert!(minutes < MINUTES_PER_DAY);

        Ok(TimeOfDay(minutes))
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = ValidationError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(t: TimeOfDay) -> Self {
        t.to_string()
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// Event category (closed set)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[default]
    Work,
    Personal,
    Others,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Work, Category::Personal, Category::Others];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Work => "Work",
            Category::Personal => "Personal",
            Category::Others => "Others",
        }
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown category '{}'. Expected work, personal or others", s))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A scheduled (or to-be-scheduled) event.
///
/// Field order matters: it is the field order of the JSON snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub name: String,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
    #[serde(default, with = "empty_as_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Category,
}

impl Event {
    pub fn new(name: impl Into<String>, start_time: TimeOfDay, end_time: TimeOfDay) -> Self {
        Event {
            name: name.into(),
            start_time,
            end_time,
            description: None,
            category: Category::default(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        let description = description.into();
        self.description = if description.is_empty() { None } else { Some(description) };
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    /// Check the per-event invariants: a non-empty name and `start < end`.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName);
        }

        if self.start_time >= self.end_time {
            return Err(ValidationError::StartNotBeforeEnd {
                start: self.start_time.to_string(),
                end: self.end_time.to_string(),
            });
        }

        Ok(())
    }

    /// Half-open interval intersection: touching endpoints do not overlap.
    pub fn overlaps(&self, other: &Event) -> bool {
        self.start_time < other.end_time && other.start_time < self.end_time
    }

    /// Description text, empty if there is none.
    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({}-{})", self.name, self.start_time, self.end_time)
    }
}

/// Descriptions are stored as `""` when absent. Reading accepts a string,
/// `null` or a missing field; an empty string reads back as `None`.
mod empty_as_none {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<String>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(value.as_deref().unwrap_or(""))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        let value = Option::<String>::deserialize(d)?;
        Ok(value.filter(|s| !s.is_empty()))
    }
}

// =============================================================================
// Tests
// =============================================================================
