//! JSON snapshot document.
//!
//! ```json
//! {
//!   "2024-03-10": [
//!     { "name": "Standup", "startTime": "09:00", "endTime": "09:30",
//!       "description": "", "category": "Work" }
//!   ]
//! }
//! ```

use std::fmt;

use chrono::NaiveDate;
use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};

use crate::error::{DayplanError, DayplanResult, ImportError};
use crate::event::Event;
use crate::store::Snapshot;

const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Pretty-printed document, used for exports.
pub fn to_json(snapshot: &Snapshot) -> DayplanResult<String> {
    serde_json::to_string_pretty(snapshot).map_err(|e| DayplanError::Serialization(e.to_string()))
}

/// Single-line document, used for persistence.
pub fn to_json_compact(snapshot: &Snapshot) -> DayplanResult<String> {
    serde_json::to_string(snapshot).map_err(|e| DayplanError::Serialization(e.to_string()))
}

/// Parse a snapshot document.
///
/// Well-formed means: a JSON object keyed by `YYYY-MM-DD` whose values are
/// arrays of valid events with no two overlapping on the same day. Each date
/// may appear only once. Empty day arrays are dropped.
pub fn parse_snapshot(bytes: &[u8]) -> Result<Snapshot, ImportError> {
    let DayEntries(entries) = serde_json::from_slice(bytes)?;

    let mut snapshot = Snapshot::new();
    for (key, events) in entries {
        let date = parse_date_key(&key)?;
        if snapshot.insert(date, events).is_some() {
            return Err(ImportError::Malformed(format!(
                "Date {date} appears more than once"
            )));
        }
    }

    snapshot.retain(|_, events| !events.is_empty());

    for (date, events) in &snapshot {
        for (index, event) in events.iter().enumerate() {
            event.validate().map_err(|source| ImportError::InvalidEvent {
                date: *date,
                index,
                source,
            })?;
        }

        for (first, a) in events.iter().enumerate() {
            if let Some(offset) = events[first + 1..].iter().position(|b| a.overlaps(b)) {
                return Err(ImportError::Overlapping {
                    date: *date,
                    first,
                    second: first + 1 + offset,
                });
            }
        }
    }

    Ok(snapshot)
}

/// Dates must be written exactly as `YYYY-MM-DD`; chrono alone would also
/// accept unpadded forms such as `2024-3-10`.
fn parse_date_key(key: &str) -> Result<NaiveDate, ImportError> {
    match NaiveDate::parse_from_str(key, DATE_KEY_FORMAT) {
        Ok(date) if key.len() == 10 && date.format(DATE_KEY_FORMAT).to_string() == key => {
            Ok(date)
        }
        _ => Err(ImportError::Malformed(format!(
            "Invalid date '{key}'. Expected YYYY-MM-DD"
        ))),
    }
}

/// Top-level object entries in document order, repeated keys included.
struct DayEntries(Vec<(String, Vec<Event>)>);

impl<'de> Deserialize<'de> for DayEntries {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = DayEntries;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object mapping YYYY-MM-DD dates to event lists")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::new();
                while let Some(entry) = map.next_entry()? {
                    entries.push(entry);
                }
                Ok(DayEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

// =============================================================================
// Tests
// =============================================================================
