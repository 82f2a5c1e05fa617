//! Free-text search over event names.

use chrono::NaiveDate;
use serde::Serialize;

use crate::event::Event;
use crate::store::Snapshot;

/// An event together with the day it is scheduled on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatedEvent {
    pub date: NaiveDate,
    #[serde(flatten)]
    pub event: Event,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchResults {
    /// Days with at least one match, in date order
    pub dates: Vec<NaiveDate>,
    /// Every matching event, in date order then bucket order
    pub events: Vec<DatedEvent>,
}

impl SearchResults {
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Case-insensitive substring match of `query` against event names.
///
/// An empty query matches nothing.
pub fn search(snapshot: &Snapshot, query: &str) -> SearchResults {
    if query.is_empty() {
        return SearchResults::default();
    }

    let needle = query.to_lowercase();
    let mut results = SearchResults::default();

    for (date, events) in snapshot {
        let before = results.events.len();

        results.events.extend(
            events
                .iter()
                .filter(|event| event.name.to_lowercase().contains(&needle))
                .map(|event| DatedEvent {
                    date: *date,
                    event: event.clone(),
                }),
        );

        if results.events.len() > before {
            results.dates.push(*date);
        }
    }

    results
}
