//! The event store: every scheduled event, bucketed by day.
//!
//! The store is the only owner of the day buckets. Each bucket keeps its
//! events in insertion order and never holds two events whose `[start, end)`
//! intervals intersect. Every mutation either fully succeeds (and is then
//! persisted through the gateway) or returns an error and leaves the store
//! exactly as it was.

use std::collections::BTreeMap;

use chrono::{Months, NaiveDate};

use crate::error::{DayplanResult, ImportError, StoreError};
use crate::event::Event;
use crate::export;
use crate::gateway::PersistenceGateway;
use crate::search::{self, SearchResults};

/// Full date -> events mapping at a point in time, in date order.
pub type Snapshot = BTreeMap<NaiveDate, Vec<Event>>;

/// Storage key used when none is configured.
pub const DEFAULT_STORAGE_KEY: &str = "events";

/// What happened to the snapshot after a successful mutation.
///
/// A failed save never fails the mutation itself; callers may surface it as a
/// warning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    /// Nothing is written while the store is empty.
    SkippedEmpty,
    Failed(String),
}

impl SaveOutcome {
    pub fn warning(&self) -> Option<&str> {
        match self {
            SaveOutcome::Failed(reason) => Some(reason.as_str()),
            _ => None,
        }
    }
}

pub struct EventStore<G> {
    days: Snapshot,
    gateway: G,
    key: String,
}

impl<G: PersistenceGateway> EventStore<G> {
    /// Create a store backed by `gateway` and load whatever is saved under `key`.
    pub fn open(gateway: G, key: impl Into<String>) -> Self {
        let mut store = EventStore {
            days: Snapshot::new(),
            gateway,
            key: key.into(),
        };
        store.load();
        store
    }

    /// Replace the in-memory events with the saved snapshot.
    ///
    /// Absent, unreadable or malformed snapshots leave the store empty. This
    /// never fails.
    pub fn load(&mut self) {
        self.days = match self.read_snapshot() {
            Ok(Some(snapshot)) => {
                tracing::debug!(key = %self.key, days = snapshot.len(), "Loaded snapshot");
                snapshot
            }
            Ok(None) => Snapshot::new(),
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Ignoring unusable snapshot, starting empty");
                Snapshot::new()
            }
        };
    }

    fn read_snapshot(&self) -> Result<Option<Snapshot>, String> {
        let Some(bytes) = self.gateway.load(&self.key).map_err(|e| e.to_string())? else {
            return Ok(None);
        };

        export::parse_snapshot(&bytes)
            .map(Some)
            .map_err(|e| e.to_string())
    }

    /// Write the full snapshot through the gateway.
    ///
    /// Skipped while the store is empty, so an empty store never overwrites a
    /// previously saved snapshot.
    pub fn save(&mut self) -> SaveOutcome {
        if self.days.is_empty() {
            return SaveOutcome::SkippedEmpty;
        }

        match self.write_snapshot() {
            Ok(()) => SaveOutcome::Saved,
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Failed to save snapshot");
                SaveOutcome::Failed(e.to_string())
            }
        }
    }

    fn write_snapshot(&mut self) -> DayplanResult<()> {
        let content = export::to_json_compact(&self.days)?;
        self.gateway.save(&self.key, content.as_bytes())
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Events on `date` in insertion order (empty if there are none).
    pub fn list_events(&self, date: NaiveDate) -> &[Event] {
        self.days.get(&date).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.days
    }

    /// Days of the given month that have events, in date order.
    pub fn events_in_month(&self, year: i32, month: u32) -> Vec<(NaiveDate, &[Event])> {
        let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
            return Vec::new();
        };

        let days = match first.checked_add_months(Months::new(1)) {
            Some(next) => self.days.range(first..next),
            None => self.days.range(first..),
        };

        days.map(|(date, events)| (*date, events.as_slice())).collect()
    }

    /// Total number of events across all days.
    pub fn len(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn search(&self, query: &str) -> SearchResults {
        search::search(&self.days, query)
    }

    pub fn to_json(&self) -> DayplanResult<String> {
        export::to_json(&self.days)
    }

    pub fn to_csv(&self) -> String {
        export::to_csv(&self.days)
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Schedule `event` on `date`, after any events already there.
    pub fn add_event(&mut self, date: NaiveDate, event: Event) -> Result<SaveOutcome, StoreError> {
        event.validate()?;
        check_conflicts(self.list_events(date), &event, None)?;

        tracing::debug!(%date, name = %event.name, "Adding event");
        self.days.entry(date).or_default().push(event);

        Ok(self.save())
    }

    /// Replace the event at `index` on `date`, keeping its position.
    ///
    /// The event being replaced is ignored by the overlap check.
    pub fn edit_event(
        &mut self,
        date: NaiveDate,
        index: usize,
        event: Event,
    ) -> Result<SaveOutcome, StoreError> {
        self.check_index(date, index)?;
        event.validate()?;
        check_conflicts(self.list_events(date), &event, Some(index))?;

        tracing::debug!(%date, index, name = %event.name, "Editing event");
        if let Some(slot) = self.days.get_mut(&date).and_then(|events| events.get_mut(index)) {
            *slot = event;
        }

        Ok(self.save())
    }

    /// Remove the event at `index` on `date`. Later events shift down by one;
    /// the day disappears once its last event is gone.
    pub fn delete_event(
        &mut self,
        date: NaiveDate,
        index: usize,
    ) -> Result<(Event, SaveOutcome), StoreError> {
        let events = match self.days.get_mut(&date) {
            Some(events) if index < events.len() => events,
            other => {
                let len = other.map_or(0, |events| events.len());
                return Err(StoreError::Index { date, index, len });
            }
        };

        let removed = events.remove(index);
        if events.is_empty() {
            self.days.remove(&date);
        }

        tracing::debug!(%date, index, name = %removed.name, "Deleted event");
        Ok((removed, self.save()))
    }

    /// Replace every event with the contents of a JSON snapshot document.
    ///
    /// All-or-nothing: a document that would not load is rejected and the
    /// store is left untouched.
    pub fn import_json(&mut self, bytes: &[u8]) -> Result<SaveOutcome, ImportError> {
        let snapshot = export::parse_snapshot(bytes)?;

        tracing::info!(days = snapshot.len(), "Importing snapshot");
        self.days = snapshot;

        Ok(self.save())
    }

    fn check_index(&self, date: NaiveDate, index: usize) -> Result<(), StoreError> {
        let len = self.list_events(date).len();
        if index < len {
            Ok(())
        } else {
            Err(StoreError::Index { date, index, len })
        }
    }
}

/// First event in `existing` (other than the one at `skip`) that `event` overlaps.
fn check_conflicts(existing: &[Event], event: &Event, skip: Option<usize>) -> Result<(), StoreError> {
    let conflict = existing
        .iter()
        .enumerate()
        .filter(|(i, _)| Some(*i) != skip)
        .find(|(_, other)| event.overlaps(other));

    match conflict {
        Some((index, conflicting)) => Err(StoreError::Overlap {
            conflicting: conflicting.clone(),
            index,
        }),
        None => Ok(()),
    }
}

// =============================================================================
// Tests
// =============================================================================
