use std::path::Path;

use anyhow::{Context, Result};
use dayplan_core::{EventStore, PersistenceGateway};
use owo_colors::OwoColorize;

use crate::utils::tui::{pluralize, report_save};

/// Replace all events with the contents of a JSON export.
pub fn run<G: PersistenceGateway>(store: &mut EventStore<G>, path: &Path) -> Result<()> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;

    let outcome = store
        .import_json(&bytes)
        .with_context(|| format!("Could not import {}", path.display()))?;

    let count = store.len();
    println!(
        "{}",
        format!("Imported {} {}", count, pluralize("event", count)).green()
    );
    report_save(&outcome);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use dayplan_core::{DEFAULT_STORAGE_KEY, MemoryGateway};

    #[test]
    fn test_run_replaces_events_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.json");
        std::fs::write(
            &path,
            r#"{"2024-03-10":[{"name":"Standup","startTime":"09:00","endTime":"09:30"}]}"#,
        )
        .unwrap();

        let mut store = EventStore::open(MemoryGateway::new(), DEFAULT_STORAGE_KEY);
        run(&mut store, &path).unwrap();

        let day = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        assert_eq!(store.list_events(day)[0].name, "Standup");
    }

    #[test]
    fn test_run_rejects_bad_documents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.json");
        std::fs::write(&path, r#"{"2024-3-10":[]}"#).unwrap();

        let mut store = EventStore::open(MemoryGateway::new(), DEFAULT_STORAGE_KEY);
        let err = run(&mut store, &path).unwrap_err();

        assert!(err.to_string().starts_with("Could not import"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_run_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = EventStore::open(MemoryGateway::new(), DEFAULT_STORAGE_KEY);

        assert!(run(&mut store, &dir.path().join("nope.json")).is_err());
    }
}
