//! Property tests for the event store invariants.

use chrono::NaiveDate;
use dayplan_core::{
    DEFAULT_STORAGE_KEY, Event, EventStore, MemoryGateway, PersistenceGateway, Snapshot,
    StoreError, TimeOfDay,
};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Add { day: u8, start: u16, length: u16 },
    Edit { day: u8, index: usize, start: u16, length: u16 },
    Delete { day: u8, index: usize },
}

fn day(n: u8) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 10 + n as u32).unwrap()
}

fn event(name: &str, start: u16, length: u16) -> Event {
    let start_time = TimeOfDay::from_minutes(start).unwrap();
    let end_time = TimeOfDay::from_minutes((start + length).min(1439)).unwrap();
    Event::new(name, start_time, end_time)
}

fn op_strategy() -> impl Strategy<Value = Op> {
    // Short days and a narrow time window so collisions are common.
    prop_oneof![
        3 => (0u8..3, 480u16..720, 0u16..120)
            .prop_map(|(day, start, length)| Op::Add { day, start, length }),
        2 => (0u8..3, 0usize..6, 480u16..720, 0u16..120)
            .prop_map(|(day, index, start, length)| Op::Edit { day, index, start, length }),
        1 => (0u8..3, 0usize..6).prop_map(|(day, index)| Op::Delete { day, index }),
    ]
}

fn apply<G: PersistenceGateway>(store: &mut EventStore<G>, op: &Op, n: usize) -> Result<(), StoreError> {
    let name = format!("event {n}");
    match *op {
        Op::Add { day: d, start, length } => store.add_event(day(d), event(&name, start, length)).map(|_| ()),
        Op::Edit { day: d, index, start, length } => store
            .edit_event(day(d), index, event(&name, start, length))
            .map(|_| ()),
        Op::Delete { day: d, index } => store.delete_event(day(d), index).map(|_| ()),
    }
}

fn assert_invariants(snapshot: &Snapshot) {
    for (date, events) in snapshot {
        assert!(!events.is_empty(), "empty bucket kept for {date}");
        for (i, a) in events.iter().enumerate() {
            assert!(a.validate().is_ok());
            for b in &events[i + 1..] {
                assert!(!a.overlaps(b), "{a} overlaps {b} on {date}");
            }
        }
    }
}

proptest! {
    #[test]
    fn prop_no_overlaps_after_any_sequence(ops in prop::collection::vec(op_strategy(), 1..60)) {
        let mut store = EventStore::open(MemoryGateway::new(), DEFAULT_STORAGE_KEY);

        for (n, op) in ops.iter().enumerate() {
            let before = store.snapshot().clone();
            let result = apply(&mut store, op, n);

            if result.is_err() {
                prop_assert_eq!(store.snapshot(), &before);
            }
            assert_invariants(store.snapshot());
        }
    }

    #[test]
    fn prop_json_round_trips_through_load(ops in prop::collection::vec(op_strategy(), 1..40)) {
        let mut store = EventStore::open(MemoryGateway::new(), DEFAULT_STORAGE_KEY);
        for (n, op) in ops.iter().enumerate() {
            let _ = apply(&mut store, op, n);
        }

        let json = store.to_json().unwrap();
        let reloaded = EventStore::open(MemoryGateway::with_entry("export", json), "export");

        prop_assert_eq!(reloaded.snapshot(), store.snapshot());
    }

    #[test]
    fn prop_editing_to_itself_never_overlaps(ops in prop::collection::vec(op_strategy(), 1..40)) {
        let mut store = EventStore::open(MemoryGateway::new(), DEFAULT_STORAGE_KEY);
        for (n, op) in ops.iter().enumerate() {
            let _ = apply(&mut store, op, n);
        }

        let snapshot = store.snapshot().clone();
        for (date, events) in &snapshot {
            for (index, event) in events.iter().enumerate() {
                prop_assert!(store.edit_event(*date, index, event.clone()).is_ok());
            }
        }
        prop_assert_eq!(store.snapshot(), &snapshot);
    }
}

#[test]
fn test_deleting_only_event_removes_day() {
    let mut store = EventStore::open(MemoryGateway::new(), DEFAULT_STORAGE_KEY);
    store.add_event(day(0), event("Standup", 540, 30)).unwrap();

    store.delete_event(day(0), 0).unwrap();

    assert!(!store.snapshot().contains_key(&day(0)));
}

#[test]
fn test_search_and_csv_scenario() {
    let mut store = EventStore::open(MemoryGateway::new(), DEFAULT_STORAGE_KEY);
    let date = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
    store.add_event(date, event("Standup", 540, 30)).unwrap();

    let results = store.search("stand");
    assert_eq!(results.dates, vec![date]);
    assert_eq!(results.events.len(), 1);
    assert_eq!(results.events[0].event.name, "Standup");

    assert_eq!(
        store.to_csv(),
        "Date,Event Name,Start Time,End Time,Description\n2024-03-10,Standup,09:00,09:30,"
    );
}
