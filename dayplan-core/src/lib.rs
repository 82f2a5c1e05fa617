//! Event store and scheduling engine for dayplan.
//!
//! - `event`: `Event`, `TimeOfDay` and `Category`
//! - `store`: the per-day event store and its non-overlap rules
//! - `search`: name search over a store snapshot
//! - `export`: JSON and CSV snapshot formats
//! - `gateway`: the key-value byte store snapshots are persisted through

pub mod config;
pub mod error;
pub mod event;
pub mod export;
pub mod gateway;
pub mod search;
pub mod store;

pub use error::{DayplanError, DayplanResult, ImportError, StoreError, ValidationError};
pub use event::{Category, Event, TimeOfDay};
pub use gateway::{FileGateway, MemoryGateway, PersistenceGateway};
pub use search::{DatedEvent, SearchResults};
pub use store::{DEFAULT_STORAGE_KEY, EventStore, SaveOutcome, Snapshot};
