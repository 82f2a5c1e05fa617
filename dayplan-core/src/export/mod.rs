//! Snapshot interchange formats.
//!
//! - `json`: the persistence/export document (and its parser)
//! - `csv`: flat tabular export

mod csv;
mod json;

pub use csv::{CSV_HEADER, to_csv};
pub use json::{parse_snapshot, to_json, to_json_compact};
