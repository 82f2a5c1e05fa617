pub mod add;
pub mod config;
pub mod delete;
pub mod edit;
pub mod export;
pub mod import;
pub mod list;
pub mod month;
pub mod search;

use chrono::NaiveDate;

use crate::utils::tui::pluralize;

/// Error for an event number that does not exist on `date`.
fn no_such_event(date: NaiveDate, index: usize, len: usize) -> anyhow::Error {
    anyhow::anyhow!(
        "No event #{} on {} (that day has {} {})",
        index + 1,
        date,
        len,
        pluralize("event", len)
    )
}
