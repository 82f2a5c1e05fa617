use anyhow::Result;
use chrono::NaiveDate;
use dayplan_core::{EventStore, PersistenceGateway};
use owo_colors::OwoColorize;

use crate::render::{format_date_label, render_day};

pub fn run<G: PersistenceGateway>(store: &EventStore<G>, date: NaiveDate) -> Result<()> {
    println!("{}", format_date_label(date).bold());

    let events = store.list_events(date);
    if events.is_empty() {
        println!("  {}", "No events for this day".dimmed());
        return Ok(());
    }

    for line in render_day(events) {
        println!("{}", line);
    }

    Ok(())
}
