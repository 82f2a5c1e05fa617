use anyhow::Result;
use chrono::NaiveDate;
use dayplan_core::{EventStore, PersistenceGateway};
use dialoguer::Confirm;
use owo_colors::OwoColorize;

use crate::render::Render;
use crate::utils::tui::report_save;

pub fn run<G: PersistenceGateway>(
    store: &mut EventStore<G>,
    date: NaiveDate,
    index: usize,
    force: bool,
) -> Result<()> {
    let events = store.list_events(date);
    let event = events.get(index).ok_or_else(|| super::no_such_event(date, index, events.len()))?;

    // Confirm unless --force
    if !force {
        println!("  {}", event.render());
        let confirmed = Confirm::new()
            .with_prompt("Delete this event?")
            .default(false)
            .interact()?;

        if !confirmed {
            return Ok(());
        }
    }

    let (removed, outcome) = store.delete_event(date, index)?;

    println!("{} {}", "  Deleted:".red(), removed.name);
    report_save(&outcome);

    Ok(())
}
