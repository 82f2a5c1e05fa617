use anyhow::Result;
use dayplan_core::{EventStore, PersistenceGateway};
use owo_colors::OwoColorize;

use crate::render::Render;
use crate::utils::tui::pluralize;

pub fn run<G: PersistenceGateway>(store: &EventStore<G>, query: &str) -> Result<()> {
    let results = store.search(query);

    if results.is_empty() {
        println!("{}", "No matching events".dimmed());
        return Ok(());
    }

    for event in &results.events {
        println!("{}", event.render());
    }

    let matches = results.events.len();
    let days = results.dates.len();
    println!(
        "\n{}",
        format!(
            "{} matching {} on {} {}",
            matches,
            pluralize("event", matches),
            days,
            pluralize("day", days)
        )
        .dimmed()
    );

    Ok(())
}
