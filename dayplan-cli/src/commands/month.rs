use std::collections::HashMap;

use anyhow::Result;
use chrono::{Datelike, Local, NaiveDate};
use dayplan_core::{EventStore, PersistenceGateway};
use owo_colors::OwoColorize;

use crate::render::format_date_label;
use crate::utils::dates::month_grid;
use crate::utils::tui::pluralize;

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Print a Sunday-first month grid. Days with events are marked with their
/// event count.
pub fn run<G: PersistenceGateway>(store: &EventStore<G>, first: NaiveDate) -> Result<()> {
    let today = Local::now().date_naive();

    let busy_days = store.events_in_month(first.year(), first.month());
    let counts: HashMap<NaiveDate, usize> = busy_days
        .iter()
        .map(|(date, events)| (*date, events.len()))
        .collect();

    println!("{}", first.format("%B %Y").to_string().bold());
    println!(
        "{}",
        WEEKDAYS
            .iter()
            .map(|d| format!("{:>6}", d))
            .collect::<String>()
            .dimmed()
    );

    for week in month_grid(first) {
        let row: String = week
            .iter()
            .map(|slot| match slot {
                None => " ".repeat(6),
                Some(date) => render_cell(*date, counts.get(date).copied(), *date == today),
            })
            .collect();
        println!("{}", row);
    }

    if busy_days.is_empty() {
        println!("\n{}", "No events this month".dimmed());
        return Ok(());
    }

    println!();
    for (date, events) in &busy_days {
        println!(
            "  {}  {} {}",
            format_date_label(*date),
            events.len(),
            pluralize("event", events.len())
        );
    }

    Ok(())
}

fn render_cell(date: NaiveDate, count: Option<usize>, is_today: bool) -> String {
    let cell = cell_text(date, count);

    match (count.is_some(), is_today) {
        (_, true) => cell.green().bold().to_string(),
        (true, false) => cell.cyan().to_string(),
        (false, false) => cell,
    }
}

/// One 6-column grid cell: the day number, plus `*N` when it has N events.
fn cell_text(date: NaiveDate, count: Option<usize>) -> String {
    match count {
        Some(n) => format!("{:>3}*{:<2}", date.day(), n),
        None => format!("{:>3}   ", date.day()),
    }
}
