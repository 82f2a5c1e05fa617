use anyhow::Result;
use chrono::NaiveDate;
use dayplan_core::{Category, Event, EventStore, PersistenceGateway, TimeOfDay};
use dialoguer::{Input, Select};
use owo_colors::OwoColorize;

use crate::render::Render;
use crate::utils::tui::report_save;

/// Fields given on the command line. Anything missing is prompted for.
pub struct NewEvent {
    pub name: Option<String>,
    pub start: Option<TimeOfDay>,
    pub end: Option<TimeOfDay>,
    pub description: Option<String>,
    pub category: Option<Category>,
}

pub fn run<G: PersistenceGateway>(
    store: &mut EventStore<G>,
    date: NaiveDate,
    new: NewEvent,
) -> Result<()> {
    let interactive = new.name.is_none() || new.start.is_none() || new.end.is_none();

    // --- Name ---
    let name = match new.name {
        Some(n) => n,
        None => Input::<String>::new()
            .with_prompt("  Event name")
            .interact_text()?,
    };

    // --- Times ---
    let start_time = match new.start {
        Some(t) => t,
        None => prompt_time("  Start (HH:MM)")?,
    };

    let end_time = match new.end {
        Some(t) => t,
        None => prompt_time("  End (HH:MM)")?,
    };

    // --- Description ---
    let description = match new.description {
        Some(d) => d,
        None if interactive => Input::new()
            .with_prompt("  Description (skip)")
            .default(String::new())
            .show_default(false)
            .interact_text()?,
        None => String::new(),
    };

    // --- Category ---
    let category = match new.category {
        Some(c) => c,
        None if interactive => prompt_category()?,
        None => Category::default(),
    };

    let event = Event::new(name, start_time, end_time)
        .with_description(description)
        .with_category(category);

    let outcome = store.add_event(date, event.clone())?;

    if interactive {
        println!();
    }
    println!("{} {}", "  Added:".green(), event.render());
    report_save(&outcome);

    Ok(())
}

/// Prompt for a time of day with retry on parse errors.
fn prompt_time(prompt: &str) -> Result<TimeOfDay> {
    loop {
        let input: String = Input::new().with_prompt(prompt).interact_text()?;
        match input.parse::<TimeOfDay>() {
            Ok(time) => return Ok(time),
            Err(e) => {
                eprintln!("  {}", e.to_string().red());
            }
        }
    }
}

fn prompt_category() -> Result<Category> {
    let labels: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();

    let selection = Select::new()
        .with_prompt("  Category")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(Category::ALL[selection])
}
