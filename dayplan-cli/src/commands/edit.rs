use anyhow::Result;
use chrono::NaiveDate;
use dayplan_core::{Category, Event, EventStore, PersistenceGateway, TimeOfDay};
use owo_colors::OwoColorize;

use crate::render::Render;
use crate::utils::tui::report_save;

/// Replacement values; `None` keeps the current value.
#[derive(Default)]
pub struct EventChanges {
    pub name: Option<String>,
    pub start: Option<TimeOfDay>,
    pub end: Option<TimeOfDay>,
    pub description: Option<String>,
    pub category: Option<Category>,
}

impl EventChanges {
    pub fn apply_to(self, current: &Event) -> Event {
        let mut event = current.clone();

        if let Some(name) = self.name {
            event.name = name;
        }
        if let Some(start) = self.start {
            event.start_time = start;
        }
        if let Some(end) = self.end {
            event.end_time = end;
        }
        if let Some(description) = self.description {
            event = event.with_description(description);
        }
        if let Some(category) = self.category {
            event.category = category;
        }

        event
    }
}

pub fn run<G: PersistenceGateway>(
    store: &mut EventStore<G>,
    date: NaiveDate,
    index: usize,
    changes: EventChanges,
) -> Result<()> {
    let events = store.list_events(date);
    let current = events.get(index).ok_or_else(|| super::no_such_event(date, index, events.len()))?;

    let event = changes.apply_to(current);
    let outcome = store.edit_event(date, index, event.clone())?;

    println!("{} {}", "  Updated:".yellow(), event.render());
    report_save(&outcome);

    Ok(())
}
