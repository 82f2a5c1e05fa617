//! Colored terminal output for events, categories and search hits.

use chrono::NaiveDate;
use dayplan_core::{Category, DatedEvent, Event};
use owo_colors::OwoColorize;

/// One-line colored form of a core value.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Category {
    fn render(&self) -> String {
        let tag = format!("[{}]", self);
        match self {
            Category::Work => tag.blue().to_string(),
            Category::Personal => tag.green().to_string(),
            Category::Others => tag.yellow().to_string(),
        }
    }
}

impl Render for Event {
    fn render(&self) -> String {
        let time = format!("{}-{}", self.start_time, self.end_time);
        let mut line = format!("{} {} {}", time.dimmed(), self.name, self.category.render());

        if let Some(description) = &self.description {
            line.push_str(&format!("\n      {}", description.dimmed()));
        }

        line
    }
}

impl Render for DatedEvent {
    fn render(&self) -> String {
        format!("{} {}", format_date_label(self.date).bold(), self.event.render())
    }
}

/// Events of one day, numbered from 1.
pub fn render_day(events: &[Event]) -> Vec<String> {
    events
        .iter()
        .enumerate()
        .map(|(i, event)| format!("  {}. {}", i + 1, event.render()))
        .collect()
}

/// Human-readable day label (e.g. "Sun Mar 10 2024")
pub fn format_date_label(date: NaiveDate) -> String {
    date.format("%a %b %-d %Y").to_string()
}
