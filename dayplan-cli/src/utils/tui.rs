use dayplan_core::SaveOutcome;
use owo_colors::OwoColorize;

/// Tell the user when a change was applied but not written to disk.
pub fn report_save(outcome: &SaveOutcome) {
    if let Some(reason) = outcome.warning() {
        eprintln!("{} could not save events: {}", "warning:".yellow(), reason);
    } else if *outcome == SaveOutcome::SkippedEmpty {
        eprintln!(
            "{}",
            "No events left; the saved snapshot was left as it was.".dimmed()
        );
    }
}

pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}
