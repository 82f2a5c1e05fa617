use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use dayplan_core::{EventStore, PersistenceGateway};
use owo_colors::OwoColorize;

use crate::utils::tui::pluralize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Json,
    Csv,
}

pub fn render<G: PersistenceGateway>(store: &EventStore<G>, format: ExportFormat) -> Result<String> {
    Ok(match format {
        ExportFormat::Json => store.to_json()?,
        ExportFormat::Csv => store.to_csv(),
    })
}

pub fn run<G: PersistenceGateway>(
    store: &EventStore<G>,
    format: ExportFormat,
    output: Option<&Path>,
) -> Result<()> {
    let content = render(store, format)?;

    let Some(path) = output else {
        println!("{}", content);
        return Ok(());
    };

    std::fs::write(path, format!("{}\n", content))
        .with_context(|| format!("Failed to write {}", path.display()))?;

    let count = store.len();
    println!(
        "{}",
        format!(
            "Exported {} {} to {}",
            count,
            pluralize("event", count),
            path.display()
        )
        .green()
    );

    Ok(())
}
