//! @acp:module "Frequency Command"
//! @acp:summary "List and change per-generator frequency biases"
//! @acp:domain cli
//! @acp:layer handler

use anyhow::Result;
use console::style;
use serde::Serialize;

use super::session::Session;
use crate::config::Config;
use crate::error::QuizError;
use crate::selection::GeneratorFrequency;

/// Frequency subcommands
#[derive(Debug, Clone)]
pub enum FreqSubcommand {
    List { json: bool },
    Set { id: String, frequency: GeneratorFrequency },
}

#[derive(Debug, Serialize)]
struct GeneratorRow {
    id: String,
    source: Option<String>,
    weight: f64,
    frequency: GeneratorFrequency,
    active: bool,
}

/// Execute the freq command
pub fn execute_freq(subcommand: FreqSubcommand, config: Config) -> Result<()> {
    let mut session = Session::open(config, None)?;

    match subcommand {
        FreqSubcommand::List { json } => {
            let rows: Vec<GeneratorRow> = session
                .engine
                .catalog()
                .iter()
                .map(|entry| GeneratorRow {
                    id: entry.id().to_string(),
                    source: entry.generator.source().map(str::to_string),
                    weight: entry.generator.weight(),
                    frequency: session.engine.generator_frequency(entry.id()),
                    active: entry.is_active(),
                })
                .collect();

            if json {
                println!("{}", serde_json::to_string_pretty(&rows)?);
                return Ok(());
            }

            println!("Generators ({}):\n", rows.len());
            for row in &rows {
                let marker = if row.active {
                    style("●").green()
                } else {
                    style("○").dim()
                };
                println!(
                    "  {} {:<28} {:<9} {}",
                    marker,
                    row.id,
                    row.frequency,
                    style(format!(
                        "weight={} source={}",
                        row.weight,
                        row.source.as_deref().unwrap_or("-")
                    ))
                    .dim()
                );
            }
            Ok(())
        }

        FreqSubcommand::Set { id, frequency } => {
            if !session.engine.catalog().contains(&id) {
                return Err(QuizError::UnknownGenerator(id).into());
            }
            session.engine.set_generator_frequency(id.clone(), frequency);
            session.preferences.set_frequency(id.clone(), frequency);
            session.save_preferences()?;

            println!(
                "{} {} frequency set to {}",
                style("✓").green(),
                style(&id).bold(),
                frequency
            );
            Ok(())
        }
    }
}
