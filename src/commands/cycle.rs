//! @acp:module "Cycle Command"
//! @acp:summary "Preview a freshly built working cycle"
//! @acp:domain cli
//! @acp:layer handler

use anyhow::Result;
use console::style;
use serde::Serialize;

use super::session::Session;
use crate::config::Config;
use crate::selection::shuffle::{base_probability, inclusion_probability};

/// Options for the cycle command
#[derive(Debug, Clone, Default)]
pub struct CycleOptions {
    /// Seed for a reproducible preview
    pub seed: Option<u64>,
    /// Output as JSON
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct CycleEntry {
    position: usize,
    id: String,
    weight: f64,
    frequency: String,
    probability: f64,
}

/// Execute the cycle command
pub fn execute_cycle(options: CycleOptions, config: Config) -> Result<()> {
    let mut session = Session::open(config, options.seed)?;

    let active = session.engine.active_generator_count();
    if active == 0 {
        session.report_no_active();
        std::process::exit(1);
    }
    if session.engine.cycle().is_none() {
        session.engine.generators_changed()?;
    }
    let engine = &session.engine;

    let base = base_probability(engine.options().desired_cycle_size, active);
    let entries: Vec<CycleEntry> = engine
        .cycle()
        .map(|cycle| cycle.indices().to_vec())
        .unwrap_or_default()
        .into_iter()
        .enumerate()
        .filter_map(|(position, index)| {
            let entry = engine.catalog().get(index)?;
            let frequency = engine.generator_frequency(entry.id());
            Some(CycleEntry {
                position: position + 1,
                id: entry.id().to_string(),
                weight: entry.generator.weight(),
                frequency: frequency.to_string(),
                probability: inclusion_probability(
                    base,
                    entry.generator.weight(),
                    frequency.multiplier(),
                ),
            })
        })
        .collect();

    if options.json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    println!(
        "{} Cycle of {} from {} active generators (base probability {:.3})\n",
        style("✓").green(),
        entries.len(),
        active,
        base
    );
    for entry in &entries {
        let chance = if entry.probability >= 1.0 {
            style("always".to_string()).green()
        } else {
            style(format!("{:.1}%", entry.probability * 100.0)).yellow()
        };
        println!(
            "  {:>3}. {} {} {}",
            entry.position,
            style(&entry.id).bold(),
            style(format!("weight={} frequency={}", entry.weight, entry.frequency)).dim(),
            chance
        );
    }

    Ok(())
}
