//! @acp:module "Stats Command"
//! @acp:summary "Activation and selection diagnostics"
//! @acp:domain cli
//! @acp:layer handler

use anyhow::Result;
use console::style;
use serde::Serialize;

use super::session::Session;
use crate::config::Config;
use crate::selection::shuffle::base_probability;
use crate::selection::TagUsage;

/// Options for the stats command
#[derive(Debug, Clone, Default)]
pub struct StatsOptions {
    /// Output as JSON
    pub json: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsReport {
    pub sources_used: usize,
    pub generators: usize,
    pub active_generators: usize,
    pub tags: usize,
    pub excluded_tags: Vec<String>,
    pub forced_tags: Vec<String>,
    pub frequency_overrides: usize,
    pub desired_cycle_size: f64,
    pub base_probability: Option<f64>,
    pub cycle_length: usize,
}

/// Execute the stats command
pub fn execute_stats(options: StatsOptions, config: Config) -> Result<()> {
    let session = Session::open(config, None)?;
    let engine = &session.engine;

    let active = engine.active_generator_count();
    let tags_with = |wanted: TagUsage| -> Vec<String> {
        engine
            .tags()
            .iter()
            .filter(|(_, usage)| *usage == wanted)
            .map(|(tag, _)| tag.to_string())
            .collect()
    };

    let report = StatsReport {
        sources_used: session.sources.iter().filter(|s| s.used).count(),
        generators: engine.catalog().len(),
        active_generators: active,
        tags: engine.tags().len(),
        excluded_tags: tags_with(TagUsage::None),
        forced_tags: tags_with(TagUsage::All),
        frequency_overrides: engine.frequencies().len(),
        desired_cycle_size: engine.options().desired_cycle_size,
        base_probability: (active > 0)
            .then(|| base_probability(engine.options().desired_cycle_size, active)),
        cycle_length: engine.cycle().map(|c| c.len()).unwrap_or(0),
    };

    if options.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", style("Quizdeck Stats").bold());
    println!("  Databases used:      {}", report.sources_used);
    println!("  Generators:          {}", report.generators);
    println!("  Active generators:   {}", report.active_generators);
    println!("  Tags:                {}", report.tags);
    if !report.excluded_tags.is_empty() {
        println!("  Excluded tags:       {}", report.excluded_tags.join(", "));
    }
    if !report.forced_tags.is_empty() {
        println!("  Forced tags:         {}", report.forced_tags.join(", "));
    }
    println!("  Frequency overrides: {}", report.frequency_overrides);
    println!("  Target cycle size:   {}", report.desired_cycle_size);
    match report.base_probability {
        Some(p) => println!("  Base probability:    {:.3}", p),
        None => println!("  Base probability:    {}", style("n/a").dim()),
    }
    println!("  Current cycle:       {}", report.cycle_length);

    Ok(())
}
