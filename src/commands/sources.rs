//! @acp:module "Sources Command"
//! @acp:summary "List discovered question databases and their load status"
//! @acp:domain cli
//! @acp:layer handler

use anyhow::Result;
use console::style;

use super::session::Session;
use crate::config::Config;

/// Options for the sources command
#[derive(Debug, Clone, Default)]
pub struct SourcesOptions {
    /// Output as JSON
    pub json: bool,
}

/// Execute the sources command
pub fn execute_sources(options: SourcesOptions, config: Config) -> Result<()> {
    let session = Session::open(config, None)?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&session.sources)?);
        return Ok(());
    }

    if session.sources.is_empty() {
        println!(
            "No question databases found in {}",
            session.config.sources_dir.display()
        );
        return Ok(());
    }

    println!("Question databases ({}):\n", session.sources.len());
    for source in &session.sources {
        let status = if !source.available {
            style("broken").red()
        } else if source.used {
            style("used").green()
        } else {
            style("unused").dim()
        };
        let generators = session
            .engine
            .catalog()
            .iter()
            .filter(|e| e.generator.source() == Some(source.name.as_str()))
            .count();
        println!(
            "  {:<24} {:<8} {:>4} generators  {}",
            source.name,
            status,
            generators,
            style(format!("{} {}", source.short_fingerprint(), source.path.display())).dim()
        );
    }

    Ok(())
}
