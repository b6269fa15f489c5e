//! @acp:module "Command Session"
//! @acp:summary "Shared setup: discover databases, apply preferences, load the engine"
//! @acp:domain cli
//! @acp:layer handler

use std::path::PathBuf;

use anyhow::{Context, Result};
use console::style;

use crate::config::Config;
use crate::content::{discover_sources, load_sources, ContentSource};
use crate::error::QuizError;
use crate::preferences::Preferences;
use crate::selection::{LoadMode, SelectionEngine};

/// Everything a command needs after startup
pub struct Session {
    pub config: Config,
    pub sources: Vec<ContentSource>,
    pub engine: SelectionEngine,
    pub preferences: Preferences,
    pub preferences_path: PathBuf,
}

impl Session {
    /// Discover and load question databases into a fresh engine.
    ///
    /// Preferences are applied before loading so configured tags keep their
    /// usage when the catalog registers its own. A stalled first build is
    /// logged, not returned, so configuration commands still work.
    pub fn open(config: Config, seed: Option<u64>) -> Result<Self> {
        let mut sources = discover_sources(
            &config.sources_dir,
            &config.include,
            &config.disabled_sources,
        )
        .with_context(|| {
            format!(
                "Failed to discover question databases in {}",
                config.sources_dir.display()
            )
        })?;

        let preferences_path = config.preferences_path();
        let preferences = Preferences::load_or_default(&preferences_path);

        let mut engine = match seed {
            Some(seed) => SelectionEngine::with_seed(config.selection.clone(), seed),
            None => SelectionEngine::new(config.selection.clone()),
        };
        preferences.apply_to(&mut engine);

        let generators = load_sources(&mut sources);
        match engine.load_catalog(generators, LoadMode::Replace) {
            Ok(()) => {}
            // Catalog and registries are loaded; only the cycle is missing.
            // Serving commands hit the error again on their next rebuild.
            Err(e @ QuizError::SelectionStalled { .. }) => {
                tracing::warn!("First question cycle not built: {}", e);
            }
            Err(e) => {
                return Err(anyhow::Error::new(e).context("Failed to load question generators"))
            }
        }

        Ok(Self {
            config,
            sources,
            engine,
            preferences,
            preferences_path,
        })
    }

    pub fn save_preferences(&mut self) -> Result<()> {
        self.preferences
            .save(&self.preferences_path)
            .with_context(|| {
                format!(
                    "Failed to save preferences to {}",
                    self.preferences_path.display()
                )
            })
    }

    /// Print the standard hint when every generator is filtered out
    pub fn report_no_active(&self) {
        eprintln!(
            "{} No active question generators ({} loaded)",
            style("✗").red(),
            self.engine.catalog().len()
        );
        if self.engine.catalog().is_empty() {
            eprintln!(
                "  Add question databases to {}",
                self.config.sources_dir.display()
            );
        } else {
            eprintln!("  Every generator is excluded by tag filters");
            eprintln!("  Run 'quizdeck tags list' to review them");
        }
    }
}
