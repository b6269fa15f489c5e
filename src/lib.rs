#![forbid(unsafe_code)]

//! @acp:module "Quizdeck Library"
//! @acp:summary "Tag-filtered, frequency-weighted shuffle selection of question generators"
//! @acp:domain selection
//! @acp:layer api
//! @acp:stability stable
//!
//! # Quizdeck
//!
//! Serves trivia question generators in a pseudo-random but anti-repetitive
//! order.
//!
//! ## Features
//!
//! - **Hierarchical Tag Filters**: `none` / `some` / `all` per tag, with
//!   `parent::child` tags controlled from either level
//! - **Weighted Cycles**: each generator gets an independent chance to enter
//!   the next cycle, scaled by its weight and frequency bias
//! - **Anti-Repetition**: a generator appears at most once per cycle
//! - **Template Content**: question databases in JSON or YAML, rendered
//!   with handlebars
//!
//! ## Example
//!
//! ```rust,no_run
//! use quizdeck::content::{discover_sources, load_sources};
//! use quizdeck::{Config, LoadMode, SelectionEngine, TagUsage};
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = Config::default();
//!     let mut sources = discover_sources(&config.sources_dir, &config.include, &[])?;
//!
//!     let mut engine = SelectionEngine::new(config.selection.clone());
//!     engine.set_tag_usage("sports", TagUsage::None);
//!     engine.load_catalog(load_sources(&mut sources), LoadMode::Replace)?;
//!
//!     let question = engine.next_question()?;
//!     println!("{}", question.prompt);
//!     Ok(())
//! }
//! ```

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod preferences;
pub mod selection;

// Re-exports
pub use config::Config;
pub use content::{ContentSource, TemplateGenerator};
pub use error::{QuizError, Result};
pub use preferences::Preferences;
pub use selection::{
    GeneratorFrequency, LoadMode, Question, QuestionGenerator, SelectionEngine, ShuffleOptions,
    TagUsage,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
