//! @acp:module "Commands"
//! @acp:summary "CLI command implementations"
//! @acp:domain cli
//! @acp:layer handler
//!
//! Provides implementations for all CLI commands.
//! Each command is in its own submodule for maintainability.

pub mod cycle;
pub mod freq;
pub mod play;
pub mod session;
pub mod sources;
pub mod stats;
pub mod tags;

pub use cycle::{execute_cycle, CycleOptions};
pub use freq::{execute_freq, FreqSubcommand};
pub use play::{execute_play, PlayOptions};
pub use session::Session;
pub use sources::{execute_sources, SourcesOptions};
pub use stats::{execute_stats, StatsOptions, StatsReport};
pub use tags::{execute_tags, TagsSubcommand};
