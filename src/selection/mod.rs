//! @acp:module "Selection"
//! @acp:summary "Generator activation and weighted-shuffle selection engine"
//! @acp:domain selection
//! @acp:layer feature

pub mod activation;
pub mod catalog;
pub mod cursor;
pub mod engine;
pub mod frequency;
pub mod shuffle;
pub mod tags;
pub mod types;

pub use activation::is_active;
pub use catalog::{Catalog, CatalogEntry, LoadMode};
pub use cursor::{SessionCursor, WorkingCycle};
pub use engine::SelectionEngine;
pub use frequency::FrequencyRegistry;
pub use shuffle::{build_cycle, ShuffleOptions};
pub use tags::{child_of, has_subtag, parent_of, TagRegistry, SUBTAG_DELIMITER};
pub use types::*;
