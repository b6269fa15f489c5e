//! @acp:module "Content"
//! @acp:summary "Question databases and the template generators built from them"
//! @acp:domain content
//! @acp:layer feature

pub mod source;
pub mod template;
pub mod types;

pub use source::{discover_sources, load_source, load_sources, parse_database, ContentSource};
pub use template::TemplateGenerator;
pub use types::{GeneratorDef, QuestionDatabase};
