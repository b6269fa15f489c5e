//! @acp:module "Errors"
//! @acp:summary "Error types for selection, content loading and configuration"
//! @acp:domain cli
//! @acp:layer model

use thiserror::Error;

/// @acp:summary "Library error type"
#[derive(Error, Debug)]
pub enum QuizError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Template error: {0}")]
    Template(#[from] handlebars::TemplateError),

    #[error("Render error: {0}")]
    Render(#[from] handlebars::RenderError),

    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Invalid include pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    /// Zero generators are active, so the working cycle is empty.
    #[error("No active question generators: every generator is filtered out by tags")]
    EmptyCycle,

    /// The bounded resampling loop never produced a non-empty cycle.
    #[error("Selection stalled: {passes} resampling passes over {active} active generators produced nothing")]
    SelectionStalled { passes: u32, active: usize },

    #[error("Invalid tag usage '{0}' (expected none, some or all)")]
    InvalidTagUsage(String),

    #[error("Invalid generator frequency '{0}' (expected rare, default or frequent)")]
    InvalidFrequency(String),

    #[error("Unknown generator: {0}")]
    UnknownGenerator(String),

    #[error("Unsupported question database format: {0}")]
    UnsupportedSourceFormat(String),
}

pub type Result<T> = std::result::Result<T, QuizError>;
