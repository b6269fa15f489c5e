//! @acp:module "Content Types"
//! @acp:summary "Serialized shape of question database files"
//! @acp:domain content
//! @acp:layer types

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One question database file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionDatabase {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub generators: Vec<GeneratorDef>,
}

/// Authored definition of a template-driven generator
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorDef {
    pub id: String,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default = "default_weight")]
    pub weight: f64,

    /// Handlebars template for the question text
    pub prompt: String,

    /// Handlebars template for the expected answer
    pub answer: String,

    /// Handlebars templates for multiple-choice options
    #[serde(default)]
    pub choices: Vec<String>,

    /// Rows of data; one is drawn per generated question
    #[serde(default)]
    pub facts: Vec<Map<String, Value>>,
}

fn default_weight() -> f64 {
    1.0
}
