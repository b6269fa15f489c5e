//! @acp:module "Selection Types"
//! @acp:summary "Tag usage, frequency bias, question and generator contracts"
//! @acp:domain selection
//! @acp:layer types

use std::fmt;
use std::str::FromStr;

use rand::RngCore;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{QuizError, Result};

/// Tri-state filter attached to a tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagUsage {
    /// Exclude generators carrying the tag
    None,
    /// Neutral: no filtering effect
    #[default]
    Some,
    /// Force-include generators carrying the tag
    All,
}

impl TagUsage {
    pub fn as_str(&self) -> &'static str {
        match self {
            TagUsage::None => "none",
            TagUsage::Some => "some",
            TagUsage::All => "all",
        }
    }

    /// Next state in the None -> Some -> All -> None toggle order
    pub fn cycled(self) -> Self {
        match self {
            TagUsage::None => TagUsage::Some,
            TagUsage::Some => TagUsage::All,
            TagUsage::All => TagUsage::None,
        }
    }
}

impl fmt::Display for TagUsage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for TagUsage {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "none" => Ok(TagUsage::None),
            "some" => Ok(TagUsage::Some),
            "all" => Ok(TagUsage::All),
            _ => Err(QuizError::InvalidTagUsage(s.to_string())),
        }
    }
}

/// Per-generator bias applied to the inclusion probability
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeneratorFrequency {
    Rare,
    #[default]
    Default,
    Frequent,
}

impl GeneratorFrequency {
    /// Probability multiplier: Rare quarters it, Frequent quadruples it
    pub fn multiplier(&self) -> f64 {
        match self {
            GeneratorFrequency::Rare => 0.25,
            GeneratorFrequency::Default => 1.0,
            GeneratorFrequency::Frequent => 4.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GeneratorFrequency::Rare => "rare",
            GeneratorFrequency::Default => "default",
            GeneratorFrequency::Frequent => "frequent",
        }
    }
}

impl fmt::Display for GeneratorFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for GeneratorFrequency {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "rare" => Ok(GeneratorFrequency::Rare),
            "default" => Ok(GeneratorFrequency::Default),
            "frequent" => Ok(GeneratorFrequency::Frequent),
            _ => Err(QuizError::InvalidFrequency(s.to_string())),
        }
    }
}

/// One question instance produced by a generator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: Uuid,
    pub generator_id: String,
    pub prompt: String,
    pub answer: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<String>,
}

impl Question {
    pub fn new(generator_id: impl Into<String>, prompt: String, answer: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            generator_id: generator_id.into(),
            prompt,
            answer,
            choices: Vec::new(),
        }
    }

    pub fn with_choices(mut self, choices: Vec<String>) -> Self {
        self.choices = choices;
        self
    }
}

/// Opaque content-producing unit served by the selection engine.
///
/// The engine reads the identifier, tags and weight; it never looks inside
/// `generate`. The active flag lives on the catalog entry, not here.
pub trait QuestionGenerator {
    /// Stable, unique identifier (also the frequency registry key)
    fn id(&self) -> &str;

    /// Tags controlling eligibility, possibly hierarchical (`parent::child`)
    fn tags(&self) -> &[String];

    /// Relative influence on the inclusion probability
    fn weight(&self) -> f64;

    /// Owning content source, for host bookkeeping only
    fn source(&self) -> Option<&str> {
        None
    }

    /// Produce one question instance
    fn generate(&self, rng: &mut dyn RngCore) -> Result<Question>;
}

impl fmt::Debug for dyn QuestionGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuestionGenerator")
            .field("id", &self.id())
            .field("tags", &self.tags())
            .field("weight", &self.weight())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_usage_parse_case_insensitive() {
        assert_eq!("ALL".parse::<TagUsage>().unwrap(), TagUsage::All);
        assert_eq!("None".parse::<TagUsage>().unwrap(), TagUsage::None);
        assert!("most".parse::<TagUsage>().is_err());
    }

    #[test]
    fn test_tag_usage_cycles_through_all_states() {
        let start = TagUsage::None;
        assert_eq!(start.cycled(), TagUsage::Some);
        assert_eq!(start.cycled().cycled(), TagUsage::All);
        assert_eq!(start.cycled().cycled().cycled(), TagUsage::None);
    }

    #[test]
    fn test_frequency_multipliers_are_ordered() {
        assert!(GeneratorFrequency::Rare < GeneratorFrequency::Default);
        assert!(GeneratorFrequency::Default < GeneratorFrequency::Frequent);
        assert_eq!(GeneratorFrequency::Rare.multiplier() * 4.0, 1.0);
        assert_eq!(GeneratorFrequency::Frequent.multiplier(), 4.0);
    }

    #[test]
    fn test_frequency_serde_lowercase() {
        let json = serde_json::to_string(&GeneratorFrequency::Frequent).unwrap();
        assert_eq!(json, "\"frequent\"");
        let parsed: GeneratorFrequency = serde_json::from_str("\"rare\"").unwrap();
        assert_eq!(parsed, GeneratorFrequency::Rare);
    }
}
