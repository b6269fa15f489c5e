//! @acp:module "Preferences"
//! @acp:summary "Persisted tag filters and generator frequency overrides"
//! @acp:domain cli
//! @acp:layer io

use std::collections::BTreeMap;
use std::path::Path;

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::selection::{GeneratorFrequency, SelectionEngine, TagUsage};

/// @acp:summary "User choices that survive between sessions"
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    /// Non-neutral tag usages
    #[serde(default)]
    pub tags: BTreeMap<String, TagUsage>,

    /// Non-default generator frequencies
    #[serde(default)]
    pub frequencies: BTreeMap<String, GeneratorFrequency>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Preferences {
    pub fn load<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Missing file means fresh preferences; a corrupt one is reported and ignored
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            return Self::default();
        }
        match Self::load(path) {
            Ok(prefs) => prefs,
            Err(e) => {
                tracing::warn!("Ignoring unreadable preferences {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Write as JSON, creating parent directories and stamping `updated_at`
    pub fn save<P: AsRef<Path>>(&mut self, path: P) -> crate::Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        self.updated_at = Some(Utc::now());
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn set_tag(&mut self, tag: impl Into<String>, usage: TagUsage) {
        let tag = tag.into();
        if usage == TagUsage::Some {
            self.tags.remove(&tag);
        } else {
            self.tags.insert(tag, usage);
        }
    }

    pub fn set_frequency(&mut self, id: impl Into<String>, frequency: GeneratorFrequency) {
        let id = id.into();
        if frequency == GeneratorFrequency::Default {
            self.frequencies.remove(&id);
        } else {
            self.frequencies.insert(id, frequency);
        }
    }

    /// Push stored choices into an engine (before or after content loads)
    pub fn apply_to<R: Rng>(&self, engine: &mut SelectionEngine<R>) {
        for (tag, usage) in &self.tags {
            engine.set_tag_usage(tag.clone(), *usage);
        }
        for (id, frequency) in &self.frequencies {
            engine.set_generator_frequency(id.clone(), *frequency);
        }
    }

    /// Snapshot an engine's non-default choices
    pub fn capture<R: Rng>(engine: &SelectionEngine<R>) -> Self {
        let mut prefs = Self::default();
        for (tag, usage) in engine.tags().iter() {
            prefs.set_tag(tag, usage);
        }
        for (id, frequency) in engine.frequencies().overrides() {
            prefs.set_frequency(id, frequency);
        }
        prefs
    }
}
