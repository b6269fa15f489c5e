//! @acp:module "Frequency Registry"
//! @acp:summary "Sparse per-generator frequency overrides"
//! @acp:domain selection
//! @acp:layer model

use std::collections::HashMap;

use super::types::GeneratorFrequency;

/// Generator id -> non-default frequency. Absence means `Default`.
#[derive(Debug, Clone, Default)]
pub struct FrequencyRegistry {
    overrides: HashMap<String, GeneratorFrequency>,
}

impl FrequencyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> GeneratorFrequency {
        self.overrides.get(id).copied().unwrap_or_default()
    }

    /// Setting `Default` removes the override instead of storing it
    pub fn set(&mut self, id: impl Into<String>, frequency: GeneratorFrequency) {
        let id = id.into();
        if frequency == GeneratorFrequency::Default {
            self.overrides.remove(&id);
        } else {
            self.overrides.insert(id, frequency);
        }
    }

    pub fn multiplier(&self, id: &str) -> f64 {
        self.get(id).multiplier()
    }

    /// Stored overrides sorted by generator id
    pub fn overrides(&self) -> Vec<(&str, GeneratorFrequency)> {
        let mut entries: Vec<_> = self
            .overrides
            .iter()
            .map(|(id, freq)| (id.as_str(), *freq))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }

    pub fn len(&self) -> usize {
        self.overrides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_is_default() {
        let registry = FrequencyRegistry::new();
        assert_eq!(registry.get("capitals"), GeneratorFrequency::Default);
        assert_eq!(registry.multiplier("capitals"), 1.0);
    }

    #[test]
    fn test_setting_default_removes_override() {
        let mut registry = FrequencyRegistry::new();
        registry.set("capitals", GeneratorFrequency::Rare);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("capitals"), GeneratorFrequency::Rare);

        registry.set("capitals", GeneratorFrequency::Default);
        assert!(registry.is_empty());
        assert_eq!(registry.get("capitals"), GeneratorFrequency::Default);
    }

    #[test]
    fn test_overrides_sorted() {
        let mut registry = FrequencyRegistry::new();
        registry.set("zoo", GeneratorFrequency::Frequent);
        registry.set("art", GeneratorFrequency::Rare);
        assert_eq!(
            registry.overrides(),
            vec![
                ("art", GeneratorFrequency::Rare),
                ("zoo", GeneratorFrequency::Frequent)
            ]
        );
    }
}
