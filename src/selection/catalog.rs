//! @acp:module "Generator Catalog"
//! @acp:summary "Ordered collection of known generators with derived activation flags"
//! @acp:domain selection
//! @acp:layer model

use super::activation::is_active;
use super::tags::TagRegistry;
use super::types::QuestionGenerator;

/// A generator plus its engine-owned activation flag
#[derive(Debug)]
pub struct CatalogEntry {
    pub generator: Box<dyn QuestionGenerator>,
    active: bool,
}

impl CatalogEntry {
    pub fn new(generator: Box<dyn QuestionGenerator>) -> Self {
        // Fresh entries are inactive until the first activation pass
        Self {
            generator,
            active: false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn id(&self) -> &str {
        self.generator.id()
    }
}

/// How `SelectionEngine::load_catalog` treats existing generators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadMode {
    /// Discard the previous catalog
    #[default]
    Replace,
    /// Append after the existing generators
    Extend,
}

#[derive(Debug, Default)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, generator: Box<dyn QuestionGenerator>) {
        self.entries.push(CatalogEntry::new(generator));
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn get(&self, index: usize) -> Option<&CatalogEntry> {
        self.entries.get(index)
    }

    pub fn find(&self, id: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.id() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }

    /// Every tag carried by any generator, duplicates included
    pub fn all_tags(&self) -> impl Iterator<Item = &String> {
        self.entries.iter().flat_map(|e| e.generator.tags().iter())
    }

    /// Recompute every activation flag; returns the active count
    pub fn refresh_activation(&mut self, tags: &TagRegistry) -> usize {
        let mut count = 0;
        for entry in &mut self.entries {
            entry.active = is_active(entry.generator.tags(), tags);
            if entry.active {
                count += 1;
            }
        }
        count
    }

    pub fn active_count(&self) -> usize {
        self.entries.iter().filter(|e| e.active).count()
    }

    /// Indices of active entries, in catalog order
    pub fn active_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.active)
            .map(|(i, _)| i)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
