//! @acp:module "Selection Engine"
//! @acp:summary "Owns catalog, registries and cursor; serves generators one at a time"
//! @acp:domain selection
//! @acp:layer service

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::catalog::{Catalog, LoadMode};
use super::cursor::{SessionCursor, WorkingCycle};
use super::frequency::FrequencyRegistry;
use super::shuffle::{build_cycle, ShuffleOptions};
use super::tags::TagRegistry;
use super::types::{GeneratorFrequency, Question, QuestionGenerator, TagUsage};
use crate::error::{QuizError, Result};

/// @acp:summary "Single-session selection state"
///
/// Every state transition takes `&mut self`, so activation recompute, cycle
/// rebuild and cursor advance always run to completion without interleaving.
/// Hosts sharing an engine across threads wrap it in one mutex.
pub struct SelectionEngine<R = StdRng> {
    catalog: Catalog,
    tags: TagRegistry,
    frequencies: FrequencyRegistry,
    options: ShuffleOptions,
    cursor: SessionCursor,
    rng: R,
}

impl SelectionEngine<StdRng> {
    /// Engine seeded from the operating system
    pub fn new(options: ShuffleOptions) -> Self {
        Self::with_rng(options, StdRng::from_os_rng())
    }

    /// Reproducible engine for previews and tests
    pub fn with_seed(options: ShuffleOptions, seed: u64) -> Self {
        Self::with_rng(options, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> SelectionEngine<R> {
    pub fn with_rng(options: ShuffleOptions, rng: R) -> Self {
        Self {
            catalog: Catalog::new(),
            tags: TagRegistry::new(),
            frequencies: FrequencyRegistry::new(),
            options,
            cursor: SessionCursor::new(),
            rng,
        }
    }

    /// Replace or extend the known generators, register their tags, then
    /// rebuild eagerly.
    ///
    /// Generators whose id is already in the catalog are skipped.
    pub fn load_catalog<I>(&mut self, generators: I, mode: LoadMode) -> Result<()>
    where
        I: IntoIterator<Item = Box<dyn QuestionGenerator>>,
    {
        if mode == LoadMode::Replace {
            // Cycle indices point into the old catalog
            self.catalog.clear();
            self.cursor.reset();
        }

        let mut added = 0usize;
        for generator in generators {
            if self.catalog.contains(generator.id()) {
                tracing::warn!("Skipping duplicate generator id: {}", generator.id());
                continue;
            }
            self.catalog.push(generator);
            added += 1;
        }

        self.tags.register_catalog_tags(self.catalog.all_tags());

        tracing::info!(
            added,
            total = self.catalog.len(),
            tags = self.tags.len(),
            "Loaded question generators"
        );

        self.generators_changed()
    }

    /// Recompute activation and rebuild the working cycle immediately.
    ///
    /// On failure the previous cycle and cursor position are kept.
    pub fn generators_changed(&mut self) -> Result<()> {
        self.catalog.refresh_activation(&self.tags);
        self.rebuild()
    }

    fn rebuild(&mut self) -> Result<()> {
        let cycle = build_cycle(
            &mut self.catalog,
            &self.tags,
            &self.frequencies,
            &self.options,
            &mut self.rng,
        )?;
        self.cursor.install(cycle);
        Ok(())
    }

    fn advance(&mut self) -> Result<usize> {
        if self.cursor.needs_rebuild() {
            self.rebuild()?;
        }
        self.cursor.advance().ok_or(QuizError::EmptyCycle)
    }

    /// Serve the next generator, rebuilding when the cycle is absent or spent
    pub fn next(&mut self) -> Result<&dyn QuestionGenerator> {
        let index = self.advance()?;
        self.catalog
            .get(index)
            .map(|entry| entry.generator.as_ref())
            .ok_or(QuizError::EmptyCycle)
    }

    /// Serve the next generator and have it produce a question
    pub fn next_question(&mut self) -> Result<Question> {
        let index = self.advance()?;
        let entry = self.catalog.get(index).ok_or(QuizError::EmptyCycle)?;
        entry.generator.generate(&mut self.rng)
    }

    /// Generator served most recently
    pub fn current(&self) -> Option<&dyn QuestionGenerator> {
        let index = self.cursor.current()?;
        self.catalog.get(index).map(|entry| entry.generator.as_ref())
    }

    /// Count of active generators after the last activation pass
    pub fn active_generator_count(&self) -> usize {
        self.catalog.active_count()
    }

    /// Change a tag filter. Activation flags are refreshed immediately; call
    /// `generators_changed` to rebuild the cycle as well.
    pub fn set_tag_usage(&mut self, tag: impl Into<String>, usage: TagUsage) {
        self.tags.set(tag, usage);
        self.catalog.refresh_activation(&self.tags);
    }

    pub fn tag_usage(&self, tag: &str) -> TagUsage {
        self.tags.usage(tag)
    }

    /// Takes effect from the next cycle build
    pub fn set_generator_frequency(&mut self, id: impl Into<String>, frequency: GeneratorFrequency) {
        self.frequencies.set(id, frequency);
    }

    pub fn generator_frequency(&self, id: &str) -> GeneratorFrequency {
        self.frequencies.get(id)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn tags(&self) -> &TagRegistry {
        &self.tags
    }

    pub fn frequencies(&self) -> &FrequencyRegistry {
        &self.frequencies
    }

    pub fn options(&self) -> &ShuffleOptions {
        &self.options
    }

    pub fn cycle(&self) -> Option<&WorkingCycle> {
        self.cursor.cycle()
    }

    /// Generators left in the current cycle before the next rebuild
    pub fn remaining_in_cycle(&self) -> usize {
        self.cursor.remaining()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::RngCore;

    struct Stub {
        id: String,
        tags: Vec<String>,
    }

    impl QuestionGenerator for Stub {
        fn id(&self) -> &str {
            &self.id
        }
        fn tags(&self) -> &[String] {
            &self.tags
        }
        fn weight(&self) -> f64 {
            1.0
        }
        fn generate(&self, _rng: &mut dyn RngCore) -> Result<Question> {
            Ok(Question::new(
                &self.id,
                format!("prompt from {}", self.id),
                "42".to_string(),
            ))
        }
    }

    fn stub(id: &str, tags: &[&str]) -> Box<dyn QuestionGenerator> {
        Box::new(Stub {
            id: id.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        })
    }

    fn engine_with(generators: Vec<Box<dyn QuestionGenerator>>) -> SelectionEngine {
        let mut engine = SelectionEngine::with_seed(ShuffleOptions::default(), 17);
        engine.load_catalog(generators, LoadMode::Replace).unwrap();
        engine
    }

    #[test]
    fn test_load_builds_cycle_eagerly() {
        let engine = engine_with(vec![stub("a", &[]), stub("b", &[])]);
        assert_eq!(engine.active_generator_count(), 2);
        assert_eq!(engine.cycle().map(|c| c.len()), Some(2));
        assert!(engine.current().is_none());
    }

    #[test]
    fn test_first_next_serves_first_element_of_eager_cycle() {
        let mut engine = engine_with(vec![stub("a", &[]), stub("b", &[]), stub("c", &[])]);
        let first = engine.cycle().unwrap().indices()[0];
        let expected = engine.catalog().get(first).unwrap().id().to_string();
        assert_eq!(engine.next().unwrap().id(), expected);
        assert_eq!(engine.current().unwrap().id(), expected);
    }

    #[test]
    fn test_next_question_uses_generator() {
        let mut engine = engine_with(vec![stub("only", &[])]);
        let question = engine.next_question().unwrap();
        assert_eq!(question.generator_id, "only");
        assert_eq!(question.prompt, "prompt from only");
    }

    #[test]
    fn test_load_registers_tags_and_parents() {
        let engine = engine_with(vec![stub("a", &["history::war"])]);
        assert_eq!(engine.tags().get("history"), Some(TagUsage::Some));
        assert_eq!(engine.tags().get("history::war"), Some(TagUsage::Some));
    }

    #[test]
    fn test_empty_cycle_error_when_all_filtered() {
        let mut engine = engine_with(vec![stub("a", &["history"])]);
        engine.set_tag_usage("history", TagUsage::None);
        assert_eq!(engine.active_generator_count(), 0);
        engine.generators_changed().unwrap();
        assert!(matches!(engine.next(), Err(QuizError::EmptyCycle)));
    }

    #[test]
    fn test_extend_keeps_existing_and_skips_duplicates() {
        let mut engine = engine_with(vec![stub("a", &[])]);
        engine
            .load_catalog(vec![stub("a", &[]), stub("b", &[])], LoadMode::Extend)
            .unwrap();
        assert_eq!(engine.catalog().len(), 2);
    }

    #[test]
    fn test_replace_discards_old_generators() {
        let mut engine = engine_with(vec![stub("a", &[]), stub("b", &[])]);
        engine
            .load_catalog(vec![stub("c", &[])], LoadMode::Replace)
            .unwrap();
        assert_eq!(engine.catalog().len(), 1);
        assert_eq!(engine.next().unwrap().id(), "c");
    }

    #[test]
    fn test_failed_rebuild_keeps_previous_cycle() {
        let mut engine = engine_with(vec![stub("a", &[]), stub("b", &[])]);
        let before = engine.cycle().cloned();
        engine.next().unwrap();

        // A zero-pass budget always stalls
        engine.options.max_resample_passes = 0;
        assert!(matches!(
            engine.generators_changed(),
            Err(QuizError::SelectionStalled { .. })
        ));
        assert_eq!(engine.cycle().cloned(), before);
        assert_eq!(engine.remaining_in_cycle(), 1);
    }

    #[test]
    fn test_frequency_round_trip_through_engine() {
        let mut engine = engine_with(vec![stub("a", &[])]);
        engine.set_generator_frequency("a", GeneratorFrequency::Frequent);
        assert_eq!(engine.generator_frequency("a"), GeneratorFrequency::Frequent);
        engine.set_generator_frequency("a", GeneratorFrequency::Default);
        assert!(engine.frequencies().is_empty());
    }
}
