//! @acp:module "Shuffle Builder"
//! @acp:summary "Weighted probabilistic inclusion with random-insertion shuffle"
//! @acp:domain selection
//! @acp:layer logic

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::catalog::Catalog;
use super::cursor::WorkingCycle;
use super::frequency::FrequencyRegistry;
use super::tags::TagRegistry;
use crate::error::{QuizError, Result};

/// Tuning for cycle construction
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShuffleOptions {
    /// Target number of generators per cycle
    #[serde(default = "default_desired_cycle_size")]
    pub desired_cycle_size: f64,

    /// Upper bound on resampling passes before giving up
    #[serde(default = "default_max_resample_passes")]
    pub max_resample_passes: u32,
}

impl Default for ShuffleOptions {
    fn default() -> Self {
        Self {
            desired_cycle_size: default_desired_cycle_size(),
            max_resample_passes: default_max_resample_passes(),
        }
    }
}

fn default_desired_cycle_size() -> f64 {
    10.0
}

fn default_max_resample_passes() -> u32 {
    1000
}

/// Base inclusion probability shared by every active generator.
///
/// Exceeds 1.0 whenever fewer generators are active than the target size.
pub fn base_probability(desired_cycle_size: f64, active_count: usize) -> f64 {
    desired_cycle_size / active_count as f64
}

/// Inclusion probability for one generator. Not clamped.
pub fn inclusion_probability(base: f64, weight: f64, frequency_multiplier: f64) -> f64 {
    base * weight * frequency_multiplier
}

/// Build a fresh working cycle:
/// 1. Recompute activation for every catalog entry
/// 2. Derive the base probability from the active count
/// 3. Run resampling passes until one yields a non-empty sequence
///
/// Zero active generators yields an empty cycle rather than an error.
/// The resampling loop is bounded by `max_resample_passes` and fails with
/// `SelectionStalled` instead of spinning forever on near-zero probabilities.
pub fn build_cycle<R: Rng + ?Sized>(
    catalog: &mut Catalog,
    tags: &TagRegistry,
    frequencies: &FrequencyRegistry,
    options: &ShuffleOptions,
    rng: &mut R,
) -> Result<WorkingCycle> {
    let active_count = catalog.refresh_activation(tags);
    if active_count == 0 {
        tracing::warn!("No active generators; working cycle is empty");
        return Ok(WorkingCycle::empty());
    }

    let base = base_probability(options.desired_cycle_size, active_count);

    // (catalog index, probability) for each active generator, in catalog order
    let candidates: Vec<(usize, f64)> = catalog
        .active_indices()
        .filter_map(|index| {
            catalog.get(index).map(|entry| {
                let probability = inclusion_probability(
                    base,
                    entry.generator.weight(),
                    frequencies.multiplier(entry.id()),
                );
                (index, probability)
            })
        })
        .collect();

    for pass in 1..=options.max_resample_passes {
        let order = resample_pass(&candidates, rng);
        if !order.is_empty() {
            tracing::debug!(
                active = active_count,
                base_probability = base,
                passes = pass,
                size = order.len(),
                "Built working cycle"
            );
            return Ok(WorkingCycle::new(order));
        }
    }

    tracing::warn!(
        active = active_count,
        passes = options.max_resample_passes,
        "Resampling never produced a non-empty cycle"
    );
    Err(QuizError::SelectionStalled {
        passes: options.max_resample_passes,
        active: active_count,
    })
}

/// One pass: independent draw per candidate, inserted at a uniformly random
/// position among the `len + 1` slots of the sequence built so far.
fn resample_pass<R: Rng + ?Sized>(candidates: &[(usize, f64)], rng: &mut R) -> Vec<usize> {
    let mut order = Vec::new();
    for &(index, probability) in candidates {
        if rng.random::<f64>() < probability {
            let slot = rng.random_range(0..=order.len());
            order.insert(slot, index);
        }
    }
    order
}
