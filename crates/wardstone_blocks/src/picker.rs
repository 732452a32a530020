//! # Weighted Random Picker
//!
//! Inverse-CDF sampling over a discrete distribution: a uniform draw in
//! `[0, 1)` is scaled by the cached weight sum, then entry weights are
//! subtracted in order until the running value goes negative. The `< 0`
//! test fixes the tie-breaking at subtraction boundaries.
//!
//! The picker keeps no state between draws; `reset` exists to satisfy the
//! shared resettable-picker capability other picker variants rely on.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of block values for one weighted entry.
pub trait Producer {
    /// Value type produced.
    type Item: Clone;

    /// Produces the next value.
    fn produce(&mut self) -> Self::Item;

    /// Every value this producer can yield, for enumeration/validation.
    fn all(&self) -> Vec<Self::Item>;
}

/// Producer that always yields the same value.
#[derive(Clone, Debug)]
pub struct ConstantProducer<T: Clone> {
    value: T,
}

impl<T: Clone> ConstantProducer<T> {
    /// Creates a producer yielding `value` forever.
    #[must_use]
    pub fn new(value: T) -> Self {
        Self { value }
    }
}

impl<T: Clone> Producer for ConstantProducer<T> {
    type Item = T;

    fn produce(&mut self) -> T {
        self.value.clone()
    }

    fn all(&self) -> Vec<T> {
        vec![self.value.clone()]
    }
}

/// One weighted slot in the distribution.
#[derive(Clone, Debug)]
pub struct WeightedEntry<P> {
    /// Relative selection weight; must be strictly positive and finite.
    pub weight: f64,
    /// Producer drawn when this entry is selected.
    pub producer: P,
}

impl<P> WeightedEntry<P> {
    /// Pairs a weight with a producer.
    #[must_use]
    pub fn new(weight: f64, producer: P) -> Self {
        Self { weight, producer }
    }
}

/// Picks producers with probability proportional to their weights.
pub struct RandomWeightedPicker<P> {
    sum: f64,
    entries: Vec<WeightedEntry<P>>,
    rng: StdRng,
}

impl<P: Producer> RandomWeightedPicker<P> {
    /// Creates a picker seeded from the system clock.
    ///
    /// # Panics
    ///
    /// If `entries` is empty or any weight is non-positive or non-finite.
    /// These are programming errors, not recoverable input.
    #[must_use]
    pub fn new(entries: Vec<WeightedEntry<P>>) -> Self {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);
        Self::with_rng(entries, StdRng::seed_from_u64(nanos))
    }

    /// Creates a picker with an explicit RNG, for deterministic draws.
    ///
    /// # Panics
    ///
    /// Same preconditions as [`RandomWeightedPicker::new`].
    #[must_use]
    pub fn with_rng(entries: Vec<WeightedEntry<P>>, rng: StdRng) -> Self {
        assert!(!entries.is_empty(), "weighted picker requires at least one entry");
        let mut sum = 0.0;
        for entry in &entries {
            assert!(
                entry.weight.is_finite() && entry.weight > 0.0,
                "weighted picker weights must be strictly positive, got {}",
                entry.weight
            );
            sum += entry.weight;
        }
        Self { sum, entries, rng }
    }

    /// Draws one value, each entry selected with probability
    /// `weight / sum(weights)`.
    ///
    /// # Panics
    ///
    /// If the walk runs past the last entry, which means the cached sum no
    /// longer accounts for the weights. That invariant breaking is a logic
    /// error; it never silently returns a default.
    pub fn feed(&mut self) -> P::Item {
        let mut remaining = self.rng.gen::<f64>() * self.sum;
        for entry in &mut self.entries {
            remaining -= entry.weight;
            if remaining < 0.0 {
                return entry.producer.produce();
            }
        }
        unreachable!("weighted picker sum accounting violated");
    }

    /// No-op: this variant is stateless between draws.
    pub fn reset(&mut self) {}

    /// Flattens every producible value across all entries.
    #[must_use]
    pub fn all_types(&self) -> Vec<P::Item> {
        self.entries
            .iter()
            .flat_map(|entry| entry.producer.all())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::BlockType;

    fn entry(weight: f64, id: u16) -> WeightedEntry<ConstantProducer<BlockType>> {
        WeightedEntry::new(weight, ConstantProducer::new(BlockType::new(id, 0)))
    }

    #[test]
    #[should_panic(expected = "at least one entry")]
    fn test_empty_entries_rejected() {
        let _ = RandomWeightedPicker::<ConstantProducer<BlockType>>::new(vec![]);
    }

    #[test]
    #[should_panic(expected = "strictly positive")]
    fn test_zero_weight_rejected() {
        let _ = RandomWeightedPicker::new(vec![entry(1.0, 1), entry(0.0, 2)]);
    }

    #[test]
    #[should_panic(expected = "strictly positive")]
    fn test_negative_weight_rejected() {
        let _ = RandomWeightedPicker::new(vec![entry(-2.0, 1)]);
    }

    #[test]
    #[should_panic(expected = "strictly positive")]
    fn test_nan_weight_rejected() {
        let _ = RandomWeightedPicker::new(vec![entry(f64::NAN, 1)]);
    }

    #[test]
    fn test_single_entry_always_selected() {
        let mut picker = RandomWeightedPicker::with_rng(
            vec![entry(0.25, 7)],
            StdRng::seed_from_u64(11),
        );
        for _ in 0..100 {
            assert_eq!(picker.feed(), BlockType::new(7, 0));
        }
    }

    #[test]
    fn test_distribution_matches_weights() {
        // Weights [1, 3]: the second entry should win ~75% of draws.
        let mut picker = RandomWeightedPicker::with_rng(
            vec![entry(1.0, 1), entry(3.0, 2)],
            StdRng::seed_from_u64(42),
        );

        let draws = 100_000;
        let mut second = 0u32;
        for _ in 0..draws {
            if picker.feed().id == 2 {
                second += 1;
            }
        }
        let ratio = f64::from(second) / f64::from(draws);
        assert!(
            (ratio - 0.75).abs() < 0.01,
            "expected ratio near 0.75, got {ratio}"
        );
    }

    #[test]
    fn test_deterministic_with_same_seed() {
        let entries = || vec![entry(1.0, 1), entry(2.0, 2), entry(4.0, 3)];
        let mut a = RandomWeightedPicker::with_rng(entries(), StdRng::seed_from_u64(7));
        let mut b = RandomWeightedPicker::with_rng(entries(), StdRng::seed_from_u64(7));
        for _ in 0..256 {
            assert_eq!(a.feed(), b.feed());
        }
    }

    #[test]
    fn test_all_types_flattens_entries() {
        let picker = RandomWeightedPicker::with_rng(
            vec![entry(1.0, 1), entry(5.0, 2)],
            StdRng::seed_from_u64(0),
        );
        assert_eq!(
            picker.all_types(),
            vec![BlockType::new(1, 0), BlockType::new(2, 0)]
        );
    }

    #[test]
    fn test_reset_is_noop() {
        let mut picker = RandomWeightedPicker::with_rng(
            vec![entry(1.0, 9)],
            StdRng::seed_from_u64(3),
        );
        picker.reset();
        assert_eq!(picker.feed(), BlockType::new(9, 0));
    }
}
