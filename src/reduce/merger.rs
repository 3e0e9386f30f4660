//! Post-hoc reduction of non-discriminative feature indices.
//!
//! After a session's corpus is collected, indices whose value (almost)
//! never varied carry no signal for a trainer. The merger computes the
//! set of such indices; downstream consumers drop them from vectors
//! before training. It is a pure function of the corpus — nothing in
//! the encoder is mutated.

use std::collections::BTreeSet;

use crate::encode::StateVector;

/// Computes the ignore set for a corpus of state vectors.
///
/// For each index, the agreement fraction is the share of vectors whose
/// value at that index matches the majority value there. Vectors too
/// short to cover an index are absent at that position and count toward
/// neither side. Indices with agreement ≥ threshold are ignored;
/// `threshold = 1.0` drops only indices that never varied at all.
///
/// ## Example
///
/// ```
/// use ccg_encode::encode::StateVector;
/// use ccg_encode::reduce::FeatureMerger;
///
/// let corpus = vec![
///     StateVector::new(vec![true, true]),
///     StateVector::new(vec![true, false]),
/// ];
///
/// let ignore = FeatureMerger::new(1.0).compute_ignore_list(&corpus);
/// assert!(ignore.contains(&0));  // constant across the corpus
/// assert!(!ignore.contains(&1)); // varied
/// ```
#[derive(Clone, Copy, Debug)]
pub struct FeatureMerger {
    threshold: f64,
}

impl FeatureMerger {
    /// Create a merger with the given agreement threshold in [0, 1].
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
        }
    }

    /// The configured agreement threshold.
    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Compute the set of indices safe to drop before training.
    ///
    /// Only indices observed in the corpus can appear in the result; an
    /// empty corpus yields an empty set.
    #[must_use]
    pub fn compute_ignore_list(&self, corpus: &[StateVector]) -> BTreeSet<usize> {
        let width = corpus.iter().map(StateVector::width).max().unwrap_or(0);
        let mut ignored = BTreeSet::new();

        for index in 0..width {
            let mut ones = 0usize;
            let mut covered = 0usize;
            for vector in corpus {
                // Short, older vectors are absent here, not false.
                if let Some(bit) = vector.get(index) {
                    covered += 1;
                    if bit {
                        ones += 1;
                    }
                }
            }
            if covered == 0 {
                continue;
            }
            let majority = ones.max(covered - ones);
            let agreement = majority as f64 / covered as f64;
            if agreement >= self.threshold {
                ignored.insert(index);
            }
        }

        log::debug!(
            "reduction mask covers {} of {} indices (threshold {})",
            ignored.len(),
            width,
            self.threshold
        );
        ignored
    }
}

impl Default for FeatureMerger {
    fn default() -> Self {
        Self::new(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_index_ignored() {
        let corpus = vec![
            StateVector::new(vec![true, true, false]),
            StateVector::new(vec![true, false, false]),
            StateVector::new(vec![true, true, false]),
        ];

        let ignore = FeatureMerger::new(1.0).compute_ignore_list(&corpus);

        assert!(ignore.contains(&0)); // always true
        assert!(!ignore.contains(&1)); // varies
        assert!(ignore.contains(&2)); // always false
    }

    #[test]
    fn test_single_flip_removes_index() {
        let mut corpus = vec![StateVector::new(vec![true]); 10];
        assert!(FeatureMerger::new(1.0)
            .compute_ignore_list(&corpus)
            .contains(&0));

        corpus[4] = StateVector::new(vec![false]);
        assert!(!FeatureMerger::new(1.0)
            .compute_ignore_list(&corpus)
            .contains(&0));
    }

    #[test]
    fn test_lower_threshold_tolerates_minority() {
        let mut corpus = vec![StateVector::new(vec![true]); 9];
        corpus.push(StateVector::new(vec![false]));

        // 90% agreement: dropped at 0.9, kept at 1.0.
        assert!(FeatureMerger::new(0.9)
            .compute_ignore_list(&corpus)
            .contains(&0));
        assert!(!FeatureMerger::new(1.0)
            .compute_ignore_list(&corpus)
            .contains(&0));
    }

    #[test]
    fn test_short_vectors_are_absent_not_false() {
        // Index 1 exists only in the later, wider vectors, where it is
        // always true. The short early vector must not count as false.
        let corpus = vec![
            StateVector::new(vec![true]),
            StateVector::new(vec![true, true]),
            StateVector::new(vec![false, true]),
        ];

        let ignore = FeatureMerger::new(1.0).compute_ignore_list(&corpus);
        assert!(ignore.contains(&1));
        assert!(!ignore.contains(&0));
    }

    #[test]
    fn test_empty_corpus() {
        let ignore = FeatureMerger::default().compute_ignore_list(&[]);
        assert!(ignore.is_empty());
    }

    #[test]
    fn test_only_observed_indices_proposed() {
        let corpus = vec![StateVector::new(vec![true, false])];
        let ignore = FeatureMerger::new(1.0).compute_ignore_list(&corpus);

        // Every proposed index lies within the corpus's widest vector.
        assert!(ignore.iter().all(|&i| i < 2));
    }

    #[test]
    fn test_threshold_clamped() {
        assert_eq!(FeatureMerger::new(7.5).threshold(), 1.0);
        assert_eq!(FeatureMerger::new(-1.0).threshold(), 0.0);
    }

    #[test]
    fn test_pure_function_of_corpus() {
        let corpus = vec![
            StateVector::new(vec![true, false]),
            StateVector::new(vec![true, true]),
        ];
        let before = corpus.clone();

        let a = FeatureMerger::new(1.0).compute_ignore_list(&corpus);
        let b = FeatureMerger::new(1.0).compute_ignore_list(&corpus);

        assert_eq!(a, b);
        assert_eq!(corpus, before);
    }
}
