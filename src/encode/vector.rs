//! Boolean state vectors emitted by the encoder.
//!
//! A vector has one bit per vocabulary index known at the moment it was
//! encoded. The vocabulary only grows, so vectors captured early in a
//! session are shorter than later ones; positions past a vector's width
//! are *absent*, not false. Nothing here pads automatically — consumers
//! align generations explicitly with [`StateVector::padded`].

use serde::{Deserialize, Serialize};

/// One encoded board snapshot: a boolean per known feature index.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StateVector {
    bits: Vec<bool>,
}

impl StateVector {
    /// Create a vector from raw bits.
    #[must_use]
    pub fn new(bits: Vec<bool>) -> Self {
        Self { bits }
    }

    /// Create an all-false vector of the given width.
    #[must_use]
    pub fn zeros(width: usize) -> Self {
        Self {
            bits: vec![false; width],
        }
    }

    /// Vocabulary width at the time this vector was encoded.
    #[must_use]
    pub fn width(&self) -> usize {
        self.bits.len()
    }

    /// Check whether the vector has no positions at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Value at an index, or `None` if the index is past this vector's
    /// width (the feature did not exist yet when it was encoded).
    #[must_use]
    pub fn get(&self, index: usize) -> Option<bool> {
        self.bits.get(index).copied()
    }

    /// Set the bit at an index. Out-of-width indices are ignored.
    pub fn set(&mut self, index: usize, value: bool) {
        if let Some(bit) = self.bits.get_mut(index) {
            *bit = value;
        }
    }

    /// Number of set bits.
    #[must_use]
    pub fn count_ones(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// Iterate over the indices of set bits, ascending.
    pub fn ones(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits
            .iter()
            .enumerate()
            .filter_map(|(i, &b)| b.then_some(i))
    }

    /// Iterate over all bits in index order.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().copied()
    }

    /// Explicitly align this vector to a wider generation.
    ///
    /// Returns a copy extended with `false` up to `width`. Widths at or
    /// below the current one return the vector unchanged; this helper
    /// never truncates.
    #[must_use]
    pub fn padded(&self, width: usize) -> StateVector {
        let mut bits = self.bits.clone();
        if bits.len() < width {
            bits.resize(width, false);
        }
        Self { bits }
    }
}

impl From<Vec<bool>> for StateVector {
    fn from(bits: Vec<bool>) -> Self {
        Self::new(bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_distinguishes_absent_from_false() {
        let v = StateVector::new(vec![true, false]);

        assert_eq!(v.get(0), Some(true));
        assert_eq!(v.get(1), Some(false));
        assert_eq!(v.get(2), None); // past this generation's width
    }

    #[test]
    fn test_ones() {
        let v = StateVector::new(vec![true, false, true, true, false]);
        let ones: Vec<_> = v.ones().collect();
        assert_eq!(ones, vec![0, 2, 3]);
        assert_eq!(v.count_ones(), 3);
    }

    #[test]
    fn test_padded_extends_with_false() {
        let v = StateVector::new(vec![true, false]);
        let wide = v.padded(5);

        assert_eq!(wide.width(), 5);
        assert_eq!(wide.get(0), Some(true));
        assert_eq!(wide.get(4), Some(false));
        // Original untouched.
        assert_eq!(v.width(), 2);
    }

    #[test]
    fn test_padded_never_truncates() {
        let v = StateVector::new(vec![true, true, true]);
        assert_eq!(v.padded(1), v);
        assert_eq!(v.padded(3), v);
    }

    #[test]
    fn test_set_ignores_out_of_width() {
        let mut v = StateVector::zeros(2);
        v.set(0, true);
        v.set(10, true);

        assert_eq!(v.get(0), Some(true));
        assert_eq!(v.width(), 2);
    }

    #[test]
    fn test_serde_round_trip() {
        let v = StateVector::new(vec![true, false, true]);
        let json = serde_json::to_string(&v).unwrap();
        let back: StateVector = serde_json::from_str(&json).unwrap();
        assert_eq!(v, back);
    }
}
