//! Card multisets as sorted run-length sequences.
//!
//! A board snapshot is a bag of `CardState` values: duplicates matter
//! (two Grizzly Bears are not one). Storing the bag as a sorted
//! `(value, count)` sequence keeps it canonical — equal bags compare
//! equal bit-for-bit, so a multiset doubles as a dedup key — and makes
//! subset and intersection merge-walks linear in the number of distinct
//! values.

use serde::{Deserialize, Serialize};

use super::card_state::CardState;

/// A bag of card states with multiplicity, in canonical sorted form.
///
/// ```
/// use ccg_encode::graph::{CardMultiset, CardState};
///
/// let board: CardMultiset = ["Bears", "Bears", "Angel"]
///     .into_iter()
///     .map(CardState::new)
///     .collect();
///
/// assert_eq!(board.len(), 3);
/// assert_eq!(board.count(&CardState::new("Bears")), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardMultiset {
    /// Sorted by card state; counts are always ≥ 1.
    entries: Vec<(CardState, u32)>,
}

impl CardMultiset {
    /// Create an empty multiset: the bottom element of the partial
    /// order, a sub-multiset of everything.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one copy of a card state.
    pub fn insert(&mut self, card: CardState) {
        self.insert_n(card, 1);
    }

    /// Add `n` copies of a card state.
    pub fn insert_n(&mut self, card: CardState, n: u32) {
        if n == 0 {
            return;
        }
        match self.entries.binary_search_by(|(c, _)| c.cmp(&card)) {
            Ok(pos) => self.entries[pos].1 += n,
            Err(pos) => self.entries.insert(pos, (card, n)),
        }
    }

    /// Total element count, with multiplicity.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.iter().map(|&(_, n)| n as usize).sum()
    }

    /// Number of distinct card states.
    #[must_use]
    pub fn distinct_len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the bag is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Multiplicity of a card state (0 if absent).
    #[must_use]
    pub fn count(&self, card: &CardState) -> u32 {
        match self.entries.binary_search_by(|(c, _)| c.cmp(card)) {
            Ok(pos) => self.entries[pos].1,
            Err(_) => 0,
        }
    }

    /// Multiplicity-aware subset test.
    ///
    /// True iff every element of `self`, counted with multiplicity, is
    /// matched in `other`. Reflexive; the empty bag is a subset of all.
    #[must_use]
    pub fn is_subset_of(&self, other: &CardMultiset) -> bool {
        // Merge walk over two sorted sequences.
        let mut theirs = other.entries.iter();
        'outer: for (card, count) in &self.entries {
            for (other_card, other_count) in theirs.by_ref() {
                match other_card.cmp(card) {
                    std::cmp::Ordering::Less => continue,
                    std::cmp::Ordering::Equal => {
                        if other_count < count {
                            return false;
                        }
                        continue 'outer;
                    }
                    std::cmp::Ordering::Greater => return false,
                }
            }
            return false;
        }
        true
    }

    /// Multiset intersection: per-element minimum of multiplicities.
    ///
    /// The result is the unique maximum-cardinality bag that is a
    /// sub-multiset of both operands.
    #[must_use]
    pub fn intersection(&self, other: &CardMultiset) -> CardMultiset {
        let mut entries = Vec::new();
        let (mut i, mut j) = (0, 0);
        while i < self.entries.len() && j < other.entries.len() {
            let (a, an) = &self.entries[i];
            let (b, bn) = &other.entries[j];
            match a.cmp(b) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    entries.push((a.clone(), *an.min(bn)));
                    i += 1;
                    j += 1;
                }
            }
        }
        Self { entries }
    }

    /// Iterate over `(card, count)` runs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (&CardState, u32)> {
        self.entries.iter().map(|(c, n)| (c, *n))
    }

    /// Iterate over every element, duplicates expanded.
    pub fn cards(&self) -> impl Iterator<Item = &CardState> {
        self.entries
            .iter()
            .flat_map(|(c, n)| std::iter::repeat(c).take(*n as usize))
    }
}

impl FromIterator<CardState> for CardMultiset {
    fn from_iter<I: IntoIterator<Item = CardState>>(iter: I) -> Self {
        let mut set = Self::new();
        for card in iter {
            set.insert(card);
        }
        set
    }
}

impl std::fmt::Display for CardMultiset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, (card, count)) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            if *count > 1 {
                write!(f, "{card} x{count}")?;
            } else {
                write!(f, "{card}")?;
            }
        }
        write!(f, "}}")
    }
}
