//! Action and target vocabularies with bounded hash fallback.
//!
//! Policies act on a fixed-width output head, so every action or target
//! string the rules engine can produce must resolve to a small, stable
//! integer. Canonical always-available choices are seeded at low indices;
//! anything unseen falls back to a deterministic hash bucket in [1, 127].
//!
//! Lookups never fail and never mutate: the AI must not stall because a
//! card printed text nobody anticipated.
//!
//! ## Known collision risk
//!
//! The fallback range [1, 127] is not disjoint from the seeded low
//! indices, and distinct unseen texts may share a bucket. Bounded
//! aliasing is the accepted price for a small fixed encoding surface;
//! callers wanting a wider alphabet reseed more constants explicitly.

use rustc_hash::FxHashMap;

use crate::core::Seat;

/// Version of the fallback hash scheme.
///
/// Bump this if the hash function or bucket arithmetic ever changes, so
/// persisted data produced under the old scheme is not misread.
pub const FALLBACK_HASH_VERSION: u32 = 1;

/// Number of fallback buckets. Unseen text maps into [1, 127].
pub const FALLBACK_BUCKETS: u64 = 127;

/// Index 0 of the action tables: the always-legal pass.
pub const PASS_INDEX: u16 = 0;

/// Index 0 of the target table: decline to pick further targets.
pub const STOP_CHOOSING_INDEX: u16 = 0;

/// FNV-1a 64-bit, implemented explicitly.
///
/// The runtime-default hasher is not stable across processes or
/// versions; encoded corpora must be.
fn fnv1a64(text: &str) -> u64 {
    const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;

    let mut hash = OFFSET;
    for byte in text.bytes() {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(PRIME);
    }
    hash
}

/// Deterministic fallback bucket for unseen text: always in [1, 127].
#[must_use]
pub fn fallback_index(text: &str) -> u16 {
    (fnv1a64(text) % FALLBACK_BUCKETS) as u16 + 1
}

/// Per-seat action and target dictionaries.
///
/// Seed tables are built at construction and never mutated afterwards,
/// so a vocabulary can be shared read-only across simulation threads.
///
/// ## Example
///
/// ```
/// use ccg_encode::core::Seat;
/// use ccg_encode::vocab::{ActionVocabulary, PASS_INDEX};
///
/// let vocab = ActionVocabulary::new();
/// assert_eq!(vocab.action_index("Pass", Seat::Agent), PASS_INDEX);
///
/// // Unseen text resolves to a stable hash bucket, never to 0.
/// let idx = vocab.action_index("Cast Obscure Ritual", Seat::Agent);
/// assert!((1..=127).contains(&idx));
/// ```
#[derive(Clone, Debug)]
pub struct ActionVocabulary {
    agent_actions: FxHashMap<String, u16>,
    opponent_actions: FxHashMap<String, u16>,
    targets: FxHashMap<String, u16>,
}

impl ActionVocabulary {
    /// Create a vocabulary with the default seed tables.
    ///
    /// Actions: Pass, Play Land, Attack, Block, Mulligan, Keep Hand,
    /// Concede (indices 0..=6, both seats). Targets: Stop Choosing,
    /// Self, Opponent (indices 0..=2).
    #[must_use]
    pub fn new() -> Self {
        let mut vocab = Self::unseeded();
        for (text, idx) in [
            ("Pass", 0),
            ("Play Land", 1),
            ("Attack", 2),
            ("Block", 3),
            ("Mulligan", 4),
            ("Keep Hand", 5),
            ("Concede", 6),
        ] {
            vocab.seed_action(Seat::Agent, text, idx);
            vocab.seed_action(Seat::Opponent, text, idx);
        }
        for (text, idx) in [("Stop Choosing", 0), ("Self", 1), ("Opponent", 2)] {
            vocab.seed_target(text, idx);
        }
        vocab
    }

    /// Create a vocabulary with empty seed tables.
    ///
    /// Every action lookup will hit the fallback path until seeds are
    /// added. Seeding must finish before the instance is shared.
    #[must_use]
    pub fn unseeded() -> Self {
        Self {
            agent_actions: FxHashMap::default(),
            opponent_actions: FxHashMap::default(),
            targets: FxHashMap::default(),
        }
    }

    /// Seed an action constant for one seat.
    ///
    /// Re-seeding the same text overwrites its index; call only during
    /// construction, before the vocabulary is shared across threads.
    pub fn seed_action(&mut self, seat: Seat, text: impl Into<String>, index: u16) {
        self.seat_table_mut(seat).insert(text.into(), index);
    }

    /// Seed a target constant.
    pub fn seed_target(&mut self, text: impl Into<String>, index: u16) {
        self.targets.insert(text.into(), index);
    }

    /// Resolve canonical action text to its index for the given seat.
    ///
    /// Seeded hits return their constant; misses return the bounded
    /// hash fallback. Never fails, never mutates.
    #[must_use]
    pub fn action_index(&self, text: &str, seat: Seat) -> u16 {
        match self.seat_table(seat).get(text) {
            Some(&idx) => idx,
            None => fallback_index(text),
        }
    }

    /// Resolve canonical target text to its index.
    #[must_use]
    pub fn target_index(&self, text: &str) -> u16 {
        match self.targets.get(text) {
            Some(&idx) => idx,
            None => fallback_index(text),
        }
    }

    /// Number of seeded action constants for one seat.
    #[must_use]
    pub fn seeded_action_count(&self, seat: Seat) -> usize {
        self.seat_table(seat).len()
    }

    /// Number of seeded target constants.
    #[must_use]
    pub fn seeded_target_count(&self) -> usize {
        self.targets.len()
    }

    fn seat_table(&self, seat: Seat) -> &FxHashMap<String, u16> {
        match seat {
            Seat::Agent => &self.agent_actions,
            Seat::Opponent => &self.opponent_actions,
        }
    }

    fn seat_table_mut(&mut self, seat: Seat) -> &mut FxHashMap<String, u16> {
        match seat {
            Seat::Agent => &mut self.agent_actions,
            Seat::Opponent => &mut self.opponent_actions,
        }
    }
}

impl Default for ActionVocabulary {
    fn default() -> Self {
        Self::new()
    }
}
