//! Fingerprint of one tracked game object's relevant state.
//!
//! Two permanents with the same fingerprint are interchangeable for
//! state-overlap purposes, so `CardState` carries exactly the fields
//! that matter for structural comparison and nothing else. The derived
//! ordering gives multisets a canonical sort key.

use serde::{Deserialize, Serialize};

/// Equality- and order-comparable state of one tracked object.
///
/// Minimal fingerprint is the name; tapped status and counters cover
/// what a card engine typically distinguishes beyond that.
///
/// ```
/// use ccg_encode::graph::CardState;
///
/// let fresh = CardState::new("Grizzly Bears");
/// let tapped = CardState::new("Grizzly Bears").with_tapped(true);
/// assert_ne!(fresh, tapped);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardState {
    /// The object's name.
    pub name: String,
    /// Whether the object is tapped.
    pub tapped: bool,
    /// Net counters on the object.
    pub counters: i32,
}

impl CardState {
    /// Create an untapped, counter-free card state.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tapped: false,
            counters: 0,
        }
    }

    /// Set the tapped flag.
    #[must_use]
    pub fn with_tapped(mut self, tapped: bool) -> Self {
        self.tapped = tapped;
        self
    }

    /// Set the counter total.
    #[must_use]
    pub fn with_counters(mut self, counters: i32) -> Self {
        self.counters = counters;
        self
    }
}

impl std::fmt::Display for CardState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)?;
        if self.tapped {
            write!(f, " (tapped)")?;
        }
        if self.counters != 0 {
            write!(f, " [{:+}]", self.counters)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_is_full_state() {
        let a = CardState::new("Goblin");
        let b = CardState::new("Goblin");
        assert_eq!(a, b);

        assert_ne!(a, CardState::new("Goblin").with_tapped(true));
        assert_ne!(a, CardState::new("Goblin").with_counters(1));
    }

    #[test]
    fn test_ordering_by_name_first() {
        let mut cards = vec![
            CardState::new("Zombie"),
            CardState::new("Angel").with_tapped(true),
            CardState::new("Angel"),
        ];
        cards.sort();

        assert_eq!(cards[0].name, "Angel");
        assert!(!cards[0].tapped);
        assert_eq!(cards[2].name, "Zombie");
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", CardState::new("Bear")), "Bear");
        assert_eq!(
            format!("{}", CardState::new("Bear").with_tapped(true)),
            "Bear (tapped)"
        );
        assert_eq!(
            format!("{}", CardState::new("Bear").with_counters(2)),
            "Bear [+2]"
        );
    }

    #[test]
    fn test_serde_round_trip() {
        let card = CardState::new("Serra Angel").with_tapped(true).with_counters(-1);
        let json = serde_json::to_string(&card).unwrap();
        let back: CardState = serde_json::from_str(&json).unwrap();
        assert_eq!(card, back);
    }
}
