//! Identifier newtypes shared across the encoding subsystem.
//!
//! ## Seat
//!
//! Action dictionaries are asymmetric: the acting agent and its opponent
//! get separate seed tables, so "Attack" from my side and "Attack" from
//! theirs can encode to different constants.
//!
//! ## Namespace
//!
//! Every named feature is qualified by an integer namespace chosen by the
//! caller's feature-extraction logic. A handful of conventional namespaces
//! are provided as constants; the taxonomy itself is open-ended.

use serde::{Deserialize, Serialize};

/// Which side of the table an action dictionary belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    /// The agent whose perspective the encoding uses.
    Agent,
    /// The opposing player.
    Opponent,
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Seat::Agent => write!(f, "agent"),
            Seat::Opponent => write!(f, "opponent"),
        }
    }
}

/// Identifier for one player known to the rules engine.
///
/// Indices are 0-based and assigned by the surrounding engine; this
/// subsystem only compares them for identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AgentId(pub u8);

impl AgentId {
    /// Create a new agent ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for AgentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Agent {}", self.0)
    }
}

/// Integer namespace qualifying a named feature.
///
/// The caller's feature extraction owns the taxonomy; the constants below
/// cover the zones a card engine conventionally reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Namespace(pub u16);

impl Namespace {
    pub const BATTLEFIELD: Namespace = Namespace(0);
    pub const HAND: Namespace = Namespace(1);
    pub const GRAVEYARD: Namespace = Namespace(2);
    pub const STACK: Namespace = Namespace(3);
    pub const LIFE: Namespace = Namespace(4);
    pub const MISC: Namespace = Namespace(5);

    /// Create a namespace from a raw integer.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw namespace value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for Namespace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
