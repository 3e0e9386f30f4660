//! # ccg-encode
//!
//! State feature encoding and search-state deduplication for card game
//! RL/MCTS training.
//!
//! A rules engine produces deeply-nested, dynamically-shaped game
//! snapshots; a policy needs small, stable integers. This crate sits in
//! between:
//!
//! - **Action codes**: `ActionVocabulary` maps canonical action/target
//!   text to seeded constants, with a bounded, versioned hash fallback
//!   so unseen text never stalls the AI.
//! - **Feature vectors**: `StateEncoder` turns each checkpoint snapshot
//!   into a boolean vector over a growing session vocabulary, with the
//!   `FeatureRegistry` keeping the full index-to-names audit trail.
//! - **Reduction**: `FeatureMerger` finds indices that never carried
//!   signal so a trainer can drop them.
//! - **State overlap**: `StateGraph` orders observed board multisets by
//!   the sub-multiset relation, letting parallel search branches
//!   recognize when they reached overlapping positions.
//!
//! ## Concurrency
//!
//! Each rollout worker owns a `SimRng` and a local encoder/registry;
//! workers fold registries into a `SharedFeatureRegistry` at rollout
//! boundaries. Nothing else is shared mutable.
//!
//! ## Modules
//!
//! - `core`: seat/agent/namespace identifiers, per-rollout RNG
//! - `vocab`: action vocabulary, feature registry, shared merge point
//! - `encode`: snapshot trait, state vectors, encoder orchestration
//! - `reduce`: corpus reduction mask
//! - `graph`: card multisets and the board-state DAG

pub mod core;
pub mod encode;
pub mod graph;
pub mod reduce;
pub mod vocab;

// Re-export commonly used types
pub use crate::core::{AgentId, Namespace, Seat, SimRng, SimRngState};

pub use crate::vocab::{
    ActionVocabulary, FeatureName, FeatureRegistry, RegistryError, SharedFeatureRegistry,
    PASS_INDEX, STOP_CHOOSING_INDEX,
};

pub use crate::encode::{EncodeContext, EncodeError, FeatureList, Snapshot, StateEncoder, StateVector};

pub use crate::reduce::FeatureMerger;

pub use crate::graph::{CardMultiset, CardState, GraphNode, NodeId, StateGraph};
