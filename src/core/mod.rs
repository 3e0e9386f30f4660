//! Core types: seats, agent and namespace identifiers, per-rollout RNG.
//!
//! These are the building blocks the rest of the subsystem is written in
//! terms of. Nothing here knows about any particular game's rules.

pub mod ids;
pub mod rng;

pub use ids::{AgentId, Namespace, Seat};
pub use rng::{SimRng, SimRngState};
