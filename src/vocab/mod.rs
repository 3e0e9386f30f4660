//! Stable integer vocabularies for actions, targets, and named features.
//!
//! - `ActionVocabulary`: seeded per-seat action/target dictionaries with
//!   a bounded, versioned hash fallback for unseen text.
//! - `FeatureRegistry`: the audit map from feature index to every
//!   `(namespace, name)` that ever produced it; mergeable and persistable.
//! - `SharedFeatureRegistry`: the synchronized merge point parallel
//!   rollout workers fold their local registries into.

pub mod actions;
pub mod registry;
pub mod shared;

pub use actions::{
    fallback_index, ActionVocabulary, FALLBACK_BUCKETS, FALLBACK_HASH_VERSION, PASS_INDEX,
    STOP_CHOOSING_INDEX,
};
pub use registry::{FeatureName, FeatureRegistry, RegistryError, REGISTRY_SCHEMA_VERSION};
pub use shared::SharedFeatureRegistry;
