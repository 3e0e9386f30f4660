//! The read-only query surface the encoder consumes.
//!
//! The rules engine owns the feature taxonomy. All this subsystem asks
//! of a game snapshot is the list of named features visible from the
//! encoding perspective; "my creature" and "their creature" are distinct
//! names by the time they arrive here.

use serde::{Deserialize, Serialize};

use crate::core::{AgentId, Namespace};
use crate::vocab::FeatureName;

/// Perspective for one encode call.
///
/// Passed explicitly into every encode so no implicit instance state
/// decides whose board "my" refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EncodeContext {
    /// The player whose perspective features are named from.
    pub agent: AgentId,
    /// The opposing player.
    pub opponent: AgentId,
}

impl EncodeContext {
    /// Create a context for an agent/opponent pair.
    #[must_use]
    pub const fn new(agent: AgentId, opponent: AgentId) -> Self {
        Self { agent, opponent }
    }
}

/// A game snapshot reduced to the features visible at one checkpoint.
///
/// Implemented by the caller over whatever state-query surface its
/// rules engine exposes (battlefield, life totals, hand, stack, ...).
/// The encoder treats the returned names as opaque.
pub trait Snapshot {
    /// Named features present in this snapshot, from the context's
    /// perspective. Order is irrelevant; duplicates are harmless.
    fn visible_features(&self, ctx: &EncodeContext) -> Vec<FeatureName>;
}

/// A plain list of features, for drivers that extract features
/// themselves and for test harnesses.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureList {
    features: Vec<FeatureName>,
}

impl FeatureList {
    /// Create an empty feature list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a feature.
    pub fn push(&mut self, namespace: Namespace, name: impl Into<String>) {
        self.features.push(FeatureName::new(namespace, name));
    }

    /// Builder-style push.
    #[must_use]
    pub fn with(mut self, namespace: Namespace, name: impl Into<String>) -> Self {
        self.push(namespace, name);
        self
    }

    /// Number of features in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Check whether the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

impl Snapshot for FeatureList {
    fn visible_features(&self, _ctx: &EncodeContext) -> Vec<FeatureName> {
        self.features.clone()
    }
}

impl FromIterator<FeatureName> for FeatureList {
    fn from_iter<I: IntoIterator<Item = FeatureName>>(iter: I) -> Self {
        Self {
            features: iter.into_iter().collect(),
        }
    }
}
