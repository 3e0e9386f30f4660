//! Turning game snapshots into boolean feature vectors.
//!
//! The encoder owns a session's growing feature vocabulary: the first
//! time a `(namespace, name)` pair is observed it gets the next free
//! index, and every vector after that carries a bit for it. Vectors are
//! appended to an in-memory corpus the caller exports for training.
//!
//! One encoder serves one driver thread; a single game's checkpoints
//! arrive strictly in order, so the encode path takes `&mut self` and
//! needs no locking. Parallel workers each own an encoder and fold
//! their registries together via `SharedFeatureRegistry`.

use rustc_hash::FxHashMap;

use crate::core::AgentId;
use crate::encode::snapshot::{EncodeContext, Snapshot};
use crate::encode::vector::StateVector;
use crate::vocab::{FeatureName, FeatureRegistry};

/// Errors from encoder misuse.
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    #[error("encode called before both agent and opponent were set")]
    PerspectiveUnset,
}

/// Orchestrates snapshot encoding over a growing shared vocabulary.
///
/// ## Example
///
/// ```
/// use ccg_encode::core::{AgentId, Namespace};
/// use ccg_encode::encode::{FeatureList, StateEncoder};
///
/// let mut encoder = StateEncoder::new();
/// encoder.set_agent(AgentId::new(0));
/// encoder.set_opponent(AgentId::new(1));
///
/// let snapshot = FeatureList::new().with(Namespace::BATTLEFIELD, "My Grizzly Bears");
/// let vector = encoder.encode(&snapshot).unwrap();
///
/// assert_eq!(vector.width(), 1);
/// assert_eq!(vector.get(0), Some(true));
/// ```
#[derive(Clone, Debug, Default)]
pub struct StateEncoder {
    /// Append-only vocabulary: feature -> index. Indices are never
    /// reassigned within a session.
    vocab: FxHashMap<FeatureName, usize>,
    /// Audit trail of every name behind every index.
    registry: FeatureRegistry,
    /// All vectors encoded this session, oldest first.
    corpus: Vec<StateVector>,
    agent: Option<AgentId>,
    opponent: Option<AgentId>,
}

impl StateEncoder {
    /// Create a new encoder with an empty vocabulary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an encoder whose audit registry starts from a loaded one.
    ///
    /// The vocabulary itself still starts empty; the registry seed only
    /// preserves audit history across restarts.
    #[must_use]
    pub fn with_registry(registry: FeatureRegistry) -> Self {
        Self {
            registry,
            ..Self::default()
        }
    }

    /// Set the player whose perspective subsequent encodes use.
    pub fn set_agent(&mut self, agent: AgentId) {
        self.agent = Some(agent);
    }

    /// Set the opposing player.
    pub fn set_opponent(&mut self, opponent: AgentId) {
        self.opponent = Some(opponent);
    }

    /// The active perspective, if both sides have been set.
    pub fn context(&self) -> Result<EncodeContext, EncodeError> {
        match (self.agent, self.opponent) {
            (Some(agent), Some(opponent)) => Ok(EncodeContext::new(agent, opponent)),
            _ => Err(EncodeError::PerspectiveUnset),
        }
    }

    /// Encode one snapshot into a boolean vector of the current
    /// vocabulary width, appending it to the corpus.
    ///
    /// Unseen features are allocated the next free index; the vector is
    /// exactly as wide as the vocabulary after those allocations.
    /// Earlier corpus entries are never retroactively widened.
    pub fn encode(&mut self, snapshot: &impl Snapshot) -> Result<StateVector, EncodeError> {
        let ctx = self.context()?;
        let features = snapshot.visible_features(&ctx);

        let mut present = Vec::with_capacity(features.len());
        for feature in features {
            present.push(self.index_of(feature));
        }

        let mut vector = StateVector::zeros(self.vocab.len());
        for index in present {
            vector.set(index, true);
        }

        self.corpus.push(vector.clone());
        Ok(vector)
    }

    /// Look up a feature's index, allocating one on first sight.
    fn index_of(&mut self, feature: FeatureName) -> usize {
        if let Some(&index) = self.vocab.get(&feature) {
            return index;
        }
        let index = self.vocab.len();
        log::trace!("allocated feature index {index} for {feature}");
        self.registry
            .add_feature(feature.namespace, feature.name.clone(), index as u32);
        self.vocab.insert(feature, index);
        index
    }

    /// Current vocabulary width. Monotonically non-decreasing.
    #[must_use]
    pub fn vocab_len(&self) -> usize {
        self.vocab.len()
    }

    /// The session corpus, oldest vector first.
    #[must_use]
    pub fn corpus(&self) -> &[StateVector] {
        &self.corpus
    }

    /// Clear the corpus between games.
    ///
    /// The vocabulary and registry survive: indices stay stable for
    /// the whole session.
    pub fn reset_corpus(&mut self) {
        self.corpus.clear();
    }

    /// The audit registry accumulated so far.
    #[must_use]
    pub fn registry(&self) -> &FeatureRegistry {
        &self.registry
    }

    /// Clone the registry for folding into a shared merge point.
    #[must_use]
    pub fn export_registry(&self) -> FeatureRegistry {
        self.registry.clone()
    }
}
