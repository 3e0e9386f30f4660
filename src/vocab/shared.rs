//! Shared merge point for registries built by parallel rollout workers.
//!
//! Each worker keeps a private `FeatureRegistry` while its simulation
//! runs, then folds it into the shared instance at a rollout boundary.
//! The lock is held only for the duration of one merge or snapshot.

use std::sync::{Arc, Mutex, PoisonError};

use crate::vocab::FeatureRegistry;

/// Internally synchronized registry shared across rollout workers.
///
/// Cloning the handle is cheap and refers to the same registry.
///
/// ## Example
///
/// ```
/// use ccg_encode::core::Namespace;
/// use ccg_encode::vocab::{FeatureRegistry, SharedFeatureRegistry};
///
/// let shared = SharedFeatureRegistry::new();
///
/// let mut local = FeatureRegistry::new();
/// local.add_feature(Namespace::BATTLEFIELD, "Llanowar Elves", 0);
/// shared.absorb(&local);
///
/// assert_eq!(shared.snapshot().index_count(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct SharedFeatureRegistry {
    inner: Arc<Mutex<FeatureRegistry>>,
}

impl SharedFeatureRegistry {
    /// Create a shared registry starting empty.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a shared registry seeded from an existing one.
    #[must_use]
    pub fn from_registry(registry: FeatureRegistry) -> Self {
        Self {
            inner: Arc::new(Mutex::new(registry)),
        }
    }

    /// Fold a worker's local registry into the shared one.
    ///
    /// Safe to call concurrently from any number of completed workers;
    /// merge is total, so this never fails. A merge interrupted by a
    /// panicked peer still proceeds: set-union cannot observe a torn
    /// intermediate state.
    pub fn absorb(&self, local: &FeatureRegistry) {
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        guard.merge(local);
        log::trace!(
            "absorbed worker registry; shared now has {} indices",
            guard.index_count()
        );
    }

    /// Clone the current merged contents.
    #[must_use]
    pub fn snapshot(&self) -> FeatureRegistry {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
