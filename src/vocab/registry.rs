//! Audit registry mapping feature indices to every name that produced them.
//!
//! The encoder hands out integer indices for an open-ended universe of
//! named features. The `FeatureRegistry` is the full audit trail: for
//! each index, the set of `(namespace, name)` pairs that ever mapped to
//! it. Several names per index is normal (synonyms, hash collisions).
//!
//! Registries are mergeable so parallel rollout workers can keep local
//! copies and fold them together at rollout boundaries, persistable so a
//! session's indices survive process restarts, and printable for audit.

use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::Namespace;

/// Schema version of the persisted registry snapshot.
///
/// Bumped on any change to the serialized layout; loading a snapshot
/// with a different version is an error, not a reinterpret.
pub const REGISTRY_SCHEMA_VERSION: u32 = 1;

/// A namespaced feature name.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FeatureName {
    /// Caller-defined namespace the name lives in.
    pub namespace: Namespace,
    /// The feature's canonical text.
    pub name: String,
}

impl FeatureName {
    /// Create a new namespaced feature name.
    pub fn new(namespace: Namespace, name: impl Into<String>) -> Self {
        Self {
            namespace,
            name: name.into(),
        }
    }
}

impl std::fmt::Display for FeatureName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}/{}]", self.namespace, self.name)
    }
}

/// Errors from registry persistence.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("registry i/o failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("registry snapshot is corrupt: {0}")]
    Corrupt(#[from] bincode::Error),

    #[error("unsupported registry schema version {found} (expected {expected})")]
    SchemaVersion { found: u32, expected: u32 },
}

/// Versioned on-disk envelope for a registry snapshot.
#[derive(Serialize, Deserialize)]
struct RegistryFile {
    version: u32,
    entries: BTreeMap<u32, BTreeSet<FeatureName>>,
}

/// Audit map from feature index to its synonym set.
///
/// ## Example
///
/// ```
/// use ccg_encode::core::Namespace;
/// use ccg_encode::vocab::FeatureRegistry;
///
/// let mut registry = FeatureRegistry::new();
/// registry.add_feature(Namespace::BATTLEFIELD, "Grizzly Bears", 4);
/// registry.add_feature(Namespace::BATTLEFIELD, "Runeclaw Bear", 4);
///
/// assert_eq!(registry.index_count(), 1);
/// assert_eq!(registry.feature_count(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureRegistry {
    entries: BTreeMap<u32, BTreeSet<FeatureName>>,
}

impl FeatureRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a `(namespace, name)` synonym under an index.
    ///
    /// Idempotent: re-adding an existing pair is a no-op.
    pub fn add_feature(&mut self, namespace: Namespace, name: impl Into<String>, index: u32) {
        self.entries
            .entry(index)
            .or_default()
            .insert(FeatureName::new(namespace, name));
    }

    /// Get the synonym set registered under an index.
    #[must_use]
    pub fn synonyms(&self, index: u32) -> Option<&BTreeSet<FeatureName>> {
        self.entries.get(&index)
    }

    /// Total synonym count across all indices.
    #[must_use]
    pub fn feature_count(&self) -> usize {
        self.entries.values().map(BTreeSet::len).sum()
    }

    /// Number of distinct indices in use.
    #[must_use]
    pub fn index_count(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the registry has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(index, synonym set)` pairs in ascending index order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &BTreeSet<FeatureName>)> {
        self.entries.iter().map(|(&idx, set)| (idx, set))
    }

    /// Union another registry's per-index synonym sets into this one.
    ///
    /// Total: merging an empty registry either way is a no-op. The
    /// result is independent of merge order.
    pub fn merge(&mut self, other: &FeatureRegistry) {
        for (&index, names) in &other.entries {
            let entry = self.entries.entry(index).or_default();
            for name in names {
                entry.insert(name.clone());
            }
        }
    }

    /// Write the canonical audit table to a writer.
    ///
    /// One line per index, ascending: `<idx>: [<ns>/<name>], ...`.
    /// An empty synonym set renders as `<idx>: `.
    pub fn write_table(&self, writer: &mut impl Write) -> std::io::Result<()> {
        for (index, names) in &self.entries {
            let joined = names
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            writeln!(writer, "{index}: {joined}")?;
        }
        Ok(())
    }

    /// Write the audit table to a file.
    pub fn print_table(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.write_table(&mut writer)?;
        writer.flush()
    }

    /// Persist the registry to a versioned snapshot file.
    ///
    /// In-memory state is untouched regardless of outcome.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), RegistryError> {
        let file = RegistryFile {
            version: REGISTRY_SCHEMA_VERSION,
            entries: self.entries.clone(),
        };
        let writer = BufWriter::new(File::create(path.as_ref())?);
        bincode::serialize_into(writer, &file)?;
        log::debug!(
            "saved feature registry ({} indices, {} synonyms) to {}",
            self.index_count(),
            self.feature_count(),
            path.as_ref().display()
        );
        Ok(())
    }

    /// Load a registry from a snapshot file.
    ///
    /// Fails with a reported error on a missing file, corrupt bytes, or
    /// an unknown schema version; never yields a partially-populated
    /// registry. Callers typically fall back to `FeatureRegistry::new()`.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, RegistryError> {
        let reader = BufReader::new(File::open(path.as_ref())?);
        let file: RegistryFile = bincode::deserialize_from(reader)?;
        if file.version != REGISTRY_SCHEMA_VERSION {
            return Err(RegistryError::SchemaVersion {
                found: file.version,
                expected: REGISTRY_SCHEMA_VERSION,
            });
        }
        log::debug!(
            "loaded feature registry ({} indices) from {}",
            file.entries.len(),
            path.as_ref().display()
        );
        Ok(Self {
            entries: file.entries,
        })
    }
}
