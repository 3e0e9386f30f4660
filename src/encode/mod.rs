//! Snapshot-to-vector encoding over a growing session vocabulary.
//!
//! - `Snapshot` / `EncodeContext`: the caller's read-only feature
//!   surface and the explicit perspective passed into each encode.
//! - `StateVector`: one boolean per vocabulary index known at encode
//!   time; generations differ in width by design.
//! - `StateEncoder`: orchestration, vocabulary growth, and the session
//!   corpus.

pub mod encoder;
pub mod snapshot;
pub mod vector;

pub use encoder::{EncodeError, StateEncoder};
pub use snapshot::{EncodeContext, FeatureList, Snapshot};
pub use vector::StateVector;
