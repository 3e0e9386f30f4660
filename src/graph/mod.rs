//! Partial-order DAG over observed board states.
//!
//! - `CardState`: fingerprint of one tracked object.
//! - `CardMultiset`: canonical sorted bag of card states with
//!   linearithmic subset and intersection.
//! - `StateGraph`: arena DAG ordered by the sub-multiset relation,
//!   used by the search to recognize structurally overlapping boards.

pub mod card_state;
pub mod dag;
pub mod multiset;

pub use card_state::CardState;
pub use dag::{GraphNode, NodeId, StateGraph};
pub use multiset::CardMultiset;
