//! Corpus reduction: identifying feature indices a trainer can drop.

pub mod merger;

pub use merger::FeatureMerger;
