//! Adapters for external services used by recymap.

pub mod classifier;
