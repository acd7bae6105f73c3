//! ghrl - list GitHub release assets as a flat, normalized catalog.
//!
//! One API call to the releases endpoint, one transformation: every asset of
//! every release becomes a [`catalog::AssetRecord`] with normalized metadata.

pub mod catalog;
pub mod error;
pub mod fetch;
pub mod github;
