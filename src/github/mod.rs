//! GitHub releases API client.

mod client;
mod types;

pub use client::{Credentials, GitHub, ListReleases};
pub use types::{Release, ReleaseAsset};

#[cfg(test)]
pub use client::MockListReleases;
