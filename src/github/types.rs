use serde::Deserialize;

/// A downloadable file attached to a GitHub release.
#[derive(Deserialize, Debug, PartialEq, Clone)]
pub struct ReleaseAsset {
    pub name: String,
    pub browser_download_url: String,
}

/// A GitHub release as returned by the releases endpoint.
///
/// Only the fields the catalog mapping consumes are modeled. `assets` is
/// required so that a payload without it fails the decode instead of
/// panicking later.
#[derive(Deserialize, Debug, PartialEq, Clone, Default)]
pub struct Release {
    pub tag_name: String,
    #[serde(default)]
    pub prerelease: bool,
    pub published_at: Option<String>,
    pub assets: Vec<ReleaseAsset>,
}
