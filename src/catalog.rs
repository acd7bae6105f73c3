//! Flattening of nested releases into a normalized asset catalog.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::github::Release;

// "lts" as a whole word or underscore-delimited segment, case-sensitive.
static LTS_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\b|_)lts(\b|_)").unwrap());

/// Stability classification derived from the prerelease flag.
#[derive(Serialize, Debug, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Stable,
    Beta,
}

/// One downloadable artifact with normalized metadata.
#[derive(Serialize, Debug, PartialEq, Clone)]
pub struct AssetRecord {
    pub name: String,
    /// Release tag, verbatim. Tags are not guaranteed to be semver.
    pub version: String,
    pub lts: bool,
    pub channel: Channel,
    /// Publish date as YYYY-MM-DD, empty when the release has no timestamp.
    pub date: String,
    /// Reserved, to be inferred from the file name.
    pub os: String,
    /// Reserved, to be inferred from the file name.
    pub arch: String,
    /// Reserved, to be normalized later.
    pub ext: String,
    pub download: String,
}

/// The flattened result: one record per asset, in release-then-asset order.
#[derive(Serialize, Debug, PartialEq, Clone)]
pub struct Catalog {
    pub releases: Vec<AssetRecord>,
    /// Reserved, currently always empty.
    pub download: String,
}

/// Flattens upstream releases into a [`Catalog`], one record per asset.
pub fn flatten(releases: &[Release]) -> Catalog {
    let mut records = Vec::new();

    for release in releases {
        for asset in &release.assets {
            records.push(AssetRecord {
                name: asset.name.clone(),
                version: release.tag_name.clone(),
                lts: is_lts_tag(&release.tag_name),
                channel: if release.prerelease {
                    Channel::Beta
                } else {
                    Channel::Stable
                },
                date: publish_date(release.published_at.as_deref()),
                os: String::new(),
                arch: String::new(),
                ext: String::new(),
                download: asset.browser_download_url.clone(),
            });
        }
    }

    Catalog {
        releases: records,
        download: String::new(),
    }
}

/// True when the tag carries an "lts" marker.
pub fn is_lts_tag(tag: &str) -> bool {
    LTS_TAG.is_match(tag)
}

/// Strips the time-of-day suffix from an ISO timestamp.
fn publish_date(published_at: Option<&str>) -> String {
    match published_at {
        Some(timestamp) => timestamp.split('T').next().unwrap_or_default().to_string(),
        None => String::new(),
    }
}
