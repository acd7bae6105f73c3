//! The fetch operation: validate inputs, call the API once, flatten.

use crate::catalog::{self, Catalog};
use crate::error::{Error, Result};
use crate::github::ListReleases;

/// Fetches all releases for `owner/repo` and flattens them into a [`Catalog`].
///
/// Input validation runs before any network access; the single API call is
/// the only suspension point.
#[tracing::instrument(skip(github))]
pub async fn fetch<G: ListReleases>(github: &G, owner: &str, repo: &str) -> Result<Catalog> {
    if owner.is_empty() {
        return Err(Error::MissingOwner);
    }
    if repo.is_empty() {
        return Err(Error::MissingRepo);
    }

    let releases = github.list_releases(owner, repo).await?;
    Ok(catalog::flatten(&releases))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::{MockListReleases, Release, ReleaseAsset};

    fn canned_releases() -> Vec<Release> {
        vec![
            Release {
                tag_name: "13.0.0_lts".to_string(),
                prerelease: false,
                published_at: Some("2021-05-03T12:00:00Z".to_string()),
                assets: vec![ReleaseAsset {
                    name: "tool-linux.tar.gz".to_string(),
                    browser_download_url: "https://example.com/linux".to_string(),
                }],
            },
            Release {
                tag_name: "14.0.0-rc1".to_string(),
                prerelease: true,
                published_at: None,
                assets: vec![
                    ReleaseAsset {
                        name: "tool-macos.tar.gz".to_string(),
                        browser_download_url: "https://example.com/macos".to_string(),
                    },
                    ReleaseAsset {
                        name: "tool-windows.zip".to_string(),
                        browser_download_url: "https://example.com/windows".to_string(),
                    },
                ],
            },
        ]
    }

    #[tokio::test]
    async fn test_empty_owner_rejected_before_any_call() {
        let mut github = MockListReleases::new();
        github.expect_list_releases().times(0);

        let result = fetch(&github, "", "ripgrep").await;

        assert!(matches!(result, Err(Error::MissingOwner)));
    }

    #[tokio::test]
    async fn test_empty_repo_rejected_before_any_call() {
        let mut github = MockListReleases::new();
        github.expect_list_releases().times(0);

        let result = fetch(&github, "BurntSushi", "").await;

        assert!(matches!(result, Err(Error::MissingRepo)));
    }

    #[tokio::test]
    async fn test_flattens_in_release_then_asset_order() {
        let mut github = MockListReleases::new();
        github
            .expect_list_releases()
            .times(1)
            .returning(|_, _| Ok(canned_releases()));

        let catalog = fetch(&github, "BurntSushi", "ripgrep").await.unwrap();

        assert_eq!(catalog.releases.len(), 3);
        assert_eq!(catalog.releases[0].name, "tool-linux.tar.gz");
        assert_eq!(catalog.releases[0].version, "13.0.0_lts");
        assert!(catalog.releases[0].lts);
        assert_eq!(catalog.releases[0].date, "2021-05-03");
        assert_eq!(catalog.releases[1].name, "tool-macos.tar.gz");
        assert_eq!(catalog.releases[2].name, "tool-windows.zip");
        assert!(!catalog.releases[2].lts);
        assert_eq!(catalog.releases[2].date, "");
    }

    #[tokio::test]
    async fn test_client_error_propagates_unwrapped() {
        let mut github = MockListReleases::new();
        github.expect_list_releases().times(1).returning(|_, _| {
            Err(Error::UpstreamShape(
                serde_json::from_str::<Vec<Release>>("{}").unwrap_err(),
            ))
        });

        let result = fetch(&github, "BurntSushi", "ripgrep").await;

        assert!(matches!(result, Err(Error::UpstreamShape(_))));
    }

    #[tokio::test]
    async fn test_fetch_is_idempotent_for_deterministic_client() {
        let mut github = MockListReleases::new();
        github
            .expect_list_releases()
            .times(2)
            .returning(|_, _| Ok(canned_releases()));

        let first = fetch(&github, "BurntSushi", "ripgrep").await.unwrap();
        let second = fetch(&github, "BurntSushi", "ripgrep").await.unwrap();

        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}
