use async_trait::async_trait;
use log::debug;
use reqwest::Client;

use crate::error::{Error, Result};

use super::types::Release;

/// Default GitHub API endpoint.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Basic-auth credentials attached to every API request.
#[derive(Debug, Clone, PartialEq)]
pub struct Credentials {
    pub username: String,
    pub token: Option<String>,
}

impl Credentials {
    /// Reads credentials from the `GITHUB_USERNAME` and `GITHUB_TOKEN`
    /// environment variables. Returns `None` when the username variable is
    /// unset or empty, in which case requests go out unauthenticated.
    pub fn from_env() -> Option<Self> {
        let username = std::env::var("GITHUB_USERNAME")
            .ok()
            .filter(|u| !u.is_empty())?;
        let token = std::env::var("GITHUB_TOKEN").ok();
        Some(Self { username, token })
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ListReleases: Send + Sync {
    async fn list_releases(&self, owner: &str, repo: &str) -> Result<Vec<Release>>;
}

/// GitHub API client over a shared reqwest `Client`.
pub struct GitHub {
    client: Client,
    api_url: String,
    credentials: Option<Credentials>,
}

impl GitHub {
    #[tracing::instrument(skip(client, api_url, credentials))]
    pub fn new(client: Client, api_url: Option<String>, credentials: Option<Credentials>) -> Self {
        let api_url = api_url.unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Self {
            client,
            api_url,
            credentials,
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}

#[async_trait]
impl ListReleases for GitHub {
    #[tracing::instrument(skip(self))]
    async fn list_releases(&self, owner: &str, repo: &str) -> Result<Vec<Release>> {
        let url = format!("{}/repos/{}/{}/releases", self.api_url, owner, repo);

        debug!("Fetching releases from {}...", url);

        let mut request = self.client.get(&url);
        if let Some(credentials) = &self.credentials {
            request = request.basic_auth(&credentials.username, credentials.token.as_deref());
        }

        let response = request.send().await.map_err(Error::Transport)?;
        let response = response.error_for_status().map_err(Error::Transport)?;
        let body = response.text().await.map_err(Error::Transport)?;

        serde_json::from_str(&body).map_err(Error::UpstreamShape)
    }
}
