use anyhow::Result;
use reqwest::Client;

use ghrl::fetch;
use ghrl::github::{Credentials, GitHub};

/// ghrl - GitHub Release Lister
///
/// Fetches the releases of BurntSushi/ripgrep and prints the flattened asset
/// catalog as pretty-printed JSON.
///
/// If the GITHUB_USERNAME environment variable is set, requests are sent with
/// basic auth using GITHUB_TOKEN as the password. GHRL_API_URL overrides the
/// API endpoint, for enterprise or mock servers.
#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let api_url = std::env::var("GHRL_API_URL").ok();
    let credentials = Credentials::from_env();

    let client = Client::builder().user_agent("ghrl-cli").build()?;
    let github = GitHub::new(client, api_url, credentials);

    let catalog = fetch::fetch(&github, "BurntSushi", "ripgrep").await?;
    println!("{}", serde_json::to_string_pretty(&catalog)?);

    Ok(())
}
