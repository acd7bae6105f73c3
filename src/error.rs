//! Error taxonomy for release fetching.

/// Errors produced while fetching and flattening releases.
///
/// Precondition failures are detected before any network access; transport
/// and shape failures surface from the HTTP call and the JSON decode,
/// unretried, in that order.
#[derive(Debug)]
pub enum Error {
    /// The `owner` argument was empty.
    MissingOwner,
    /// The `repo` argument was empty.
    MissingRepo,
    /// Network failure, non-success HTTP status, or an unreadable body.
    Transport(reqwest::Error),
    /// The upstream payload did not decode as the documented release array.
    UpstreamShape(serde_json::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::MissingOwner => write!(f, "missing owner for repo"),
            Error::MissingRepo => write!(f, "missing repo name"),
            Error::Transport(e) => write!(f, "GitHub API request failed: {}", e),
            Error::UpstreamShape(e) => {
                write!(f, "unexpected shape in GitHub API response: {}", e)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Transport(e) => Some(e),
            Error::UpstreamShape(e) => Some(e),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
