use std::time::Duration;
use reqwest::StatusCode;
use reqwest::blocking::{Client, Response};
use thiserror::Error;
use tracing::debug;

/// Upper bound for one whole request, body included. The app catalog is a
/// multi-megabyte JSON document, so this is generous on purpose.
pub const HTTP_TIMEOUT: Duration = Duration::from_secs(120);

const USER_AGENT: &str = concat!("steampatch/", env!("CARGO_PKG_VERSION"));

/// A catalog or archive fetch that did not produce a usable response body.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// The server answered, but not with a success status.
    #[error("GET {url} returned status {status}")]
    Status { url: String, status: StatusCode },
    /// The request never completed (DNS, timeout, connection reset, ...).
    #[error("GET {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl NetworkError {
    pub(crate) fn transport(url: &str, source: reqwest::Error) -> Self {
        NetworkError::Transport {
            url: url.to_string(),
            source,
        }
    }
}

/// Issues a blocking GET and checks the response status.
///
/// Returns the raw [`Response`] so callers decide how to consume the body
/// (text for the catalog, bytes for the bundle archive).
pub(crate) fn http_get(url: &str) -> Result<Response, NetworkError> {
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .timeout(HTTP_TIMEOUT)
        .build()
        .map_err(|e| NetworkError::transport(url, e))?;

    let response = client
        .get(url)
        .send()
        .map_err(|e| NetworkError::transport(url, e))?;

    let status = response.status();
    debug!("GET {url} -> {status}");
    if !status.is_success() {
        return Err(NetworkError::Status {
            url: url.to_string(),
            status,
        });
    }
    Ok(response)
}
