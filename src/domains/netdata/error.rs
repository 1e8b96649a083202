//! Netdata client error types.

use thiserror::Error;

/// Result type for Netdata client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors that can occur while talking to a Netdata agent.
///
/// The client never swallows a failure: every variant is surfaced typed to
/// the caller, and the tool layer decides how to report it.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    /// The agent could not be reached (DNS, connect, timeout).
    #[error("connection to {url} failed: {source}")]
    Connection {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The agent answered with a non-2xx status.
    #[error("HTTP {status} from {url}: {body}")]
    Api {
        status: reqwest::StatusCode,
        url: String,
        body: String,
    },

    /// The agent promised JSON but the body did not parse.
    #[error("invalid JSON from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// The client was closed and can no longer issue requests.
    #[error("client is closed")]
    Closed,
}

impl ClientError {
    /// Create a connection error.
    pub fn connection(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Connection {
            url: url.into(),
            source,
        }
    }

    /// Create an API error from a status and response body.
    pub fn api(status: reqwest::StatusCode, url: impl Into<String>, body: impl Into<String>) -> Self {
        Self::Api {
            status,
            url: url.into(),
            body: body.into(),
        }
    }

    /// Create a decode error.
    pub fn decode(url: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Decode {
            url: url.into(),
            source,
        }
    }

    /// The upstream HTTP status, when the agent answered at all.
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
