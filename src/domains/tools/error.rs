//! Tool-specific error types.

use thiserror::Error;

use crate::domains::netdata::ClientError;

/// Errors that can occur during tool dispatch.
///
/// Client-level failures inside a tool are formatted into error-flagged
/// responses instead; these variants cover the dispatch boundary itself.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool was not found.
    #[error("Tool not found: {0}")]
    NotFound(String),

    /// Invalid arguments were provided to the tool.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// The upstream agent call failed.
    #[error("Upstream request failed: {0}")]
    Upstream(#[from] ClientError),
}

impl ToolError {
    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }
}
