//! Error types for the GitHub provider

use thiserror::Error;

/// GitHub provider errors
#[derive(Error, Debug)]
pub enum GitHubError {
    /// API request returned a non-success status
    #[error("GitHub API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// Failed to parse an API response
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Transport-level failure (no usable response at all)
    #[error(transparent)]
    Http(#[from] core_http::HttpError),
}

/// Result type for GitHub operations
pub type Result<T> = std::result::Result<T, GitHubError>;
