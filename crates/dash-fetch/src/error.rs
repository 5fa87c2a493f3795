//! Error types for share-link resolution and download.

use thiserror::Error;

/// Errors that can occur while resolving or fetching a share link.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FetchError {
    /// The link matches neither the `/d/<id>` path form nor the `id=<id>`
    /// query form. No network request is made in this case.
    #[error("invalid share link: {0}")]
    InvalidLink(String),

    /// The download responded with a non-success HTTP status.
    #[error("download failed with HTTP status {status}")]
    Status {
        /// HTTP status code returned by the drive host.
        status: u16,
    },

    /// The request could not be completed at the transport level.
    #[error("network error: {0}")]
    Network(String),
}

impl FetchError {
    /// A message suitable for surfacing inline in the display layer.
    #[must_use]
    pub fn user_message(&self) -> &str {
        match self {
            Self::InvalidLink(_) => {
                "Invalid drive link. Use the format: https://drive.google.com/file/d/<FILE_ID>/view"
            }
            Self::Status { .. } => "Failed to download the file from the drive link.",
            Self::Network(_) => "Could not reach the drive host. Check your connection.",
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

/// Result type alias for fetch operations.
pub type Result<T> = std::result::Result<T, FetchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_messages() {
        let err = FetchError::InvalidLink("https://example.com".to_string());
        assert!(err.user_message().contains("FILE_ID"));

        let err = FetchError::Status { status: 404 };
        assert!(err.user_message().contains("download"));
    }
}
