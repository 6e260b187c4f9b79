//! Error types for the catalog service client.

use thiserror::Error;

/// Errors the service client can produce.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ClientError {
    /// Failed to construct the HTTP client.
    #[error("failed to create HTTP client: {0}")]
    Build(String),

    /// Network request failed before a response arrived.
    #[error("network error: {0}")]
    Network(String),

    /// The listing response was not the expected shape.
    #[error("unexpected listing response: {0}")]
    BadListing(String),
}

impl ClientError {
    /// User-friendly message suitable for display in the UI.
    #[must_use]
    pub fn user_message(&self) -> &str {
        match self {
            Self::Network(_) => "Could not reach the catalog service.",
            Self::BadListing(_) => "The catalog service answered in an unexpected format.",
            Self::Build(_) => "An unexpected error occurred.",
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::BadListing(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_messages_stay_generic() {
        let err = ClientError::Network("connection refused".to_string());
        assert!(err.user_message().contains("catalog service"));
    }
}
