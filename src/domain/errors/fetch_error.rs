//! Content fetch error types.

use thiserror::Error;

/// Fetch error variants.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum FetchError {
    #[error("network error: {message}")]
    Network { message: String },

    #[error("backend returned HTTP {status}: {message}")]
    Api { status: u16, message: String },

    #[error("malformed response payload: {message}")]
    Malformed { message: String },

    #[error("unexpected fetch error: {message}")]
    Unexpected { message: String },
}

impl FetchError {
    /// Creates network error.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Creates API status error.
    #[must_use]
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Creates malformed payload error.
    #[must_use]
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed {
            message: message.into(),
        }
    }

    /// Creates unexpected error.
    #[must_use]
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected {
            message: message.into(),
        }
    }

    /// Returns whether error is network related.
    #[must_use]
    pub const fn is_network_error(&self) -> bool {
        matches!(self, Self::Network { .. })
    }
}
