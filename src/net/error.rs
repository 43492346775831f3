//! Failure taxonomy for authenticated REST calls.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde::Serialize;

/// Why a request to a protected resource did not produce a usable payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FetchError {
    /// The request never reached the server, no response arrived, or it timed out.
    #[error("transport failure: {message}")]
    Transport { message: String },
    /// The server rejected the credential (401/403).
    #[error("authorization failure ({status}): {message}")]
    Authorization { status: u16, message: String },
    /// The server answered with an error status unrelated to authorization.
    #[error("server failure ({status}): {message}")]
    Server { status: u16, message: String },
    /// A response arrived but its body could not be interpreted.
    #[error("decoding failure: {message}")]
    Decoding { message: String },
}

impl FetchError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport { message: message.into() }
    }

    pub fn decoding(message: impl Into<String>) -> Self {
        Self::Decoding { message: message.into() }
    }
}
