//! Error types for user port operations.

use thiserror::Error;

use crate::ports::auth::CredentialKind;

/// Errors from user port operations.
///
/// These are domain-level errors that consumers can handle.
/// Implementation-specific errors (HTTP, gRPC, JSON) are mapped to these.
#[derive(Debug, Error)]
pub enum UserPortError {
    /// A credential the operation requires is absent.
    #[error("Missing credential: {credential}")]
    AuthMissing {
        /// The credential that was missing
        credential: CredentialKind,
    },

    /// The RPC channel could not be obtained.
    #[error("Transport unavailable: {message}")]
    TransportUnavailable {
        /// Why the transport could not be used
        message: String,
    },

    /// The HTTP or RPC call failed, the server reported a non-zero code, or
    /// the payload could not be decoded.
    #[error("Transport error: {message}")]
    Transport {
        /// Description of the failure
        message: String,
    },

    /// A page after the first failed during a paginated fetch.
    #[error("Failed to fetch page {page}: {message}")]
    AggregateFailure {
        /// 1-based page number that failed
        page: u32,
        /// Description of the underlying failure
        message: String,
    },
}

impl From<CredentialKind> for UserPortError {
    fn from(credential: CredentialKind) -> Self {
        Self::AuthMissing { credential }
    }
}

/// Result type alias for user port operations.
pub type UserPortResult<T> = Result<T, UserPortError>;
