//! Internal error types for backend operations.
//!
//! These errors are internal to `bili-api` and are mapped to core port errors
//! at the boundary.

use bili_core::CredentialKind;
use thiserror::Error;

/// Result type alias for backend operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors raised by the HTTP and gRPC backends.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed with an error status.
    #[error("API request failed with status {status}: {url}")]
    ApiRequestFailed {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// The server answered with a non-zero business code.
    #[error("Server returned code {code}: {message}")]
    ServerCode {
        /// Business status code from the response envelope
        code: i64,
        /// Server-supplied message
        message: String,
    },

    /// API returned an invalid or unexpected response.
    #[error("Invalid response: {message}")]
    InvalidResponse {
        /// Description of what was invalid
        message: String,
    },

    /// A credential required by the request is absent.
    #[error("Missing credential: {credential}")]
    AuthMissing {
        /// The credential that was missing
        credential: CredentialKind,
    },

    /// No gRPC channel was available.
    #[error("No RPC channel available")]
    ChannelUnavailable,

    /// A page after the first failed during a paginated fetch.
    #[error("Page {page} failed: {source}")]
    PageFailed {
        /// 1-based page number
        page: u32,
        /// Underlying failure
        source: Box<ApiError>,
    },

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// gRPC call failed.
    #[error("RPC error: {0}")]
    Rpc(Box<tonic::Status>),
}

impl From<CredentialKind> for ApiError {
    fn from(credential: CredentialKind) -> Self {
        Self::AuthMissing { credential }
    }
}

impl From<tonic::Status> for ApiError {
    fn from(status: tonic::Status) -> Self {
        Self::Rpc(Box::new(status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_request_failed_error_message() {
        let error = ApiError::ApiRequestFailed {
            status: 412,
            url: "https://api.bilibili.com/x/relation/stat".to_string(),
        };
        let msg = error.to_string();
        assert!(msg.contains("412"));
        assert!(msg.contains("api.bilibili.com"));
    }

    #[test]
    fn test_server_code_error_message() {
        let error = ApiError::ServerCode {
            code: -101,
            message: "账号未登录".to_string(),
        };
        assert!(error.to_string().contains("-101"));
    }

    #[test]
    fn test_page_failed_wraps_source() {
        let error = ApiError::PageFailed {
            page: 3,
            source: Box::new(ApiError::ApiRequestFailed {
                status: 500,
                url: "https://example.com".to_string(),
            }),
        };
        let msg = error.to_string();
        assert!(msg.contains("Page 3"));
        assert!(msg.contains("500"));
    }

    #[test]
    fn test_credential_kind_conversion() {
        let error = ApiError::from(CredentialKind::Csrf);
        assert!(matches!(
            error,
            ApiError::AuthMissing {
                credential: CredentialKind::Csrf
            }
        ));
    }

    #[test]
    fn test_status_conversion() {
        let error = ApiError::from(tonic::Status::unavailable("down"));
        assert!(error.to_string().contains("down"));
    }
}
