//! Credential source port.
//!
//! Credential storage and refresh happen elsewhere. This module only defines
//! the snapshot the access layer reads and the trait it reads it through.

use serde::{Deserialize, Serialize};

/// Which credential an operation needed but did not get.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CredentialKind {
    /// Web session cookie (`SESSDATA`).
    SessData,
    /// Web CSRF token (`bili_jct`).
    Csrf,
    /// Mobile access token.
    AccessToken,
}

impl std::fmt::Display for CredentialKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::SessData => "session cookie",
            Self::Csrf => "csrf token",
            Self::AccessToken => "access token",
        })
    }
}

/// A consistent snapshot of the current account's credentials.
///
/// Any field may be absent. Empty strings are treated the same as absent.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Credentials {
    /// Web session cookie value.
    pub sess_data: Option<String>,
    /// Web CSRF token.
    pub bili_jct: Option<String>,
    /// Mobile access token.
    pub access_token: Option<String>,
}

impl Credentials {
    /// Create an empty (logged out) snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the web session cookie and CSRF token.
    #[must_use]
    pub fn with_web_session(
        mut self,
        sess_data: impl Into<String>,
        bili_jct: impl Into<String>,
    ) -> Self {
        self.sess_data = Some(sess_data.into());
        self.bili_jct = Some(bili_jct.into());
        self
    }

    /// Set the mobile access token.
    #[must_use]
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Session cookie, if present and non-empty.
    pub fn sess_data(&self) -> Option<&str> {
        non_empty(self.sess_data.as_deref())
    }

    /// CSRF token, if present and non-empty.
    pub fn csrf(&self) -> Option<&str> {
        non_empty(self.bili_jct.as_deref())
    }

    /// Access token, if present and non-empty.
    pub fn access_token(&self) -> Option<&str> {
        non_empty(self.access_token.as_deref())
    }

    /// Whether any account credential is present at all.
    pub fn has_any(&self) -> bool {
        self.sess_data().is_some() || self.access_token().is_some()
    }

    pub fn require_sess_data(&self) -> Result<&str, CredentialKind> {
        self.sess_data().ok_or(CredentialKind::SessData)
    }

    pub fn require_csrf(&self) -> Result<&str, CredentialKind> {
        self.csrf().ok_or(CredentialKind::Csrf)
    }

    pub fn require_access_token(&self) -> Result<&str, CredentialKind> {
        self.access_token().ok_or(CredentialKind::AccessToken)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Source of account credentials.
///
/// Implementations may refresh credentials at any time; each call must
/// return an internally consistent snapshot.
#[cfg_attr(test, mockall::automock)]
pub trait AuthRepository: Send + Sync {
    /// Read the current credentials.
    fn credentials(&self) -> Credentials;
}

/// A fixed snapshot is its own credential source.
impl AuthRepository for Credentials {
    fn credentials(&self) -> Credentials {
        self.clone()
    }
}
