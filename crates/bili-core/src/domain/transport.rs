//! Transport selection.

use serde::{Deserialize, Serialize};

/// Which backend family services a call.
///
/// `Web` uses the cookie-authenticated web API. `App` uses the token
/// authenticated mobile API, which is JSON over HTTP for most operations and
/// gRPC for the dynamic feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    /// Web HTTP API authenticated by the `SESSDATA` cookie (default).
    #[default]
    Web,
    /// Mobile API authenticated by an access token.
    App,
}

impl TransportMode {
    /// Short label used in log fields.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::App => "app",
        }
    }
}

impl std::fmt::Display for TransportMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
