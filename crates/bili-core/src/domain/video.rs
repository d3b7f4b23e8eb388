//! Space (uploader page) video types.

use serde::{Deserialize, Serialize};

/// Sort order for a user's uploaded videos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpaceVideoOrder {
    /// Newest first (default).
    #[default]
    PubDate,
    /// Most played first.
    Click,
    /// Most favourited first.
    Stow,
}

impl SpaceVideoOrder {
    /// Get the API parameter value for this order.
    #[must_use]
    pub const fn as_api_param(self) -> &'static str {
        match self {
            Self::PubDate => "pubdate",
            Self::Click => "click",
            Self::Stow => "stow",
        }
    }
}

/// One video uploaded by a user.
///
/// Web and app listings both normalize into this record. Where the two
/// backends describe the same video, the records are equal field for field.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SpaceVideo {
    /// Archive ID (av number).
    pub aid: u64,
    /// BV identifier.
    pub bvid: String,
    pub title: String,
    /// Cover image URL.
    pub cover: String,
    /// Uploader display name.
    pub author: String,
    /// Duration in seconds.
    pub duration_secs: u64,
    /// Play count.
    pub play: u64,
    /// Danmaku (bullet comment) count.
    pub danmaku: u64,
    /// Unix timestamp (seconds) of publication.
    pub published_at: i64,
}
