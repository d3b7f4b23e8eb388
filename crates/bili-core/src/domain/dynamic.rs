//! Dynamic (activity feed) video types.

use serde::{Deserialize, Serialize};

/// One video entry from the followed-uploaders activity feed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DynamicVideo {
    /// Archive ID (av number).
    pub aid: u64,
    /// Content ID of the first part, 0 when the backend does not report it.
    pub cid: u64,
    /// BV identifier.
    pub bvid: String,
    pub title: String,
    /// Cover image URL.
    pub cover: String,
    /// Uploader display name.
    pub author: String,
    /// Uploader user ID.
    pub author_mid: u64,
    /// Uploader avatar URL.
    pub author_face: String,
    /// Duration in seconds.
    pub duration_secs: u64,
    /// Play count.
    pub play: u64,
    /// Danmaku count.
    pub danmaku: u64,
    /// Unix timestamp (seconds) of publication.
    pub published_at: i64,
}

/// One page of the dynamic video feed.
///
/// Pass `offset` and `update_baseline` back in the next request to continue.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DynamicVideoData {
    pub videos: Vec<DynamicVideo>,
    /// Whether another page can be requested with `offset`.
    pub has_more: bool,
    /// Opaque continuation cursor.
    pub offset: String,
    /// Baseline cursor for "new since" checks.
    pub update_baseline: String,
    /// Number of new items since the previous baseline.
    pub update_num: u64,
}
