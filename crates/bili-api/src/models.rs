//! Internal API response types.
//!
//! These mirror the web and app JSON payloads and are internal to `bili-api`.
//! External consumers get the normalized domain types from `bili-core`.

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::time::Duration;
use url::Url;

use crate::error::{ApiError, ApiResult};
use crate::parsing::parse_count;

// ============================================================================
// Configuration (used internally, see config.rs for public config)
// ============================================================================

/// Internal configuration for the bili client.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL for the web API (default: <https://api.bilibili.com>)
    pub web_base_url: Url,
    /// Base URL for the app HTTP API (default: <https://app.bilibili.com>)
    pub app_base_url: Url,
    /// User agent sent with every HTTP request
    pub user_agent: String,
    /// HTTP request timeout
    pub timeout: Duration,
    /// Page size for the followings walk (default: 50)
    pub followings_page_size: u32,
    /// UTC offset in hours for app feed requests (default: 8)
    pub local_time: i32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            web_base_url: Url::parse("https://api.bilibili.com").expect("default web URL is valid"),
            app_base_url: Url::parse("https://app.bilibili.com").expect("default app URL is valid"),
            user_agent: concat!("bili-api/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(30),
            followings_page_size: 50,
            local_time: 8,
        }
    }
}

// ============================================================================
// Response Envelope
// ============================================================================

/// Envelope shared by every JSON endpoint.
///
/// Most endpoints put the payload in `data`; PGC endpoints use `result`.
#[derive(Debug, Deserialize)]
pub struct BiliResponse<T> {
    pub code: i64,
    #[serde(default)]
    pub message: String,
    #[serde(alias = "result")]
    pub data: Option<T>,
}

impl<T> BiliResponse<T> {
    /// Unwrap the payload, treating a non-zero code or missing payload as an error.
    pub fn into_data(self) -> ApiResult<T> {
        if self.code != 0 {
            return Err(ApiError::ServerCode {
                code: self.code,
                message: self.message,
            });
        }
        self.data.ok_or_else(|| ApiError::InvalidResponse {
            message: "response envelope has no payload".to_string(),
        })
    }
}

/// Accept a count as a number, a numeric string, or a display string like
/// `"1.2万"`. Anything else becomes 0.
fn lenient_u64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => n.as_u64().unwrap_or(0),
        Value::String(s) => parse_count(&s),
        _ => 0,
    })
}

// ============================================================================
// Relation
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct RelationData {
    #[serde(default)]
    pub relation: RelationInfo,
}

#[derive(Debug, Default, Deserialize)]
pub struct RelationInfo {
    #[serde(default)]
    pub attribute: i32,
}

#[derive(Debug, Deserialize)]
pub struct RelationStatData {
    #[serde(default)]
    pub mid: u64,
    #[serde(default)]
    pub following: u64,
    #[serde(default)]
    pub whisper: u64,
    #[serde(default)]
    pub black: u64,
    #[serde(default)]
    pub follower: u64,
}

#[derive(Debug, Deserialize)]
pub struct SeasonFollowData {
    #[serde(default)]
    pub toast: String,
}

// ============================================================================
// Followings
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct FollowingsData {
    #[serde(default)]
    pub list: Vec<FollowingItem>,
    #[serde(default)]
    pub total: u64,
}

#[derive(Debug, Deserialize)]
pub struct FollowingItem {
    pub mid: u64,
    #[serde(default)]
    pub attribute: i32,
    #[serde(default)]
    pub mtime: i64,
    #[serde(default)]
    pub uname: String,
    #[serde(default)]
    pub face: String,
    #[serde(default)]
    pub sign: String,
    #[serde(default)]
    pub official_verify: Option<OfficialVerify>,
}

#[derive(Debug, Deserialize)]
pub struct OfficialVerify {
    #[serde(rename = "type", default)]
    pub kind: i32,
    #[serde(default)]
    pub desc: String,
}

// ============================================================================
// Space Videos
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct WebSpaceVideoData {
    pub list: Option<WebSpaceVideoList>,
}

#[derive(Debug, Deserialize)]
pub struct WebSpaceVideoList {
    #[serde(default)]
    pub vlist: Vec<WebSpaceVideoItem>,
}

/// One entry of the web `vlist`.
#[derive(Debug, Deserialize)]
pub struct WebSpaceVideoItem {
    #[serde(default, deserialize_with = "lenient_u64")]
    pub aid: u64,
    #[serde(default)]
    pub bvid: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub pic: String,
    #[serde(default)]
    pub author: String,
    /// Duration text, `"mm:ss"` or `"h:mm:ss"`
    #[serde(default)]
    pub length: String,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub play: u64,
    /// Danmaku count
    #[serde(default, deserialize_with = "lenient_u64")]
    pub video_review: u64,
    #[serde(default)]
    pub created: i64,
}

#[derive(Debug, Deserialize)]
pub struct AppSpaceVideoData {
    #[serde(default)]
    pub item: Vec<AppSpaceVideoItem>,
}

/// One entry of the app `item` list.
#[derive(Debug, Deserialize)]
pub struct AppSpaceVideoItem {
    /// Archive ID as a string
    #[serde(default)]
    pub param: String,
    #[serde(default)]
    pub bvid: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub cover: String,
    #[serde(default)]
    pub author: String,
    /// Duration in seconds
    #[serde(default)]
    pub duration: u64,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub play: u64,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub danmaku: u64,
    #[serde(default)]
    pub ctime: i64,
}

// ============================================================================
// Web Dynamic Feed
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct WebDynamicData {
    #[serde(default)]
    pub has_more: bool,
    #[serde(default)]
    pub items: Vec<WebDynamicItem>,
    #[serde(default)]
    pub offset: String,
    #[serde(default)]
    pub update_baseline: String,
    #[serde(default)]
    pub update_num: u64,
}

#[derive(Debug, Deserialize)]
pub struct WebDynamicItem {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub modules: WebDynamicModules,
}

#[derive(Debug, Default, Deserialize)]
pub struct WebDynamicModules {
    #[serde(default)]
    pub module_author: WebModuleAuthor,
    #[serde(default)]
    pub module_dynamic: WebModuleDynamic,
}

#[derive(Debug, Default, Deserialize)]
pub struct WebModuleAuthor {
    #[serde(default)]
    pub mid: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub face: String,
    #[serde(default)]
    pub pub_ts: i64,
}

#[derive(Debug, Default, Deserialize)]
pub struct WebModuleDynamic {
    pub major: Option<WebDynamicMajor>,
}

#[derive(Debug, Deserialize)]
pub struct WebDynamicMajor {
    pub archive: Option<WebDynamicArchive>,
}

#[derive(Debug, Deserialize)]
pub struct WebDynamicArchive {
    #[serde(default, deserialize_with = "lenient_u64")]
    pub aid: u64,
    #[serde(default)]
    pub bvid: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub cover: String,
    #[serde(default)]
    pub duration_text: String,
    #[serde(default)]
    pub stat: WebArchiveStat,
}

#[derive(Debug, Default, Deserialize)]
pub struct WebArchiveStat {
    #[serde(default, deserialize_with = "lenient_u64")]
    pub play: u64,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub danmaku: u64,
}
