//! URL construction helpers for the web and app APIs.
//!
//! Pure functions so every adapter builds URLs the same way. Credentials are
//! never added here; `HttpRequest` attaches them.

use bili_core::{FollowAction, SpaceVideoOrder};
use url::Url;

use crate::models::ApiConfig;

/// gRPC path of the app dynamic video feed.
pub const DYN_VIDEO_PATH: &str = "/bilibili.app.dynamic.v2.Dynamic/DynVideo";

fn with_path(base: &Url, path: &str) -> Url {
    let mut url = base.clone();
    let base_path = url.path().trim_end_matches('/').to_string();
    url.set_path(&format!("{base_path}{path}"));
    url
}

/// Follow / unfollow a user (POST form).
pub fn relation_modify_url(config: &ApiConfig) -> Url {
    with_path(&config.web_base_url, "/x/relation/modify")
}

/// Relation between the current account and `mid`.
pub fn relation_url(config: &ApiConfig, mid: u64) -> Url {
    let mut url = with_path(&config.web_base_url, "/x/space/acc/relation");
    url.query_pairs_mut().append_pair("mid", &mid.to_string());
    url
}

/// Following / follower counters of `mid`.
pub fn relation_stat_url(config: &ApiConfig, mid: u64) -> Url {
    let mut url = with_path(&config.web_base_url, "/x/relation/stat");
    url.query_pairs_mut().append_pair("vmid", &mid.to_string());
    url
}

/// Add or remove a season follow (POST form).
pub fn season_follow_url(config: &ApiConfig, action: FollowAction) -> Url {
    let path = match action {
        FollowAction::Add => "/pgc/web/follow/add",
        FollowAction::Remove => "/pgc/web/follow/del",
    };
    with_path(&config.web_base_url, path)
}

/// One page of the users `mid` follows, newest follow first.
pub fn followings_url(config: &ApiConfig, mid: u64, page: u32, page_size: u32) -> Url {
    let mut url = with_path(&config.web_base_url, "/x/relation/followings");
    url.query_pairs_mut()
        .append_pair("vmid", &mid.to_string())
        .append_pair("pn", &page.to_string())
        .append_pair("ps", &page_size.to_string())
        .append_pair("order", "desc");
    url
}

/// Web listing of a user's uploads.
pub fn web_space_videos_url(
    config: &ApiConfig,
    mid: u64,
    order: SpaceVideoOrder,
    page: u32,
    page_size: u32,
) -> Url {
    let mut url = with_path(&config.web_base_url, "/x/space/arc/search");
    url.query_pairs_mut()
        .append_pair("mid", &mid.to_string())
        .append_pair("order", order.as_api_param())
        .append_pair("pn", &page.to_string())
        .append_pair("ps", &page_size.to_string());
    url
}

/// App listing of a user's uploads.
pub fn app_space_videos_url(
    config: &ApiConfig,
    mid: u64,
    order: SpaceVideoOrder,
    page: u32,
    page_size: u32,
) -> Url {
    let mut url = with_path(&config.app_base_url, "/x/v2/space/archive");
    url.query_pairs_mut()
        .append_pair("vmid", &mid.to_string())
        .append_pair("order", order.as_api_param())
        .append_pair("pn", &page.to_string())
        .append_pair("ps", &page_size.to_string());
    url
}

/// Web dynamic feed restricted to video posts.
pub fn web_dynamic_url(config: &ApiConfig, page: u32, offset: &str) -> Url {
    let mut url = with_path(&config.web_base_url, "/x/polymer/web-dynamic/v1/feed/all");
    url.query_pairs_mut()
        .append_pair("type", "video")
        .append_pair("page", &page.to_string())
        .append_pair("offset", offset);
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_followings_url() {
        let url = followings_url(&ApiConfig::default(), 42, 2, 50);
        assert_eq!(url.path(), "/x/relation/followings");
        assert_eq!(url.query(), Some("vmid=42&pn=2&ps=50&order=desc"));
    }

    #[test]
    fn test_season_follow_url_by_action() {
        let config = ApiConfig::default();
        assert!(season_follow_url(&config, FollowAction::Add)
            .path()
            .ends_with("/follow/add"));
        assert!(season_follow_url(&config, FollowAction::Remove)
            .path()
            .ends_with("/follow/del"));
    }

    #[test]
    fn test_base_url_with_prefix_path() {
        let config = ApiConfig {
            web_base_url: Url::parse("http://localhost:9000/proxy/").unwrap(),
            ..ApiConfig::default()
        };
        let url = relation_stat_url(&config, 7);
        assert_eq!(url.as_str(), "http://localhost:9000/proxy/x/relation/stat?vmid=7");
    }

    #[test]
    fn test_space_video_urls_carry_order_and_paging() {
        let config = ApiConfig::default();
        let web = web_space_videos_url(&config, 1, SpaceVideoOrder::Click, 3, 30);
        assert_eq!(web.query(), Some("mid=1&order=click&pn=3&ps=30"));

        let app = app_space_videos_url(&config, 1, SpaceVideoOrder::Stow, 1, 20);
        assert_eq!(app.host_str(), Some("app.bilibili.com"));
        assert_eq!(app.query(), Some("vmid=1&order=stow&pn=1&ps=20"));
    }

    #[test]
    fn test_web_dynamic_url_keeps_empty_offset() {
        let url = web_dynamic_url(&ApiConfig::default(), 1, "");
        assert_eq!(url.query(), Some("type=video&page=1&offset="));
    }
}
