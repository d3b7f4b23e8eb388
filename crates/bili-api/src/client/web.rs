//! Web backend adapter: cookie-authenticated HTTP.

use async_trait::async_trait;
use bili_core::{
    Credentials, DynamicVideoData, DynamicVideoQuery, FollowAction, FollowActionSource,
    FollowedUser, RelationStat, RelationType, SpaceVideo, SpaceVideoQuery,
};

use crate::endpoints;
use crate::error::ApiResult;
use crate::http::{HttpBackend, HttpRequest};
use crate::models::{
    ApiConfig, BiliResponse, FollowingsData, RelationData, RelationStatData, SeasonFollowData,
    WebDynamicData, WebSpaceVideoData,
};
use crate::pagination::Page;
use crate::parsing;

use super::UserBackend;

/// Web adapter bound to one credential snapshot.
///
/// Mutations need both `SESSDATA` and the CSRF token. Reads send the cookie
/// when there is one and go out anonymously otherwise.
pub(crate) struct WebBackend<'a, H: HttpBackend> {
    pub(crate) http: &'a H,
    pub(crate) config: &'a ApiConfig,
    pub(crate) credentials: &'a Credentials,
}

impl<H: HttpBackend> WebBackend<'_, H> {
    /// Session cookie and CSRF token, both required.
    fn session_and_csrf(&self) -> ApiResult<(&str, &str)> {
        let sess_data = self.credentials.require_sess_data()?;
        let csrf = self.credentials.require_csrf()?;
        Ok((sess_data, csrf))
    }
}

#[async_trait]
impl<'a, H: HttpBackend> UserBackend for WebBackend<'a, H> {
    async fn modify_follow(&self, mid: u64, action: FollowAction) -> ApiResult<bool> {
        let (sess_data, csrf) = self.session_and_csrf()?;
        let request = HttpRequest::post(endpoints::relation_modify_url(self.config))
            .with_form_field("fid", mid)
            .with_form_field("act", action.code())
            .with_form_field("re_src", FollowActionSource::Space.code())
            .with_form_field("csrf", csrf)
            .with_session(Some(sess_data));

        let response: BiliResponse<serde_json::Value> = self.http.send_json(&request).await?;
        if response.code != 0 {
            tracing::debug!(
                mid,
                code = response.code,
                reason = %response.message,
                "Follow change rejected"
            );
        }
        Ok(response.code == 0)
    }

    async fn relation(&self, mid: u64) -> ApiResult<RelationType> {
        let request = HttpRequest::get(endpoints::relation_url(self.config, mid))
            .with_session(self.credentials.sess_data());
        let response: BiliResponse<RelationData> = self.http.send_json(&request).await?;
        Ok(RelationType::from_code(response.into_data()?.relation.attribute))
    }

    async fn relation_stat(&self, mid: u64) -> ApiResult<RelationStat> {
        let request = HttpRequest::get(endpoints::relation_stat_url(self.config, mid))
            .with_session(self.credentials.sess_data());
        let response: BiliResponse<RelationStatData> = self.http.send_json(&request).await?;
        Ok(parsing::to_relation_stat(&response.into_data()?))
    }

    async fn modify_season_follow(
        &self,
        season_id: u64,
        action: FollowAction,
    ) -> ApiResult<String> {
        let (sess_data, csrf) = self.session_and_csrf()?;
        let request = HttpRequest::post(endpoints::season_follow_url(self.config, action))
            .with_form_field("season_id", season_id)
            .with_form_field("csrf", csrf)
            .with_session(Some(sess_data));

        let response: BiliResponse<SeasonFollowData> = self.http.send_json(&request).await?;
        Ok(response.into_data()?.toast)
    }

    async fn space_videos(&self, query: &SpaceVideoQuery) -> ApiResult<Vec<SpaceVideo>> {
        let url = endpoints::web_space_videos_url(
            self.config,
            query.mid,
            query.order,
            query.page_number,
            query.page_size,
        );
        let request = HttpRequest::get(url).with_session(self.credentials.sess_data());

        let response: BiliResponse<WebSpaceVideoData> = self.http.send_json(&request).await?;
        Ok(response
            .into_data()?
            .list
            .map(|list| list.vlist.into_iter().map(parsing::web_space_video).collect())
            .unwrap_or_default())
    }

    async fn dynamic_videos(&self, query: &DynamicVideoQuery) -> ApiResult<DynamicVideoData> {
        let url = endpoints::web_dynamic_url(self.config, query.page, &query.offset);
        let request = HttpRequest::get(url).with_session(self.credentials.sess_data());

        let response: BiliResponse<WebDynamicData> = self.http.send_json(&request).await?;
        Ok(parsing::web_dynamic_data(response.into_data()?))
    }

    async fn followings_page(
        &self,
        mid: u64,
        page: u32,
        page_size: u32,
    ) -> ApiResult<Page<FollowedUser>> {
        let sess_data = self.credentials.require_sess_data()?;
        let request = HttpRequest::get(endpoints::followings_url(self.config, mid, page, page_size))
            .with_session(Some(sess_data));

        let response: BiliResponse<FollowingsData> = self.http.send_json(&request).await?;
        let data = response.into_data()?;
        Ok(Page {
            total: data.total,
            items: data.list.into_iter().map(parsing::to_followed_user).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::http::testing::{CannedResponse, FakeBackend};
    use bili_core::CredentialKind;
    use serde_json::json;

    fn backend<'a>(
        http: &'a FakeBackend,
        config: &'a ApiConfig,
        credentials: &'a Credentials,
    ) -> WebBackend<'a, FakeBackend> {
        WebBackend {
            http,
            config,
            credentials,
        }
    }

    #[tokio::test]
    async fn test_follow_sends_cookie_csrf_and_action() {
        let http = FakeBackend::new().with_response(
            "relation/modify",
            CannedResponse::json(json!({"code": 0, "message": "0", "ttl": 1})),
        );
        let config = ApiConfig::default();
        let credentials = Credentials::new().with_web_session("sess", "jct");

        let accepted = backend(&http, &config, &credentials)
            .modify_follow(42, FollowAction::Add)
            .await
            .unwrap();

        assert!(accepted);
        let request = &http.requests()[0];
        assert_eq!(request.sess_data.as_deref(), Some("sess"));
        assert_eq!(request.form_value("fid"), Some("42"));
        assert_eq!(request.form_value("act"), Some("1"));
        assert_eq!(request.form_value("re_src"), Some("11"));
        assert_eq!(request.form_value("csrf"), Some("jct"));
    }

    #[tokio::test]
    async fn test_follow_rejected_code_is_false_not_error() {
        let http = FakeBackend::new().with_response(
            "relation/modify",
            CannedResponse::json(json!({"code": 22014, "message": "already following"})),
        );
        let config = ApiConfig::default();
        let credentials = Credentials::new().with_web_session("sess", "jct");

        let accepted = backend(&http, &config, &credentials)
            .modify_follow(42, FollowAction::Add)
            .await
            .unwrap();
        assert!(!accepted);
    }

    #[tokio::test]
    async fn test_follow_without_csrf_fails_before_request() {
        let http = FakeBackend::new();
        let config = ApiConfig::default();
        let credentials = Credentials {
            sess_data: Some("sess".to_string()),
            ..Credentials::default()
        };

        let result = backend(&http, &config, &credentials)
            .modify_follow(42, FollowAction::Remove)
            .await;

        assert!(matches!(
            result,
            Err(ApiError::AuthMissing {
                credential: CredentialKind::Csrf
            })
        ));
        assert_eq!(http.request_count(), 0);
    }

    #[tokio::test]
    async fn test_space_videos_without_list_is_empty() {
        let http = FakeBackend::new().with_response(
            "space/arc/search",
            CannedResponse::json(json!({"code": 0, "data": {"list": null}})),
        );
        let config = ApiConfig::default();
        let credentials = Credentials::new();

        let videos = backend(&http, &config, &credentials)
            .space_videos(&SpaceVideoQuery::new(1))
            .await
            .unwrap();

        assert!(videos.is_empty());
        assert!(http.requests()[0].sess_data.is_none());
    }

    #[tokio::test]
    async fn test_relation_reads_attribute() {
        let http = FakeBackend::new().with_response(
            "space/acc/relation",
            CannedResponse::json(json!({
                "code": 0,
                "data": {"relation": {"mid": 42, "attribute": 1}, "be_relation": {}}
            })),
        );
        let config = ApiConfig::default();
        let credentials = Credentials::new().with_web_session("sess", "jct");

        let relation = backend(&http, &config, &credentials)
            .relation(42)
            .await
            .unwrap();
        assert_eq!(relation, RelationType::FollowedQuietly);
    }

    #[tokio::test]
    async fn test_season_follow_returns_toast() {
        let http = FakeBackend::new().with_response(
            "pgc/web/follow/del",
            CannedResponse::json(json!({
                "code": 0,
                "message": "success",
                "result": {"relation": 0, "status": 0, "toast": "已取消追番"}
            })),
        );
        let config = ApiConfig::default();
        let credentials = Credentials::new().with_web_session("sess", "jct");

        let toast = backend(&http, &config, &credentials)
            .modify_season_follow(28_220, FollowAction::Remove)
            .await
            .unwrap();

        assert_eq!(toast, "已取消追番");
        assert_eq!(http.requests()[0].form_value("season_id"), Some("28220"));
    }
}
