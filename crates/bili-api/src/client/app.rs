//! App backend adapter: access-token HTTP plus gRPC for the dynamic feed.

use async_trait::async_trait;
use bili_core::{
    Credentials, DynamicVideoData, DynamicVideoQuery, FollowAction, FollowActionSource,
    FollowedUser, RelationStat, RelationType, SpaceVideo, SpaceVideoQuery,
};

use crate::endpoints;
use crate::error::ApiResult;
use crate::http::{HttpBackend, HttpRequest};
use crate::models::{
    ApiConfig, AppSpaceVideoData, BiliResponse, FollowingsData, RelationData, RelationStatData,
    SeasonFollowData,
};
use crate::pagination::Page;
use crate::parsing;
use crate::rpc::proto::{DynVideoReq, Refresh};
use crate::rpc::DynamicRpc;

use super::UserBackend;

/// App adapter bound to one credential snapshot.
///
/// Mutations and the followings walk need the access token. Reads attach it
/// when there is one.
pub(crate) struct AppBackend<'a, H: HttpBackend, R: DynamicRpc> {
    pub(crate) http: &'a H,
    pub(crate) rpc: &'a R,
    pub(crate) config: &'a ApiConfig,
    pub(crate) credentials: &'a Credentials,
}

impl<H: HttpBackend, R: DynamicRpc> AppBackend<'_, H, R> {
    /// Build the `DynVideo` request for a feed query.
    ///
    /// An empty offset reads from the top; anything else continues into history.
    fn dyn_video_request(&self, query: &DynamicVideoQuery) -> DynVideoReq {
        let refresh = if query.is_fresh() {
            Refresh::New
        } else {
            Refresh::History
        };
        DynVideoReq {
            update_baseline: query.update_baseline.clone(),
            offset: query.offset.clone(),
            page: i32::try_from(query.page).unwrap_or(i32::MAX),
            refresh_type: refresh as i32,
            local_time: self.config.local_time,
        }
    }
}

#[async_trait]
impl<'a, H: HttpBackend, R: DynamicRpc> UserBackend for AppBackend<'a, H, R> {
    async fn modify_follow(&self, mid: u64, action: FollowAction) -> ApiResult<bool> {
        let access_key = self.credentials.require_access_token()?;
        let request = HttpRequest::post(endpoints::relation_modify_url(self.config))
            .with_form_field("fid", mid)
            .with_form_field("act", action.code())
            .with_form_field("re_src", FollowActionSource::Space.code())
            .with_access_key(Some(access_key));

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
            .with_access_key(self.credentials.access_token());
        let response: BiliResponse<RelationData> = self.http.send_json(&request).await?;
        Ok(RelationType::from_code(response.into_data()?.relation.attribute))
    }

    async fn relation_stat(&self, mid: u64) -> ApiResult<RelationStat> {
        let request = HttpRequest::get(endpoints::relation_stat_url(self.config, mid))
            .with_access_key(self.credentials.access_token());
        let response: BiliResponse<RelationStatData> = self.http.send_json(&request).await?;
        Ok(parsing::to_relation_stat(&response.into_data()?))
    }

    async fn modify_season_follow(
        &self,
        season_id: u64,
        action: FollowAction,
    ) -> ApiResult<String> {
        let access_key = self.credentials.require_access_token()?;
        let request = HttpRequest::post(endpoints::season_follow_url(self.config, action))
            .with_form_field("season_id", season_id)
            .with_access_key(Some(access_key));

        let response: BiliResponse<SeasonFollowData> = self.http.send_json(&request).await?;
        Ok(response.into_data()?.toast)
    }

    async fn space_videos(&self, query: &SpaceVideoQuery) -> ApiResult<Vec<SpaceVideo>> {
        let url = endpoints::app_space_videos_url(
            self.config,
            query.mid,
            query.order,
            query.page_number,
            query.page_size,
        );
        let request = HttpRequest::get(url).with_access_key(self.credentials.access_token());

        let response: BiliResponse<AppSpaceVideoData> = self.http.send_json(&request).await?;
        Ok(response
            .into_data()?
            .item
            .into_iter()
            .map(parsing::app_space_video)
            .collect())
    }

    async fn dynamic_videos(&self, query: &DynamicVideoQuery) -> ApiResult<DynamicVideoData> {
        let request = self.dyn_video_request(query);
        let reply = self
            .rpc
            .dyn_video(request, self.credentials.access_token())
            .await?;
        Ok(parsing::app_dynamic_data(reply))
    }

    async fn followings_page(
        &self,
        mid: u64,
        page: u32,
        page_size: u32,
    ) -> ApiResult<Page<FollowedUser>> {
        let access_key = self.credentials.require_access_token()?;
        let request = HttpRequest::get(endpoints::followings_url(self.config, mid, page, page_size))
            .with_access_key(Some(access_key));

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
    use crate::rpc::proto::{DynVideoReply, DynamicList};
    use crate::rpc::testing::FakeRpc;
    use bili_core::CredentialKind;
    use serde_json::json;

    #[tokio::test]
    async fn test_fresh_query_uses_new_refresh() {
        let http = FakeBackend::new();
        let rpc = FakeRpc::new(DynVideoReply::default());
        let config = ApiConfig::default();
        let credentials = Credentials::new().with_access_token("token");
        let backend = AppBackend {
            http: &http,
            rpc: &rpc,
            config: &config,
            credentials: &credentials,
        };

        backend
            .dynamic_videos(&DynamicVideoQuery::first_page())
            .await
            .unwrap();

        let (request, access_key) = &rpc.requests()[0];
        assert_eq!(request.refresh_type(), Refresh::New);
        assert_eq!(request.page, 1);
        assert_eq!(request.local_time, 8);
        assert_eq!(access_key.as_deref(), Some("token"));
        assert_eq!(http.request_count(), 0);
    }

    #[tokio::test]
    async fn test_continued_query_uses_history_refresh() {
        let http = FakeBackend::new();
        let rpc = FakeRpc::new(DynVideoReply {
            dynamic_list: Some(DynamicList {
                history_offset: "next".to_string(),
                has_more: true,
                ..DynamicList::default()
            }),
        });
        let config = ApiConfig::default();
        let credentials = Credentials::new();
        let backend = AppBackend {
            http: &http,
            rpc: &rpc,
            config: &config,
            credentials: &credentials,
        };

        let page = backend
            .dynamic_videos(&DynamicVideoQuery::next_page(2, "cursor", "baseline"))
            .await
            .unwrap();

        let (request, access_key) = &rpc.requests()[0];
        assert_eq!(request.refresh_type(), Refresh::History);
        assert_eq!(request.offset, "cursor");
        assert_eq!(request.update_baseline, "baseline");
        assert!(access_key.is_none());
        assert_eq!(page.offset, "next");
        assert!(page.has_more);
    }

    #[tokio::test]
    async fn test_unavailable_channel_propagates() {
        let http = FakeBackend::new();
        let rpc = FakeRpc::unavailable();
        let config = ApiConfig::default();
        let credentials = Credentials::new().with_access_token("token");
        let backend = AppBackend {
            http: &http,
            rpc: &rpc,
            config: &config,
            credentials: &credentials,
        };

        let result = backend
            .dynamic_videos(&DynamicVideoQuery::first_page())
            .await;
        assert!(matches!(result, Err(ApiError::ChannelUnavailable)));
    }

    #[tokio::test]
    async fn test_season_follow_without_token_sends_nothing() {
        let http = FakeBackend::new();
        let rpc = FakeRpc::new(DynVideoReply::default());
        let config = ApiConfig::default();
        let credentials = Credentials::new().with_web_session("sess", "jct");
        let backend = AppBackend {
            http: &http,
            rpc: &rpc,
            config: &config,
            credentials: &credentials,
        };

        let result = backend
            .modify_season_follow(1, FollowAction::Add)
            .await;

        assert!(matches!(
            result,
            Err(ApiError::AuthMissing {
                credential: CredentialKind::AccessToken
            })
        ));
        assert_eq!(http.request_count(), 0);
    }

    #[tokio::test]
    async fn test_space_videos_attach_access_key() {
        let http = FakeBackend::new().with_response(
            "space/archive",
            CannedResponse::json(json!({
                "code": 0,
                "data": {"count": 1, "item": [{"param": "5", "title": "v", "duration": 61}]}
            })),
        );
        let rpc = FakeRpc::new(DynVideoReply::default());
        let config = ApiConfig::default();
        let credentials = Credentials::new().with_access_token("token");
        let backend = AppBackend {
            http: &http,
            rpc: &rpc,
            config: &config,
            credentials: &credentials,
        };

        let videos = backend
            .space_videos(&SpaceVideoQuery::new(9))
            .await
            .unwrap();

        assert_eq!(videos.len(), 1);
        assert_eq!(videos[0].aid, 5);
        assert_eq!(videos[0].duration_secs, 61);
        assert!(http.requests()[0]
            .url
            .query()
            .unwrap()
            .ends_with("access_key=token"));
    }
}
