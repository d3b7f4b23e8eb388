//! Bili client and its per-transport backend adapters.
//!
//! The client resolves a `TransportMode` into one `UserBackend` object for
//! the duration of a call. Operation bodies never branch on the mode.

mod app;
mod web;

use std::sync::Arc;

use async_trait::async_trait;
use bili_core::{
    AuthRepository, Credentials, DynamicVideoData, DynamicVideoQuery, FollowAction, FollowedUser,
    RelationStat, RelationType, SpaceVideo, SpaceVideoQuery, TransportMode,
};
use url::Url;

use crate::config::ApiClientConfig;
use crate::error::ApiResult;
use crate::http::{HttpBackend, ReqwestBackend};
use crate::models::ApiConfig;
use crate::pagination::{fetch_all_pages, Page};
use crate::rpc::{DynamicRpc, GrpcDynamicBackend, SharedChannels};

use app::AppBackend;
use web::WebBackend;

// ============================================================================
// Backend Adapter Trait
// ============================================================================

/// One logical operation per method, implemented once per transport.
///
/// Adapters build the transport request, send it, and normalize the answer.
/// They never swallow errors.
#[async_trait]
pub(crate) trait UserBackend: Send + Sync {
    /// Returns whether the server reported success.
    async fn modify_follow(&self, mid: u64, action: FollowAction) -> ApiResult<bool>;

    async fn relation(&self, mid: u64) -> ApiResult<RelationType>;

    async fn relation_stat(&self, mid: u64) -> ApiResult<RelationStat>;

    /// Returns the server's confirmation toast.
    async fn modify_season_follow(&self, season_id: u64, action: FollowAction)
    -> ApiResult<String>;

    async fn space_videos(&self, query: &SpaceVideoQuery) -> ApiResult<Vec<SpaceVideo>>;

    async fn dynamic_videos(&self, query: &DynamicVideoQuery) -> ApiResult<DynamicVideoData>;

    async fn followings_page(
        &self,
        mid: u64,
        page: u32,
        page_size: u32,
    ) -> ApiResult<Page<FollowedUser>>;
}

// ============================================================================
// Type Aliases
// ============================================================================

/// Default client using the reqwest HTTP backend and the tonic RPC backend.
pub type DefaultBiliClient = BiliClient<ReqwestBackend, GrpcDynamicBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for the bili user relationship and content-feed APIs.
///
/// This client is generic over its HTTP and RPC backends, allowing for easy
/// testing. Use `DefaultBiliClient` for production code and talk to it
/// through the `UserPort` trait.
pub struct BiliClient<H: HttpBackend, R: DynamicRpc> {
    pub(crate) http: H,
    pub(crate) rpc: R,
    pub(crate) config: ApiConfig,
    pub(crate) auth: Arc<dyn AuthRepository>,
}

impl DefaultBiliClient {
    /// Create a new client.
    ///
    /// `auth` supplies credentials on every call; `channels` supplies the
    /// gRPC channel for app-mode dynamic feed requests.
    pub fn new(
        config: &ApiClientConfig,
        auth: Arc<dyn AuthRepository>,
        channels: SharedChannels,
    ) -> bili_core::UserPortResult<Self> {
        let internal_config = Self::to_internal_config(config);
        let http = ReqwestBackend::new(&internal_config).map_err(crate::port::map_error)?;
        Ok(Self {
            http,
            rpc: GrpcDynamicBackend::new(channels),
            config: internal_config,
            auth,
        })
    }

    fn to_internal_config(config: &ApiClientConfig) -> ApiConfig {
        let defaults = ApiConfig::default();
        ApiConfig {
            web_base_url: Url::parse(&config.web_base_url).unwrap_or(defaults.web_base_url),
            app_base_url: Url::parse(&config.app_base_url).unwrap_or(defaults.app_base_url),
            user_agent: config.user_agent.clone(),
            timeout: config.timeout,
            followings_page_size: config.followings_page_size,
            local_time: config.local_time,
        }
    }
}

impl<H: HttpBackend, R: DynamicRpc> BiliClient<H, R> {
    /// Create a new client with custom backends.
    ///
    /// Use this for testing with fake backends.
    #[cfg(test)]
    pub(crate) fn with_backends(
        config: ApiConfig,
        http: H,
        rpc: R,
        auth: Arc<dyn AuthRepository>,
    ) -> Self {
        Self {
            http,
            rpc,
            config,
            auth,
        }
    }

    /// Resolve the adapter for `mode`, bound to one credential snapshot.
    pub(crate) fn backend<'a>(
        &'a self,
        mode: TransportMode,
        credentials: &'a Credentials,
    ) -> Box<dyn UserBackend + 'a> {
        match mode {
            TransportMode::Web => Box::new(WebBackend {
                http: &self.http,
                config: &self.config,
                credentials,
            }),
            TransportMode::App => Box::new(AppBackend {
                http: &self.http,
                rpc: &self.rpc,
                config: &self.config,
                credentials,
            }),
        }
    }

    /// Fetch every user `mid` follows, walking all pages concurrently.
    pub(crate) async fn followed_users(
        &self,
        mid: u64,
        mode: TransportMode,
    ) -> ApiResult<Vec<FollowedUser>> {
        let credentials = self.auth.credentials();
        let backend = self.backend(mode, &credentials);
        let page_size = self.config.followings_page_size;

        fetch_all_pages(page_size, |page| {
            backend.followings_page(mid, page, page_size)
        })
        .await
    }
}
