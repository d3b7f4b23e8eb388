//! Port trait implementation for `BiliClient`.
//!
//! This module implements the core-owned `UserPort` trait for `BiliClient`,
//! converting internal errors to port errors and applying each operation's
//! failure policy: relation reads are best-effort, everything else
//! propagates.

use async_trait::async_trait;
use bili_core::{
    BestEffort, DynamicVideoData, DynamicVideoQuery, FollowAction, FollowedUser, RelationStat,
    SpaceVideo, SpaceVideoQuery, TransportMode, UserPort, UserPortError, UserPortResult,
};

use crate::client::BiliClient;
use crate::error::{ApiError, ApiResult};
use crate::http::HttpBackend;
use crate::rpc::DynamicRpc;

// ============================================================================
// Error Mapping
// ============================================================================

/// Convert internal `ApiError` to core `UserPortError`.
pub(crate) fn map_error(err: ApiError) -> UserPortError {
    match err {
        ApiError::AuthMissing { credential } => UserPortError::AuthMissing { credential },
        err @ ApiError::ChannelUnavailable => UserPortError::TransportUnavailable {
            message: err.to_string(),
        },
        ApiError::PageFailed { page, source } => UserPortError::AggregateFailure {
            page,
            message: source.to_string(),
        },
        other => UserPortError::Transport {
            message: other.to_string(),
        },
    }
}

/// Turn a best-effort result into a `BestEffort`, logging failures.
fn settle<T>(
    operation: &'static str,
    mid: u64,
    mode: TransportMode,
    result: ApiResult<T>,
) -> BestEffort<T> {
    match result {
        Ok(value) => BestEffort::Value(value),
        Err(err) => {
            tracing::warn!(operation, mid, %mode, error = %err, "Best-effort request failed");
            BestEffort::Failed(map_error(err))
        }
    }
}

impl<H: HttpBackend, R: DynamicRpc> BiliClient<H, R> {
    async fn modify_follow(
        &self,
        mid: u64,
        action: FollowAction,
        mode: TransportMode,
    ) -> UserPortResult<bool> {
        let credentials = self.auth.credentials();
        self.backend(mode, &credentials)
            .modify_follow(mid, action)
            .await
            .map_err(map_error)
    }

    async fn modify_season_follow(
        &self,
        season_id: u64,
        action: FollowAction,
        mode: TransportMode,
    ) -> UserPortResult<String> {
        let credentials = self.auth.credentials();
        self.backend(mode, &credentials)
            .modify_season_follow(season_id, action)
            .await
            .map_err(map_error)
    }
}

// ============================================================================
// Port Implementation
// ============================================================================

#[async_trait]
impl<H: HttpBackend, R: DynamicRpc> UserPort for BiliClient<H, R> {
    async fn follow(&self, mid: u64, mode: TransportMode) -> UserPortResult<bool> {
        self.modify_follow(mid, FollowAction::Add, mode).await
    }

    async fn unfollow(&self, mid: u64, mode: TransportMode) -> UserPortResult<bool> {
        self.modify_follow(mid, FollowAction::Remove, mode).await
    }

    async fn is_following(&self, mid: u64, mode: TransportMode) -> BestEffort<bool> {
        let credentials = self.auth.credentials();
        if !credentials.has_any() {
            return BestEffort::Unknown;
        }
        let result = self.backend(mode, &credentials).relation(mid).await;
        settle("is_following", mid, mode, result).map(|relation| relation.is_following())
    }

    async fn relation_stat(&self, mid: u64, mode: TransportMode) -> BestEffort<RelationStat> {
        let credentials = self.auth.credentials();
        if !credentials.has_any() {
            return BestEffort::Unknown;
        }
        let result = self.backend(mode, &credentials).relation_stat(mid).await;
        settle("relation_stat", mid, mode, result)
    }

    async fn following_count(&self, mid: u64, mode: TransportMode) -> BestEffort<u64> {
        self.relation_stat(mid, mode)
            .await
            .map(|stat| stat.following)
    }

    async fn add_season_follow(
        &self,
        season_id: u64,
        mode: TransportMode,
    ) -> UserPortResult<String> {
        self.modify_season_follow(season_id, FollowAction::Add, mode)
            .await
    }

    async fn remove_season_follow(
        &self,
        season_id: u64,
        mode: TransportMode,
    ) -> UserPortResult<String> {
        self.modify_season_follow(season_id, FollowAction::Remove, mode)
            .await
    }

    async fn list_space_videos(
        &self,
        query: &SpaceVideoQuery,
        mode: TransportMode,
    ) -> UserPortResult<Vec<SpaceVideo>> {
        let credentials = self.auth.credentials();
        self.backend(mode, &credentials)
            .space_videos(query)
            .await
            .map_err(map_error)
    }

    async fn list_dynamic_videos(
        &self,
        query: &DynamicVideoQuery,
        mode: TransportMode,
    ) -> UserPortResult<DynamicVideoData> {
        let credentials = self.auth.credentials();
        self.backend(mode, &credentials)
            .dynamic_videos(query)
            .await
            .map_err(map_error)
    }

    async fn list_followed_users(
        &self,
        mid: u64,
        mode: TransportMode,
    ) -> UserPortResult<Vec<FollowedUser>> {
        self.followed_users(mid, mode).await.map_err(map_error)
    }
}
