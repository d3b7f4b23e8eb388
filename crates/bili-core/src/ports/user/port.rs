//! User port trait.

use async_trait::async_trait;

use super::error::UserPortResult;
use super::types::{BestEffort, DynamicVideoQuery, SpaceVideoQuery};
use crate::domain::{DynamicVideoData, FollowedUser, RelationStat, SpaceVideo, TransportMode};

/// Port trait for user relationship and content-feed operations.
///
/// Every operation behaves the same whichever `TransportMode` is chosen and
/// returns the same normalized types.
///
/// # Design
///
/// - Mutations and full listings propagate every failure
/// - Relation reads are best-effort and return `BestEffort`
/// - Credentials are read once per call from the auth collaborator
#[async_trait]
pub trait UserPort: Send + Sync {
    /// Follow a user. Returns whether the server accepted the change.
    async fn follow(&self, mid: u64, mode: TransportMode) -> UserPortResult<bool>;

    /// Unfollow a user. Returns whether the server accepted the change.
    async fn unfollow(&self, mid: u64, mode: TransportMode) -> UserPortResult<bool>;

    /// Check whether the current account follows `mid`.
    async fn is_following(&self, mid: u64, mode: TransportMode) -> BestEffort<bool>;

    /// Relationship counters for `mid`.
    async fn relation_stat(&self, mid: u64, mode: TransportMode) -> BestEffort<RelationStat>;

    /// Number of users `mid` follows.
    async fn following_count(&self, mid: u64, mode: TransportMode) -> BestEffort<u64>;

    /// Follow a season (PGC series). Returns the backend's confirmation text.
    async fn add_season_follow(&self, season_id: u64, mode: TransportMode)
    -> UserPortResult<String>;

    /// Unfollow a season. Returns the backend's confirmation text.
    async fn remove_season_follow(
        &self,
        season_id: u64,
        mode: TransportMode,
    ) -> UserPortResult<String>;

    /// One page of a user's uploaded videos.
    async fn list_space_videos(
        &self,
        query: &SpaceVideoQuery,
        mode: TransportMode,
    ) -> UserPortResult<Vec<SpaceVideo>>;

    /// One page of the followed-uploaders video feed.
    async fn list_dynamic_videos(
        &self,
        query: &DynamicVideoQuery,
        mode: TransportMode,
    ) -> UserPortResult<DynamicVideoData>;

    /// Every user `mid` follows, fetched across all pages.
    async fn list_followed_users(
        &self,
        mid: u64,
        mode: TransportMode,
    ) -> UserPortResult<Vec<FollowedUser>>;
}
