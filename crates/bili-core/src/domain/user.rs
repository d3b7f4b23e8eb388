//! Followed user record.

use serde::{Deserialize, Serialize};

use super::relation::RelationType;

/// A user the queried account follows.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FollowedUser {
    /// User ID.
    pub mid: u64,
    /// Display name.
    pub name: String,
    /// Avatar URL.
    pub avatar: String,
    /// Profile signature.
    pub sign: String,
    /// Unix timestamp (seconds) of when the follow happened.
    pub followed_at: i64,
    /// Relation of the queried account to this user.
    pub attribute: RelationType,
    /// Official verification text, empty when unverified.
    pub official_desc: String,
}
