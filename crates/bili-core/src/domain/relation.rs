//! Relationship types: follow actions, relation attributes and counts.

use serde::{Deserialize, Serialize};

/// Follow mutation direction.
///
/// Used for both user follows and season (PGC) follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FollowAction {
    /// Start following.
    Add,
    /// Stop following.
    Remove,
}

impl FollowAction {
    /// The `act` code sent to the relation modify endpoint.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Add => 1,
            Self::Remove => 2,
        }
    }
}

/// Where a follow mutation was triggered from (`re_src`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FollowActionSource {
    /// A user's space page.
    #[default]
    Space,
    /// A video detail page.
    Video,
    /// Search results.
    Search,
}

impl FollowActionSource {
    /// The `re_src` code sent to the relation modify endpoint.
    #[must_use]
    pub const fn code(self) -> u16 {
        match self {
            Self::Space => 11,
            Self::Video => 14,
            Self::Search => 15,
        }
    }
}

/// Relation attribute between the current account and another user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum RelationType {
    #[default]
    NotFollowed,
    FollowedQuietly,
    Followed,
    BothFollowed,
    Blocked,
    /// Attribute code this client does not know about.
    Unknown(i32),
}

impl RelationType {
    /// Map a raw attribute code to a relation.
    #[must_use]
    pub const fn from_code(code: i32) -> Self {
        match code {
            0 => Self::NotFollowed,
            1 => Self::FollowedQuietly,
            2 => Self::Followed,
            6 => Self::BothFollowed,
            128 => Self::Blocked,
            other => Self::Unknown(other),
        }
    }

    /// The raw attribute code.
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::NotFollowed => 0,
            Self::FollowedQuietly => 1,
            Self::Followed => 2,
            Self::BothFollowed => 6,
            Self::Blocked => 128,
            Self::Unknown(code) => code,
        }
    }

    /// Whether the current account follows the other user, quietly or not.
    #[must_use]
    pub const fn is_following(self) -> bool {
        matches!(
            self,
            Self::Followed | Self::FollowedQuietly | Self::BothFollowed
        )
    }
}

impl From<i32> for RelationType {
    fn from(code: i32) -> Self {
        Self::from_code(code)
    }
}

impl From<RelationType> for i32 {
    fn from(relation: RelationType) -> Self {
        relation.code()
    }
}

/// Relationship counters for one user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RelationStat {
    /// User these counters belong to.
    pub mid: u64,
    /// Number of users followed publicly.
    pub following: u64,
    /// Number of users followed quietly.
    pub whisper: u64,
    /// Number of blocked users.
    pub black: u64,
    /// Number of followers.
    pub follower: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_following_membership() {
        assert!(RelationType::Followed.is_following());
        assert!(RelationType::FollowedQuietly.is_following());
        assert!(RelationType::BothFollowed.is_following());
        assert!(!RelationType::NotFollowed.is_following());
        assert!(!RelationType::Blocked.is_following());
        assert!(!RelationType::Unknown(3).is_following());
    }

    #[test]
    fn test_unknown_code_survives() {
        let relation = RelationType::from_code(42);
        assert_eq!(relation, RelationType::Unknown(42));
        assert_eq!(relation.code(), 42);
    }

    #[test]
    fn test_relation_deserializes_from_code() {
        let relation: RelationType = serde_json::from_str("6").unwrap();
        assert_eq!(relation, RelationType::BothFollowed);
    }

    #[test]
    fn test_action_codes() {
        assert_eq!(FollowAction::Add.code(), 1);
        assert_eq!(FollowAction::Remove.code(), 2);
        assert_eq!(FollowActionSource::default().code(), 11);
    }
}
