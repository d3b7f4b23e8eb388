//! Core domain types and port definitions for the bili user access layer.
//!
//! This crate owns everything callers see: the normalized domain model, the
//! `UserPort` operation family, the collaborator ports that supply
//! credentials and RPC channels, and the error taxonomy. Transport
//! implementations live in `bili-api`.

#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    DynamicVideo, DynamicVideoData, FollowAction, FollowActionSource, FollowedUser,
    RelationStat, RelationType, SpaceVideo, SpaceVideoOrder, TransportMode,
};
pub use ports::{
    AuthRepository, BestEffort, ChannelRepository, CredentialKind, Credentials,
    DynamicVideoQuery, SpaceVideoQuery, UserPort, UserPortError, UserPortResult,
};

// Silence unused dev-dependency warnings
#[cfg(test)]
use serde_json as _;
