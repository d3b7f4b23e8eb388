//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces the access layer expects from its
//! collaborators and the interface it presents to callers.
//!
//! # Design Rules
//!
//! - No `reqwest` or `tonic` types in any signature
//! - Collaborators hand out snapshots; nothing here holds mutable state
//! - Absent credentials and channels are ordinary values, not faults

pub mod auth;
pub mod channel;
pub mod user;

pub use auth::{AuthRepository, CredentialKind, Credentials};
pub use channel::ChannelRepository;
pub use user::{
    BestEffort, DynamicVideoQuery, SpaceVideoQuery, UserPort, UserPortError, UserPortResult,
};
