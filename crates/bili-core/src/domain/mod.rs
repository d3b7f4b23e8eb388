//! Domain types for the bili user access layer.
//!
//! These are the normalized shapes every backend maps into. They carry no
//! transport details and are owned by the caller once returned.

mod dynamic;
mod relation;
mod transport;
mod user;
mod video;

pub use dynamic::{DynamicVideo, DynamicVideoData};
pub use relation::{FollowAction, FollowActionSource, RelationStat, RelationType};
pub use transport::TransportMode;
pub use user::FollowedUser;
pub use video::{SpaceVideo, SpaceVideoOrder};
