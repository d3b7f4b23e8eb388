//! User relationship and content-feed port definitions.
//!
//! This module defines the caller-facing operation family and its DTOs.
//! The implementation lives in `bili-api`.

mod error;
mod port;
mod types;

pub use error::{UserPortError, UserPortResult};
pub use port::UserPort;
pub use types::{BestEffort, DynamicVideoQuery, SpaceVideoQuery};
