//! Core-owned DTOs for user port operations.

use serde::{Deserialize, Serialize};

use super::error::UserPortError;
use crate::domain::SpaceVideoOrder;

/// Outcome of a best-effort read.
///
/// Best-effort operations never fail outright. They distinguish a real
/// value, "could not ask" (no credentials), and "asked but failed".
#[derive(Debug)]
pub enum BestEffort<T> {
    /// The backend answered.
    Value(T),
    /// No credentials were available, so no request was made.
    Unknown,
    /// The request was made and failed. The failure has already been logged.
    Failed(UserPortError),
}

impl<T> BestEffort<T> {
    /// The value, if the backend answered.
    pub fn value(self) -> Option<T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Unknown | Self::Failed(_) => None,
        }
    }

    pub const fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    pub const fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }

    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// The value, or `default` for both unknown and failed outcomes.
    pub fn unwrap_or(self, default: T) -> T {
        self.value().unwrap_or(default)
    }

    /// Transform the value, keeping unknown and failed outcomes.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> BestEffort<U> {
        match self {
            Self::Value(value) => BestEffort::Value(f(value)),
            Self::Unknown => BestEffort::Unknown,
            Self::Failed(err) => BestEffort::Failed(err),
        }
    }
}

impl<T: Default> BestEffort<T> {
    /// The value, or `T::default()` for both unknown and failed outcomes.
    ///
    /// This collapses the three outcomes the way older callers expect
    /// (e.g. a following count of 0).
    pub fn unwrap_or_default(self) -> T {
        self.value().unwrap_or_default()
    }
}

/// Parameters for listing a user's uploaded videos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpaceVideoQuery {
    /// Uploader user ID.
    pub mid: u64,
    pub order: SpaceVideoOrder,
    /// 1-based page number.
    pub page_number: u32,
    pub page_size: u32,
}

impl SpaceVideoQuery {
    /// Query the first page (30 items, newest first) of a user's videos.
    #[must_use]
    pub fn new(mid: u64) -> Self {
        Self {
            mid,
            order: SpaceVideoOrder::default(),
            page_number: 1,
            page_size: 30,
        }
    }

    #[must_use]
    pub const fn with_order(mut self, order: SpaceVideoOrder) -> Self {
        self.order = order;
        self
    }

    #[must_use]
    pub const fn with_page(mut self, page_number: u32) -> Self {
        self.page_number = page_number;
        self
    }

    #[must_use]
    pub const fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }
}

/// Parameters for one page of the dynamic video feed.
///
/// Leave `offset` empty to request the newest items; pass the `offset` of
/// the previous page to continue into history.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DynamicVideoQuery {
    /// 1-based page index.
    pub page: u32,
    /// Continuation cursor from the previous page.
    pub offset: String,
    /// Update baseline cursor from the previous page.
    pub update_baseline: String,
}

impl DynamicVideoQuery {
    /// Query the first (freshest) page.
    #[must_use]
    pub fn first_page() -> Self {
        Self {
            page: 1,
            ..Self::default()
        }
    }

    /// Continue after a previously returned page.
    #[must_use]
    pub fn next_page(
        page: u32,
        offset: impl Into<String>,
        update_baseline: impl Into<String>,
    ) -> Self {
        Self {
            page,
            offset: offset.into(),
            update_baseline: update_baseline.into(),
        }
    }

    /// Whether this query asks for the freshest items rather than history.
    pub fn is_fresh(&self) -> bool {
        self.offset.is_empty()
    }
}
