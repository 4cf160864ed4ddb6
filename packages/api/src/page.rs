//! Cursor pagination and the v1 `{ "result": ... }` envelope.

use serde::{Deserialize, Serialize};

/// Default page size when the caller does not pick one.
pub const DEFAULT_LIMIT: u32 = 25;

/// Largest page size the service accepts.
pub const MAX_LIMIT: u32 = 150;

/// Caller-side pagination options for list endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageOptions {
    /// Opaque cursor from a previous page's `next.cursor`.
    pub cursor: Option<String>,

    /// Requested page size.
    pub limit: Option<u32>,
}

impl PageOptions {
    /// First page with the given size.
    pub fn with_limit(limit: u32) -> Self {
        Self {
            cursor: None,
            limit: Some(limit),
        }
    }

    /// Effective limit, clamped to [1, 150]. Returns 25 if not specified.
    pub fn effective_limit(&self) -> u32 {
        self.limit
            .map(|l| l.clamp(1, MAX_LIMIT))
            .unwrap_or(DEFAULT_LIMIT)
    }

    /// Query pairs for `cursor` and `limit`.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("limit", self.effective_limit().to_string())];
        if let Some(cursor) = &self.cursor {
            pairs.push(("cursor", cursor.clone()));
        }
        pairs
    }
}

/// `{ "cursor": "..." }`: where the next page starts; `null` on the last page.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NextCursor {
    #[serde(default)]
    pub cursor: Option<String>,
}

impl NextCursor {
    pub fn at(cursor: impl Into<String>) -> Self {
        Self {
            cursor: Some(cursor.into()),
        }
    }

    /// `true` when there is nothing after this page.
    pub fn is_end(&self) -> bool {
        self.cursor.is_none()
    }
}

/// v1 responses wrap their payload: `{ "result": { ... } }`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct V1Response<T> {
    pub result: T,
}

impl<T> V1Response<T> {
    pub fn new(result: T) -> Self {
        Self { result }
    }

    pub fn into_inner(self) -> T {
        self.result
    }
}
