use serde::Deserialize;

pub const DEFAULT_LIMIT: u64 = 100;

/// Largest value the store accepts for `LIMIT` / `OFFSET` (a signed 64-bit integer).
const MAX_BOUND: u64 = i64::MAX as u64;

/// Offset pagination as accepted by every list operation.
///
/// Both values are unsigned, so a negative `skip` or `limit` is rejected while
/// deserializing the query string instead of reaching the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub skip: u64,
    #[serde(default = "default_limit")]
    pub limit: u64,
}

impl Pagination {
    pub fn new(skip: u64, limit: u64) -> Self {
        Self { skip, limit }
    }

    /// `skip` clamped to what the store can bind.
    pub fn offset(&self) -> u64 {
        self.skip.min(MAX_BOUND)
    }

    /// `limit` clamped to what the store can bind.
    pub fn bounded_limit(&self) -> u64 {
        self.limit.min(MAX_BOUND)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

fn default_limit() -> u64 {
    DEFAULT_LIMIT
}
