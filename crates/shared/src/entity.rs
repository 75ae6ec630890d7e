use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use time::OffsetDateTime;

/// Creation and last-update instants of a stored record, in unix seconds.
///
/// Embedded (flattened) into every entity row so the columns stay
/// `created_at` / `updated_at` in both SQL and JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Timestamps {
    pub created_at: i64,
    pub updated_at: i64,
}

impl Timestamps {
    pub fn now() -> Self {
        let now = now();

        Self {
            created_at: now,
            updated_at: now,
        }
    }
}

/// Store-assigned identity of an entity.
pub trait HasIdentity {
    fn id(&self) -> i64;
}

pub trait HasTimestamps {
    fn timestamps(&self) -> &Timestamps;

    fn created_at(&self) -> i64 {
        self.timestamps().created_at
    }

    fn updated_at(&self) -> i64 {
        self.timestamps().updated_at
    }
}

pub fn now() -> i64 {
    OffsetDateTime::now_utc().unix_timestamp()
}
