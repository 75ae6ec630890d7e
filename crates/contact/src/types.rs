use corpsite_shared::{HasIdentity, HasTimestamps, Timestamps};
use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use strum::{AsRefStr, Display, EnumString, VariantArray};

#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    sqlx::Type,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum Status {
    #[default]
    New,
    InProgress,
    Resolved,
    Closed,
}

impl Status {
    /// Lifecycle moves only forward (`new → in_progress → resolved → closed`).
    /// Skipping ahead and staying in place are both allowed.
    pub fn can_transition_to(self, next: Status) -> bool {
        next >= self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct ContactInquiry {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
    pub company: Option<String>,
    pub service_interest: Option<String>,
    pub status: Status,
    pub response: Option<String>,
    pub responded_at: Option<i64>,
    pub responded_by: Option<i64>,
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

impl HasIdentity for ContactInquiry {
    fn id(&self) -> i64 {
        self.id
    }
}

impl HasTimestamps for ContactInquiry {
    fn timestamps(&self) -> &Timestamps {
        &self.timestamps
    }
}
