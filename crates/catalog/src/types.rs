use corpsite_shared::{HasIdentity, HasTimestamps, Timestamps};
use serde::Serialize;
use sqlx::{prelude::FromRow, types::Json};

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Service {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub detailed_description: Option<String>,
    pub icon: Option<String>,
    pub image: Option<String>,
    pub features: Json<Vec<String>>,
    pub is_active: bool,
    pub sort_order: i64,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

impl HasIdentity for Service {
    fn id(&self) -> i64 {
        self.id
    }
}

impl HasTimestamps for Service {
    fn timestamps(&self) -> &Timestamps {
        &self.timestamps
    }
}
