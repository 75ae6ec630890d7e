use axum::extract::State;
use corpsite_catalog::Service;
use corpsite_shared::{DEFAULT_LIMIT, Pagination};
use serde::Deserialize;

use crate::{
    error::ApiError,
    extract::{Json, Path, Query},
    routes::AppState,
};

#[derive(Debug, Deserialize)]
pub struct ServicesQuery {
    #[serde(default)]
    pub skip: u64,
    #[serde(default = "default_limit")]
    pub limit: u64,
    #[serde(default = "default_active_only")]
    pub active_only: bool,
}

fn default_limit() -> u64 {
    DEFAULT_LIMIT
}

fn default_active_only() -> bool {
    true
}

pub async fn list_services(
    State(state): State<AppState>,
    Query(query): Query<ServicesQuery>,
) -> Result<Json<Vec<Service>>, ApiError> {
    let pagination = Pagination::new(query.skip, query.limit);

    Ok(Json(
        state
            .services
            .get_services(pagination, query.active_only)
            .await?,
    ))
}

pub async fn get_service(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Service>, ApiError> {
    state
        .services
        .get_service_by_slug(slug)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound("Service not found"))
}
