mod contact;
mod health;
mod services;

use axum::{
    Json, Router,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
};
use corpsite_catalog::ServiceService;
use corpsite_contact::ContactService;
use corpsite_notification::EmailService;
use serde_json::json;
use sqlx::SqlitePool;

pub use contact::*;
pub use health::*;
pub use services::*;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub contact: ContactService,
    pub services: ServiceService,
    pub email: EmailService,
    pub pool: SqlitePool,
}

impl AppState {
    pub fn new(config: crate::config::Config, pool: SqlitePool) -> anyhow::Result<Self> {
        let email = EmailService::new(&config.email)?;

        Ok(Self {
            config,
            contact: ContactService(pool.clone()),
            services: ServiceService(pool.clone()),
            email,
            pool,
        })
    }
}

pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route("/contact", get(list_inquiries).post(create_inquiry))
        .route("/contact/{id}", get(get_inquiry))
        .route("/contact/{id}/status", put(update_inquiry_status))
        .route("/services", get(list_services))
        .route("/services/{slug}", get(get_service));

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/ready", get(ready))
        .nest("/api/v1", api)
        .fallback(not_found)
        .with_state(state)
}

async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "message": "Resource not found" })),
    )
}
