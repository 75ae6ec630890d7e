use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(&'static str),

    #[error(transparent)]
    Domain(#[from] corpsite_shared::Error),

    #[error(transparent)]
    Json(#[from] JsonRejection),

    #[error(transparent)]
    Query(#[from] QueryRejection),

    #[error(transparent)]
    Path(#[from] PathRejection),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        use corpsite_shared::Error;

        match self {
            ApiError::Json(rejection) => rejected(rejection.status(), rejection.body_text()),
            ApiError::Query(rejection) => rejected(rejection.status(), rejection.body_text()),
            ApiError::Path(rejection) => rejected(rejection.status(), rejection.body_text()),
            ApiError::NotFound(message) => {
                (StatusCode::NOT_FOUND, Json(json!({ "message": message }))).into_response()
            }
            ApiError::Domain(Error::Validate(errors)) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "message": "Validation failed", "errors": errors })),
            )
                .into_response(),
            ApiError::Domain(err @ (Error::InvalidTransition { .. } | Error::Conflict(_))) => (
                StatusCode::CONFLICT,
                Json(json!({ "message": err.to_string() })),
            )
                .into_response(),
            ApiError::Domain(err @ (Error::Server(_) | Error::Unknown(_))) => {
                tracing::error!(error = %err, "Request failed");

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": "Internal server error" })),
                )
                    .into_response()
            }
        }
    }
}

fn rejected(status: StatusCode, message: String) -> Response {
    (status, Json(json!({ "message": message }))).into_response()
}
