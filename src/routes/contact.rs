use axum::extract::State;
use corpsite_contact::{ContactInquiry, SubmitInquiryInput, UpdateStatusInput};
use corpsite_shared::Pagination;

use crate::{
    error::ApiError,
    extract::{Json, Path, Query},
    routes::AppState,
};

/// POST /api/v1/contact
///
/// The inquiry is stored first. Notification delivery is attempted afterwards
/// and its outcome never changes the response.
pub async fn create_inquiry(
    State(state): State<AppState>,
    Json(input): Json<SubmitInquiryInput>,
) -> Result<Json<ContactInquiry>, ApiError> {
    let inquiry = state.contact.create_inquiry(input).await?;

    if !state.email.send_contact_notification(&inquiry).await {
        tracing::warn!(inquiry_id = inquiry.id, "Inquiry stored without staff notification");
    }

    if state.config.email.auto_reply && !state.email.send_auto_reply(&inquiry).await {
        tracing::warn!(inquiry_id = inquiry.id, "Inquiry stored without auto-reply");
    }

    Ok(Json(inquiry))
}

pub async fn list_inquiries(
    State(state): State<AppState>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<Vec<ContactInquiry>>, ApiError> {
    Ok(Json(state.contact.get_inquiries(pagination).await?))
}

pub async fn get_inquiry(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ContactInquiry>, ApiError> {
    state
        .contact
        .get_inquiry_by_id(id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound("Inquiry not found"))
}

pub async fn update_inquiry_status(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(input): Json<UpdateStatusInput>,
) -> Result<Json<ContactInquiry>, ApiError> {
    state
        .contact
        .update_inquiry_status(id, input)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound("Inquiry not found"))
}
