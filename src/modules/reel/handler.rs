use crate::common::error::ReelError;
use crate::common::response::{ApiError, ApiResponse, ApiSuccess};
use crate::modules::reel::dto::*;
use crate::modules::reel::page::{PageView, render_index};
use crate::modules::reel::service::ReelService;
use crate::state::AppState;
use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::{Html, IntoResponse},
};

pub const SUCCESS_MESSAGE: &str = "Reel created successfully!";
pub const MISSING_UPLOAD_MESSAGE: &str = "Please upload both video and music files.";

fn failure_message(err: &ReelError) -> String {
    match err {
        ReelError::InputMissing(_) => MISSING_UPLOAD_MESSAGE.to_string(),
        other => format!("Error during reel generation: {}", other),
    }
}

/// Upload form
pub async fn index() -> impl IntoResponse {
    Html(render_index(&PageView::default()))
}

/// Form submission: runs the job and re-renders the form with the outcome.
pub async fn submit(State(state): State<AppState>, multipart: Multipart) -> impl IntoResponse {
    match ReelService::create_reel(state, multipart).await {
        Ok(reel) => Html(render_index(&PageView {
            message: SUCCESS_MESSAGE,
            reel_url: reel.output_url.as_deref(),
        }))
        .into_response(),
        Err(e) => {
            let message = failure_message(&e);
            (e.status_code(), Html(render_index(&PageView { message: &message, reel_url: None })))
                .into_response()
        }
    }
}

/// Create a reel
#[utoipa::path(
    post,
    path = "/api/v1/reels",
    request_body(content = ReelUploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Reel created", body = ApiResponse<ReelResponse>),
        (status = 400, description = "Missing upload or invalid parameter"),
        (status = 500, description = "Transcription, beat detection or encoding failed")
    ),
    tag = "Reels"
)]
pub async fn create_reel(State(state): State<AppState>, multipart: Multipart) -> impl IntoResponse {
    match ReelService::create_reel(state, multipart).await {
        Ok(res) => ApiSuccess(ApiResponse::success(res, SUCCESS_MESSAGE), StatusCode::CREATED).into_response(),
        Err(e) => ApiError(failure_message(&e), e.status_code()).into_response(),
    }
}
