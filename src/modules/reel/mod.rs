use axum::Router;
use axum::routing::{get, post};
use crate::state::AppState;

pub mod dto;
pub mod handler;
pub mod model;
pub mod page;
pub mod service;

/// `GET /` and `POST /`: the HTML form.
pub fn page_router() -> Router<AppState> {
    Router::new().route("/", get(handler::index).post(handler::submit))
}

/// JSON API, nested under `/api/v1/reels`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(handler::create_reel))
}
