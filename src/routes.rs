use axum::extract::DefaultBodyLimit;
use axum::{Json, Router};
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use utoipa::OpenApi;

use crate::docs::ApiDoc;
use crate::infrastructure::storage::local::OUTPUT_ROUTE;
use crate::state::AppState;

pub fn configure_routes(state: &AppState) -> Router<AppState> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(crate::modules::reel::page_router())
        .route("/api-docs/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
        .nest("/api/v1", api_routes())
        .nest("/api/v1/reels", crate::modules::reel::router())
        .nest_service(OUTPUT_ROUTE, ServeDir::new(state.storage.output_dir()))
        .layer(DefaultBodyLimit::max(state.config.max_upload_bytes))
        .layer(cors)
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(|| async { "ok" }))
}
