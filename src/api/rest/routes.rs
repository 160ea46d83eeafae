use axum::{
    middleware,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::api::rest::error::ApiError;
use crate::api::rest::{handlers, logging_middleware::request_logging_middleware};
use crate::shared::models::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        .route("/health", get(health))
        .route("/study/plan", post(handlers::study::create_study_plan))
        .route("/study/resources", get(handlers::study::get_study_resources))
        .route("/chat/message", post(handlers::chat::send_message))
        .with_state(state);

    // Permissive CORS so browser frontends on other origins can call the API.
    Router::new()
        .nest("/api", api_routes)
        .fallback(not_found)
        .layer(CorsLayer::permissive())
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(TraceLayer::new_for_http())
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "success",
        "message": "StudyBuddy API is running"
    }))
}

async fn not_found() -> ApiError {
    ApiError::NotFound("Route not found".to_string())
}
