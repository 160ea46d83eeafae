use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::api::rest::error::{ApiError, ApiResult};
use crate::shared::models::AppState;

#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub context: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SendMessageResponse {
    pub status: &'static str,
    pub response: String,
}

/// Answer a user message with the assistant
pub async fn send_message(
    State(state): State<Arc<AppState>>,
    body: Result<Json<SendMessageRequest>, JsonRejection>,
) -> ApiResult<Json<SendMessageResponse>> {
    let Json(req) = body.map_err(|_| ApiError::BadRequest("Message is required".to_string()))?;

    let message = req
        .message
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ApiError::BadRequest("Message is required".to_string()))?;

    let context = req.context.as_deref().map(str::trim).unwrap_or("");

    let response = state.assistant.answer_question(message, context).await;

    Ok(Json(SendMessageResponse {
        status: "success",
        response,
    }))
}
