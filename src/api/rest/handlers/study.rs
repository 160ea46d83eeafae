use axum::{
    extract::{rejection::JsonRejection, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::api::rest::error::{ApiError, ApiResult};
use crate::shared::models::{resources_for, AppState, Resource, StudyPlan};

#[derive(Debug, Deserialize)]
pub struct CreateStudyPlanRequest {
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub topics: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
pub struct StudyPlanResponse {
    pub status: &'static str,
    pub plan: StudyPlan,
}

/// Create a personalized study plan for a subject
pub async fn create_study_plan(
    State(state): State<Arc<AppState>>,
    body: Result<Json<CreateStudyPlanRequest>, JsonRejection>,
) -> ApiResult<Json<StudyPlanResponse>> {
    // Absent or malformed bodies get the documented envelope, not the
    // extractor's stock rejection.
    let Json(req) =
        body.map_err(|_| ApiError::BadRequest("Missing required fields".to_string()))?;

    let subject = req
        .subject
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ApiError::BadRequest("Missing required fields".to_string()))?;

    let duration = req
        .duration
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or("1 hour");
    let topics = req.topics.unwrap_or_default();

    let plan = state
        .assistant
        .generate_study_plan(subject, duration, &topics)
        .await;

    Ok(Json(StudyPlanResponse {
        status: "success",
        plan,
    }))
}

#[derive(Debug, Deserialize)]
pub struct ResourcesQuery {
    #[serde(default)]
    pub subject: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ResourcesResponse {
    pub status: &'static str,
    pub resources: Vec<Resource>,
}

/// List recommended study resources for a subject
pub async fn get_study_resources(
    Query(query): Query<ResourcesQuery>,
) -> ApiResult<Json<ResourcesResponse>> {
    let subject = query
        .subject
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ApiError::BadRequest("Subject parameter is required".to_string()))?;

    Ok(Json(ResourcesResponse {
        status: "success",
        resources: resources_for(subject),
    }))
}
