//! Stub API route handlers.
//!
//! All endpoints return JSON and delegate to the shared `CareerService`
//! behind `Arc`. The stub exists so the remote path has something real
//! to talk to during local development and testing.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use std::sync::Arc;
use tracing::error;

use crate::service::CareerService;
use crate::types::{
    Ack, ApiResponse, ChallengeTicket, Guidance, GuidanceRequest, JobApplication, JourneyInit,
    JourneyRequest, MarketSnapshot, ModuleSession, UserProgress,
};

/// Shared state accessible by all route handlers.
pub type ApiState = Arc<dyn CareerService>;

/// Handler result: a backend failure becomes a 500 carrying the message.
type ApiResult<T> = Result<T, (StatusCode, String)>;

fn internal(err: anyhow::Error) -> (StatusCode, String) {
    error!(error = %err, "Stub API handler failed");
    (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
}

/// Optional `userId` query parameter.
#[derive(Debug, Deserialize)]
pub struct UserQuery {
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
}

/// POST /api/journey/init
pub async fn init_journey(
    State(service): State<ApiState>,
    Json(req): Json<JourneyRequest>,
) -> ApiResult<Json<ApiResponse<JourneyInit>>> {
    let resp = service
        .initialize_journey(req.email.as_deref())
        .await
        .map_err(internal)?;
    Ok(Json(resp))
}

/// POST /api/guidance
pub async fn guidance(
    State(service): State<ApiState>,
    Json(req): Json<GuidanceRequest>,
) -> ApiResult<Json<ApiResponse<Guidance>>> {
    let resp = service
        .ai_guidance(&req.prompt, req.context.as_ref())
        .await
        .map_err(internal)?;
    Ok(Json(resp))
}

/// GET /api/recommendations
pub async fn recommendations(
    State(service): State<ApiState>,
    Query(query): Query<UserQuery>,
) -> ApiResult<Json<ApiResponse<Guidance>>> {
    let resp = service
        .personalized_recommendations(query.user_id.as_deref())
        .await
        .map_err(internal)?;
    Ok(Json(resp))
}

/// GET /api/market/insights
pub async fn market_insights(
    State(service): State<ApiState>,
) -> ApiResult<Json<ApiResponse<MarketSnapshot>>> {
    let resp = service.market_insights().await.map_err(internal)?;
    Ok(Json(resp))
}

/// GET /api/progress
pub async fn progress(
    State(service): State<ApiState>,
    Query(query): Query<UserQuery>,
) -> ApiResult<Json<ApiResponse<UserProgress>>> {
    let resp = service
        .user_progress(query.user_id.as_deref())
        .await
        .map_err(internal)?;
    Ok(Json(resp))
}

/// POST /api/challenges/{id}/join
pub async fn join_challenge(
    State(service): State<ApiState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ChallengeTicket>> {
    let ticket = service.join_challenge(&id).await.map_err(internal)?;
    Ok(Json(ticket))
}

/// POST /api/modules/{id}/start
pub async fn start_module(
    State(service): State<ApiState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ModuleSession>> {
    let session = service.start_learning_module(&id).await.map_err(internal)?;
    Ok(Json(session))
}

/// POST /api/jobs/{id}/apply
pub async fn apply_for_job(
    State(service): State<ApiState>,
    Path(id): Path<String>,
) -> ApiResult<Json<JobApplication>> {
    let application = service.apply_for_job(&id).await.map_err(internal)?;
    Ok(Json(application))
}

/// POST /api/jobs/{id}/save
pub async fn save_job(
    State(service): State<ApiState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Ack>> {
    let ack = service.save_job(&id).await.map_err(internal)?;
    Ok(Json(ack))
}

/// GET /health
pub async fn health() -> StatusCode {
    StatusCode::OK
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
