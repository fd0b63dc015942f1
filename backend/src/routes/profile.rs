//! Profile measurement API routes
//!
//! Profiles are addressed by user id; identity is established upstream.

use crate::error::ApiError;
use crate::services::SizingService;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    routing::get,
    Json, Router,
};
use size_advisor_shared::types::{MeasurementsRequest, ProfileMeasurementsResponse};
use size_advisor_shared::SizeRecommendation;
use uuid::Uuid;

/// Create profile routes
pub fn profile_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/:user_id/measurements",
            get(get_measurements).put(save_measurements),
        )
        .route("/:user_id/size-recommendation", get(get_recommendation))
}

fn parse_user_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::BadRequest(format!("Invalid user id: {}", raw)))
}

/// GET /api/v1/profiles/:user_id/measurements - Saved measurements with recommendation
async fn get_measurements(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<ProfileMeasurementsResponse>, ApiError> {
    let user_id = parse_user_id(&user_id)?;
    SizingService::get_measurements(state.db(), user_id)
        .await
        .map(Json)
}

/// PUT /api/v1/profiles/:user_id/measurements - Validate and save measurements
async fn save_measurements(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    payload: Result<Json<MeasurementsRequest>, JsonRejection>,
) -> Result<Json<ProfileMeasurementsResponse>, ApiError> {
    let user_id = parse_user_id(&user_id)?;
    let Json(req) = payload?;
    SizingService::save_measurements(state.db(), user_id, &req)
        .await
        .map(Json)
}

/// GET /api/v1/profiles/:user_id/size-recommendation - Recommend from saved measurements
async fn get_recommendation(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<SizeRecommendation>, ApiError> {
    let user_id = parse_user_id(&user_id)?;
    SizingService::recommend_for_profile(state.db(), user_id)
        .await
        .map(Json)
}
