//! Stateless size recommendation routes

use crate::error::ApiError;
use crate::services::SizingService;
use crate::state::AppState;
use axum::{extract::rejection::JsonRejection, routing::post, Json, Router};
use size_advisor_shared::types::MeasurementsRequest;
use size_advisor_shared::SizeRecommendation;

/// Create size recommendation routes
pub fn sizing_routes() -> Router<AppState> {
    Router::new().route("/", post(recommend))
}

/// POST /api/v1/size-recommendations - Recommend a size for submitted measurements
async fn recommend(
    payload: Result<Json<MeasurementsRequest>, JsonRejection>,
) -> Result<Json<SizeRecommendation>, ApiError> {
    let Json(req) = payload?;
    SizingService::recommend(&req).map(Json)
}
