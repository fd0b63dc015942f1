//! Sizing service - validation, recommendation and profile measurements

use crate::error::ApiError;
use crate::repositories::{ProfileMeasurementsRecord, ProfileRepository};
use size_advisor_shared::types::{MeasurementsRequest, ProfileMeasurementsResponse};
use size_advisor_shared::{recommend_size, SizeRecommendation};
use sqlx::PgPool;
use tracing::{debug, info};
use uuid::Uuid;

/// Sizing service for recommendation operations
pub struct SizingService;

impl SizingService {
    /// Validate a submission and recommend a size without storing anything
    pub fn recommend(req: &MeasurementsRequest) -> Result<SizeRecommendation, ApiError> {
        let measurements = req.to_measurements().map_err(|e| {
            debug!(field = %e.field(), error = %e, "Rejected measurements");
            e
        })?;

        let recommendation = recommend_size(&measurements);
        debug!(
            size = %recommendation.size,
            bmi = recommendation.bmi,
            "Size recommended"
        );
        Ok(recommendation)
    }

    /// Validate a submission, save it to the profile and recommend from it
    ///
    /// Nothing is written when validation fails.
    pub async fn save_measurements(
        db: &PgPool,
        user_id: Uuid,
        req: &MeasurementsRequest,
    ) -> Result<ProfileMeasurementsResponse, ApiError> {
        let measurements = req.to_measurements()?;

        let record = ProfileRepository::upsert_measurements(db, user_id, &measurements).await?;
        info!(user_id = %user_id, "Profile measurements saved");

        Self::to_response(record)
    }

    /// Get the saved measurements and the recommendation derived from them
    pub async fn get_measurements(
        db: &PgPool,
        user_id: Uuid,
    ) -> Result<ProfileMeasurementsResponse, ApiError> {
        let record = ProfileRepository::find_measurements(db, user_id)
            .await?
            .ok_or_else(|| ApiError::NotFound("No measurements saved for this profile".to_string()))?;

        Self::to_response(record)
    }

    /// Recommend a size from the saved measurements
    pub async fn recommend_for_profile(
        db: &PgPool,
        user_id: Uuid,
    ) -> Result<SizeRecommendation, ApiError> {
        Ok(Self::get_measurements(db, user_id).await?.recommendation)
    }

    fn to_response(record: ProfileMeasurementsRecord) -> Result<ProfileMeasurementsResponse, ApiError> {
        let measurements = record.to_measurements()?;

        Ok(ProfileMeasurementsResponse {
            user_id: record.user_id,
            recommendation: recommend_size(&measurements),
            measurements,
            updated_at: record.updated_at,
        })
    }
}
