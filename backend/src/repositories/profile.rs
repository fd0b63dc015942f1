//! Profile measurement repository

use anyhow::{anyhow, Context};
use chrono::{DateTime, Utc};
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use size_advisor_shared::BodyMeasurements;
use sqlx::PgPool;
use uuid::Uuid;

/// Stored measurements are kept to two decimal places
const STORED_DECIMALS: u32 = 2;

/// Profile measurements record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ProfileMeasurementsRecord {
    pub user_id: Uuid,
    pub weight_kg: Decimal,
    pub height_cm: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProfileMeasurementsRecord {
    /// Re-validate the stored values
    ///
    /// A row outside the accepted ranges is an error, never a measurement.
    pub fn to_measurements(&self) -> anyhow::Result<BodyMeasurements> {
        let weight = self
            .weight_kg
            .to_f64()
            .ok_or_else(|| anyhow!("stored weight {} is not representable", self.weight_kg))?;
        let height = self
            .height_cm
            .to_f64()
            .ok_or_else(|| anyhow!("stored height {} is not representable", self.height_cm))?;

        BodyMeasurements::new(weight, height)
            .with_context(|| format!("stored measurements for user {} are invalid", self.user_id))
    }
}

fn to_stored(value: f64) -> sqlx::Result<Decimal> {
    Decimal::from_f64(value)
        .map(|d| d.round_dp(STORED_DECIMALS))
        .ok_or_else(|| sqlx::Error::Encode(format!("{} cannot be stored as a decimal", value).into()))
}

/// Repository for the `profile_measurements` table
pub struct ProfileRepository;

impl ProfileRepository {
    /// Find the measurements saved for a user
    pub async fn find_measurements(
        pool: &PgPool,
        user_id: Uuid,
    ) -> sqlx::Result<Option<ProfileMeasurementsRecord>> {
        let record = sqlx::query_as::<_, ProfileMeasurementsRecord>(
            r#"
            SELECT user_id, weight_kg, height_cm, created_at, updated_at
            FROM profile_measurements
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Insert or replace the measurements saved for a user
    pub async fn upsert_measurements(
        pool: &PgPool,
        user_id: Uuid,
        measurements: &BodyMeasurements,
    ) -> sqlx::Result<ProfileMeasurementsRecord> {
        let record = sqlx::query_as::<_, ProfileMeasurementsRecord>(
            r#"
            INSERT INTO profile_measurements (user_id, weight_kg, height_cm)
            VALUES ($1, $2, $3)
            ON CONFLICT (user_id) DO UPDATE SET
                weight_kg = EXCLUDED.weight_kg,
                height_cm = EXCLUDED.height_cm,
                updated_at = NOW()
            RETURNING user_id, weight_kg, height_cm, created_at, updated_at
            "#,
        )
        .bind(user_id)
        .bind(to_stored(measurements.weight_kg())?)
        .bind(to_stored(measurements.height_cm())?)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }
}
