//! Database repositories
//!
//! Provides data access layer for database operations.

pub mod profile;

pub use profile::{ProfileMeasurementsRecord, ProfileRepository};
