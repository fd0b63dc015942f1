//! Business logic services
//!
//! Services encapsulate business logic and coordinate between
//! repositories and the sizing engine.

pub mod sizing;

pub use sizing::SizingService;
