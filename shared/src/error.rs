//! Error types for the forecast engine

use thiserror::Error;

/// Errors scoped to a single location's assembly
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ForecastError {
    /// The now-reading is absent or carries a null numeric field
    #[error("Missing wind reading for {location_id}")]
    MissingObservation { location_id: String },

    /// An observation value is outside its physical range
    #[error("Invalid {field} for {location_id}: {reason}")]
    InvalidObservation {
        location_id: String,
        field: &'static str,
        reason: &'static str,
    },
}
