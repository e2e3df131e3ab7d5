//! Error types for the dashboard service.

use thiserror::Error;

/// Dashboard orchestration errors. The pure engine functions never fail;
/// errors originate at the API edge or when shaping payloads.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("API error: {0}")]
    Api(#[from] healthmate_client::HealthmateError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<String> for DashboardError {
    fn from(err: String) -> Self {
        DashboardError::Internal(err)
    }
}

/// Result type alias for dashboard operations.
pub type DashboardResult<T> = Result<T, DashboardError>;
