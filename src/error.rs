//! Domain-specific error types for strategy-coach

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// Main error type for the strategy-coach service
#[derive(Error, Debug)]
pub enum CoachError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Unknown step: {step}")]
    UnknownStep { step: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Cascade not found: {id}")]
    NotFound { id: String },

    #[error("Coach backend error: {message}")]
    Backend { message: String },

    #[error("Serialization error: {message}")]
    Serialization { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl From<anyhow::Error> for CoachError {
    fn from(err: anyhow::Error) -> Self {
        CoachError::Internal {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for CoachError {
    fn from(err: serde_json::Error) -> Self {
        CoachError::Serialization {
            message: err.to_string(),
        }
    }
}

impl CoachError {
    /// HTTP status for the error envelope. Contract errors map to
    /// client-side statuses, everything unexpected to server-side ones.
    pub fn status(&self) -> StatusCode {
        match self {
            CoachError::UnknownStep { .. } | CoachError::Validation { .. } => {
                StatusCode::BAD_REQUEST
            }
            CoachError::NotFound { .. } => StatusCode::NOT_FOUND,
            CoachError::Backend { .. } => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Short machine-readable code used in the error envelope.
    pub fn code(&self) -> &'static str {
        match self {
            CoachError::Config { .. } => "config_error",
            CoachError::UnknownStep { .. } => "unknown_step",
            CoachError::Validation { .. } => "validation_error",
            CoachError::NotFound { .. } => "not_found",
            CoachError::Backend { .. } => "coach_unavailable",
            CoachError::Serialization { .. } => "serialization_error",
            CoachError::Internal { .. } => "internal_error",
        }
    }

    /// Text shown to the user. Coaching failures stay generic; the
    /// coach is supplementary and must never read as fatal.
    pub fn user_message(&self) -> String {
        match self {
            CoachError::UnknownStep { .. } => {
                "The coach is unavailable for this step.".to_string()
            }
            CoachError::Backend { .. } => {
                "The coach is unavailable right now. Your input has been saved.".to_string()
            }
            CoachError::Validation { message } => message.clone(),
            CoachError::NotFound { .. } => "Cascade not found.".to_string(),
            _ => "Internal server error.".to_string(),
        }
    }
}

impl IntoResponse for CoachError {
    fn into_response(self) -> Response {
        // Unknown steps indicate a broken integration, not user error;
        // log them distinctly while the client sees the generic notice.
        match &self {
            CoachError::UnknownStep { step } => {
                tracing::warn!(step = %step, "feedback requested for unrecognized step");
            }
            CoachError::Backend { message } => {
                tracing::error!(error = %message, "coach backend failure");
            }
            CoachError::Internal { message } | CoachError::Serialization { message } => {
                tracing::error!(error = %message, "internal error");
            }
            _ => {}
        }
        let body = json!({
            "success": false,
            "error": self.code(),
            "message": self.user_message(),
        });
        (self.status(), Json(body)).into_response()
    }
}

/// Result type alias for strategy-coach operations
pub type Result<T> = std::result::Result<T, CoachError>;
