//! Error taxonomy for the predictor.
//!
//! Every error is terminal to the current submission only; the process
//! stays alive and nothing is retried automatically.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PredictorError {
    /// The pipeline artifact is absent, unreadable, or fails the shape
    /// check. Non-fatal to the process; no prediction UI is offered.
    #[error("failed to load pipeline artifact: {0}")]
    ArtifactLoad(String),

    /// A column required by the schema cannot be assembled from the
    /// given input, even after feature engineering.
    #[error("input does not match the expected schema; missing columns: {}", .missing.join(", "))]
    SchemaMismatch { missing: Vec<String> },

    /// Bulk upload only: required raw headers are absent from the
    /// uploaded table, detected before engineering runs.
    #[error("uploaded file is missing required headers: {}", .missing.join(", "))]
    MissingHeaders { missing: Vec<String> },

    /// Bulk upload parsed to zero data rows. Nothing to do, not a fault.
    #[error("uploaded file contains headers but no data rows")]
    EmptyInput,

    /// The collaborator's own predict/predict_proba call failed; the
    /// underlying message is surfaced as-is.
    #[error("prediction failed: {0}")]
    Prediction(String),

    /// A categorical selector label has no code in its dictionary.
    /// Unreachable through the served form, kept for defensive clients.
    #[error("unknown label {label:?} for feature {feature}")]
    UnknownLabel { feature: String, label: String },

    #[error("failed to read uploaded CSV: {0}")]
    Csv(#[from] csv::Error),

    /// A non-empty cell that does not parse as a number.
    #[error("invalid value {value:?} for column {column} in data row {row}")]
    InvalidValue {
        column: String,
        row: usize,
        value: String,
    },
}

pub type Result<T> = std::result::Result<T, PredictorError>;

impl ResponseError for PredictorError {
    fn status_code(&self) -> StatusCode {
        match self {
            PredictorError::ArtifactLoad(_) => StatusCode::SERVICE_UNAVAILABLE,
            PredictorError::Prediction(_) => StatusCode::BAD_GATEWAY,
            // EmptyInput is a notice, but as a raw response it is still
            // unprocessable; handlers that want the friendly path catch
            // it before it gets here.
            _ => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let missing = match self {
            PredictorError::SchemaMismatch { missing }
            | PredictorError::MissingHeaders { missing } => missing.clone(),
            _ => Vec::new(),
        };
        HttpResponse::build(self.status_code()).json(json!({
            "error": self.to_string(),
            "missing_columns": missing,
        }))
    }
}
