use crate::core::predictor::{CaloriePredictor, PredictorError};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Errors loading the trained model artifact
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("failed to read model artifact: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse model artifact: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid model artifact: {0}")]
    Invalid(#[from] PredictorError),
}

/// On-disk form of the trained regression, exported at training time.
#[derive(Debug, Deserialize)]
struct ModelArtifact {
    // Optional: older exports omit it, in which case the predictor's
    // hardcoded fallback feature list applies
    #[serde(default)]
    feature_names: Option<Vec<String>>,
    coefficients: Vec<f64>,
    intercept: f64,
}

/// Load the predictor from a serialized artifact.
pub fn load_predictor<P: AsRef<Path>>(path: P) -> Result<CaloriePredictor, ModelError> {
    let raw = std::fs::read_to_string(path)?;
    let artifact: ModelArtifact = serde_json::from_str(&raw)?;

    Ok(CaloriePredictor::new(
        artifact.feature_names,
        artifact.coefficients,
        artifact.intercept,
    )?)
}
