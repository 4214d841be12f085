use crate::models::domain::NutrientAssessment;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Response for the predict endpoint
///
/// Maps are BTreeMaps so identical requests serialize byte-identically.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictResponse {
    pub age: i64,
    pub total_calories: f64,
    pub total_nutrients: BTreeMap<String, f64>,
    pub recommendations: BTreeMap<String, NutrientAssessment>,
    pub not_found_items: Vec<String>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub food_count: usize,
    pub feature_count: usize,
}

/// Uniform error body for every failed request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub details: String,
}
