//! Nutriscore - calorie estimation and nutrient scoring service
//!
//! This library looks up foods in a static nutrient table, estimates
//! calories with a pre-trained regression model, and classifies aggregated
//! nutrient totals against age-banded recommended ranges.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{clean_value, round2, CaloriePredictor, NutritionScorer, ScoreResult};
pub use crate::models::{
    ErrorResponse, FoodRecord, FoodTable, NutrientAssessment, NutrientStatus, PredictRequest,
    PredictResponse,
};
