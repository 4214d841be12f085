// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{FoodRecord, FoodTable, NutrientAssessment, NutrientStatus};
pub use requests::PredictRequest;
pub use responses::{ErrorResponse, HealthResponse, PredictResponse};
