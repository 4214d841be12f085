use crate::core::NutritionScorer;
use crate::models::{ErrorResponse, HealthResponse, PredictRequest, PredictResponse};
use actix_web::{error::ResponseError, web, HttpResponse, Responder};
use std::sync::Arc;
use thiserror::Error;

/// Application state shared across all handlers
///
/// The scorer (table + predictor) is read-only after startup, so handlers
/// share it without locking.
#[derive(Clone)]
pub struct AppState {
    pub scorer: Arc<NutritionScorer>,
}

/// Request-time errors, all surfaced as the uniform 500 error body
///
/// The service deliberately does not distinguish client from server
/// errors: validation failures and unexpected failures share one shape.
#[derive(Debug, Error)]
pub enum PredictError {
    #[error("Missing 'age' or 'food_items' in request data")]
    Validation,

    #[error("{0}")]
    Unhandled(String),
}

impl ResponseError for PredictError {
    fn error_response(&self) -> HttpResponse {
        tracing::error!("Error during prediction: {}", self);
        HttpResponse::InternalServerError().json(ErrorResponse {
            error: "Internal Server Error".to_string(),
            details: self.to_string(),
        })
    }
}

/// Convert JSON payload failures (malformed body, non-integer age) into the
/// service's uniform error response instead of actix's default 400.
pub fn handle_json_payload_error(
    err: actix_web::error::JsonPayloadError,
    req: &actix_web::HttpRequest,
) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    PredictError::Unhandled(format!("Invalid request body: {}", err)).into()
}

/// Configure all prediction routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/predict", web::post().to(predict));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        food_count: state.scorer.food_count(),
        feature_count: state.scorer.nutrient_cols().len(),
    })
}

/// Predict endpoint
///
/// POST /predict
///
/// Request body:
/// ```json
/// {
///   "age": 25,
///   "food_items": ["apple", "grilled chicken"]
/// }
/// ```
async fn predict(
    state: web::Data<AppState>,
    req: web::Json<PredictRequest>,
) -> Result<HttpResponse, PredictError> {
    let req = req.into_inner();

    let age = req.age.ok_or(PredictError::Validation)?;
    let food_items = req.food_items.ok_or(PredictError::Validation)?;

    tracing::info!("Scoring {} food items for age {}", food_items.len(), age);

    let result = state.scorer.score(age, &food_items);

    if !result.not_found.is_empty() {
        tracing::debug!("No table match for: {:?}", result.not_found);
    }

    Ok(HttpResponse::Ok().json(PredictResponse {
        age,
        total_calories: result.total_calories,
        total_nutrients: result.total_nutrients,
        recommendations: result.recommendations,
        not_found_items: result.not_found,
    }))
}
