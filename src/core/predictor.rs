use thiserror::Error;

/// Feature list used when the model artifact does not declare its own.
pub const DEFAULT_FEATURES: [&str; 6] =
    ["fat", "protein", "carbohydrate", "sugar", "fiber", "sodium"];

/// Errors constructing a predictor from a deserialized artifact
#[derive(Debug, Error)]
pub enum PredictorError {
    #[error("model has {coefficients} coefficients for {features} features")]
    ShapeMismatch { features: usize, coefficients: usize },

    #[error("model has no coefficients")]
    Empty,
}

/// Pre-trained linear regression estimating calories from nutrient values.
///
/// Loaded once at startup and never mutated; inference is a stateless dot
/// product plus intercept, safe for unlimited concurrent callers.
#[derive(Debug, Clone)]
pub struct CaloriePredictor {
    features: Vec<String>,
    coefficients: Vec<f64>,
    intercept: f64,
}

impl CaloriePredictor {
    /// Build a predictor from artifact fields.
    ///
    /// When the artifact carries no feature names, the hardcoded fallback
    /// list applies. Coefficient count must match the feature count.
    pub fn new(
        features: Option<Vec<String>>,
        coefficients: Vec<f64>,
        intercept: f64,
    ) -> Result<Self, PredictorError> {
        let features = features.unwrap_or_else(|| {
            DEFAULT_FEATURES.iter().map(|f| f.to_string()).collect()
        });

        if coefficients.is_empty() {
            return Err(PredictorError::Empty);
        }
        if features.len() != coefficients.len() {
            return Err(PredictorError::ShapeMismatch {
                features: features.len(),
                coefficients: coefficients.len(),
            });
        }

        Ok(Self {
            features,
            coefficients,
            intercept,
        })
    }

    /// Feature names in the order `predict` expects its inputs.
    pub fn feature_names(&self) -> &[String] {
        &self.features
    }

    /// Run one forward pass over a feature vector in declared order.
    ///
    /// The vector length is fixed at construction; callers build it via the
    /// scorer, which zero-fills features missing from the food table.
    pub fn predict(&self, inputs: &[f64]) -> f64 {
        self.intercept
            + self
                .coefficients
                .iter()
                .zip(inputs)
                .map(|(coef, value)| coef * value)
                .sum::<f64>()
    }
}
