// Core algorithm exports
pub mod normalize;
pub mod predictor;
pub mod ranges;
pub mod scorer;

pub use normalize::{clean_value, round2};
pub use predictor::{CaloriePredictor, PredictorError, DEFAULT_FEATURES};
pub use ranges::{classify, ranges_for_age, recommended_range};
pub use scorer::{NutritionScorer, ScoreResult};
