// Service exports
pub mod dataset;
pub mod model;

pub use dataset::{load_food_table, DatasetError};
pub use model::{load_predictor, ModelError};
