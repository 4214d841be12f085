use crate::core::normalize::clean_opt_value;
use crate::models::{FoodRecord, FoodTable};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

/// Errors loading the static nutrient dataset
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset: {0}")]
    Csv(#[from] csv::Error),

    #[error("dataset is missing required column '{0}'")]
    MissingColumn(&'static str),
}

/// Load the food table from a CSV file.
///
/// The file must carry `name` and `calories` columns. Of the requested
/// nutrient features, only those present in the header are kept (in the
/// requested order); the rest are silently excluded. Every nutrient and
/// calorie cell passes through value normalization, so unit suffixes and
/// malformed cells never reach the scorer. Rows with an empty name are
/// skipped.
pub fn load_food_table<P: AsRef<Path>>(
    path: P,
    features: &[String],
) -> Result<FoodTable, DatasetError> {
    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?.clone();

    let name_idx = headers
        .iter()
        .position(|h| h == "name")
        .ok_or(DatasetError::MissingColumn("name"))?;
    let calories_idx = headers
        .iter()
        .position(|h| h == "calories")
        .ok_or(DatasetError::MissingColumn("calories"))?;

    // Requested features that actually exist in the file, with their
    // header positions
    let columns: Vec<(String, usize)> = features
        .iter()
        .filter_map(|feature| {
            headers
                .iter()
                .position(|h| h == feature)
                .map(|idx| (feature.clone(), idx))
        })
        .collect();

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;

        let name = row.get(name_idx).unwrap_or("").trim();
        if name.is_empty() {
            continue;
        }

        let nutrients: HashMap<String, f64> = columns
            .iter()
            .map(|(feature, idx)| (feature.clone(), clean_opt_value(row.get(*idx))))
            .collect();

        records.push(FoodRecord {
            name: name.to_string(),
            nutrients,
            calories: clean_opt_value(row.get(calories_idx)),
        });
    }

    Ok(FoodTable {
        records,
        columns: columns.into_iter().map(|(feature, _)| feature).collect(),
    })
}
