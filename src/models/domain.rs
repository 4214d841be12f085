use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One food row from the static nutrient dataset
///
/// Loaded once at startup and immutable thereafter. Nutrient values are
/// keyed by column name and already normalized (unit suffixes stripped,
/// unparseable cells defaulted to 0).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodRecord {
    pub name: String,
    pub nutrients: HashMap<String, f64>,
    pub calories: f64,
}

impl FoodRecord {
    /// Nutrient value for a column, 0.0 when the column is absent.
    pub fn nutrient(&self, name: &str) -> f64 {
        self.nutrients.get(name).copied().unwrap_or(0.0)
    }
}

/// The in-memory nutrient table plus the nutrient columns it provides.
///
/// `columns` preserves the predictor's feature order restricted to columns
/// actually present in the source file; it drives both aggregation and
/// feature-vector assembly.
#[derive(Debug, Clone)]
pub struct FoodTable {
    pub records: Vec<FoodRecord>,
    pub columns: Vec<String>,
}

impl FoodTable {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Classification of an accumulated nutrient total against its range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NutrientStatus {
    Low,
    Good,
    High,
}

/// Per-nutrient assessment returned to the client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutrientAssessment {
    pub value: f64,
    pub status: NutrientStatus,
    pub recommended_range: (f64, f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_nutrient_defaults_to_zero() {
        let record = FoodRecord {
            name: "Apple".to_string(),
            nutrients: HashMap::from([("fat".to_string(), 0.2)]),
            calories: 52.0,
        };

        assert_eq!(record.nutrient("fat"), 0.2);
        assert_eq!(record.nutrient("sodium"), 0.0);
    }

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&NutrientStatus::Low).unwrap(),
            "\"low\""
        );
        assert_eq!(
            serde_json::to_string(&NutrientStatus::Good).unwrap(),
            "\"good\""
        );
        assert_eq!(
            serde_json::to_string(&NutrientStatus::High).unwrap(),
            "\"high\""
        );
    }
}
