use crate::core::normalize::round2;
use crate::core::predictor::CaloriePredictor;
use crate::core::ranges::{classify, ranges_for_age, recommended_range};
use crate::models::{FoodRecord, FoodTable, NutrientAssessment};
use std::collections::BTreeMap;

/// Result of scoring one request
#[derive(Debug)]
pub struct ScoreResult {
    pub total_calories: f64,
    pub total_nutrients: BTreeMap<String, f64>,
    pub recommendations: BTreeMap<String, NutrientAssessment>,
    pub not_found: Vec<String>,
}

/// Main scoring orchestrator - owns the food table and the predictor
///
/// # Pipeline stages
/// 1. Per-item name normalization (trim + lowercase)
/// 2. First-match substring lookup against the table
/// 3. Calorie prediction per matched row
/// 4. Nutrient accumulation
/// 5. Age-banded range classification
#[derive(Debug, Clone)]
pub struct NutritionScorer {
    table: FoodTable,
    predictor: CaloriePredictor,
    // Lowercased row names, index-aligned with table.records
    lowered_names: Vec<String>,
    // Predictor features present in the table, in predictor order.
    // Features the table lacks are excluded from lookup and totals.
    nutrient_cols: Vec<String>,
}

impl NutritionScorer {
    pub fn new(table: FoodTable, predictor: CaloriePredictor) -> Self {
        let lowered_names = table
            .records
            .iter()
            .map(|record| record.name.to_lowercase())
            .collect();

        let nutrient_cols = predictor
            .feature_names()
            .iter()
            .filter(|feature| table.columns.iter().any(|col| col == *feature))
            .cloned()
            .collect();

        Self {
            table,
            predictor,
            lowered_names,
            nutrient_cols,
        }
    }

    /// Number of rows in the food table.
    pub fn food_count(&self) -> usize {
        self.table.len()
    }

    /// Nutrient columns participating in lookup and prediction.
    pub fn nutrient_cols(&self) -> &[String] {
        &self.nutrient_cols
    }

    /// Score a list of food names against an age band.
    ///
    /// Items are processed in input order. Unmatched items land in
    /// `not_found` (post-normalization) and contribute nothing; matched
    /// items contribute one prediction to the calorie total and their raw
    /// nutrient values to the running totals. Totals are then classified
    /// against the range table selected by `age < 18`.
    pub fn score(&self, age: i64, food_items: &[String]) -> ScoreResult {
        let mut total_calories = 0.0;
        let mut total_nutrients: BTreeMap<String, f64> = self
            .nutrient_cols
            .iter()
            .map(|col| (col.clone(), 0.0))
            .collect();
        let mut not_found = Vec::new();

        for item in food_items {
            let needle = item.trim().to_lowercase();

            match self.lookup(&needle) {
                Some(record) => {
                    let features = self.feature_vector(record);
                    total_calories += self.predictor.predict(&features);

                    for col in &self.nutrient_cols {
                        *total_nutrients.entry(col.clone()).or_insert(0.0) +=
                            record.nutrient(col);
                    }
                }
                None => not_found.push(needle),
            }
        }

        let ranges = ranges_for_age(age);
        let recommendations = total_nutrients
            .iter()
            .map(|(nutrient, value)| {
                let range = recommended_range(ranges, nutrient);
                let assessment = NutrientAssessment {
                    value: round2(*value),
                    status: classify(*value, range),
                    recommended_range: range,
                };
                (nutrient.clone(), assessment)
            })
            .collect();

        ScoreResult {
            total_calories: round2(total_calories),
            total_nutrients,
            recommendations,
            not_found,
        }
    }

    /// First table row (in table order) whose lowercased name contains the
    /// normalized query as a substring. Duplicate matches tie-break on
    /// table order.
    fn lookup(&self, needle: &str) -> Option<&FoodRecord> {
        self.lowered_names
            .iter()
            .position(|name| name.contains(needle))
            .map(|idx| &self.table.records[idx])
    }

    /// Feature vector in the predictor's declared order; features missing
    /// from the table contribute 0.0.
    fn feature_vector(&self, record: &FoodRecord) -> Vec<f64> {
        self.predictor
            .feature_names()
            .iter()
            .map(|feature| {
                if self.nutrient_cols.iter().any(|col| col == feature) {
                    record.nutrient(feature)
                } else {
                    0.0
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NutrientStatus;
    use std::collections::HashMap;

    fn record(name: &str, fat: f64, protein: f64, calories: f64) -> FoodRecord {
        FoodRecord {
            name: name.to_string(),
            nutrients: HashMap::from([
                ("fat".to_string(), fat),
                ("protein".to_string(), protein),
            ]),
            calories,
        }
    }

    fn test_scorer() -> NutritionScorer {
        let table = FoodTable {
            records: vec![
                record("Apple, raw", 0.2, 0.3, 52.0),
                record("Apple pie", 12.5, 2.4, 237.0),
                record("Grilled Chicken", 3.6, 31.0, 165.0),
            ],
            columns: vec!["fat".to_string(), "protein".to_string()],
        };
        // calories ~= 9*fat + 4*protein
        let predictor = CaloriePredictor::new(
            Some(vec!["fat".to_string(), "protein".to_string()]),
            vec![9.0, 4.0],
            0.0,
        )
        .unwrap();

        NutritionScorer::new(table, predictor)
    }

    #[test]
    fn test_substring_lookup_is_case_insensitive() {
        let scorer = test_scorer();
        let result = scorer.score(25, &["CHICKEN".to_string()]);

        assert!(result.not_found.is_empty());
        assert_eq!(result.total_nutrients["protein"], 31.0);
    }

    #[test]
    fn test_first_match_wins_on_duplicates() {
        let scorer = test_scorer();
        // "apple" matches both apple rows; the first in table order wins
        let result = scorer.score(25, &["apple".to_string()]);

        assert_eq!(result.total_nutrients["fat"], 0.2);
    }

    #[test]
    fn test_unmatched_items_are_reported_not_scored() {
        let scorer = test_scorer();
        let result = scorer.score(25, &["apple".to_string(), "zzz_nonexistent".to_string()]);

        assert_eq!(result.not_found, vec!["zzz_nonexistent".to_string()]);
        // Only the apple contributes: 9*0.2 + 4*0.3 = 3.0
        assert_eq!(result.total_calories, 3.0);
    }

    #[test]
    fn test_items_are_trimmed_and_lowercased() {
        let scorer = test_scorer();
        let result = scorer.score(25, &["  Nothing Here  ".to_string()]);

        assert_eq!(result.not_found, vec!["nothing here".to_string()]);
    }

    #[test]
    fn test_totals_accumulate_across_items() {
        let scorer = test_scorer();
        let result = scorer.score(
            25,
            &["apple, raw".to_string(), "chicken".to_string()],
        );

        assert_eq!(result.total_nutrients["fat"], 0.2 + 3.6);
        assert_eq!(result.total_nutrients["protein"], 0.3 + 31.0);
    }

    #[test]
    fn test_classification_uses_age_band() {
        let scorer = test_scorer();
        // One chicken: protein total 31.0, below both bands' minimum
        let result = scorer.score(10, &["chicken".to_string()]);

        assert_eq!(
            result.recommendations["protein"].status,
            NutrientStatus::Low
        );
        assert_eq!(
            result.recommendations["protein"].recommended_range,
            (40.0, 52.0)
        );
    }

    #[test]
    fn test_features_missing_from_table_are_excluded() {
        let table = FoodTable {
            records: vec![record("Apple", 1.0, 2.0, 52.0)],
            columns: vec!["fat".to_string(), "protein".to_string()],
        };
        let predictor = CaloriePredictor::new(
            Some(vec![
                "fat".to_string(),
                "protein".to_string(),
                "sodium".to_string(),
            ]),
            vec![9.0, 4.0, 100.0],
            0.0,
        )
        .unwrap();
        let scorer = NutritionScorer::new(table, predictor);

        let result = scorer.score(25, &["apple".to_string()]);

        // sodium is not a table column: excluded from totals and zero-filled
        // in the feature vector, so its large coefficient never shows up
        assert!(!result.total_nutrients.contains_key("sodium"));
        assert_eq!(result.total_calories, 9.0 + 8.0);
    }

    #[test]
    fn test_empty_request_scores_to_zero() {
        let scorer = test_scorer();
        let result = scorer.score(25, &[]);

        assert_eq!(result.total_calories, 0.0);
        assert!(result.not_found.is_empty());
        assert_eq!(result.total_nutrients["fat"], 0.0);
    }
}
