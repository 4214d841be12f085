use serde::{Deserialize, Serialize};

/// Request to estimate calories and score nutrient intake
///
/// Both fields are required; they are Options so that a missing key
/// surfaces as the service's own validation error rather than a serde
/// deserialization failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictRequest {
    pub age: Option<i64>,
    pub food_items: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_deserialize_as_none() {
        let req: PredictRequest = serde_json::from_str("{}").unwrap();
        assert!(req.age.is_none());
        assert!(req.food_items.is_none());
    }

    #[test]
    fn test_full_request_deserializes() {
        let req: PredictRequest =
            serde_json::from_str(r#"{"age": 25, "food_items": ["apple", "rice"]}"#).unwrap();
        assert_eq!(req.age, Some(25));
        assert_eq!(
            req.food_items,
            Some(vec!["apple".to_string(), "rice".to_string()])
        );
    }
}
