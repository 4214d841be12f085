use crate::models::NutrientStatus;

/// Recommended daily intake ranges for ages under 18.
const ADOLESCENT_RANGES: [(&str, (f64, f64)); 5] = [
    ("fat", (50.0, 70.0)),
    ("protein", (40.0, 52.0)),
    ("carbohydrate", (180.0, 260.0)),
    ("fiber", (20.0, 30.4)),
    ("sodium", (1200.0, 1840.0)),
];

/// Recommended daily intake ranges for ages 18 and over.
const ADULT_RANGES: [(&str, (f64, f64)); 5] = [
    ("fat", (60.0, 80.0)),
    ("protein", (50.0, 65.0)),
    ("carbohydrate", (220.0, 300.0)),
    ("fiber", (25.0, 35.0)),
    ("sodium", (1500.0, 2300.0)),
];

/// Select the range table for an age.
///
/// Exactly two bands, split strictly at age < 18. Negative or implausibly
/// large ages are accepted and simply fall into one of the two bands.
pub fn ranges_for_age(age: i64) -> &'static [(&'static str, (f64, f64))] {
    if age < 18 {
        &ADOLESCENT_RANGES
    } else {
        &ADULT_RANGES
    }
}

/// Look up the recommended (min, max) range for a nutrient.
///
/// Nutrients absent from the table get (0, 0): any positive accumulated
/// total then classifies as high and zero as good. This is the documented
/// default policy, not an omission.
pub fn recommended_range(ranges: &[(&str, (f64, f64))], nutrient: &str) -> (f64, f64) {
    ranges
        .iter()
        .find(|(name, _)| *name == nutrient)
        .map(|(_, range)| *range)
        .unwrap_or((0.0, 0.0))
}

/// Classify an accumulated nutrient total against its recommended range.
#[inline]
pub fn classify(value: f64, (min, max): (f64, f64)) -> NutrientStatus {
    if value < min {
        NutrientStatus::Low
    } else if value > max {
        NutrientStatus::High
    } else {
        NutrientStatus::Good
    }
}
