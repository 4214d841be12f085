/// Unit suffixes stripped from raw cell values before numeric parsing.
///
/// Order matters: longer suffixes are removed first so that "12.5mg"
/// becomes "12.5" rather than losing its 'g' and failing to parse.
const UNIT_SUFFIXES: [&str; 3] = ["kcal", "mg", "g"];

/// Normalize a raw nutrient cell value into a number.
///
/// Unit suffixes ("kcal", "mg", "g") are stripped by exact, case-sensitive
/// substring removal, whitespace is trimmed, and the remainder is parsed as
/// a float. Anything that still fails to parse (empty cells, non-numeric
/// text) yields 0.0 as an explicit default, not an error.
pub fn clean_value(raw: &str) -> f64 {
    let mut value = raw.to_string();
    for suffix in UNIT_SUFFIXES {
        value = value.replace(suffix, "");
    }
    value.trim().parse::<f64>().unwrap_or(0.0)
}

/// Normalize an optional cell value; a missing cell is 0.0.
pub fn clean_opt_value(raw: Option<&str>) -> f64 {
    raw.map(clean_value).unwrap_or(0.0)
}

/// Round to two decimal places (reported calorie and nutrient figures).
#[inline]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_gram_suffix() {
        assert_eq!(clean_value("12.5g"), 12.5);
        assert_eq!(clean_value("0.2g"), 0.2);
    }

    #[test]
    fn test_strips_milligram_suffix() {
        // "mg" must survive the 'g' removal intact
        assert_eq!(clean_value("150mg"), 150.0);
        assert_eq!(clean_value("1.5 mg"), 1.5);
    }

    #[test]
    fn test_strips_kcal_suffix() {
        assert_eq!(clean_value("52kcal"), 52.0);
    }

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(clean_value("  42  "), 42.0);
        assert_eq!(clean_value(" 3.7g "), 3.7);
    }

    #[test]
    fn test_plain_numbers_pass_through() {
        assert_eq!(clean_value("100"), 100.0);
        assert_eq!(clean_value("-5.5"), -5.5);
    }

    #[test]
    fn test_unparseable_yields_zero() {
        assert_eq!(clean_value(""), 0.0);
        assert_eq!(clean_value("n/a"), 0.0);
        assert_eq!(clean_value("trace"), 0.0);
    }

    #[test]
    fn test_suffix_removal_is_not_anchored_to_the_end() {
        // Removal is plain substring replacement, so an interior unit
        // string still disappears before parsing
        assert_eq!(clean_value("12g5"), 125.0);
    }

    #[test]
    fn test_missing_cell_yields_zero() {
        assert_eq!(clean_opt_value(None), 0.0);
        assert_eq!(clean_opt_value(Some("7g")), 7.0);
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(12.345), 12.35);
        assert_eq!(round2(12.344), 12.34);
        assert_eq!(round2(100.0), 100.0);
    }
}
