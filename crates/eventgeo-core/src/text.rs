// crates/eventgeo-core/src/text.rs

/// Builds the lookup key used by every index in the crate.
///
/// Matching is exact after trimming and lowercasing; there is no accent
/// folding or fuzzy matching.
///
/// ```rust
/// use eventgeo_core::text::fold_key;
///
/// assert_eq!(fold_key("  Los Angeles "), "los angeles");
/// assert_eq!(fold_key("CA"), fold_key("ca"));
/// ```
pub fn fold_key(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Parses a coordinate field, rejecting blanks and non-finite values.
pub fn parse_coord(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// True for exactly five ASCII digits.
pub fn is_zip5(s: &str) -> bool {
    s.len() == 5 && s.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fold_key_trims_and_lowercases() {
        assert_eq!(fold_key("\tNew York  "), "new york");
        assert_eq!(fold_key("TEXAS"), fold_key(" texas"));
        assert_ne!(fold_key("Texas"), fold_key("Tex."));
    }

    #[test]
    fn parse_coord_rejects_garbage() {
        assert_eq!(parse_coord(" 43.61 "), Some(43.61));
        assert_eq!(parse_coord("-116.2"), Some(-116.2));
        assert_eq!(parse_coord(""), None);
        assert_eq!(parse_coord("n/a"), None);
        assert_eq!(parse_coord("NaN"), None);
    }

    #[test]
    fn zip5_shape() {
        assert!(is_zip5("90210"));
        assert!(is_zip5("00501"));
        assert!(!is_zip5("9021"));
        assert!(!is_zip5("902101"));
        assert!(!is_zip5("9021a"));
    }
}
