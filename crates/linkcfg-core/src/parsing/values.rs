use rust_decimal::Decimal;
use std::str::FromStr;

/// Canonicalize a numeric string.
///
/// Integral values render without a decimal point ("100.0" -> "100"),
/// others keep their decimal digits without trailing zeros
/// ("6.9270" -> "6.927"). Returns None if the string is not a number.
///
/// Handles formats like:
/// - "18" / "18.0" -> "18"
/// - "-56.50" -> "-56.5"
/// - "5.8e3" -> "5800"
pub fn canonical_number(s: &str) -> Option<String> {
    let decimal = parse_decimal(s.trim())?.normalize();
    if decimal.is_zero() {
        return Some("0".to_string());
    }
    Some(decimal.to_string())
}

fn parse_decimal(s: &str) -> Option<Decimal> {
    if s.is_empty() {
        return None;
    }
    match Decimal::from_str(s) {
        Ok(d) => Some(d),
        Err(_) if s.contains(['e', 'E']) => Decimal::from_scientific(s).ok(),
        Err(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_integral_float_collapses() {
        assert_eq!(canonical_number("100.0").as_deref(), Some("100"));
        assert_eq!(canonical_number("18.0").as_deref(), Some("18"));
        assert_eq!(canonical_number("30").as_deref(), Some("30"));
    }

    #[test]
    fn test_fraction_kept() {
        assert_eq!(canonical_number("5800.5").as_deref(), Some("5800.5"));
        assert_eq!(canonical_number("6.9270").as_deref(), Some("6.927"));
        assert_eq!(canonical_number("-56.50").as_deref(), Some("-56.5"));
    }

    #[test]
    fn test_scientific_notation() {
        assert_eq!(canonical_number("5.8e3").as_deref(), Some("5800"));
    }

    #[test]
    fn test_negative_zero() {
        assert_eq!(canonical_number("-0.0").as_deref(), Some("0"));
    }

    #[test]
    fn test_not_a_number() {
        assert_eq!(canonical_number("abc"), None);
        assert_eq!(canonical_number(""), None);
        assert_eq!(canonical_number("6.9 N"), None);
    }

    #[test]
    fn test_exact_decimal_digits_kept() {
        assert_eq!(
            canonical_number("6.92700000000000000001").as_deref(),
            Some("6.92700000000000000001")
        );
    }

    #[test]
    fn test_out_of_range_is_not_a_number() {
        assert_eq!(canonical_number("1e400"), None);
        assert_eq!(canonical_number("inf"), None);
    }

    #[test]
    fn test_parse_decimal_precision() {
        assert_eq!(parse_decimal("79.8612"), Some(dec!(79.8612)));
    }
}
