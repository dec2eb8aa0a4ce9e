//! Numeric literal parsing.
//!
//! Literals are arbitrary precision: nothing here overflows.

use num_bigint::BigInt;

/// Parse a decimal integer, skipping `_` separators.
///
/// Returns `None` if no digit is present or a non-digit appears.
pub fn parse_integer(s: &str) -> Option<BigInt> {
    let digits: String = s.chars().filter(|&c| c != '_').collect();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    BigInt::parse_bytes(digits.as_bytes(), 10)
}

/// Parse a percentage literal such as `50%` or `12.5%` into an unreduced
/// `(numerator, denominator)` pair.
///
/// `12.5%` becomes `(125, 1000)`.
pub fn parse_percent(s: &str) -> Option<(BigInt, BigInt)> {
    let body = s.strip_suffix('%')?;
    let (whole, fraction) = match body.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (body, ""),
    };
    if !fraction.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let numerator = parse_integer(&format!("{whole}{fraction}"))?;
    let denominator = parse_integer(&format!("100{}", "0".repeat(fraction.len())))?;
    Some((numerator, denominator))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(n: i64) -> BigInt {
        BigInt::from(n)
    }

    #[test]
    fn test_parse_integer_skip_underscores() {
        assert_eq!(parse_integer("123"), Some(big(123)));
        assert_eq!(parse_integer("1_000_000"), Some(big(1_000_000)));
        assert_eq!(parse_integer("_"), None);
        assert_eq!(parse_integer("12a"), None);
    }

    #[test]
    fn test_parse_integer_is_unbounded() {
        let text = "123456789012345678901234567890";
        assert_eq!(parse_integer(text).map(|n| n.to_string()), Some(text.to_string()));
    }

    #[test]
    fn test_parse_percent() {
        assert_eq!(parse_percent("50%"), Some((big(50), big(100))));
        assert_eq!(parse_percent("12.5%"), Some((big(125), big(1000))));
        assert_eq!(parse_percent("0.25%"), Some((big(25), big(10000))));
        assert_eq!(parse_percent("50"), None);
    }
}
