// Value-cell parsing for the two input formats: revenue cells carry
// currency-formatted text like "$1,234.50", cost cells are plain numerics.
use anyhow::{anyhow, Result};
use std::str::FromStr;

/// Parses a currency-formatted cell like "$1,234.50" into f64 by stripping
/// the dollar sign, apostrophes, and grouping commas. No locale handling and
/// no parenthesized-negative handling.
pub fn parse_amount(s: &str) -> Result<f64> {
    let cleaned = s
        .trim()
        .replace('$', "")
        .replace('\'', "")
        .replace(',', "");

    let value = f64::from_str(&cleaned)
        .map_err(|e| anyhow!("failed to parse amount '{}': {}", s, e))?;
    if !value.is_finite() {
        return Err(anyhow!("amount '{}' is not a finite number", s));
    }
    Ok(value)
}

/// Parses a plain numeric cell (cost inputs carry no currency formatting).
pub fn parse_plain(s: &str) -> Result<f64> {
    let value = f64::from_str(s.trim())
        .map_err(|e| anyhow!("failed to parse value '{}': {}", s, e))?;
    if !value.is_finite() {
        return Err(anyhow!("value '{}' is not a finite number", s));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount_with_grouping() {
        assert_eq!(parse_amount("$1,234.00").unwrap(), 1234.00);
    }

    #[test]
    fn test_parse_amount_zero() {
        assert_eq!(parse_amount("$0").unwrap(), 0.0);
    }

    #[test]
    fn test_parse_amount_apostrophe_grouping() {
        assert_eq!(parse_amount("$1'234'567.89").unwrap(), 1234567.89);
    }

    #[test]
    fn test_parse_amount_bare_number() {
        assert_eq!(parse_amount("42.5").unwrap(), 42.5);
    }

    #[test]
    fn test_parse_amount_malformed() {
        assert!(parse_amount("$--").is_err());
        assert!(parse_amount("").is_err());
        assert!(parse_amount("$1.2.3").is_err());
    }

    #[test]
    fn test_parse_amount_rejects_non_finite() {
        assert!(parse_amount("inf").is_err());
        assert!(parse_amount("NaN").is_err());
    }

    #[test]
    fn test_parse_plain() {
        assert_eq!(parse_plain("100").unwrap(), 100.0);
        assert_eq!(parse_plain(" 12.75 ").unwrap(), 12.75);
        assert!(parse_plain("$100").is_err());
        assert!(parse_plain("abc").is_err());
    }
}
