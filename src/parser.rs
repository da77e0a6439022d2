//! Line parsing for the score stream.

use anyhow::{Context, Result};

/// Parses one input line into an integer score.
///
/// Surrounding whitespace is ignored. The stream format is one score per
/// line, so anything other than a single integer token is an error.
///
/// # Errors
///
/// Returns an error if the trimmed line is not a valid integer.
pub fn parse_score(line: &str) -> Result<i64> {
    let token = line.trim();

    token
        .parse::<i64>()
        .with_context(|| format!("not a valid integer score: {token:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_integer() {
        assert_eq!(parse_score("85").unwrap(), 85);
        assert_eq!(parse_score("0").unwrap(), 0);
        assert_eq!(parse_score("-12").unwrap(), -12);
    }

    #[test]
    fn test_parse_ignores_surrounding_whitespace() {
        assert_eq!(parse_score("  73\n").unwrap(), 73);
        assert_eq!(parse_score("\t90 ").unwrap(), 90);
    }

    #[test]
    fn test_parse_empty_line_fails() {
        assert!(parse_score("").is_err());
        assert!(parse_score("   ").is_err());
    }

    #[test]
    fn test_parse_non_numeric_fails() {
        assert!(parse_score("seventy").is_err());
        assert!(parse_score("8o").is_err());
    }

    #[test]
    fn test_parse_float_token_fails() {
        // The stream carries integers; fractional scores are malformed.
        assert!(parse_score("59.5").is_err());
    }

    #[test]
    fn test_parse_error_names_the_token() {
        let err = parse_score("abc").unwrap_err();
        assert!(format!("{err:#}").contains("\"abc\""));
    }
}
