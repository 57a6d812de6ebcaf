//! Whole-number parsing for free-text prompts

use crate::domain::error::{DomainError, DomainResult};

/// Parse a base-10 integer typed at a prompt.
///
/// Accepts surrounding whitespace, an optional leading `+`/`-`, and single
/// underscores between digits (`1_000`). Values outside `i64` are rejected.
pub fn parse_int(input: &str) -> DomainResult<i64> {
    let invalid = || DomainError::InvalidNumber {
        input: input.to_string(),
    };

    let trimmed = input.trim();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    if digits.is_empty() || digits.starts_with('_') || digits.ends_with('_') {
        return Err(invalid());
    }
    if digits.contains("__") || !digits.chars().all(|c| c.is_ascii_digit() || c == '_') {
        return Err(invalid());
    }

    let cleaned: String = std::iter::once(sign)
        .chain(digits.split('_'))
        .collect();
    cleaned.parse::<i64>().map_err(|_| invalid())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_plain_digits_when_parsing_then_ok() {
        assert_eq!(parse_int("10"), Ok(10));
        assert_eq!(parse_int(" 42\t"), Ok(42));
    }

    #[test]
    fn given_signed_input_when_parsing_then_sign_applies() {
        assert_eq!(parse_int("-7"), Ok(-7));
        assert_eq!(parse_int("+7"), Ok(7));
    }

    #[test]
    fn given_underscores_between_digits_when_parsing_then_ignored() {
        assert_eq!(parse_int("1_000"), Ok(1000));
    }

    #[test]
    fn given_malformed_input_when_parsing_then_invalid_number() {
        for bad in ["", "  ", "abc", "1.5", "_1", "1_", "1__0", "--1", "+-1", "1 2", "-"] {
            assert_eq!(
                parse_int(bad),
                Err(DomainError::InvalidNumber {
                    input: bad.to_string()
                }),
                "input {bad:?}"
            );
        }
    }

    #[test]
    fn given_value_beyond_i64_when_parsing_then_invalid_number() {
        assert!(parse_int("9223372036854775808").is_err());
        assert_eq!(parse_int("-9223372036854775808"), Ok(i64::MIN));
    }
}
