// src/config/coerce.rs

//! Value coercion rules shared by the importer and distributor validators

use super::value::ConfigValue;
use thiserror::Error;

/// Tokens the host treats as true (compared case-insensitively)
const TRUE_TOKENS: &[&str] = &["true", "yes", "on", "1"];

/// Tokens the host treats as false (compared case-insensitively)
const FALSE_TOKENS: &[&str] = &["false", "no", "off", "0"];

/// Why a value could not be cast to an integer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumericCastError {
    #[error("'{0}' is not a whole decimal number")]
    NotDigits(String),

    #[error("'{0}' does not fit in a 64-bit integer")]
    OutOfRange(String),

    #[error("{0} cannot be cast to an integer")]
    WrongType(&'static str),
}

/// Interpret a string using the host's boolean token rules
///
/// Returns `None` when the string is not a recognized token.
pub fn parse_bool(value: &str) -> Option<bool> {
    let lowered = value.trim().to_ascii_lowercase();
    if TRUE_TOKENS.contains(&lowered.as_str()) {
        Some(true)
    } else if FALSE_TOKENS.contains(&lowered.as_str()) {
        Some(false)
    } else {
        None
    }
}

/// Resolve a flag setting to a boolean
///
/// Strings go through [`parse_bool`]; native booleans pass through. Any other
/// variant, and unrecognized strings, yield `None`.
pub fn coerce_bool(value: &ConfigValue) -> Option<bool> {
    match value {
        ConfigValue::Bool(b) => Some(*b),
        ConfigValue::Str(s) => parse_bool(s),
        ConfigValue::Absent | ConfigValue::Int(_) | ConfigValue::Float(_) => None,
    }
}

/// Cast to an integer without ever accepting a float
///
/// Native integers are returned unchanged. Strings are accepted only when
/// every character is an ASCII decimal digit, so signs, whitespace, decimal
/// points and exponents are all refused ("3.0" is not 3).
pub fn cast_to_int_without_floats(value: &ConfigValue) -> Result<i64, NumericCastError> {
    match value {
        ConfigValue::Int(i) => Ok(*i),
        ConfigValue::Str(s) => {
            if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
                return Err(NumericCastError::NotDigits(s.clone()));
            }
            s.parse::<i64>()
                .map_err(|_| NumericCastError::OutOfRange(s.clone()))
        }
        other => Err(NumericCastError::WrongType(other.kind())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bool_tokens() {
        for token in ["true", "True", "YES", "on", "1"] {
            assert_eq!(parse_bool(token), Some(true), "token {token}");
        }
        for token in ["false", "False", "no", "OFF", "0"] {
            assert_eq!(parse_bool(token), Some(false), "token {token}");
        }
        assert_eq!(parse_bool("maybe"), None);
        assert_eq!(parse_bool(""), None);
    }

    #[test]
    fn test_coerce_bool_variants() {
        assert_eq!(coerce_bool(&ConfigValue::Bool(false)), Some(false));
        assert_eq!(coerce_bool(&ConfigValue::from("true")), Some(true));
        assert_eq!(coerce_bool(&ConfigValue::Int(1)), None);
        assert_eq!(coerce_bool(&ConfigValue::Float(1.0)), None);
        assert_eq!(coerce_bool(&ConfigValue::from("sure")), None);
    }

    #[test]
    fn test_cast_digit_strings() {
        assert_eq!(cast_to_int_without_floats(&ConfigValue::from("5")), Ok(5));
        assert_eq!(cast_to_int_without_floats(&ConfigValue::from("0")), Ok(0));
        assert_eq!(
            cast_to_int_without_floats(&ConfigValue::from("007")),
            Ok(7)
        );
        assert_eq!(cast_to_int_without_floats(&ConfigValue::Int(12)), Ok(12));
    }

    #[test]
    fn test_cast_rejects_non_digits() {
        for raw in ["5.0", "-1", "+3", " 4", "1e3", "", "abc", "3.5"] {
            assert_eq!(
                cast_to_int_without_floats(&ConfigValue::from(raw)),
                Err(NumericCastError::NotDigits(raw.to_string())),
                "input {raw:?}"
            );
        }
    }

    #[test]
    fn test_cast_rejects_other_types() {
        assert_eq!(
            cast_to_int_without_floats(&ConfigValue::Float(3.0)),
            Err(NumericCastError::WrongType("a float"))
        );
        assert_eq!(
            cast_to_int_without_floats(&ConfigValue::Bool(true)),
            Err(NumericCastError::WrongType("a boolean"))
        );
    }

    #[test]
    fn test_cast_overflow() {
        let huge = "99999999999999999999999";
        assert_eq!(
            cast_to_int_without_floats(&ConfigValue::from(huge)),
            Err(NumericCastError::OutOfRange(huge.to_string()))
        );
    }
}
