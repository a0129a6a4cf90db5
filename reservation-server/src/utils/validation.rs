//! Input validation helpers
//!
//! Centralized text length constants and loose JSON value parsing.
//! The browser front end may send numbers as JSON strings, so ids are
//! accepted in both forms.

use serde_json::Value;

use crate::utils::{AppError, AppResult};

// ── Text length limits ──────────────────────────────────────────────

/// Guest names and table names
pub const MAX_NAME_LEN: usize = 200;

/// Phone numbers
pub const MAX_SHORT_TEXT_LEN: usize = 100;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is present, non-blank and within the
/// length limit. Returns the trimmed value.
pub fn required_text(value: Option<&str>, field: &str, max_len: usize) -> AppResult<String> {
    let value = value.map(str::trim).unwrap_or_default();
    if value.is_empty() {
        return Err(AppError::required_field(field));
    }
    if value.chars().count() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.chars().count()
        ))
        .with_detail("field", field));
    }
    Ok(value.to_string())
}

/// Whether a JSON value counts as supplied (not null, not an empty string)
pub fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.trim().is_empty(),
        _ => true,
    }
}

/// A JSON number holding a positive integer that fits in `i32`
///
/// Integral floats (`4.0`) are accepted; strings, booleans and fractions
/// are not.
pub fn positive_int(value: &Value) -> Option<i32> {
    let Value::Number(n) = value else {
        return None;
    };
    let n = match n.as_i64() {
        Some(i) => i,
        None => {
            let f = n.as_f64()?;
            if f.fract() != 0.0 || f > i32::MAX as f64 {
                return None;
            }
            f as i64
        }
    };
    i32::try_from(n).ok().filter(|n| *n >= 1)
}

/// A positive record id given as a JSON number or a numeric string
pub fn loose_id(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
    .filter(|id| *id >= 1)
}

/// Whether a JSON value is falsy in the front end's sense
/// (`null`, `false`, `0`, `""`)
pub fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use shared::error::ErrorCode;

    #[test]
    fn test_required_text() {
        assert_eq!(
            required_text(Some("  Ann "), "first_name", MAX_NAME_LEN).unwrap(),
            "Ann"
        );

        let err = required_text(None, "last_name", MAX_NAME_LEN).unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredField);
        assert_eq!(err.message, "A 'last_name' property is required.");

        let err = required_text(Some("   "), "last_name", MAX_NAME_LEN).unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredField);

        let long = "x".repeat(MAX_NAME_LEN + 1);
        let err = required_text(Some(&long), "first_name", MAX_NAME_LEN).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }

    #[test]
    fn test_positive_int() {
        assert_eq!(positive_int(&json!(4)), Some(4));
        assert_eq!(positive_int(&json!(4.0)), Some(4));
        assert_eq!(positive_int(&json!(0)), None);
        assert_eq!(positive_int(&json!(-2)), None);
        assert_eq!(positive_int(&json!(2.5)), None);
        assert_eq!(positive_int(&json!("4")), None);
        assert_eq!(positive_int(&json!(true)), None);
        assert_eq!(positive_int(&json!(1_u64 << 40)), None);
    }

    #[test]
    fn test_loose_id() {
        assert_eq!(loose_id(&json!(7)), Some(7));
        assert_eq!(loose_id(&json!("7")), Some(7));
        assert_eq!(loose_id(&json!(" 12 ")), Some(12));
        assert_eq!(loose_id(&json!(0)), None);
        assert_eq!(loose_id(&json!("abc")), None);
        assert_eq!(loose_id(&json!(1.5)), None);
        assert_eq!(loose_id(&json!([1])), None);
    }

    #[test]
    fn test_presence() {
        assert!(!is_present(&json!(null)));
        assert!(!is_present(&json!(" ")));
        assert!(is_present(&json!(0)));
        assert!(is_falsy(&json!(0)));
        assert!(is_falsy(&json!("")));
        assert!(!is_falsy(&json!("0")));
    }
}
