//! Loose scalar coercion.
//!
//! Payloads from the API are not strictly typed: ids arrive as strings,
//! flags arrive as `0`/`1`, and so on. Every declared scalar is converted
//! with the explicit rules below instead of relying on language casts.
//!
//! | input          | string           | integer                  | float        | boolean              |
//! |----------------|------------------|--------------------------|--------------|----------------------|
//! | null           | `""`             | `0`                      | `0.0`        | `false`              |
//! | true / false   | `"1"` / `""`     | `1` / `0`                | `1.0`/`0.0`  | itself               |
//! | number         | decimal text     | truncated toward zero    | as `f64`     | non-zero             |
//! | string         | itself           | leading numeric prefix   | same         | `""`, `"0"` are false |
//! | mapping / list | shape mismatch   | shape mismatch           | shape mismatch | non-empty          |
//!
//! A string with no numeric prefix (`"abc"`) cannot be read as a number and
//! fails with [`QuestError::ScalarCoercionError`]; a blank string reads as 0.
//!
//! Integers never saturate: a number or numeric string outside the `i64`
//! range fails instead of clamping to `i64::MAX`/`i64::MIN`. Integral floats
//! below `1e15` are written without a fraction (`7.0` -> `"7"`); larger ones
//! use plain decimal notation (`1e20` -> `"100000000000000000000"`), never an
//! exponent.

use crate::domain::model::{RawValue, ScalarKind, Value};
use crate::utils::error::{QuestError, Result};
use serde_json::Number;

pub fn coerce(kind: ScalarKind, raw: &RawValue, path: &str) -> Result<Value> {
    match kind {
        ScalarKind::String => to_string(raw, path).map(Value::String),
        ScalarKind::Integer => to_integer(raw, path).map(Value::Integer),
        ScalarKind::Float => to_float(raw, path).map(Value::Float),
        ScalarKind::Boolean => Ok(Value::Boolean(to_boolean(raw))),
        ScalarKind::Raw => Ok(Value::Raw(raw.clone())),
    }
}

pub fn to_string(raw: &RawValue, path: &str) -> Result<String> {
    match raw {
        RawValue::Null => Ok(String::new()),
        RawValue::Bool(true) => Ok("1".to_string()),
        RawValue::Bool(false) => Ok(String::new()),
        RawValue::Number(n) => Ok(number_to_string(n)),
        RawValue::String(s) => Ok(s.clone()),
        RawValue::Array(_) | RawValue::Object(_) => Err(not_a_scalar(raw, path)),
    }
}

pub fn to_integer(raw: &RawValue, path: &str) -> Result<i64> {
    match raw {
        RawValue::Null | RawValue::Bool(false) => Ok(0),
        RawValue::Bool(true) => Ok(1),
        RawValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(i)
            } else {
                let f = n.as_f64().unwrap_or(f64::NAN);
                truncate(f).ok_or_else(|| coercion_error(ScalarKind::Integer, raw, path))
            }
        }
        RawValue::String(s) => {
            let prefix = match numeric_prefix(s) {
                NumericPrefix::Blank => return Ok(0),
                NumericPrefix::Missing => {
                    return Err(coercion_error(ScalarKind::Integer, raw, path))
                }
                NumericPrefix::Found(prefix) => prefix,
            };
            if let Ok(i) = prefix.parse::<i64>() {
                return Ok(i);
            }
            prefix
                .parse::<f64>()
                .ok()
                .and_then(truncate)
                .ok_or_else(|| coercion_error(ScalarKind::Integer, raw, path))
        }
        RawValue::Array(_) | RawValue::Object(_) => Err(not_a_scalar(raw, path)),
    }
}

pub fn to_float(raw: &RawValue, path: &str) -> Result<f64> {
    match raw {
        RawValue::Null | RawValue::Bool(false) => Ok(0.0),
        RawValue::Bool(true) => Ok(1.0),
        RawValue::Number(n) => n
            .as_f64()
            .ok_or_else(|| coercion_error(ScalarKind::Float, raw, path)),
        RawValue::String(s) => match numeric_prefix(s) {
            NumericPrefix::Blank => Ok(0.0),
            NumericPrefix::Missing => Err(coercion_error(ScalarKind::Float, raw, path)),
            NumericPrefix::Found(prefix) => prefix
                .parse::<f64>()
                .ok()
                .filter(|f| f.is_finite())
                .ok_or_else(|| coercion_error(ScalarKind::Float, raw, path)),
        },
        RawValue::Array(_) | RawValue::Object(_) => Err(not_a_scalar(raw, path)),
    }
}

pub fn to_boolean(raw: &RawValue) -> bool {
    match raw {
        RawValue::Null => false,
        RawValue::Bool(b) => *b,
        RawValue::Number(n) => n.as_f64() != Some(0.0),
        RawValue::String(s) => !(s.is_empty() || s == "0"),
        RawValue::Array(items) => !items.is_empty(),
        RawValue::Object(map) => !map.is_empty(),
    }
}

/// 原始值的形狀名稱，用於錯誤訊息
pub fn shape_of(raw: &RawValue) -> &'static str {
    match raw {
        RawValue::Null => "null",
        RawValue::Bool(_) => "boolean",
        RawValue::Number(_) => "number",
        RawValue::String(_) => "string",
        RawValue::Array(_) => "sequence",
        RawValue::Object(_) => "mapping",
    }
}

fn number_to_string(n: &Number) -> String {
    if n.is_f64() {
        format_float(n.as_f64().unwrap_or_default())
    } else {
        n.to_string()
    }
}

fn format_float(f: f64) -> String {
    if f.fract() == 0.0 && f.abs() < 1e15 {
        format!("{}", f as i64)
    } else {
        format!("{}", f)
    }
}

fn truncate(f: f64) -> Option<i64> {
    // i64::MAX as f64 == 2^63，屬於溢位
    if f.is_finite() && f >= i64::MIN as f64 && f < i64::MAX as f64 {
        Some(f.trunc() as i64)
    } else {
        None
    }
}

enum NumericPrefix<'a> {
    Blank,
    Missing,
    Found(&'a str),
}

/// 取出字串開頭的數字部分：空白、正負號、整數、小數、指數
fn numeric_prefix(text: &str) -> NumericPrefix<'_> {
    let trimmed = text.trim_start();
    if trimmed.trim_end().is_empty() {
        return NumericPrefix::Blank;
    }

    let bytes = trimmed.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if digits > 0 || frac_end > frac_start {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }

    if digits == 0 {
        return NumericPrefix::Missing;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    NumericPrefix::Found(&trimmed[..end])
}

fn coercion_error(kind: ScalarKind, raw: &RawValue, path: &str) -> QuestError {
    QuestError::ScalarCoercionError {
        path: path.to_string(),
        kind: kind.name(),
        value: raw.to_string(),
    }
}

fn not_a_scalar(raw: &RawValue, path: &str) -> QuestError {
    QuestError::ShapeMismatch {
        path: path.to_string(),
        expected: "scalar",
        found: shape_of(raw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_string_coercion() {
        assert_eq!(to_string(&json!(42), "$").unwrap(), "42");
        assert_eq!(to_string(&json!(1.5), "$").unwrap(), "1.5");
        assert_eq!(to_string(&json!(7.0), "$").unwrap(), "7");
        assert_eq!(to_string(&json!(true), "$").unwrap(), "1");
        assert_eq!(to_string(&json!(false), "$").unwrap(), "");
        assert_eq!(to_string(&json!(null), "$").unwrap(), "");
        assert_eq!(to_string(&json!("abc"), "$").unwrap(), "abc");
        assert!(matches!(
            to_string(&json!([1]), "$.x"),
            Err(QuestError::ShapeMismatch { found: "sequence", .. })
        ));
    }

    #[test]
    fn test_integer_coercion() {
        assert_eq!(to_integer(&json!("103"), "$").unwrap(), 103);
        assert_eq!(to_integer(&json!(7), "$").unwrap(), 7);
        assert_eq!(to_integer(&json!(7.9), "$").unwrap(), 7);
        assert_eq!(to_integer(&json!(-7.9), "$").unwrap(), -7);
        assert_eq!(to_integer(&json!("  12abc"), "$").unwrap(), 12);
        assert_eq!(to_integer(&json!("12.7"), "$").unwrap(), 12);
        assert_eq!(to_integer(&json!("1e3"), "$").unwrap(), 1000);
        assert_eq!(to_integer(&json!("-5"), "$").unwrap(), -5);
        assert_eq!(to_integer(&json!(""), "$").unwrap(), 0);
        assert_eq!(to_integer(&json!(true), "$").unwrap(), 1);
        assert_eq!(to_integer(&json!(null), "$").unwrap(), 0);
    }

    #[test]
    fn test_integer_coercion_failures() {
        match to_integer(&json!("abc"), "$.championId").unwrap_err() {
            QuestError::ScalarCoercionError { path, kind, value } => {
                assert_eq!(path, "$.championId");
                assert_eq!(kind, "integer");
                assert_eq!(value, "\"abc\"");
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(to_integer(&json!(u64::MAX), "$").is_err());
        assert!(to_integer(&json!("1e400"), "$").is_err());
        assert!(to_integer(&json!("."), "$").is_err());
        assert!(to_integer(&json!({"a": 1}), "$").is_err());
    }

    #[test]
    fn test_out_of_range_and_large_floats() {
        assert!(matches!(
            to_integer(&json!("99999999999999999999"), "$.gameId"),
            Err(QuestError::ScalarCoercionError { kind: "integer", .. })
        ));
        assert!(to_integer(&json!("-99999999999999999999"), "$").is_err());
        assert_eq!(
            to_integer(&json!("9223372036854775807"), "$").unwrap(),
            i64::MAX
        );

        assert_eq!(to_string(&json!(1e20), "$").unwrap(), "100000000000000000000");
        assert_eq!(to_string(&json!(1e14), "$").unwrap(), "100000000000000");
    }

    #[test]
    fn test_float_coercion() {
        assert_eq!(to_float(&json!("3.25"), "$").unwrap(), 3.25);
        assert_eq!(to_float(&json!(".5x"), "$").unwrap(), 0.5);
        assert_eq!(to_float(&json!("2e"), "$").unwrap(), 2.0);
        assert_eq!(to_float(&json!(4), "$").unwrap(), 4.0);
        assert_eq!(to_float(&json!(false), "$").unwrap(), 0.0);
        assert!(to_float(&json!("NaN"), "$").is_err());
        assert!(to_float(&json!("1e999"), "$").is_err());
    }

    #[test]
    fn test_boolean_truthiness() {
        assert!(!to_boolean(&json!(null)));
        assert!(!to_boolean(&json!(0)));
        assert!(!to_boolean(&json!(0.0)));
        assert!(!to_boolean(&json!("")));
        assert!(!to_boolean(&json!("0")));
        assert!(!to_boolean(&json!([])));
        assert!(!to_boolean(&json!({})));
        assert!(to_boolean(&json!(1)));
        assert!(to_boolean(&json!(-0.5)));
        assert!(to_boolean(&json!("0.0")));
        assert!(to_boolean(&json!("false")));
        assert!(to_boolean(&json!([0])));
    }

    #[test]
    fn test_raw_passes_through() {
        let raw = json!({"nested": [1, "two"]});
        assert_eq!(
            coerce(ScalarKind::Raw, &raw, "$").unwrap(),
            Value::Raw(raw.clone())
        );
    }
}
