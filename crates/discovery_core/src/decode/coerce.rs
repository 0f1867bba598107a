//! Tolerant value coercion used by schema `deserialize_with` hooks.
//!
//! # Responsibility
//! - Accept numbers encoded either as JSON numbers or numeric strings.
//! - Degrade unusable optional values to `None`/empty instead of failing.
//!
//! # Invariants
//! - Optional coercions never return an error for well-formed JSON.
//! - Required coercions fail only when the value is absent or non-numeric.

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Parses trimmed numeric text. Non-finite results are rejected.
pub(crate) fn parse_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
}

pub(crate) fn number_from_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => parse_number(text),
        _ => None,
    }
}

pub(crate) fn integer_from_value(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().and_then(integral)),
        Value::String(text) => parse_number(text).and_then(integral),
        _ => None,
    }
}

fn integral(value: f64) -> Option<i64> {
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        Some(value as i64)
    } else {
        None
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

pub(crate) fn opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(number_from_value(&value))
}

pub(crate) fn opt_i32<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(integer_from_value(&value).and_then(|raw| i32::try_from(raw).ok()))
}

pub(crate) fn opt_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(integer_from_value(&value).and_then(|raw| u32::try_from(raw).ok()))
}

pub(crate) fn required_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    number_from_value(&value)
        .ok_or_else(|| D::Error::custom(format!("expected a number, found {}", describe(&value))))
}

pub(crate) fn required_u32<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    integer_from_value(&value)
        .and_then(|raw| u32::try_from(raw).ok())
        .ok_or_else(|| {
            D::Error::custom(format!(
                "expected a non-negative integer, found {}",
                describe(&value)
            ))
        })
}

/// Accepts text or a number rendered as text (`1610` -> `"1610"`).
pub(crate) fn opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    })
}

/// Required-shape text that degrades to an empty string.
pub(crate) fn text_or_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(opt_text(deserializer)?.unwrap_or_default())
}

/// `true`, `"true"`, `"yes"`, `1` or `"1"`; anything else is `false`.
pub(crate) fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(flag_from_value(&value))
}

pub(crate) fn flag_from_value(value: &Value) -> bool {
    match value {
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64() == Some(1.0),
        Value::String(text) => matches!(
            text.trim().to_ascii_lowercase().as_str(),
            "true" | "yes" | "1"
        ),
        _ => false,
    }
}

/// Decodes a nested record, falling back to its default when the value
/// has the wrong shape.
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

/// Record list where items of the wrong shape are dropped.
pub(crate) fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(list_items(value)
        .into_iter()
        .filter_map(|item| T::deserialize(item).ok())
        .collect())
}

/// Maps an explicit `null` to the field default.
pub(crate) fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

pub(crate) fn f64_list<'de, D>(deserializer: D) -> Result<Vec<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(list_items(value).iter().filter_map(number_from_value).collect())
}

pub(crate) fn i32_list<'de, D>(deserializer: D) -> Result<Vec<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(list_items(value)
        .iter()
        .filter_map(integer_from_value)
        .filter_map(|raw| i32::try_from(raw).ok())
        .collect())
}

pub(crate) fn u32_list<'de, D>(deserializer: D) -> Result<Vec<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(list_items(value)
        .iter()
        .filter_map(integer_from_value)
        .filter_map(|raw| u32::try_from(raw).ok())
        .collect())
}

/// Text list where non-text items are dropped.
pub(crate) fn text_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(list_items(value)
        .into_iter()
        .filter_map(|item| match item {
            Value::String(text) => Some(text),
            _ => None,
        })
        .collect())
}

fn list_items(value: Value) -> Vec<Value> {
    match value {
        Value::Array(items) => items,
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::{flag_from_value, integer_from_value, number_from_value, parse_number};
    use serde_json::json;

    #[test]
    fn parse_number_accepts_trimmed_numeric_text() {
        assert_eq!(parse_number(" 12.5 "), Some(12.5));
        assert_eq!(parse_number("4.5e9"), Some(4.5e9));
        assert_eq!(parse_number("unknown"), None);
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("NaN"), None);
    }

    #[test]
    fn number_from_value_ignores_non_scalar_values() {
        assert_eq!(number_from_value(&json!(3)), Some(3.0));
        assert_eq!(number_from_value(&json!("7")), Some(7.0));
        assert_eq!(number_from_value(&json!(true)), None);
        assert_eq!(number_from_value(&json!([1])), None);
        assert_eq!(number_from_value(&json!(null)), None);
    }

    #[test]
    fn integer_from_value_rejects_fractions() {
        assert_eq!(integer_from_value(&json!(8)), Some(8));
        assert_eq!(integer_from_value(&json!(8.0)), Some(8));
        assert_eq!(integer_from_value(&json!("-2")), Some(-2));
        assert_eq!(integer_from_value(&json!(2.5)), None);
    }

    #[test]
    fn flag_accepts_common_truthy_forms_only() {
        let truthy = [json!(true), json!("true"), json!(" TRUE "), json!("yes"), json!(1)];
        for truthy in truthy {
            assert!(flag_from_value(&truthy), "{truthy} should be true");
        }
        let falsy = [
            json!(false),
            json!("false"),
            json!("stable"),
            json!(0),
            json!(2),
            json!(null),
            json!([true]),
        ];
        for falsy in falsy {
            assert!(!flag_from_value(&falsy), "{falsy} should be false");
        }
    }
}
