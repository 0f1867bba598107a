//! Number-or-text carrier for source fields with mixed encodings.
//!
//! Sources encode some quantities as numbers in one record and as sentinel
//! text (`"?"`, `"unknown"`, `"> 1000"`) in another. Both shapes decode into
//! one carrier instead of a dynamically typed field.

use crate::decode::coerce::parse_number;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Nullable numeric value plus the original text when it was not numeric.
///
/// # Invariants
/// - `value` and `text` are never both set.
/// - Decoding never fails; unusable input yields an empty carrier.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlexibleNumber {
    pub value: Option<f64>,
    pub text: Option<String>,
}

impl FlexibleNumber {
    pub fn from_number(value: f64) -> Self {
        Self {
            value: Some(value),
            text: None,
        }
    }

    /// Builds a carrier from raw text: numeric text becomes `value`,
    /// anything else non-blank is preserved in `text`.
    pub fn from_text(raw: &str) -> Self {
        if let Some(value) = parse_number(raw) {
            return Self::from_number(value);
        }
        let trimmed = raw.trim();
        Self {
            value: None,
            text: (!trimmed.is_empty()).then(|| trimmed.to_string()),
        }
    }

    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Number(number) => number
                .as_f64()
                .map(Self::from_number)
                .unwrap_or_default(),
            Value::String(text) => Self::from_text(text),
            _ => Self::default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_none() && self.text.is_none()
    }

    /// Display form: preserved text first, then the formatted number.
    pub fn display(&self) -> Option<String> {
        if let Some(text) = &self.text {
            return Some(text.clone());
        }
        self.value.map(format_number)
    }
}

/// Formats whole numbers without a trailing `.0`.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}

impl<'de> Deserialize<'de> for FlexibleNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}

impl Serialize for FlexibleNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match (&self.value, &self.text) {
            (Some(value), _) => serializer.serialize_f64(*value),
            (None, Some(text)) => serializer.serialize_str(text),
            (None, None) => serializer.serialize_none(),
        }
    }
}
