//! Flexible JSON decoding for catalog sources.
//!
//! # Responsibility
//! - Turn raw UTF-8 source text into schema records.
//! - Name the offending source in every decode error.
//!
//! # Invariants
//! - Unknown fields are ignored.
//! - Missing optional fields take their declared default.
//! - Field-level coercion failures never fail a record (see [`coerce`]).
//! - Only unparseable documents or missing/invalid required fields fail.
//!
//! # See also
//! - `model::flexible::FlexibleNumber`

pub(crate) mod coerce;

use crate::model::body::CelestialBody;
use crate::model::element::Element;
use serde::Deserialize;
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type DecodeResult<T> = Result<T, DecodeError>;

/// Decode failure for one source.
#[derive(Debug)]
pub enum DecodeError {
    Json {
        source_name: String,
        error: serde_json::Error,
    },
    DuplicateKey {
        source_name: String,
        key: String,
    },
}

impl DecodeError {
    pub fn source_name(&self) -> &str {
        match self {
            Self::Json { source_name, .. } | Self::DuplicateKey { source_name, .. } => {
                source_name
            }
        }
    }
}

impl Display for DecodeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json { source_name, error } => {
                write!(f, "failed to decode `{source_name}`: {error}")
            }
            Self::DuplicateKey { source_name, key } => {
                write!(f, "duplicate record key `{key}` in `{source_name}`")
            }
        }
    }
}

impl Error for DecodeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Json { error, .. } => Some(error),
            Self::DuplicateKey { .. } => None,
        }
    }
}

/// Header of the combined elements document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ElementsMetadata {
    #[serde(deserialize_with = "coerce::required_u32")]
    pub version: u32,
    #[serde(default)]
    pub generated: Option<String>,
    #[serde(default, deserialize_with = "coerce::text_list")]
    pub sources: Vec<String>,
}

/// Decoded combined elements document.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementsDocument {
    pub metadata: ElementsMetadata,
    /// Source order is preserved.
    pub elements: Vec<Element>,
}

#[derive(Deserialize)]
struct ElementsFile {
    #[serde(flatten)]
    metadata: ElementsMetadata,
    elements: Vec<Element>,
}

#[derive(Deserialize)]
struct BodiesFile {
    #[serde(default, deserialize_with = "coerce::null_default")]
    bodies: Vec<CelestialBody>,
}

/// Decodes the combined elements source.
///
/// # Errors
/// - `Json` when the document or any element record is malformed.
/// - `DuplicateKey` when two elements share an atomic number or a symbol.
pub fn decode_elements(text: &str, source_name: &str) -> DecodeResult<ElementsDocument> {
    let file: ElementsFile = parse(text, source_name)?;

    let mut numbers = HashSet::new();
    let mut symbols = HashSet::new();
    for element in &file.elements {
        if !numbers.insert(element.atomic_number) {
            return Err(duplicate(source_name, element.atomic_number.to_string()));
        }
        if !symbols.insert(element.symbol.to_ascii_lowercase()) {
            return Err(duplicate(source_name, element.symbol.clone()));
        }
    }

    Ok(ElementsDocument {
        metadata: file.metadata,
        elements: file.elements,
    })
}

/// Decodes one per-body source (a bare body object, no wrapper).
pub fn decode_body(text: &str, source_name: &str) -> DecodeResult<CelestialBody> {
    parse(text, source_name)
}

/// Decodes the legacy wrapped body bundle (`{version, bodies: [...]}`).
pub fn decode_bodies_bundle(text: &str, source_name: &str) -> DecodeResult<Vec<CelestialBody>> {
    let file: BodiesFile = parse(text, source_name)?;
    Ok(file.bodies)
}

fn parse<T>(text: &str, source_name: &str) -> DecodeResult<T>
where
    T: for<'de> Deserialize<'de>,
{
    serde_json::from_str(text).map_err(|error| DecodeError::Json {
        source_name: source_name.to_string(),
        error,
    })
}

fn duplicate(source_name: &str, key: String) -> DecodeError {
    DecodeError::DuplicateKey {
        source_name: source_name.to_string(),
        key,
    }
}

#[cfg(test)]
mod tests {
    use super::{decode_body, decode_elements, DecodeError};

    #[test]
    fn decode_error_names_the_source() {
        let err = decode_body("{ not json", "mars.json").unwrap_err();
        assert_eq!(err.source_name(), "mars.json");
        assert!(err.to_string().contains("mars.json"));
    }

    #[test]
    fn duplicate_symbols_are_rejected_case_insensitively() {
        let text = r#"{
            "version": 1,
            "elements": [
                {"atomicNumber": 1, "symbol": "H", "name": "Hydrogen", "atomicMass": 1.008, "period": 1},
                {"atomicNumber": 2, "symbol": "h", "name": "Fake", "atomicMass": 4.0, "period": 1}
            ]
        }"#;
        let err = decode_elements(text, "elements.json").unwrap_err();
        assert!(matches!(err, DecodeError::DuplicateKey { ref key, .. } if key == "h"));
    }
}
