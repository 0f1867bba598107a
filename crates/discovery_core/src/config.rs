//! Catalog source configuration.
//!
//! # Invariants
//! - `validate()` must pass before a configuration reaches a repository.
//! - The default body manifest lists the Sun first, then bodies outward.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub const DEFAULT_ELEMENTS_SOURCE: &str = "elements.json";

pub const DEFAULT_BODY_MANIFEST: [&str; 10] = [
    "sun.json",
    "mercury.json",
    "venus.json",
    "earth.json",
    "moon.json",
    "mars.json",
    "jupiter.json",
    "saturn.json",
    "uranus.json",
    "neptune.json",
];

/// Rejected source configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    EmptyDataDir,
    EmptyElementsSource,
    EmptyBodyManifest,
    BlankManifestEntry(usize),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyDataDir => write!(f, "data directory cannot be empty"),
            Self::EmptyElementsSource => write!(f, "elements source name cannot be empty"),
            Self::EmptyBodyManifest => write!(f, "body manifest cannot be empty"),
            Self::BlankManifestEntry(index) => {
                write!(f, "body manifest entry {index} is blank")
            }
        }
    }
}

impl Error for ConfigError {}

/// Where catalog sources live and which names to read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceConfig {
    pub data_dir: PathBuf,
    pub elements_source: String,
    /// Read in this order; load order does not decide final order.
    pub body_manifest: Vec<String>,
}

impl SourceConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            elements_source: DEFAULT_ELEMENTS_SOURCE.to_string(),
            body_manifest: default_body_manifest(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(ConfigError::EmptyDataDir);
        }
        if self.elements_source.trim().is_empty() {
            return Err(ConfigError::EmptyElementsSource);
        }
        if self.body_manifest.is_empty() {
            return Err(ConfigError::EmptyBodyManifest);
        }
        if let Some(index) = self
            .body_manifest
            .iter()
            .position(|name| name.trim().is_empty())
        {
            return Err(ConfigError::BlankManifestEntry(index));
        }
        Ok(())
    }
}

pub fn default_body_manifest() -> Vec<String> {
    DEFAULT_BODY_MANIFEST
        .iter()
        .map(|name| (*name).to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, SourceConfig};

    #[test]
    fn defaults_are_valid() {
        let config = SourceConfig::new("/srv/data");
        assert_eq!(config.elements_source, "elements.json");
        assert_eq!(config.body_manifest.len(), 10);
        assert_eq!(config.body_manifest[0], "sun.json");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_parts() {
        assert_eq!(
            SourceConfig::new("").validate(),
            Err(ConfigError::EmptyDataDir)
        );

        let mut config = SourceConfig::new("data");
        config.body_manifest.clear();
        assert_eq!(config.validate(), Err(ConfigError::EmptyBodyManifest));

        let mut config = SourceConfig::new("data");
        config.body_manifest[2] = "  ".to_string();
        assert_eq!(config.validate(), Err(ConfigError::BlankManifestEntry(2)));

        let mut config = SourceConfig::new("data");
        config.elements_source = String::new();
        assert_eq!(config.validate(), Err(ConfigError::EmptyElementsSource));
    }
}
