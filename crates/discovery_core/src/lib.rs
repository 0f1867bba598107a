//! Core catalog logic for the Discovery Lab periodic table and solar system.
//! This crate is the single source of truth for record, decoding and
//! catalog invariants; hosts only render what it returns.

pub mod config;
pub mod decode;
pub mod derivation;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod source;

pub use config::{ConfigError, SourceConfig, DEFAULT_BODY_MANIFEST, DEFAULT_ELEMENTS_SOURCE};
pub use decode::{
    decode_bodies_bundle, decode_body, decode_elements, DecodeError, DecodeResult,
    ElementsDocument, ElementsMetadata,
};
pub use derivation::layout::{grid_position, GridPosition};
pub use derivation::matter::{state_at_temperature, ROOM_TEMPERATURE_KELVIN};
pub use derivation::orbit::normalize_type;
pub use logging::{default_log_level, init_logging, logging_status, LogLevel, LoggingError};
pub use model::body::{CelestialBody, CelestialBodyType};
pub use model::element::{Block, Element, ElementCategory, Isotope, StateOfMatter};
pub use model::flexible::{format_number, FlexibleNumber};
pub use repo::body_repo::BodyCatalog;
pub use repo::element_repo::ElementCatalog;
pub use repo::{Neighbors, RepoError, RepoResult};
pub use service::catalog_service::{DiscoveryCatalogs, LoadSummary};
pub use service::comparison::{ComparisonRow, Variance};
pub use source::{DirSource, MemorySource, SourceError, SourceReader, SourceResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
