//! Process-wide catalog service.
//!
//! # Responsibility
//! - Own both catalogs behind one startup `initialize()` call.
//! - Provide cross-catalog use cases (weight on a body, comparisons).
//!
//! # Invariants
//! - Element load failure propagates; body sources degrade per source.
//! - The service holds no mutable state beyond the catalogs' load gates.

use crate::config::{ConfigError, SourceConfig};
use crate::derivation::orbit::EARTH_GRAVITY;
use crate::model::body::CelestialBody;
use crate::repo::body_repo::BodyCatalog;
use crate::repo::element_repo::ElementCatalog;
use crate::repo::RepoResult;
use crate::service::comparison::{compare_bodies, ComparisonRow};
use crate::source::{DirSource, SourceReader};
use log::info;
use std::sync::Arc;

const EARTH_ID: &str = "earth";

/// Record counts after `initialize()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadSummary {
    pub elements: usize,
    pub bodies: usize,
    /// Manifest entries that produced no body.
    pub skipped_bodies: usize,
}

/// Owner of the element and body catalogs, sharing one source reader.
#[derive(Debug)]
pub struct DiscoveryCatalogs<S: SourceReader> {
    elements: ElementCatalog<Arc<S>>,
    bodies: BodyCatalog<Arc<S>>,
}

impl DiscoveryCatalogs<DirSource> {
    /// Builds catalogs reading from `config.data_dir`.
    pub fn from_config(config: &SourceConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(
            DirSource::new(config.data_dir.clone()),
            config.elements_source.clone(),
            config.body_manifest.clone(),
        ))
    }
}

impl<S: SourceReader> DiscoveryCatalogs<S> {
    pub fn new(
        source: S,
        elements_source: impl Into<String>,
        body_manifest: Vec<String>,
    ) -> Self {
        let source = Arc::new(source);
        Self {
            elements: ElementCatalog::new(Arc::clone(&source), elements_source),
            bodies: BodyCatalog::new(source, body_manifest),
        }
    }

    /// Loads both catalogs; safe to call more than once.
    ///
    /// # Errors
    /// - Any element catalog load error. The body catalog never fails.
    pub fn initialize(&self) -> RepoResult<LoadSummary> {
        let elements = self.elements.load()?.len();
        let bodies = self.bodies.load()?.len();
        let summary = LoadSummary {
            elements,
            bodies,
            skipped_bodies: self.bodies.manifest().len().saturating_sub(bodies),
        };
        info!(
            "event=catalogs_ready module=service status=ok elements={} bodies={} skipped_bodies={}",
            summary.elements, summary.bodies, summary.skipped_bodies
        );
        Ok(summary)
    }

    pub fn is_ready(&self) -> bool {
        self.elements.is_loaded() && self.bodies.is_loaded()
    }

    pub fn elements(&self) -> &ElementCatalog<Arc<S>> {
        &self.elements
    }

    pub fn bodies(&self) -> &BodyCatalog<Arc<S>> {
        &self.bodies
    }

    /// Weight on `body_id` for someone weighing `earth_weight` on Earth.
    ///
    /// Earth's gravity comes from the catalog's `earth` record, else the
    /// nominal 9.8 m/s². `None` for an unknown body or a non-positive gravity.
    pub fn weight_on(&self, body_id: &str, earth_weight: f64) -> RepoResult<Option<f64>> {
        let Some(body) = self.bodies.get_by_id(body_id)? else {
            return Ok(None);
        };
        let earth_gravity = self
            .bodies
            .get_by_id(EARTH_ID)?
            .map(CelestialBody::surface_gravity)
            .unwrap_or(EARTH_GRAVITY);
        Ok(weight_for_gravity(
            earth_weight,
            body.surface_gravity(),
            earth_gravity,
        ))
    }

    /// Comparison rows for `first_id` against `second_id`; `None` when
    /// either id is unknown.
    pub fn compare(
        &self,
        first_id: &str,
        second_id: &str,
    ) -> RepoResult<Option<Vec<ComparisonRow>>> {
        let first = self.bodies.get_by_id(first_id)?;
        let second = self.bodies.get_by_id(second_id)?;
        Ok(match (first, second) {
            (Some(first), Some(second)) => Some(compare_bodies(first, second)),
            _ => None,
        })
    }
}

fn weight_for_gravity(earth_weight: f64, body_gravity: f64, earth_gravity: f64) -> Option<f64> {
    (body_gravity > 0.0 && earth_gravity > 0.0)
        .then(|| earth_weight * (body_gravity / earth_gravity))
}

#[cfg(test)]
mod tests {
    use super::weight_for_gravity;

    #[test]
    fn weight_scales_with_gravity_ratio() {
        let weight = weight_for_gravity(70.0, 3.71, 9.8).unwrap();
        assert!((weight - 26.5).abs() < 0.01);
    }

    #[test]
    fn non_positive_gravity_has_no_weight() {
        assert_eq!(weight_for_gravity(70.0, 0.0, 9.8), None);
        assert_eq!(weight_for_gravity(70.0, 3.71, 0.0), None);
    }
}
