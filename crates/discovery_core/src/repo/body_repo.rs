//! Celestial-body catalog over a fixed manifest of per-body sources.
//!
//! # Responsibility
//! - Read every manifest source once, skipping the ones that fail.
//! - Serve id lookups, type filters and distance-ordered navigation.
//!
//! # Invariants
//! - A single unreadable or malformed source never fails the load; it is
//!   logged as `source_skipped` and the rest still load.
//! - Catalog order is a stable sort by order-from-sun; ties keep manifest
//!   order.
//! - Ids are unique case-insensitively; the first occurrence wins.

use super::load_gate::LoadGate;
use super::{neighbors_in, Neighbors, RepoError, RepoResult};
use crate::decode::decode_body;
use crate::model::body::{CelestialBody, CelestialBodyType};
use crate::source::SourceReader;
use log::{debug, info, warn};
use std::collections::HashMap;
use std::time::Instant;

const CATALOG: &str = "body";

/// Ids left out of side-by-side comparisons.
const NON_COMPARABLE_IDS: [&str; 2] = ["sun", "moon"];

#[derive(Debug)]
struct BodyIndex {
    bodies: Vec<CelestialBody>,
    by_id: HashMap<String, usize>,
}

impl BodyIndex {
    fn new(mut bodies: Vec<CelestialBody>) -> Self {
        bodies.sort_by_key(CelestialBody::order_from_sun);
        let by_id = bodies
            .iter()
            .enumerate()
            .map(|(index, body)| (body.id.to_lowercase(), index))
            .collect();
        Self { bodies, by_id }
    }
}

/// Load-once celestial-body catalog.
#[derive(Debug)]
pub struct BodyCatalog<S: SourceReader> {
    source: S,
    manifest: Vec<String>,
    gate: LoadGate<BodyIndex>,
}

impl<S: SourceReader> BodyCatalog<S> {
    pub fn new(source: S, manifest: Vec<String>) -> Self {
        Self {
            source,
            manifest,
            gate: LoadGate::new(),
        }
    }

    pub fn manifest(&self) -> &[String] {
        &self.manifest
    }

    /// Loads every manifest source, or returns the cached records.
    ///
    /// Per-source failures are logged and skipped, so this only ever
    /// returns `Ok`; the catalog may hold fewer bodies than the manifest.
    pub fn load(&self) -> RepoResult<&[CelestialBody]> {
        let (index, cached) = self
            .gate
            .get_or_load(|| Ok::<_, RepoError>(self.load_index()))?;
        if cached {
            debug!(
                "event=catalog_cached module=repo status=ok catalog={CATALOG} count={}",
                index.bodies.len()
            );
        }
        Ok(&index.bodies)
    }

    fn load_index(&self) -> BodyIndex {
        let started_at = Instant::now();
        info!(
            "event=catalog_load module=repo status=start catalog={CATALOG} sources={}",
            self.manifest.len()
        );

        let mut bodies: Vec<CelestialBody> = Vec::with_capacity(self.manifest.len());
        let mut skipped = 0usize;
        for name in &self.manifest {
            let Some(body) = self.read_body(name) else {
                skipped += 1;
                continue;
            };
            if bodies.iter().any(|existing| existing.same_key(&body)) {
                warn!(
                    "event=duplicate_skipped module=repo status=skipped catalog={CATALOG} source={} id={}",
                    name, body.id
                );
                skipped += 1;
                continue;
            }
            bodies.push(body);
        }

        let index = BodyIndex::new(bodies);
        info!(
            "event=catalog_load module=repo status=ok catalog={CATALOG} count={} skipped={} duration_ms={}",
            index.bodies.len(),
            skipped,
            started_at.elapsed().as_millis()
        );
        index
    }

    fn read_body(&self, name: &str) -> Option<CelestialBody> {
        let text = match self.source.read_source(name) {
            Ok(text) => text,
            Err(err) => {
                warn!(
                    "event=source_skipped module=repo status=skipped catalog={CATALOG} source={} reason=read error={}",
                    name, err
                );
                return None;
            }
        };
        match decode_body(&text, name) {
            Ok(body) => Some(body),
            Err(err) => {
                warn!(
                    "event=source_skipped module=repo status=skipped catalog={CATALOG} source={} reason=decode error={}",
                    name, err
                );
                None
            }
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.gate.is_ready()
    }

    /// Blocks until a concurrent `load()` completes.
    pub fn wait_until_loaded(&self) -> &[CelestialBody] {
        &self.gate.wait().bodies
    }

    fn index(&self) -> RepoResult<&BodyIndex> {
        self.gate.require(CATALOG)
    }

    /// Every body in distance order.
    pub fn all(&self) -> RepoResult<&[CelestialBody]> {
        Ok(&self.index()?.bodies)
    }

    /// Case-insensitive id lookup.
    pub fn get_by_id(&self, id: &str) -> RepoResult<Option<&CelestialBody>> {
        let index = self.index()?;
        Ok(index
            .by_id
            .get(&id.trim().to_lowercase())
            .map(|position| &index.bodies[*position]))
    }

    /// Case-insensitive display-name lookup.
    pub fn get_by_name(&self, name: &str) -> RepoResult<Option<&CelestialBody>> {
        let wanted = name.trim().to_lowercase();
        Ok(self
            .index()?
            .bodies
            .iter()
            .find(|body| body.name.to_lowercase() == wanted))
    }

    pub fn by_type(&self, kind: CelestialBodyType) -> RepoResult<Vec<&CelestialBody>> {
        self.filter(|body| body.body_type() == kind)
    }

    pub fn planets(&self) -> RepoResult<Vec<&CelestialBody>> {
        self.filter(CelestialBody::is_planet)
    }

    /// First star in distance order.
    pub fn sun(&self) -> RepoResult<Option<&CelestialBody>> {
        Ok(self.index()?.bodies.iter().find(|body| body.is_star()))
    }

    /// Moons whose parent is `planet_id` (case-insensitive).
    pub fn moons(&self, planet_id: &str) -> RepoResult<Vec<&CelestialBody>> {
        let parent = planet_id.trim().to_lowercase();
        self.filter(|body| {
            body.is_moon() && body.parent_id().as_deref() == Some(parent.as_str())
        })
    }

    /// Every body whose parent is `parent_id`, whatever its type.
    pub fn children_of(&self, parent_id: &str) -> RepoResult<Vec<&CelestialBody>> {
        let parent = parent_id.trim().to_lowercase();
        self.filter(|body| body.parent_id().as_deref() == Some(parent.as_str()))
    }

    /// Stable order-from-sun order; ties keep manifest order.
    pub fn sorted_by_distance(&self) -> RepoResult<Vec<&CelestialBody>> {
        self.filter(|_| true)
    }

    /// Bodies offered for side-by-side comparison: everything but the Sun
    /// and the Moon, in distance order.
    pub fn comparison_candidates(&self) -> RepoResult<Vec<&CelestialBody>> {
        self.filter(|body| {
            !NON_COMPARABLE_IDS
                .iter()
                .any(|excluded| excluded.eq_ignore_ascii_case(&body.id))
        })
    }

    fn filter(
        &self,
        predicate: impl Fn(&CelestialBody) -> bool,
    ) -> RepoResult<Vec<&CelestialBody>> {
        Ok(self
            .index()?
            .bodies
            .iter()
            .filter(|body| predicate(body))
            .collect())
    }

    /// Position of `body` in distance order, keyed by id.
    pub fn index_of(&self, body: &CelestialBody) -> RepoResult<Option<usize>> {
        Ok(self.index()?.by_id.get(&body.id.to_lowercase()).copied())
    }

    pub fn at(&self, position: usize) -> RepoResult<Option<&CelestialBody>> {
        Ok(self.index()?.bodies.get(position))
    }

    /// Previous and next bodies in distance order; both `None` when `body`
    /// is not in the catalog.
    pub fn neighbors(&self, body: &CelestialBody) -> RepoResult<Neighbors<'_, CelestialBody>> {
        let index = self.index()?;
        Ok(match index.by_id.get(&body.id.to_lowercase()) {
            Some(position) => neighbors_in(&index.bodies, *position),
            None => Neighbors {
                previous: None,
                next: None,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::BodyCatalog;
    use crate::repo::RepoError;
    use crate::source::MemorySource;

    fn manifest(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| (*name).to_string()).collect()
    }

    #[test]
    fn queries_before_load_name_the_catalog() {
        let catalog = BodyCatalog::new(MemorySource::new(), manifest(&["sun.json"]));
        assert!(matches!(
            catalog.get_by_id("sun"),
            Err(RepoError::NotLoaded("body"))
        ));
    }

    #[test]
    fn duplicate_ids_keep_the_first_occurrence() {
        let source = MemorySource::new()
            .with("a.json", r#"{"id": "mars", "name": "Mars"}"#)
            .with("b.json", r#"{"id": "MARS", "name": "Impostor"}"#);
        let catalog = BodyCatalog::new(source, manifest(&["a.json", "b.json"]));

        let bodies = catalog.load().unwrap();
        assert_eq!(bodies.len(), 1);
        assert_eq!(catalog.get_by_id("Mars").unwrap().unwrap().name, "Mars");
    }

    #[test]
    fn missing_sources_leave_an_empty_but_loaded_catalog() {
        let catalog = BodyCatalog::new(MemorySource::new(), manifest(&["sun.json"]));
        assert!(catalog.load().unwrap().is_empty());
        assert!(catalog.is_loaded());
        assert!(catalog.sun().unwrap().is_none());
    }
}
