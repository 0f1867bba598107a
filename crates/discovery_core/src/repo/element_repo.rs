//! Element catalog over the single combined elements source.
//!
//! # Responsibility
//! - Decode the combined source once and cache it.
//! - Serve key lookups, classification filters and grid placement.
//!
//! # Invariants
//! - Any read or decode failure fails the whole load; there is no partial
//!   element catalog.
//! - Records keep source order.
//! - Symbol lookup is case-insensitive; atomic-number lookup is exact.
//!
//! # See also
//! - `repo::body_repo` for the per-source degrading policy.

use super::load_gate::LoadGate;
use super::{neighbors_in, Neighbors, RepoResult};
use crate::decode::{decode_elements, ElementsDocument, ElementsMetadata};
use crate::derivation::layout::GridPosition;
use crate::model::element::{Block, Element, ElementCategory};
use crate::source::SourceReader;
use log::{debug, error, info};
use std::collections::{BTreeMap, HashMap};
use std::time::Instant;

const CATALOG: &str = "element";

#[derive(Debug)]
struct ElementIndex {
    metadata: ElementsMetadata,
    elements: Vec<Element>,
    by_number: HashMap<u32, usize>,
    by_symbol: HashMap<String, usize>,
}

impl ElementIndex {
    fn new(metadata: ElementsMetadata, elements: Vec<Element>) -> Self {
        let by_number = elements
            .iter()
            .enumerate()
            .map(|(index, element)| (element.atomic_number, index))
            .collect();
        let by_symbol = elements
            .iter()
            .enumerate()
            .map(|(index, element)| (element.symbol.to_ascii_lowercase(), index))
            .collect();
        Self {
            metadata,
            elements,
            by_number,
            by_symbol,
        }
    }
}

/// Load-once element catalog.
#[derive(Debug)]
pub struct ElementCatalog<S: SourceReader> {
    source: S,
    source_name: String,
    gate: LoadGate<ElementIndex>,
}

impl<S: SourceReader> ElementCatalog<S> {
    pub fn new(source: S, source_name: impl Into<String>) -> Self {
        Self {
            source,
            source_name: source_name.into(),
            gate: LoadGate::new(),
        }
    }

    /// Loads the catalog, or returns the cached records without re-reading.
    ///
    /// # Errors
    /// - `RepoError::Source` when the combined source cannot be read.
    /// - `RepoError::Decode` when it is malformed or has duplicate keys.
    pub fn load(&self) -> RepoResult<&[Element]> {
        let (index, cached) = self.gate.get_or_load(|| self.load_index())?;
        if cached {
            debug!(
                "event=catalog_cached module=repo status=ok catalog={CATALOG} count={}",
                index.elements.len()
            );
        }
        Ok(&index.elements)
    }

    fn load_index(&self) -> RepoResult<ElementIndex> {
        let started_at = Instant::now();
        info!(
            "event=catalog_load module=repo status=start catalog={CATALOG} source={}",
            self.source_name
        );

        match self.read_document() {
            Ok(document) => {
                info!(
                    "event=catalog_load module=repo status=ok catalog={CATALOG} count={} duration_ms={}",
                    document.elements.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(ElementIndex::new(document.metadata, document.elements))
            }
            Err(err) => {
                error!(
                    "event=catalog_load_failed module=repo status=error catalog={CATALOG} source={} duration_ms={} error={}",
                    self.source_name,
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err)
            }
        }
    }

    fn read_document(&self) -> RepoResult<ElementsDocument> {
        let text = self.source.read_source(&self.source_name)?;
        Ok(decode_elements(&text, &self.source_name)?)
    }

    pub fn is_loaded(&self) -> bool {
        self.gate.is_ready()
    }

    /// Blocks until a concurrent `load()` succeeds.
    pub fn wait_until_loaded(&self) -> &[Element] {
        &self.gate.wait().elements
    }

    fn index(&self) -> RepoResult<&ElementIndex> {
        self.gate.require(CATALOG)
    }

    pub fn all(&self) -> RepoResult<&[Element]> {
        Ok(&self.index()?.elements)
    }

    pub fn metadata(&self) -> RepoResult<&ElementsMetadata> {
        Ok(&self.index()?.metadata)
    }

    pub fn get_by_number(&self, atomic_number: u32) -> RepoResult<Option<&Element>> {
        let index = self.index()?;
        Ok(index
            .by_number
            .get(&atomic_number)
            .map(|position| &index.elements[*position]))
    }

    pub fn get_by_symbol(&self, symbol: &str) -> RepoResult<Option<&Element>> {
        let index = self.index()?;
        Ok(index
            .by_symbol
            .get(&symbol.trim().to_ascii_lowercase())
            .map(|position| &index.elements[*position]))
    }

    pub fn by_category(&self, category: ElementCategory) -> RepoResult<Vec<&Element>> {
        self.filter(|element| element.category == category)
    }

    pub fn by_block(&self, block: Block) -> RepoResult<Vec<&Element>> {
        self.filter(|element| element.block == block)
    }

    pub fn by_period(&self, period: u32) -> RepoResult<Vec<&Element>> {
        self.filter(|element| element.period == period)
    }

    /// Elements without a group (f-block) never match.
    pub fn by_group(&self, group: u32) -> RepoResult<Vec<&Element>> {
        self.filter(|element| element.group == Some(group))
    }

    fn filter(&self, predicate: impl Fn(&Element) -> bool) -> RepoResult<Vec<&Element>> {
        Ok(self
            .index()?
            .elements
            .iter()
            .filter(|element| predicate(element))
            .collect())
    }

    /// Position of `element` in catalog order, keyed by atomic number.
    pub fn index_of(&self, element: &Element) -> RepoResult<Option<usize>> {
        Ok(self.index()?.by_number.get(&element.atomic_number).copied())
    }

    pub fn at(&self, position: usize) -> RepoResult<Option<&Element>> {
        Ok(self.index()?.elements.get(position))
    }

    /// Previous and next elements in catalog order; both `None` when
    /// `element` is not in the catalog.
    pub fn neighbors(&self, element: &Element) -> RepoResult<Neighbors<'_, Element>> {
        let index = self.index()?;
        Ok(match index.by_number.get(&element.atomic_number) {
            Some(position) => neighbors_in(&index.elements, *position),
            None => Neighbors {
                previous: None,
                next: None,
            },
        })
    }

    /// On-grid elements keyed by cell; off-grid records are left out.
    pub fn by_grid_position(&self) -> RepoResult<BTreeMap<GridPosition, &Element>> {
        Ok(self
            .index()?
            .elements
            .iter()
            .filter_map(|element| {
                let position = element.grid_position();
                position.is_on_grid().then_some((position, element))
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::ElementCatalog;
    use crate::repo::RepoError;
    use crate::source::MemorySource;

    #[test]
    fn queries_before_load_name_the_catalog() {
        let catalog = ElementCatalog::new(MemorySource::new(), "elements.json");
        assert!(!catalog.is_loaded());
        assert!(matches!(catalog.all(), Err(RepoError::NotLoaded("element"))));
        assert!(matches!(
            catalog.get_by_symbol("H"),
            Err(RepoError::NotLoaded("element"))
        ));
    }

    #[test]
    fn missing_source_fails_the_load() {
        let catalog = ElementCatalog::new(MemorySource::new(), "elements.json");
        assert!(matches!(catalog.load(), Err(RepoError::Source(_))));
        assert!(!catalog.is_loaded());
    }
}
