use discovery_core::{
    Block, DirSource, ElementCatalog, ElementCategory, GridPosition, MemorySource, RepoError,
    SourceReader, SourceResult, ROOM_TEMPERATURE_KELVIN,
};
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

struct CountingSource {
    inner: MemorySource,
    reads: AtomicUsize,
}

impl CountingSource {
    fn new(inner: MemorySource) -> Self {
        Self {
            inner,
            reads: AtomicUsize::new(0),
        }
    }

    fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

impl SourceReader for CountingSource {
    fn read_source(&self, name: &str) -> SourceResult<String> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.inner.read_source(name)
    }
}

fn sample_document() -> String {
    json!({
        "version": 1,
        "generated": "2024-01-15T08:00:00Z",
        "sources": ["PubChem"],
        "elements": [
            {"atomicNumber": 1, "symbol": "H", "name": "Hydrogen", "atomicMass": 1.008,
             "category": "NONMETAL", "period": 1, "group": 1, "block": "s",
             "electronShells": [1], "meltingPoint": 13.99, "boilingPoint": 20.271},
            {"atomicNumber": 2, "symbol": "He", "name": "Helium", "atomicMass": 4.0026,
             "category": "NOBLE_GAS", "period": 1, "group": 18, "block": "s",
             "electronShells": [2]},
            {"atomicNumber": 3, "symbol": "Li", "name": "Lithium", "atomicMass": 6.94,
             "category": "ALKALI_METAL", "period": 2, "group": 1, "block": "s",
             "electronShells": [2, 1], "meltingPoint": 453.65, "boilingPoint": 1603},
            {"atomicNumber": 9, "symbol": "F", "name": "Fluorine", "atomicMass": 18.998,
             "category": "HALOGEN", "period": 2, "group": 17, "block": "p",
             "electronShells": [2, 7]},
            {"atomicNumber": 58, "symbol": "Ce", "name": "Cerium", "atomicMass": 140.116,
             "category": "LANTHANIDE", "period": 6, "block": "f",
             "electronShells": [2, 8, 18, 19, 9, 2]},
            {"atomicNumber": 120, "symbol": "Ubn", "name": "Unbinilium", "atomicMass": 299,
             "period": 8}
        ]
    })
    .to_string()
}

fn loaded_catalog() -> ElementCatalog<MemorySource> {
    let source = MemorySource::new().with("elements.json", sample_document());
    let catalog = ElementCatalog::new(source, "elements.json");
    catalog.load().unwrap();
    catalog
}

#[test]
fn load_reads_the_source_once() {
    let source = Arc::new(CountingSource::new(
        MemorySource::new().with("elements.json", sample_document()),
    ));
    let catalog = ElementCatalog::new(Arc::clone(&source), "elements.json");

    let first: Vec<_> = catalog.load().unwrap().to_vec();
    let second: Vec<_> = catalog.load().unwrap().to_vec();

    assert_eq!(first, second);
    assert_eq!(first.len(), 6);
    assert_eq!(source.reads(), 1);
}

#[test]
fn queries_before_load_fail_loudly() {
    let source = MemorySource::new().with("elements.json", sample_document());
    let catalog = ElementCatalog::new(source, "elements.json");

    assert!(!catalog.is_loaded());
    assert!(matches!(catalog.get_by_number(1), Err(RepoError::NotLoaded(_))));
    assert!(matches!(catalog.by_period(1), Err(RepoError::NotLoaded(_))));
    assert!(matches!(catalog.by_grid_position(), Err(RepoError::NotLoaded(_))));
}

#[test]
fn malformed_source_fails_without_partial_catalog() {
    let source = CountingSource::new(
        MemorySource::new().with("elements.json", "{\"version\": 1, \"elements\": [{\"atom"),
    );
    let catalog = ElementCatalog::new(source, "elements.json");

    let err = catalog.load().unwrap_err();
    assert!(matches!(err, RepoError::Decode(_)));
    assert!(err.to_string().contains("elements.json"));
    assert!(!catalog.is_loaded());
    assert!(matches!(catalog.all(), Err(RepoError::NotLoaded(_))));
}

#[test]
fn failed_load_can_be_retried() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = ElementCatalog::new(DirSource::new(dir.path()), "elements.json");

    assert!(matches!(catalog.load(), Err(RepoError::Source(_))));

    std::fs::write(dir.path().join("elements.json"), sample_document()).unwrap();
    assert_eq!(catalog.load().unwrap().len(), 6);
    assert!(catalog.is_loaded());
}

#[test]
fn key_lookups() {
    let catalog = loaded_catalog();

    assert_eq!(catalog.get_by_number(3).unwrap().unwrap().name, "Lithium");
    assert!(catalog.get_by_number(4).unwrap().is_none());
    assert_eq!(catalog.get_by_symbol("he").unwrap().unwrap().atomic_number, 2);
    assert_eq!(catalog.get_by_symbol(" LI ").unwrap().unwrap().atomic_number, 3);
    assert!(catalog.get_by_symbol("Xx").unwrap().is_none());

    let metadata = catalog.metadata().unwrap();
    assert_eq!(metadata.version, 1);
    assert_eq!(metadata.generated.as_deref(), Some("2024-01-15T08:00:00Z"));
}

#[test]
fn classification_filters() {
    let catalog = loaded_catalog();
    let symbols = |elements: Vec<&discovery_core::Element>| {
        elements
            .into_iter()
            .map(|element| element.symbol.clone())
            .collect::<Vec<_>>()
    };

    assert_eq!(symbols(catalog.by_period(1).unwrap()), vec!["H", "He"]);
    assert_eq!(symbols(catalog.by_group(1).unwrap()), vec!["H", "Li"]);
    assert_eq!(symbols(catalog.by_block(Block::F).unwrap()), vec!["Ce"]);
    assert_eq!(symbols(catalog.by_block(Block::S).unwrap()), vec!["H", "He", "Li", "Ubn"]);
    assert_eq!(
        symbols(catalog.by_category(ElementCategory::Halogen).unwrap()),
        vec!["F"]
    );
    assert!(catalog
        .by_category(ElementCategory::Actinide)
        .unwrap()
        .is_empty());
}

#[test]
fn sequential_navigation() {
    let catalog = loaded_catalog();
    let lithium = catalog.get_by_symbol("Li").unwrap().unwrap().clone();

    assert_eq!(catalog.index_of(&lithium).unwrap(), Some(2));
    assert_eq!(catalog.at(2).unwrap().unwrap().symbol, "Li");
    assert!(catalog.at(6).unwrap().is_none());

    let around = catalog.neighbors(&lithium).unwrap();
    assert_eq!(around.previous.unwrap().symbol, "He");
    assert_eq!(around.next.unwrap().symbol, "F");

    let hydrogen = catalog.at(0).unwrap().unwrap();
    assert!(catalog.neighbors(hydrogen).unwrap().previous.is_none());
}

#[test]
fn grid_map_skips_off_grid_records() {
    let catalog = loaded_catalog();
    let grid = catalog.by_grid_position().unwrap();

    assert_eq!(grid.len(), 5);
    assert_eq!(grid[&GridPosition::new(0, 17)].symbol, "He");
    assert_eq!(grid[&GridPosition::new(1, 16)].symbol, "F");
    assert_eq!(grid[&GridPosition::new(8, 4)].symbol, "Ce");
    assert!(grid.values().all(|element| element.symbol != "Ubn"));
}

#[test]
fn derived_values_follow_the_record() {
    let catalog = loaded_catalog();
    let lithium = catalog.get_by_number(3).unwrap().unwrap();

    assert_eq!(lithium.protons(), 3);
    assert_eq!(lithium.electrons(), 3);
    assert_eq!(lithium.neutrons(), 3);
    assert_eq!(lithium.valence_electrons(), 1);
    assert_eq!(
        lithium.state_at_temperature(ROOM_TEMPERATURE_KELVIN),
        discovery_core::StateOfMatter::Solid
    );

    let hydrogen = catalog.get_by_number(1).unwrap().unwrap();
    assert_eq!(hydrogen.neutrons(), 0);
    assert_eq!(
        hydrogen.state_at_temperature(ROOM_TEMPERATURE_KELVIN),
        discovery_core::StateOfMatter::Gas
    );
}
