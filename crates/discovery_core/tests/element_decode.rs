use discovery_core::{decode_elements, Block, DecodeError, ElementCategory, StateOfMatter};
use serde_json::json;

fn document(elements: serde_json::Value) -> String {
    json!({
        "version": 2,
        "generated": "2024-05-01T00:00:00Z",
        "sources": ["PubChem", "Wikipedia"],
        "elements": elements
    })
    .to_string()
}

#[test]
fn minimal_record_takes_declared_defaults() {
    let text = document(json!([{
        "atomicNumber": 26,
        "symbol": "Fe",
        "name": "Iron",
        "atomicMass": 55.845,
        "category": "transition metal",
        "period": 4
    }]));

    let decoded = decode_elements(&text, "elements.json").unwrap();
    assert_eq!(decoded.metadata.version, 2);
    assert_eq!(decoded.metadata.sources, vec!["PubChem", "Wikipedia"]);

    let iron = &decoded.elements[0];
    assert_eq!(iron.category, ElementCategory::TransitionMetal);
    assert_eq!(iron.group, None);
    assert_eq!(iron.block, Block::S);
    assert_eq!(iron.natural_state, StateOfMatter::Unknown);
    assert!(iron.electron_shells.is_empty());
    assert!(iron.oxidation_states.is_empty());
    assert!(iron.isotopes.is_empty());
    assert!(iron.trivia.is_empty());
    assert_eq!(iron.properties.melting_point, None);
    assert_eq!(iron.discovery.discovery_year, None);
    assert_eq!(iron.reference.summary, None);
    assert_eq!(iron.valence_electrons(), 0);
    assert_eq!(iron.neutrons(), 29);
}

#[test]
fn unknown_fields_are_ignored() {
    let text = document(json!([{
        "atomicNumber": 1,
        "symbol": "H",
        "name": "Hydrogen",
        "atomicMass": 1.008,
        "period": 1,
        "someFutureField": {"nested": [1, 2, 3]},
        "xrayPattern": "n/a"
    }]));

    let decoded = decode_elements(&text, "elements.json").unwrap();
    assert_eq!(decoded.elements[0].symbol, "H");
}

#[test]
fn numeric_text_and_garbage_coerce_per_field() {
    let text = document(json!([{
        "atomicNumber": "8",
        "symbol": "O",
        "name": "Oxygen",
        "atomicMass": "15.999",
        "category": "DIATOMIC_NONMETAL",
        "period": 2,
        "group": "16",
        "block": "P",
        "meltingPoint": "54.36",
        "boilingPoint": "not measured",
        "electronShells": [2, 6],
        "oxidationStates": [-2, "-1", "bogus"],
        "isotopes": [
            {"massNumber": 16, "neutrons": 8, "abundance": 0.99757, "halfLife": "stable", "stable": true},
            {"massNumber": 15, "neutrons": 7, "halfLife": 122.24, "halfLifeUnit": "s"}
        ]
    }]));

    let oxygen = decode_elements(&text, "elements.json")
        .unwrap()
        .elements
        .remove(0);

    assert_eq!(oxygen.atomic_number, 8);
    assert_eq!(oxygen.group, Some(16));
    assert_eq!(oxygen.block, Block::P);
    assert_eq!(oxygen.category, ElementCategory::Nonmetal);
    assert_eq!(oxygen.properties.melting_point, Some(54.36));
    assert_eq!(oxygen.properties.boiling_point, None);
    assert_eq!(oxygen.oxidation_states, vec![-2, -1]);
    assert_eq!(oxygen.valence_electrons(), 6);
    assert_eq!(oxygen.state_at_temperature(20.0), StateOfMatter::Unknown);

    let o16 = &oxygen.isotopes[0];
    assert_eq!(o16.half_life.value, None);
    assert_eq!(o16.half_life.text.as_deref(), Some("stable"));
    assert_eq!(o16.half_life_display().as_deref(), Some("stable"));
    assert!((o16.abundance() - 0.99757).abs() < 1e-9);

    let o15 = &oxygen.isotopes[1];
    assert_eq!(o15.half_life.value, Some(122.24));
    assert_eq!(o15.half_life_display().as_deref(), Some("122.24 s"));
    assert_eq!(o15.abundance(), 0.0);
    assert_eq!(oxygen.stable_isotopes().count(), 1);
}

#[test]
fn wrong_typed_text_and_flag_fields_degrade_per_field() {
    let text = document(json!([{
        "atomicNumber": 1,
        "symbol": "H",
        "name": "Hydrogen",
        "latinName": 1,
        "atomicMass": 1.008,
        "period": 1,
        "appearance": 1,
        "crystalStructure": {"kind": "hexagonal"},
        "discoveredBy": ["Cavendish"],
        "casNumber": 1333740,
        "ghsSymbols": "GHS02",
        "electronConfiguration": 1,
        "trivia": ["Lightest element", 7],
        "isotopes": [
            {"massNumber": 1, "neutrons": 0, "stable": "true", "halfLifeUnit": 5},
            {"massNumber": 3, "neutrons": 2, "stable": "no", "spin": 0.5},
            {"massNumber": "bad", "neutrons": 4},
            "tritium"
        ]
    }]));

    let hydrogen = decode_elements(&text, "elements.json")
        .unwrap()
        .elements
        .remove(0);

    assert_eq!(hydrogen.latin_name.as_deref(), Some("1"));
    assert_eq!(hydrogen.properties.appearance.as_deref(), Some("1"));
    assert_eq!(hydrogen.properties.crystal_structure, None);
    assert_eq!(hydrogen.discovery.discovered_by, None);
    assert_eq!(hydrogen.reference.cas_number.as_deref(), Some("1333740"));
    assert!(hydrogen.hazards.ghs_symbols.is_empty());
    assert_eq!(hydrogen.electron_configuration, "1");
    assert_eq!(hydrogen.trivia, vec!["Lightest element"]);

    assert_eq!(hydrogen.isotopes.len(), 2);
    let protium = &hydrogen.isotopes[0];
    assert!(protium.stable);
    assert_eq!(protium.half_life_unit.as_deref(), Some("5"));
    let tritium = &hydrogen.isotopes[1];
    assert!(!tritium.stable);
    assert_eq!(tritium.spin.as_deref(), Some("0.5"));
}

#[test]
fn missing_required_field_fails_the_document() {
    let text = document(json!([{
        "symbol": "He",
        "name": "Helium",
        "atomicMass": 4.0026,
        "period": 1
    }]));

    let err = decode_elements(&text, "elements.json").unwrap_err();
    assert!(matches!(err, DecodeError::Json { .. }));
}

#[test]
fn malformed_document_names_the_source() {
    let err =
        decode_elements("{\"version\": 1, \"elements\": [", "bundle/elements.json").unwrap_err();
    assert_eq!(err.source_name(), "bundle/elements.json");
    assert!(err.to_string().contains("bundle/elements.json"));
}

#[test]
fn duplicate_atomic_numbers_are_rejected() {
    let text = document(json!([
        {"atomicNumber": 6, "symbol": "C", "name": "Carbon", "atomicMass": 12.011, "period": 2},
        {"atomicNumber": 6, "symbol": "Cx", "name": "Carbon again", "atomicMass": 12.0, "period": 2}
    ]));

    let err = decode_elements(&text, "elements.json").unwrap_err();
    assert!(matches!(err, DecodeError::DuplicateKey { ref key, .. } if key == "6"));
}

#[test]
fn category_labels_accept_enum_and_human_forms() {
    assert_eq!(
        ElementCategory::from_raw("ALKALI_METAL"),
        ElementCategory::AlkaliMetal
    );
    assert_eq!(
        ElementCategory::from_raw("Alkaline-Earth Metal"),
        ElementCategory::AlkalineEarthMetal
    );
    assert_eq!(
        ElementCategory::from_raw("something else entirely"),
        ElementCategory::Unknown
    );
}
