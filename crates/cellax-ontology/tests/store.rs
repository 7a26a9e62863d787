//! Integration tests for the ontology store.

use std::collections::BTreeSet;

use cellax_model::{Axiom, ContainerId};
use cellax_ontology::{
    ModelService, Ontology, OntologyError, OntologyStore, add_axioms, add_import,
};
use tempfile::TempDir;

fn iri(value: &str) -> ContainerId {
    ContainerId::new(value).unwrap()
}

#[test]
fn store_roundtrips_through_json_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("store.json");
    let base = iri("http://ex.org/base");
    let child = iri("http://ex.org/child");

    let mut store = OntologyStore::with_active(Ontology::new(base.clone()));
    store.create_container(child.clone()).unwrap();
    let axioms: BTreeSet<Axiom> = [Axiom::new("Declaration(Class(:A))")].into();
    let mut batch = vec![add_import(&child, &base)];
    batch.extend(add_axioms(&child, &axioms));
    store.apply_changes(batch).unwrap();
    store.save(&path).unwrap();

    let loaded = OntologyStore::load(&path).unwrap();

    assert_eq!(loaded, store);
    assert_eq!(loaded.active_container(), Some(&base));
    let child_onto = loaded.get(&child).unwrap();
    assert!(child_onto.imports_ontology(&base));
    assert_eq!(child_onto.axiom_count(), 1);
}

#[test]
fn load_rejects_dangling_active_selection() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("store.json");
    std::fs::write(&path, r#"{"ontologies":{},"active":"http://ex.org/gone"}"#).unwrap();

    let err = OntologyStore::load(&path).unwrap_err();

    assert!(matches!(err, OntologyError::UnknownOntology { .. }));
}

#[test]
fn set_active_requires_loaded_ontology() {
    let mut store = OntologyStore::new();
    assert!(store.active_container().is_none());
    assert!(store.set_active(&iri("http://ex.org/x")).is_err());
    store.insert(Ontology::new(iri("http://ex.org/x"))).unwrap();
    store.set_active(&iri("http://ex.org/x")).unwrap();
    assert_eq!(store.active_ontology().unwrap().id.as_str(), "http://ex.org/x");
}
