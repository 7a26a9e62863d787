//! Plain-text rendering of an ontology in functional-style syntax.

use std::fmt::Write;

use crate::ontology::Ontology;

/// Render `ontology` as an `Ontology(...)` document, imports first, then
/// axioms in sorted order.
pub fn write_functional(ontology: &Ontology) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Ontology(<{}>", ontology.id);
    for import in &ontology.imports {
        let _ = writeln!(out, "Import(<{import}>)");
    }
    if !ontology.axioms.is_empty() {
        out.push('\n');
    }
    for axiom in &ontology.axioms {
        let _ = writeln!(out, "{axiom}");
    }
    out.push_str(")\n");
    out
}
