//! End-to-end transformation runs against in-memory collaborators.

mod common;

use std::collections::BTreeSet;

use cellax_engine::{
    Collaborators, EngineError, MemoryRenderLog, RenderError, RuleDefinitionError, RunOutcome,
    collect_results, run_transformation,
};
use cellax_model::{Axiom, Location, MergeDecision, TransformationRule};
use cellax_ontology::{FreshIriGenerator, Ontology, OntologyStore};
use cellax_sheet::Sheet;
use chrono::NaiveDate;

use common::{BrokenLog, CellRenderer, ConstantRenderer, RecordingPrompt, grid_sheet, iri, workbook};

fn generator() -> FreshIriGenerator {
    FreshIriGenerator::with_date(
        "http://ex.org/gen",
        NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
    )
}

fn base_store() -> OntologyStore {
    OntologyStore::with_active(Ontology::new(iri("http://ex.org/base")))
}

#[test]
fn traversal_visits_columns_top_to_bottom() {
    let mut book = workbook([grid_sheet("S", 2, 3)]);
    let mut renderer = CellRenderer::default();
    let mut log = MemoryRenderLog::new();
    let rules = [TransformationRule::new("S", "A", "B", "1", "3", "Class(@A1)")];

    let collected = collect_results(&rules, &mut book, &mut renderer, &mut log).unwrap();

    let order: Vec<String> = renderer.visited.iter().map(Location::to_a1).collect();
    assert_eq!(order, ["A1", "A2", "A3", "B1", "B2", "B3"]);
    assert_eq!(collected.stats.locations_visited, 6);
    assert_eq!(collected.collector.len(), 6);
    assert_eq!(log.records().len(), 6);
}

#[test]
fn wildcards_resolve_against_sheet_contents() {
    let sheet = Sheet::from_rows(
        "Data",
        [
            vec!["name", "parent", "label"],
            vec!["Cat", "Animal", ""],
            vec!["Dog", "Animal", ""],
            vec!["Fish", "", ""],
        ],
    );
    let mut book = workbook([sheet]);
    let mut renderer = CellRenderer::default();
    let mut log = MemoryRenderLog::new();
    let rules = [TransformationRule::new("Data", "A", "+", "2", "+", "Class(@A*)")];

    let collected = collect_results(&rules, &mut book, &mut renderer, &mut log).unwrap();

    // Row 2 is populated through B; the last populated row is 4.
    assert_eq!(collected.stats.locations_visited, 6);
    let axioms = cellax_engine::collect_axioms(collected.collector.results());
    let expected: BTreeSet<Axiom> = ["Class(Cat)", "Class(Dog)", "Class(Fish)", "Class(Animal)"]
        .into_iter()
        .map(Axiom::new)
        .collect();
    assert_eq!(axioms, expected);
}

#[test]
fn identical_renderings_across_rules_collapse() {
    let mut book = workbook([grid_sheet("S", 3, 3)]);
    let mut renderer = ConstantRenderer("Declaration(Class(:Thing))");
    let mut log = MemoryRenderLog::new();
    let rules = [
        TransformationRule::new("S", "A", "A", "1", "3", "Class(:Thing)"),
        TransformationRule::new("S", "B", "C", "2", "3", "Class(:Thing)"),
    ];

    let collected = collect_results(&rules, &mut book, &mut renderer, &mut log).unwrap();

    assert_eq!(collected.stats.rules_evaluated, 2);
    assert_eq!(collected.stats.renderings_produced, 7);
    assert_eq!(collected.collector.len(), 1);
}

#[test]
fn inactive_rules_are_skipped() {
    let mut book = workbook([grid_sheet("S", 2, 2)]);
    let mut renderer = CellRenderer::default();
    let mut log = MemoryRenderLog::new();
    let rules = [
        TransformationRule::new("S", "A", "A", "1", "2", "Class(@A*)"),
        TransformationRule::new("S", "B", "B", "1", "2", "Class(@B*)").with_active(false),
    ];

    let collected = collect_results(&rules, &mut book, &mut renderer, &mut log).unwrap();

    assert_eq!(collected.stats.rules_skipped, 1);
    assert!(renderer.visited.iter().all(|location| location.column == 0));
    assert!(log.records().iter().all(|record| record.location.column == 0));
}

#[test]
fn empty_and_inactive_rule_lists_are_rejected() {
    let mut book = workbook([grid_sheet("S", 1, 1)]);
    let mut renderer = CellRenderer::default();
    let mut log = MemoryRenderLog::new();

    let err = collect_results(&[], &mut book, &mut renderer, &mut log).unwrap_err();
    assert!(matches!(
        err,
        EngineError::RuleDefinition(RuleDefinitionError::NoRules)
    ));

    let rules = [TransformationRule::new("S", "A", "A", "1", "1", "x").with_active(false)];
    let err = collect_results(&rules, &mut book, &mut renderer, &mut log).unwrap_err();
    assert!(matches!(
        err,
        EngineError::RuleDefinition(RuleDefinitionError::NoActiveRules)
    ));
    assert!(renderer.visited.is_empty());
}

#[test]
fn create_new_container_imports_active_and_adds_axioms() {
    let mut book = workbook([grid_sheet("S", 1, 2)]);
    let mut renderer = CellRenderer::default();
    let mut log = MemoryRenderLog::new();
    let mut store = base_store();
    let mut ids = generator();
    let mut prompt = RecordingPrompt::new(MergeDecision::CreateNewContainer);
    let rules = [TransformationRule::new("S", "A", "A", "1", "2", "Class(@A*)")];

    let report = run_transformation(
        &rules,
        Collaborators {
            source: &mut book,
            renderer: &mut renderer,
            log: &mut log,
            model: &mut store,
            ids: &mut ids,
            prompt: &mut prompt,
        },
    );

    let expected_id = iri("http://ex.org/gen/2024/5/untitled-ontology-1");
    match &report.outcome {
        RunOutcome::MergedIntoNew(id) => assert_eq!(id, &expected_id),
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert!(report.log_error.is_none());
    assert_eq!(prompt.calls.get(), 1);
    assert_eq!(prompt.last_axiom_count.get(), 2);

    let created = store.get(&expected_id).unwrap();
    assert!(created.imports_ontology(&iri("http://ex.org/base")));
    let axioms: Vec<&str> = created.axioms.iter().map(Axiom::as_str).collect();
    assert_eq!(axioms, ["Class(A1)", "Class(A2)"]);
    assert_eq!(store.active_ontology().unwrap().axiom_count(), 0);
}

#[test]
fn merge_into_current_adds_to_active_only() {
    let mut book = workbook([grid_sheet("S", 1, 1)]);
    let mut store = base_store();
    let mut prompt = RecordingPrompt::new(MergeDecision::MergeIntoCurrentContainer);
    let rules = [TransformationRule::new("S", "A", "A", "1", "1", "Class(@A1)")];

    let report = run_transformation(
        &rules,
        Collaborators {
            source: &mut book,
            renderer: &mut CellRenderer::default(),
            log: &mut MemoryRenderLog::new(),
            model: &mut store,
            ids: &mut generator(),
            prompt: &mut prompt,
        },
    );

    assert!(matches!(report.outcome, RunOutcome::MergedIntoCurrent));
    assert_eq!(store.len(), 1);
    let active = store.active_ontology().unwrap();
    assert!(active.axioms.contains(&Axiom::new("Class(A1)")));
}

#[test]
fn cancel_leaves_store_untouched() {
    let mut book = workbook([grid_sheet("S", 2, 2)]);
    let mut store = base_store();
    let before = store.clone();
    let rules = [TransformationRule::new("S", "A", "B", "1", "2", "Class(@A*)")];

    let report = run_transformation(
        &rules,
        Collaborators {
            source: &mut book,
            renderer: &mut CellRenderer::default(),
            log: &mut MemoryRenderLog::new(),
            model: &mut store,
            ids: &mut generator(),
            prompt: &mut RecordingPrompt::new(MergeDecision::Cancel),
        },
    );

    assert!(matches!(report.outcome, RunOutcome::Discarded));
    assert_eq!(report.stats.axioms, 4);
    assert_eq!(store, before);
}

#[test]
fn render_failure_aborts_before_prompting() {
    let mut book = workbook([grid_sheet("S", 1, 5)]);
    let mut renderer = CellRenderer::failing_at(2);
    let mut log = MemoryRenderLog::new();
    let mut store = base_store();
    let before = store.clone();
    let mut prompt = RecordingPrompt::new(MergeDecision::CreateNewContainer);
    let rules = [TransformationRule::new("S", "A", "A", "1", "5", "Class(@A*)")];

    let report = run_transformation(
        &rules,
        Collaborators {
            source: &mut book,
            renderer: &mut renderer,
            log: &mut log,
            model: &mut store,
            ids: &mut generator(),
            prompt: &mut prompt,
        },
    );

    match report.error() {
        Some(EngineError::Render {
            location, source, ..
        }) => {
            assert_eq!(location.to_a1(), "A3");
            assert!(matches!(source, RenderError::Evaluation(_)));
        }
        other => panic!("expected render error, got {other:?}"),
    }
    assert_eq!(renderer.visited.len(), 3);
    assert_eq!(log.records().len(), 2);
    assert_eq!(prompt.calls.get(), 0);
    assert_eq!(store, before);
}

#[test]
fn failed_run_keeps_counts_reached_before_failure() {
    let mut book = workbook([grid_sheet("S", 2, 5)]);
    let rules = [
        TransformationRule::new("S", "A", "A", "1", "2", "Class(@A*)"),
        TransformationRule::new("S", "B", "B", "1", "5", "Class(@B*)"),
    ];

    let report = run_transformation(
        &rules,
        Collaborators {
            source: &mut book,
            renderer: &mut CellRenderer::failing_at(4),
            log: &mut MemoryRenderLog::new(),
            model: &mut base_store(),
            ids: &mut generator(),
            prompt: &mut RecordingPrompt::new(MergeDecision::Cancel),
        },
    );

    assert!(report.is_failed());
    assert_eq!(report.stats.rules_evaluated, 1);
    assert_eq!(report.stats.locations_visited, 4);
    assert_eq!(report.stats.renderings_produced, 4);
    assert_eq!(report.stats.unique_renderings, 4);
    assert_eq!(report.stats.axioms, 0);
}

#[test]
fn start_after_end_is_rule_definition_error() {
    let mut book = workbook([grid_sheet("S", 3, 3)]);
    let mut prompt = RecordingPrompt::new(MergeDecision::CreateNewContainer);
    let rules = [TransformationRule::new("S", "C", "A", "1", "2", "x")];

    let report = run_transformation(
        &rules,
        Collaborators {
            source: &mut book,
            renderer: &mut CellRenderer::default(),
            log: &mut MemoryRenderLog::new(),
            model: &mut base_store(),
            ids: &mut generator(),
            prompt: &mut prompt,
        },
    );

    let err = report.error().unwrap();
    assert!(err.is_rule_definition());
    assert!(err.to_string().starts_with("Start column after end column"));
    assert_eq!(prompt.calls.get(), 0);
}

#[test]
fn identifier_collision_fails_container_creation() {
    let mut book = workbook([grid_sheet("S", 1, 1)]);
    let taken = iri("http://ex.org/gen/2024/5/untitled-ontology-1");
    let mut store = OntologyStore::with_active(Ontology::new(taken));
    let before = store.clone();
    let rules = [TransformationRule::new("S", "A", "A", "1", "1", "Class(@A1)")];

    let report = run_transformation(
        &rules,
        Collaborators {
            source: &mut book,
            renderer: &mut CellRenderer::default(),
            log: &mut MemoryRenderLog::new(),
            model: &mut store,
            ids: &mut generator(),
            prompt: &mut RecordingPrompt::new(MergeDecision::CreateNewContainer),
        },
    );

    assert!(matches!(
        report.error(),
        Some(EngineError::ContainerCreation(_))
    ));
    assert_eq!(store, before);
}

#[test]
fn log_failure_is_reported_after_merge() {
    let mut book = workbook([grid_sheet("S", 1, 2)]);
    let mut store = base_store();
    let mut log = BrokenLog::default();
    let rules = [TransformationRule::new("S", "A", "A", "1", "2", "Class(@A*)")];

    let report = run_transformation(
        &rules,
        Collaborators {
            source: &mut book,
            renderer: &mut CellRenderer::default(),
            log: &mut log,
            model: &mut store,
            ids: &mut generator(),
            prompt: &mut RecordingPrompt::new(MergeDecision::MergeIntoCurrentContainer),
        },
    );

    assert!(matches!(report.outcome, RunOutcome::MergedIntoCurrent));
    assert!(matches!(report.log_error, Some(EngineError::LoggingIo(_))));
    assert_eq!(log.save_attempts, 1);
    assert_eq!(store.active_ontology().unwrap().axiom_count(), 2);
}

#[test]
fn failed_run_does_not_save_log() {
    let mut book = workbook([grid_sheet("S", 1, 1)]);
    let mut log = BrokenLog::default();
    let rules = [TransformationRule::new("Missing", "A", "A", "1", "1", "x")];

    let report = run_transformation(
        &rules,
        Collaborators {
            source: &mut book,
            renderer: &mut CellRenderer::default(),
            log: &mut log,
            model: &mut base_store(),
            ids: &mut generator(),
            prompt: &mut RecordingPrompt::new(MergeDecision::Cancel),
        },
    );

    assert!(matches!(
        report.error(),
        Some(EngineError::RuleDefinition(RuleDefinitionError::UnknownSheet { .. }))
    ));
    assert_eq!(log.save_attempts, 0);
    assert!(report.log_error.is_none());
}
