//! Rule-driven traversal and axiom collection engine.
//!
//! A run takes the rules in declaration order and, for each active one:
//!
//! 1. **Resolve** (`region`): turn the declared range into a concrete region,
//!    resolving `+` wildcards against the live sheet
//! 2. **Traverse** (`traversal`): step through every cell, down each column
//!    then across
//! 3. **Evaluate** (`evaluate`): position the data source, render, log
//! 4. **Collect** (`collect`): keep each distinct rendering once
//!
//! The collected axioms are then handed to the operator (`merge`), who
//! discards them, adds them to a new ontology importing the active one, or
//! adds them to the active ontology.
//!
//! # Example
//!
//! ```ignore
//! use cellax_engine::{Collaborators, FixedDecision, MemoryRenderLog, run_transformation};
//! use cellax_model::MergeDecision;
//!
//! let report = run_transformation(
//!     &rules,
//!     Collaborators {
//!         source: &mut workbook,
//!         renderer: &mut renderer,
//!         log: &mut MemoryRenderLog::new(),
//!         model: &mut store,
//!         ids: &mut FreshIriGenerator::default(),
//!         prompt: &mut FixedDecision(MergeDecision::CreateNewContainer),
//!     },
//! );
//! ```

pub mod collect;
pub mod error;
pub mod evaluate;
pub mod log;
pub mod merge;
pub mod region;
pub mod run;
pub mod traversal;

pub use collect::{ResultCollector, collect_axioms};
pub use error::{
    EngineError, LogError, RenderError, Result, RuleDefinitionError, TraversalExhausted,
};
pub use evaluate::{Renderer, evaluate};
pub use log::{FileRenderLog, LogRecord, MemoryRenderLog, RenderLog};
pub use merge::{DecisionPrompt, FixedDecision, MergeCoordinator, MergeOutcome, MergePreview};
pub use region::{Region, resolve, resolve_in};
pub use run::{Collaborators, Collected, RunOutcome, RunReport, RunStats, collect_results, run_transformation};
pub use traversal::advance;
