//! Shared value types for the spreadsheet-to-axiom workspace.
//!
//! - **address**: column letter / row label conversion and the `+` wildcard
//! - **location**: zero-based cell positions
//! - **rule**: transformation rules and JSON rule documents
//! - **rendering**: axioms and the tagged rendering union
//! - **ids**: ontology IRIs
//! - **decision**: the operator's merge decision

pub mod address;
pub mod decision;
pub mod error;
pub mod ids;
pub mod location;
pub mod rendering;
pub mod rule;

pub use address::{
    WILDCARD, column_index_to_name, column_name_to_index, is_wildcard, row_index_to_label,
    row_label_to_index,
};
pub use decision::MergeDecision;
pub use error::{ModelError, Result};
pub use ids::ContainerId;
pub use location::Location;
pub use rendering::{Axiom, Rendering};
pub use rule::{RuleDocument, TransformationRule};
