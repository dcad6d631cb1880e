//! Grading of normalization exercises.
//!
//! Each check compares one part of a student's answer with the reference
//! answer and returns a [`TaskResult`](normcheck_model::TaskResult).
//! [`grade_exercise`] runs all of them in order.

pub mod attributes;
pub mod chains;
pub mod context;
pub mod dependencies;
pub mod fingerprint;
pub mod grader;
pub mod partial;
pub mod primary_key;
pub mod schema;
pub mod transitive;

pub use attributes::compare_attributes;
pub use chains::{build_chains, compare_chains};
pub use context::GradingContext;
pub use dependencies::{compare_fd_sets, score_fd_coverage, unimplied};
pub use fingerprint::fingerprint;
pub use grader::{GradeReport, grade_exercise};
pub use partial::{compare_partial, partial_dependencies, resolve_partial};
pub use primary_key::check_primary_key;
pub use schema::{check_relation, check_schema};
pub use transitive::{compare_transitive, resolve_transitive, transitive_dependencies};
