//! Comparison of a student's dependency set with the reference set.
//!
//! Dependencies are compared by implication, not by spelling: a reference
//! dependency counts as found when the student's set implies it.

use normcheck_core::closure;
use normcheck_model::{
    FailureReason, FdSet, FunctionalDependency, Score, ScoreLabel, Task, TaskNote, TaskResult,
    TaskValue,
};
use tracing::debug;

/// Dependencies of `wanted` whose dependent is not implied under `given`.
pub fn unimplied(wanted: &[FunctionalDependency], given: &[FunctionalDependency]) -> FdSet {
    wanted
        .iter()
        .filter(|fd| !closure(&fd.lhs, given).contains(&fd.rhs))
        .cloned()
        .collect()
}

/// Share of reference dependencies implied by the student's set, with its label.
pub fn score_fd_coverage(
    reference: &[FunctionalDependency],
    student: &[FunctionalDependency],
) -> Score {
    if reference.is_empty() {
        return Score {
            ratio: 0.0,
            label: ScoreLabel::NotApplicable,
        };
    }
    let covered = reference.len() - unimplied(reference, student).len();
    let ratio = covered as f64 / reference.len() as f64;
    let label = if ratio >= 1.0 {
        ScoreLabel::Full
    } else if ratio >= 0.5 {
        ScoreLabel::Most
    } else if ratio >= 0.25 {
        ScoreLabel::Partial
    } else {
        ScoreLabel::Little
    };
    Score { ratio, label }
}

/// Passes when every reference dependency is implied by the student's set.
///
/// Student dependencies the reference does not imply are listed as extra but
/// do not fail the task.
pub fn compare_fd_sets(
    reference: &[FunctionalDependency],
    student: &[FunctionalDependency],
) -> TaskResult {
    let missing = unimplied(reference, student);
    let extra = unimplied(student, reference);
    let score = score_fd_coverage(reference, student);
    debug!(
        missing = missing.len(),
        extra = extra.len(),
        score = %score.label,
        "compared dependency sets"
    );

    let result = if missing.is_empty() {
        TaskResult::pass(Task::Dependencies)
    } else {
        TaskResult::fail(Task::Dependencies, FailureReason::SetMismatch)
            .with_missing(TaskValue::Dependencies(missing))
    };
    let result = result
        .with_expected(TaskValue::Dependencies(reference.to_vec()))
        .with_actual(TaskValue::Dependencies(student.to_vec()))
        .with_note(TaskNote::Score(score));
    if extra.is_empty() {
        result
    } else {
        result.with_extra(TaskValue::Dependencies(extra))
    }
}
