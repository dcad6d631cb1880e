//! Partial dependencies with respect to the primary key.

use std::collections::BTreeSet;

use normcheck_model::{
    AttributeSet, FailureReason, FdSet, FunctionalDependency, Task, TaskResult, TaskValue,
};

use crate::context::GradingContext;
use crate::dependencies::unimplied;

fn is_partial(ctx: &GradingContext, primary_key: &AttributeSet, fd: &FunctionalDependency) -> bool {
    fd.lhs.len() < primary_key.len()
        && fd.lhs.is_subset(primary_key)
        && !ctx.prime.contains(&fd.rhs)
        && !fd.is_trivial()
}

/// Reference dependencies whose left side is a proper part of the primary
/// key and whose dependent is non-prime.
pub fn partial_dependencies(ctx: &GradingContext, primary_key: &AttributeSet) -> FdSet {
    ctx.fds
        .iter()
        .filter(|fd| is_partial(ctx, primary_key, fd))
        .cloned()
        .collect()
}

/// Compares the student's partial dependencies with the reference ones.
///
/// The reference list comes from [`resolve_partial`].
/// Every reference dependency must be implied by the student's list. Student
/// entries outside the reference are tolerated when they are partial
/// themselves and reported as extra otherwise.
pub fn compare_partial(
    ctx: &GradingContext,
    primary_key: Option<&AttributeSet>,
    reference: Option<&[FunctionalDependency]>,
    student: &[FunctionalDependency],
) -> TaskResult {
    let Some(primary_key) = primary_key.filter(|key| !key.is_empty()) else {
        return TaskResult::insufficient(Task::PartialDependencies, FailureReason::NoPrimaryKey);
    };
    let reference = resolve_partial(ctx, primary_key, reference);

    let missing = unimplied(&reference, student);
    let known: BTreeSet<&FunctionalDependency> = reference.iter().collect();
    let extra: FdSet = student
        .iter()
        .filter(|fd| !known.contains(fd) && !is_partial(ctx, primary_key, fd))
        .cloned()
        .collect();

    let result = if missing.is_empty() {
        TaskResult::pass(Task::PartialDependencies)
    } else {
        TaskResult::fail(Task::PartialDependencies, FailureReason::SetMismatch)
            .with_missing(TaskValue::Dependencies(missing))
    };
    let result = result
        .with_expected(TaskValue::Dependencies(reference))
        .with_actual(TaskValue::Dependencies(student.to_vec()));
    let result = if extra.is_empty() {
        result
    } else {
        result.with_extra(TaskValue::Dependencies(extra))
    };
    ctx.annotate(result)
}

/// The reference list to grade against: supplied, or derived from the key.
pub fn resolve_partial(
    ctx: &GradingContext,
    primary_key: &AttributeSet,
    reference: Option<&[FunctionalDependency]>,
) -> FdSet {
    match reference {
        Some(fds) if !fds.is_empty() => fds.to_vec(),
        _ => partial_dependencies(ctx, primary_key),
    }
}
