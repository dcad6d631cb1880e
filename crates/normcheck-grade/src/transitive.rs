//! Transitive dependencies of the universal relation.

use std::collections::BTreeSet;

use normcheck_core::is_superkey;
use normcheck_model::{FailureReason, FdSet, FunctionalDependency, Task, TaskResult, TaskValue};

use crate::context::GradingContext;

/// Reference dependencies whose left side is not a superkey and whose
/// dependent is non-prime.
pub fn transitive_dependencies(ctx: &GradingContext) -> FdSet {
    ctx.fds
        .iter()
        .filter(|fd| !fd.is_trivial() && !ctx.prime.contains(&fd.rhs))
        .filter(|fd| !is_superkey(&fd.lhs, &ctx.universe, &ctx.fds))
        .cloned()
        .collect()
}

/// The reference list to grade against: supplied, or derived.
pub fn resolve_transitive(
    ctx: &GradingContext,
    reference: Option<&[FunctionalDependency]>,
) -> FdSet {
    match reference {
        Some(fds) if !fds.is_empty() => fds.to_vec(),
        _ => transitive_dependencies(ctx),
    }
}

/// Strict set comparison of the student's transitive dependencies with the
/// reference list (see [`resolve_transitive`]).
pub fn compare_transitive(
    ctx: &GradingContext,
    reference: Option<&[FunctionalDependency]>,
    student: &[FunctionalDependency],
) -> TaskResult {
    let reference = resolve_transitive(ctx, reference);
    let reference_set: BTreeSet<&FunctionalDependency> = reference.iter().collect();
    let student_set: BTreeSet<&FunctionalDependency> = student.iter().collect();

    let result = if reference_set == student_set {
        TaskResult::pass(Task::TransitiveDependencies)
    } else {
        let missing: FdSet = reference
            .iter()
            .filter(|fd| !student_set.contains(fd))
            .cloned()
            .collect();
        let extra: FdSet = student
            .iter()
            .filter(|fd| !reference_set.contains(fd))
            .cloned()
            .collect();
        TaskResult::fail(Task::TransitiveDependencies, FailureReason::SetMismatch)
            .with_missing(TaskValue::Dependencies(missing))
            .with_extra(TaskValue::Dependencies(extra))
    };
    ctx.annotate(
        result
            .with_expected(TaskValue::Dependencies(reference))
            .with_actual(TaskValue::Dependencies(student.to_vec())),
    )
}

#[cfg(test)]
mod tests {
    use normcheck_model::{KeySearchOptions, TaskStatus, attribute_set};

    use super::*;

    fn fd(lhs: &[&str], rhs: &str) -> FunctionalDependency {
        FunctionalDependency::new(lhs.iter().copied(), rhs)
    }

    fn ctx() -> GradingContext {
        GradingContext::new(
            attribute_set(["emp", "dept", "manager"]),
            &[fd(&["emp"], "dept"), fd(&["dept"], "manager")],
            KeySearchOptions::default(),
        )
    }

    #[test]
    fn derives_transitive_dependency_of_universal_relation() {
        assert_eq!(
            transitive_dependencies(&ctx()),
            vec![fd(&["dept"], "manager")]
        );
    }

    #[test]
    fn exact_answer_passes() {
        let result = compare_transitive(&ctx(), None, &[fd(&["dept"], "manager")]);
        assert_eq!(result.status, TaskStatus::Pass);
    }

    #[test]
    fn implied_but_different_answer_fails() {
        let result = compare_transitive(&ctx(), None, &[fd(&["emp"], "manager")]);
        assert_eq!(result.status, TaskStatus::Fail);
        assert_eq!(
            result.missing,
            Some(TaskValue::Dependencies(vec![fd(&["dept"], "manager")]))
        );
        assert_eq!(
            result.extra,
            Some(TaskValue::Dependencies(vec![fd(&["emp"], "manager")]))
        );
    }

    #[test]
    fn partial_dependencies_count_as_transitive() {
        // order -> date: the left side is not a superkey of the universe.
        let ctx = GradingContext::new(
            attribute_set(["order", "product", "qty", "date"]),
            &[fd(&["order", "product"], "qty"), fd(&["order"], "date")],
            KeySearchOptions::default(),
        );
        assert_eq!(transitive_dependencies(&ctx), vec![fd(&["order"], "date")]);
    }

    #[test]
    fn supplied_reference_is_used() {
        let reference = vec![fd(&["emp"], "manager")];
        let result = compare_transitive(&ctx(), Some(&reference), &reference);
        assert_eq!(result.status, TaskStatus::Pass);
    }
}
