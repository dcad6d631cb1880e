use normcheck_core::is_superkey;
use normcheck_model::{
    Attribute, AttributeSet, FailureReason, Task, TaskResult, TaskValue,
};

use crate::context::GradingContext;

/// Checks the student's primary key against the reference key.
///
/// The sets must match exactly; the key must also be a superkey of the
/// universe and lose that property when any attribute is removed.
pub fn check_primary_key(
    ctx: &GradingContext,
    reference: &[Attribute],
    student: &[Attribute],
) -> TaskResult {
    let reference_set: AttributeSet = reference.iter().cloned().collect();
    let student_set: AttributeSet = student.iter().cloned().collect();
    let expected = TaskValue::Attributes(reference.to_vec());
    let actual = TaskValue::Attributes(student.to_vec());

    if reference_set != student_set {
        let missing = reference_set.difference(&student_set).cloned().collect();
        let extra = student_set.difference(&reference_set).cloned().collect();
        return TaskResult::fail(Task::PrimaryKey, FailureReason::SetMismatch)
            .with_expected(expected)
            .with_actual(actual)
            .with_missing(TaskValue::Attributes(missing))
            .with_extra(TaskValue::Attributes(extra));
    }
    if !is_superkey(&student_set, &ctx.universe, &ctx.fds) {
        return TaskResult::fail(Task::PrimaryKey, FailureReason::NotSuperkey)
            .with_expected(expected)
            .with_actual(actual);
    }
    let reducible = student_set.iter().any(|attr| {
        let mut reduced = student_set.clone();
        reduced.remove(attr);
        is_superkey(&reduced, &ctx.universe, &ctx.fds)
    });
    if reducible {
        return TaskResult::fail(Task::PrimaryKey, FailureReason::NotMinimal)
            .with_expected(expected)
            .with_actual(actual);
    }
    TaskResult::pass(Task::PrimaryKey)
        .with_expected(expected)
        .with_actual(actual)
}

#[cfg(test)]
mod tests {
    use normcheck_model::{FunctionalDependency, KeySearchOptions, TaskStatus, attribute_set};

    use super::*;

    fn ctx() -> GradingContext {
        GradingContext::new(
            attribute_set(["A", "B", "C"]),
            &[
                FunctionalDependency::new(["A"], "B"),
                FunctionalDependency::new(["B"], "C"),
            ],
            KeySearchOptions::default(),
        )
    }

    fn attrs(names: &[&str]) -> Vec<Attribute> {
        names.iter().copied().map(Attribute::from).collect()
    }

    #[test]
    fn matching_minimal_key_passes() {
        let result = check_primary_key(&ctx(), &attrs(&["A"]), &attrs(&["A"]));
        assert_eq!(result.status, TaskStatus::Pass);
    }

    #[test]
    fn different_key_reports_differences() {
        let result = check_primary_key(&ctx(), &attrs(&["A"]), &attrs(&["B"]));
        assert_eq!(result.reason, Some(FailureReason::SetMismatch));
        assert_eq!(result.missing, Some(TaskValue::Attributes(attrs(&["A"]))));
        assert_eq!(result.extra, Some(TaskValue::Attributes(attrs(&["B"]))));
    }

    #[test]
    fn reference_that_is_not_a_superkey_fails() {
        let result = check_primary_key(&ctx(), &attrs(&["B"]), &attrs(&["B"]));
        assert_eq!(result.reason, Some(FailureReason::NotSuperkey));
    }

    #[test]
    fn oversized_key_is_not_minimal() {
        let result = check_primary_key(&ctx(), &attrs(&["A", "B"]), &attrs(&["B", "A"]));
        assert_eq!(result.reason, Some(FailureReason::NotMinimal));
    }
}
