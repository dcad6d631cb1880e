//! Attribute list of the universal relation.

use normcheck_model::{Attribute, AttributeSet, FailureReason, Task, TaskResult, TaskValue};

/// Compares the student's attribute list with the reference list.
///
/// Missing or extra attributes fail the task. The same attributes in another
/// order give a warning, or a failure when `strict_order` is set.
pub fn compare_attributes(
    reference: &[Attribute],
    student: &[Attribute],
    strict_order: bool,
) -> TaskResult {
    let reference_set: AttributeSet = reference.iter().cloned().collect();
    let student_set: AttributeSet = student.iter().cloned().collect();
    let expected = TaskValue::Attributes(reference.to_vec());
    let actual = TaskValue::Attributes(student.to_vec());

    if reference_set != student_set {
        let missing = reference_set.difference(&student_set).cloned().collect();
        let extra = student_set.difference(&reference_set).cloned().collect();
        return TaskResult::fail(Task::Attributes, FailureReason::SetMismatch)
            .with_expected(expected)
            .with_actual(actual)
            .with_missing(TaskValue::Attributes(missing))
            .with_extra(TaskValue::Attributes(extra));
    }

    let result = if reference == student {
        TaskResult::pass(Task::Attributes)
    } else if strict_order {
        TaskResult::fail(Task::Attributes, FailureReason::AttributeOrder)
    } else {
        TaskResult::warn(Task::Attributes, FailureReason::AttributeOrder)
    };
    result.with_expected(expected).with_actual(actual)
}

#[cfg(test)]
mod tests {
    use normcheck_model::TaskStatus;

    use super::*;

    fn attrs(names: &[&str]) -> Vec<Attribute> {
        names.iter().copied().map(Attribute::from).collect()
    }

    #[test]
    fn identical_list_passes() {
        let list = attrs(&["order", "customer", "city"]);
        let result = compare_attributes(&list, &list, true);
        assert_eq!(result.status, TaskStatus::Pass);
        assert!(result.reason.is_none());
    }

    #[test]
    fn reordered_list_warns() {
        let result = compare_attributes(
            &attrs(&["order", "customer", "city"]),
            &attrs(&["customer", "order", "city"]),
            false,
        );
        assert_eq!(result.status, TaskStatus::Warn);
        assert_eq!(result.reason, Some(FailureReason::AttributeOrder));
        assert!(result.missing.is_none());
    }

    #[test]
    fn reordered_list_fails_when_order_is_strict() {
        let result = compare_attributes(
            &attrs(&["order", "customer", "city"]),
            &attrs(&["city", "customer", "order"]),
            true,
        );
        assert_eq!(result.status, TaskStatus::Fail);
        assert_eq!(result.reason, Some(FailureReason::AttributeOrder));
    }

    #[test]
    fn missing_and_extra_attributes_fail() {
        let result = compare_attributes(
            &attrs(&["order", "customer", "city"]),
            &attrs(&["order", "customer", "zip"]),
            false,
        );
        assert_eq!(result.status, TaskStatus::Fail);
        assert_eq!(result.reason, Some(FailureReason::SetMismatch));
        assert_eq!(result.missing, Some(TaskValue::Attributes(attrs(&["city"]))));
        assert_eq!(result.extra, Some(TaskValue::Attributes(attrs(&["zip"]))));
    }
}
