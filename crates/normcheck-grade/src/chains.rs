//! Nested dependency chains.
//!
//! A chain groups the dependencies that share a dependent attribute, widest
//! left side first, so that `A, B -> C` precedes `A -> C`.

use std::collections::BTreeSet;

use normcheck_model::{
    FailureReason, FdSet, FunctionalDependency, Task, TaskNote, TaskResult, TaskValue,
};

/// Groups by dependent in first-seen order; each group is stably sorted by
/// left-side size, largest first.
pub fn build_chains(fds: &[FunctionalDependency]) -> Vec<FdSet> {
    let mut chains: Vec<FdSet> = Vec::new();
    for fd in fds {
        match chains.iter_mut().find(|chain| chain[0].rhs == fd.rhs) {
            Some(chain) => chain.push(fd.clone()),
            None => chains.push(vec![fd.clone()]),
        }
    }
    for chain in &mut chains {
        chain.sort_by(|left, right| right.lhs.len().cmp(&left.lhs.len()));
    }
    chains
}

/// Compares chains built from the reference and student lists.
///
/// The flattened dependency sets must match. With `strict_order` the chain
/// lists must also be identical; otherwise a passing result carries
/// [`TaskNote::OrderNotChecked`]. An empty reference always passes.
pub fn compare_chains(
    task: Task,
    reference: &[FunctionalDependency],
    student: &[FunctionalDependency],
    strict_order: bool,
) -> TaskResult {
    if reference.is_empty() {
        return TaskResult::pass(task)
            .with_expected(TaskValue::Chains(Vec::new()))
            .with_actual(TaskValue::Chains(Vec::new()));
    }
    let expected = build_chains(reference);
    let actual = build_chains(student);

    let reference_set: BTreeSet<&FunctionalDependency> = reference.iter().collect();
    let student_set: BTreeSet<&FunctionalDependency> = student.iter().collect();
    if reference_set != student_set {
        return TaskResult::fail(task, FailureReason::SetMismatch)
            .with_expected(TaskValue::Chains(expected))
            .with_actual(TaskValue::Chains(actual));
    }
    if strict_order && expected != actual {
        return TaskResult::fail(task, FailureReason::ChainOrder)
            .with_expected(TaskValue::Chains(expected))
            .with_actual(TaskValue::Chains(actual));
    }
    let result = TaskResult::pass(task)
        .with_expected(TaskValue::Chains(expected))
        .with_actual(TaskValue::Chains(actual));
    if strict_order {
        result
    } else {
        result.with_note(TaskNote::OrderNotChecked)
    }
}
