//! Grading of a proposed 2NF or 3NF schema.
//!
//! Coverage and the per-relation normal form decide pass or fail. Lossless
//! join and dependency preservation are sufficient-condition tests, so a
//! negative outcome is attached as a note instead of failing the task.

use std::collections::BTreeSet;

use normcheck_core::{
    candidate_keys, check_2nf, check_3nf, coverage_check, dependency_preservation_approx,
    lossless_join_with, project_fds,
};
use normcheck_model::{
    AttributeSet, FailureReason, NormalForm, NormalFormReport, Relation, Task, TaskNote,
    TaskResult, TaskValue,
};
use tracing::debug;

use crate::context::GradingContext;

/// Normal form check of one relation against the reference dependencies.
///
/// Relations without local dependencies have no keys computed and trivially
/// pass.
pub fn check_relation(
    ctx: &GradingContext,
    relation: &Relation,
    normal_form: NormalForm,
) -> NormalFormReport {
    let local = project_fds(&relation.attributes, &ctx.fds);
    let keys: Vec<AttributeSet> = if local.is_empty() {
        Vec::new()
    } else {
        candidate_keys(&relation.attributes, &local, &ctx.key_search).keys
    };
    match normal_form {
        NormalForm::Second => check_2nf(&relation.attributes, &local, &keys),
        NormalForm::Third => check_3nf(&relation.attributes, &local, &keys),
    }
}

/// Grades `relations` as a decomposition in `normal_form`.
///
/// Coverage is not recomputed when the relations equal the reference schema
/// (same names and attribute sets, any order).
pub fn check_schema(
    ctx: &GradingContext,
    normal_form: NormalForm,
    relations: &[Relation],
    reference: Option<&[Relation]>,
) -> TaskResult {
    let task = match normal_form {
        NormalForm::Second => Task::SecondNormalFormSchema,
        NormalForm::Third => Task::ThirdNormalFormSchema,
    };
    let actual = TaskValue::Relations(relations.to_vec());

    let matches_reference = reference.is_some_and(|reference| same_schema(reference, relations));
    if !matches_reference {
        let coverage = coverage_check(&ctx.universe, relations);
        if !coverage.ok {
            return TaskResult::fail(task, FailureReason::Coverage)
                .with_actual(actual)
                .with_missing(TaskValue::Attributes(coverage.missing.into_iter().collect()))
                .with_extra(TaskValue::Attributes(coverage.extra.into_iter().collect()));
        }
    }

    for relation in relations {
        let report = check_relation(ctx, relation, normal_form);
        if !report.ok {
            debug!(
                relation = %relation.name,
                %normal_form,
                violations = report.violations.len(),
                "relation violates normal form"
            );
            return ctx.annotate(
                TaskResult::fail(
                    task,
                    FailureReason::NormalFormViolation {
                        relation: relation.name.clone(),
                        normal_form,
                        violations: report.violations,
                    },
                )
                .with_actual(actual),
            );
        }
    }

    let lossless = lossless_join_with(&ctx.universe, &ctx.fds, relations, &ctx.key_search);
    let preserved = dependency_preservation_approx(&ctx.fds, relations);
    let mut result = TaskResult::pass(task).with_actual(actual);
    if let Some(reference) = reference {
        result = result.with_expected(TaskValue::Relations(reference.to_vec()));
    }
    if !lossless {
        result = result.with_note(TaskNote::LosslessJoinNotShown);
    }
    if !preserved {
        result = result.with_note(TaskNote::DependenciesNotPreserved);
    }
    ctx.annotate(result)
}

fn same_schema(left: &[Relation], right: &[Relation]) -> bool {
    let as_set = |relations: &[Relation]| -> BTreeSet<(String, AttributeSet)> {
        relations
            .iter()
            .map(|relation| (relation.name.clone(), relation.attributes.clone()))
            .collect()
    };
    as_set(left) == as_set(right)
}
