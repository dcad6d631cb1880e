//! Whole-exercise grading.

use chrono::Utc;
use normcheck_core::minimal_cover;
use normcheck_model::{
    Exercise, FailureReason, FdSet, GradingOptions, NormalForm, Score, Task, TaskResult,
    TaskStatus,
};
use serde::Serialize;
use tracing::{debug, info, info_span};

use crate::attributes::compare_attributes;
use crate::chains::compare_chains;
use crate::context::GradingContext;
use crate::dependencies::{compare_fd_sets, score_fd_coverage};
use crate::fingerprint::fingerprint;
use crate::partial::{compare_partial, resolve_partial};
use crate::primary_key::check_primary_key;
use crate::schema::check_schema;
use crate::transitive::{compare_transitive, resolve_transitive};

/// Every task verdict for one student answer.
#[derive(Debug, Clone, Serialize)]
pub struct GradeReport {
    /// RFC 3339 time the report was built.
    pub generated_at: String,
    /// Fingerprint of the reference attribute list.
    pub fingerprint_reference: String,
    pub fingerprint_student: String,
    /// False when the answers are likely for different exercise variants.
    pub fingerprint_match: bool,
    /// Dependency coverage score; absent when the reference is unusable.
    pub score: Option<Score>,
    /// One verdict per [`Task`], in [`Task::ALL`] order.
    pub tasks: Vec<TaskResult>,
}

impl GradeReport {
    pub fn task(&self, task: Task) -> Option<&TaskResult> {
        self.tasks.iter().find(|result| result.task == task)
    }

    pub fn count(&self, status: TaskStatus) -> usize {
        self.tasks
            .iter()
            .filter(|result| result.status == status)
            .count()
    }

    pub fn has_failures(&self) -> bool {
        self.count(TaskStatus::Fail) > 0
    }
}

/// Grades `student` against `reference`.
///
/// The reference universe and dependencies define the exercise; an empty
/// reference universe makes every task insufficient.
pub fn grade_exercise(
    reference: &Exercise,
    student: &Exercise,
    options: &GradingOptions,
) -> GradeReport {
    let span = info_span!("grade", attributes = reference.attributes.len());
    let _guard = span.enter();

    let fingerprint_reference = fingerprint(&reference.attributes);
    let fingerprint_student = fingerprint(&student.attributes);
    let fingerprint_match = fingerprint_reference == fingerprint_student;
    if !fingerprint_match {
        info!("attribute fingerprints differ; answer may be for another variant");
    }

    let universe = reference.universe();
    if universe.is_empty() {
        return GradeReport {
            generated_at: Utc::now().to_rfc3339(),
            fingerprint_reference,
            fingerprint_student,
            fingerprint_match,
            score: None,
            tasks: Task::ALL
                .iter()
                .map(|task| TaskResult::insufficient(*task, FailureReason::NoReferenceAttributes))
                .collect(),
        };
    }

    let ctx = GradingContext::new(universe, &reference.dependencies(), options.key_search);
    let student_fds = minimal_cover(&student.dependencies());
    debug!(
        reference_fds = ctx.fds.len(),
        student_fds = student_fds.len(),
        keys = ctx.keys.keys.len(),
        "prepared grading context"
    );

    let mut tasks = Vec::with_capacity(Task::ALL.len());
    tasks.push(compare_attributes(
        &reference.attributes,
        &student.attributes,
        options.strict_attribute_order,
    ));
    tasks.push(compare_fd_sets(&ctx.fds, &student_fds));

    let reference_pk = reference.primary_key.as_deref().filter(|key| !key.is_empty());
    tasks.push(match reference_pk {
        Some(key) => check_primary_key(
            &ctx,
            key,
            student.primary_key.as_deref().unwrap_or_default(),
        ),
        None => TaskResult::insufficient(Task::PrimaryKey, FailureReason::NoPrimaryKey),
    });

    let pk_set = reference.primary_key_set().filter(|key| !key.is_empty());
    let reference_partial = reference.partial_dependencies();
    let student_partial = student.partial_dependencies().unwrap_or_default();
    tasks.push(compare_partial(
        &ctx,
        pk_set.as_ref(),
        reference_partial.as_deref(),
        &student_partial,
    ));
    tasks.push(match &pk_set {
        Some(key) => compare_chains(
            Task::PartialChains,
            &resolve_partial(&ctx, key, reference_partial.as_deref()),
            &student_partial,
            options.strict_nested_order,
        ),
        None => TaskResult::insufficient(Task::PartialChains, FailureReason::NoPrimaryKey),
    });

    let reference_transitive = reference.transitive_dependencies();
    let student_transitive: FdSet = student.transitive_dependencies().unwrap_or_default();
    tasks.push(compare_transitive(
        &ctx,
        reference_transitive.as_deref(),
        &student_transitive,
    ));
    tasks.push(compare_chains(
        Task::TransitiveChains,
        &resolve_transitive(&ctx, reference_transitive.as_deref()),
        &student_transitive,
        options.strict_nested_order,
    ));

    tasks.push(check_schema(
        &ctx,
        NormalForm::Second,
        student.schema_2nf.as_deref().unwrap_or_default(),
        reference.schema_2nf.as_deref(),
    ));
    tasks.push(check_schema(
        &ctx,
        NormalForm::Third,
        student.schema_3nf.as_deref().unwrap_or_default(),
        reference.schema_3nf.as_deref(),
    ));

    let report = GradeReport {
        generated_at: Utc::now().to_rfc3339(),
        fingerprint_reference,
        fingerprint_student,
        fingerprint_match,
        score: Some(score_fd_coverage(&ctx.fds, &student_fds)),
        tasks,
    };
    info!(
        passed = report.count(TaskStatus::Pass),
        failed = report.count(TaskStatus::Fail),
        warned = report.count(TaskStatus::Warn),
        insufficient = report.count(TaskStatus::Insf),
        "graded exercise"
    );
    report
}
