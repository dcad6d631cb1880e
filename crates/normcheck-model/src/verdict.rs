//! Structured verdicts returned to the reporting layer.
//!
//! Nothing here carries presentation. Renderers decide how a
//! [`TaskResult`] or a [`NormalFormReport`] is shown.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::attribute::{Attribute, AttributeSet};
use crate::dependency::FdSet;
use crate::relation::Decomposition;

/// Outcome of the candidate key search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct KeySearchResult {
    /// Minimal superkeys in discovery order. Always an antichain.
    pub keys: Vec<AttributeSet>,
    /// True when optional attributes were left out of the enumeration.
    pub truncated: bool,
    /// Optional attributes that were not enumerated.
    pub skipped: Vec<Attribute>,
    /// Search nodes examined.
    pub nodes_visited: u64,
}

impl KeySearchResult {
    pub fn is_complete(&self) -> bool {
        !self.truncated
    }

    /// Attributes that belong to at least one key.
    pub fn prime_attributes(&self) -> AttributeSet {
        prime_attributes(&self.keys)
    }
}

/// Union of the given keys.
pub fn prime_attributes(keys: &[AttributeSet]) -> AttributeSet {
    keys.iter().flat_map(|key| key.iter().cloned()).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NormalForm {
    Second,
    Third,
}

impl fmt::Display for NormalForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Second => f.write_str("2NF"),
            Self::Third => f.write_str("3NF"),
        }
    }
}

/// Result of a 2NF or 3NF check on one relation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalFormReport {
    pub ok: bool,
    /// Every violating dependency, in input order.
    pub violations: FdSet,
}

impl NormalFormReport {
    pub fn from_violations(violations: FdSet) -> Self {
        Self {
            ok: violations.is_empty(),
            violations,
        }
    }
}

/// Result of comparing a decomposition's attributes against the universe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoverageReport {
    pub ok: bool,
    /// Universe attributes no relation holds.
    pub missing: AttributeSet,
    /// Relation attributes outside the universe.
    pub extra: AttributeSet,
}

/// Coverage label for a student's dependency set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreLabel {
    #[serde(rename = "++")]
    Full,
    #[serde(rename = "+-")]
    Most,
    #[serde(rename = "-+")]
    Partial,
    #[serde(rename = "--")]
    Little,
    #[serde(rename = "—")]
    NotApplicable,
}

impl ScoreLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Full => "++",
            Self::Most => "+-",
            Self::Partial => "-+",
            Self::Little => "--",
            Self::NotApplicable => "—",
        }
    }
}

impl fmt::Display for ScoreLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Score {
    pub ratio: f64,
    pub label: ScoreLabel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TaskStatus {
    Pass,
    Warn,
    Fail,
    /// Not enough input to decide.
    Insf,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pass => "PASS",
            Self::Warn => "WARN",
            Self::Fail => "FAIL",
            Self::Insf => "INSF",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Gradable parts of a normalization exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Task {
    /// Attribute list of the universal relation.
    Attributes,
    Dependencies,
    PrimaryKey,
    PartialDependencies,
    PartialChains,
    TransitiveDependencies,
    TransitiveChains,
    SecondNormalFormSchema,
    ThirdNormalFormSchema,
}

impl Task {
    pub const ALL: [Task; 9] = [
        Task::Attributes,
        Task::Dependencies,
        Task::PrimaryKey,
        Task::PartialDependencies,
        Task::PartialChains,
        Task::TransitiveDependencies,
        Task::TransitiveChains,
        Task::SecondNormalFormSchema,
        Task::ThirdNormalFormSchema,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Attributes => "Attribute list",
            Self::Dependencies => "Functional dependencies",
            Self::PrimaryKey => "Primary key",
            Self::PartialDependencies => "Partial dependencies",
            Self::PartialChains => "Partial chains",
            Self::TransitiveDependencies => "Transitive dependencies",
            Self::TransitiveChains => "Transitive chains",
            Self::SecondNormalFormSchema => "2NF schema",
            Self::ThirdNormalFormSchema => "3NF schema",
        }
    }
}

/// Value shown as expected/actual/missing/extra for a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TaskValue {
    Attributes(Vec<Attribute>),
    Dependencies(FdSet),
    Chains(Vec<FdSet>),
    Relations(Decomposition),
}

/// Why a task did not pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FailureReason {
    /// The reference universe is empty.
    NoReferenceAttributes,
    /// The reference answer has no primary key.
    NoPrimaryKey,
    SetMismatch,
    NotSuperkey,
    NotMinimal,
    /// Same attributes as the reference, listed in another order.
    AttributeOrder,
    ChainOrder,
    Coverage,
    NormalFormViolation {
        relation: String,
        normal_form: NormalForm,
        violations: FdSet,
    },
}

/// Non-fatal observations attached to a task.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TaskNote {
    Score(Score),
    /// Chains matched as sets; order was not compared.
    OrderNotChecked,
    /// No relation holds a candidate key of the universe.
    LosslessJoinNotShown,
    /// Some minimal-cover dependency is split across relations.
    DependenciesNotPreserved,
    KeySearchTruncated { skipped: Vec<Attribute> },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskResult {
    pub task: Task,
    pub status: TaskStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<FailureReason>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<TaskValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual: Option<TaskValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missing: Option<TaskValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra: Option<TaskValue>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<TaskNote>,
}

impl TaskResult {
    fn with_status(task: Task, status: TaskStatus, reason: Option<FailureReason>) -> Self {
        Self {
            task,
            status,
            reason,
            expected: None,
            actual: None,
            missing: None,
            extra: None,
            notes: Vec::new(),
        }
    }

    pub fn pass(task: Task) -> Self {
        Self::with_status(task, TaskStatus::Pass, None)
    }

    pub fn warn(task: Task, reason: FailureReason) -> Self {
        Self::with_status(task, TaskStatus::Warn, Some(reason))
    }

    pub fn fail(task: Task, reason: FailureReason) -> Self {
        Self::with_status(task, TaskStatus::Fail, Some(reason))
    }

    pub fn insufficient(task: Task, reason: FailureReason) -> Self {
        Self::with_status(task, TaskStatus::Insf, Some(reason))
    }

    pub fn with_expected(mut self, value: TaskValue) -> Self {
        self.expected = Some(value);
        self
    }

    pub fn with_actual(mut self, value: TaskValue) -> Self {
        self.actual = Some(value);
        self
    }

    pub fn with_missing(mut self, value: TaskValue) -> Self {
        self.missing = Some(value);
        self
    }

    pub fn with_extra(mut self, value: TaskValue) -> Self {
        self.extra = Some(value);
        self
    }

    pub fn with_note(mut self, note: TaskNote) -> Self {
        self.notes.push(note);
        self
    }

    pub fn is_pass(&self) -> bool {
        self.status == TaskStatus::Pass
    }

    pub fn is_fail(&self) -> bool {
        self.status == TaskStatus::Fail
    }
}
