pub mod attribute;
pub mod dependency;
pub mod error;
pub mod exercise;
pub mod options;
pub mod relation;
pub mod verdict;

pub use attribute::{Attribute, AttributeSet, attribute_set, format_set};
pub use dependency::{CompoundDependency, FdSet, FunctionalDependency, split_all};
pub use error::{ModelError, Result};
pub use exercise::Exercise;
pub use options::{DEFAULT_MAX_OPTIONAL, GradingOptions, KeySearchOptions};
pub use relation::{Decomposition, Relation, union_attributes};
pub use verdict::{
    CoverageReport, FailureReason, KeySearchResult, NormalForm, NormalFormReport, Score,
    ScoreLabel, Task, TaskNote, TaskResult, TaskStatus, TaskValue, prime_attributes,
};
