//! Reference-side facts shared by every grading check.

use normcheck_core::{candidate_keys, minimal_cover};
use normcheck_model::{
    AttributeSet, FdSet, FunctionalDependency, KeySearchOptions, KeySearchResult, TaskNote,
    TaskResult,
};

/// The reference universe, its minimal cover and candidate keys.
#[derive(Debug, Clone)]
pub struct GradingContext {
    /// Attributes of the reference universal relation.
    pub universe: AttributeSet,
    /// Minimal cover of the reference dependencies.
    pub fds: FdSet,
    /// Candidate keys of `universe` under `fds`.
    pub keys: KeySearchResult,
    /// Union of the candidate keys.
    pub prime: AttributeSet,
    /// Bound reused for per-relation key searches.
    pub key_search: KeySearchOptions,
}

impl GradingContext {
    pub fn new(
        universe: AttributeSet,
        fds: &[FunctionalDependency],
        key_search: KeySearchOptions,
    ) -> Self {
        let fds = minimal_cover(fds);
        let keys = candidate_keys(&universe, &fds, &key_search);
        let prime = keys.prime_attributes();
        Self {
            universe,
            fds,
            keys,
            prime,
            key_search,
        }
    }

    /// Adds the truncation caveat when the reference key search was bounded.
    pub fn annotate(&self, result: TaskResult) -> TaskResult {
        if self.keys.truncated {
            result.with_note(TaskNote::KeySearchTruncated {
                skipped: self.keys.skipped.clone(),
            })
        } else {
            result
        }
    }
}
