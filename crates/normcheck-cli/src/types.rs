use normcheck_model::{AttributeSet, FdSet, KeySearchResult, NormalFormReport};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ClosureOutcome {
    pub attributes: AttributeSet,
    pub closure: AttributeSet,
    /// The closure reaches every attribute of the exercise.
    pub superkey: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct CoverOutcome {
    pub input: usize,
    pub cover: FdSet,
}

#[derive(Debug, Clone, Serialize)]
pub struct NormalFormOutcome {
    pub relation: AttributeSet,
    pub cover: FdSet,
    pub keys: KeySearchResult,
    pub second: NormalFormReport,
    pub third: NormalFormReport,
}
