use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("attribute token must not be empty")]
    EmptyAttribute,
    #[error("dependency is missing an arrow: {0}")]
    MissingArrow(String),
    #[error("dependency has an empty left-hand side: {0}")]
    EmptyLhs(String),
    #[error("dependency has an empty right-hand side: {0}")]
    EmptyRhs(String),
    #[error("expected a single right-hand attribute: {0}")]
    MultipleRhs(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
