//! Functional dependency reasoning engine.
//!
//! Every function here is pure: inputs are borrowed, results are new values,
//! and no state survives a call. The candidate key search keeps its closure
//! cache local to one invocation.

pub mod closure;
pub mod cover;
pub mod decomposition;
pub mod keys;
pub mod normal_forms;

pub use closure::{ClosureCache, closure, is_superkey};
pub use cover::{minimal_cover, minimal_cover_compound};
pub use decomposition::{
    coverage_check, dependency_preservation_approx, lossless_join_basic, lossless_join_with,
};
pub use keys::candidate_keys;
pub use normal_forms::{check_2nf, check_3nf, project_fds};
