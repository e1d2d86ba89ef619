//! Error Types
//!
//! Edge insertion has exactly one failure mode: the edge would close a
//! cycle. Declaration lines add a second one for blank input.

use thiserror::Error;

/// Raised when `parent -> child` would make `parent` reachable from itself.
///
/// Edges inserted earlier in the same declaration are kept.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cyclic dependency: {parent} -> {child}")]
pub struct CyclicDependencyError {
    /// The token that was declared as depending on `child`.
    pub parent: String,
    /// The dependency whose insertion was rejected.
    pub child: String,
}

/// Errors from declaring dependencies via a raw token line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeclarationError {
    /// The line held no tokens at all.
    #[error("declaration line is empty")]
    Empty,

    #[error(transparent)]
    Cyclic(#[from] CyclicDependencyError),
}
