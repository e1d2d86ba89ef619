//! Dependency Graph
//!
//! This module implements the token dependency graph: a registry of named
//! tokens and the acyclic "depends on" relation between them.
//!
//! # Overview
//!
//! The graph is a directed acyclic graph (DAG) where:
//!
//! - Nodes are tokens, one per distinct name
//! - Edges point from a token to the tokens it depends on
//!
//! Tokens are created on first reference and never removed, and edges are
//! only ever added. Every insertion is checked against the target's
//! descendant set so the graph can never become cyclic.
//!
//! # Design Decisions
//!
//! 1. Tokens live in a name-keyed arena (`TokenRegistry`) and refer to each
//!    other by `TokenId`, so one name can never map to two nodes.
//!
//! 2. Descendant sets are recomputed on demand rather than cached.
//!
//! 3. Sorting by name happens only when a report is produced; the graph
//!    itself is unordered.

mod dependency;
mod registry;
mod report;
mod shared;
mod token;

pub use dependency::DependencyGraph;
pub use registry::TokenRegistry;
pub use report::{Report, ReportEntry};
pub use shared::SharedGraph;
pub use token::{Token, TokenId};
