//! Tokengraph Core
//!
//! This crate maintains a directed acyclic graph of named tokens built from
//! declarations of the form "parent depends on child1, child2, ...".
//! It implements:
//!
//! - A token registry with get-or-create semantics
//! - Cycle-rejecting edge insertion
//! - Transitive closure (descendant) computation
//! - Sorted, reproducible reporting
//!
//! # Architecture
//!
//! - `graph`: registry, dependency graph, reports and the shared handle
//! - `declaration`: whitespace-separated declaration lines
//! - `error`: error types
//!
//! # Example
//!
//! ```rust
//! use tokengraph_core::DependencyGraph;
//!
//! let mut graph = DependencyGraph::new();
//! graph.declare_dependencies("A", ["B", "C"]).unwrap();
//! graph.declare_dependencies("C", ["G"]).unwrap();
//!
//! // Would close a cycle: A -> C -> G -> A
//! assert!(graph.declare_dependencies("G", ["A"]).is_err());
//!
//! let a = graph.get("A").unwrap();
//! assert_eq!(graph.describe(a).unwrap(), "A B C G");
//! ```

pub mod declaration;
pub mod error;
pub mod graph;

pub use declaration::Declaration;
pub use error::{CyclicDependencyError, DeclarationError};
pub use graph::{DependencyGraph, Report, ReportEntry, SharedGraph, Token, TokenId, TokenRegistry};
