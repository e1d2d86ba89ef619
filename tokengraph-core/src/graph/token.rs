//! Graph Tokens
//!
//! This module defines the node type that lives in the token registry.

use std::collections::HashSet;

/// Arena key of a token inside its registry.
///
/// Ids are only meaningful for the registry that handed them out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TokenId(usize);

impl TokenId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the raw index value.
    pub fn index(&self) -> usize {
        self.0
    }
}

/// A named node in the dependency graph.
#[derive(Debug, Clone)]
pub struct Token {
    /// Unique name. Identity is defined by this alone.
    name: String,

    /// Direct dependencies (outgoing edges). Only ever grows.
    children: HashSet<TokenId>,
}

impl Token {
    /// Create a token with no dependencies.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: HashSet::new(),
        }
    }

    /// Get the token's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the direct dependencies.
    pub fn children(&self) -> &HashSet<TokenId> {
        &self.children
    }

    /// Check whether `child` is a direct dependency.
    pub fn has_child(&self, child: TokenId) -> bool {
        self.children.contains(&child)
    }

    /// Record a direct dependency. Returns false if it was already present.
    ///
    /// No cycle check happens here; see `DependencyGraph::declare_dependencies`.
    pub(crate) fn add_child(&mut self, child: TokenId) -> bool {
        self.children.insert(child)
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Token {}
