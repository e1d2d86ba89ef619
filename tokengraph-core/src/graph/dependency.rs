//! Dependency Graph
//!
//! The graph records "parent depends on child" edges between registry tokens
//! and refuses any edge that would close a cycle.
//!
//! # Algorithm
//!
//! Before inserting `parent -> child` we compute the full descendant set of
//! `child`. If `parent` is already in it, the new edge would make `parent`
//! reachable from itself, so the edge is rejected. This only holds because
//! the graph is acyclic before every insertion, which every successful
//! insertion preserves.
//!
//! A self-loop is checked by identity first: a token seen for the first time
//! has no descendants, so the closure check alone would let `X -> X` through.
//!
//! # Partial Failure
//!
//! Children of one declaration are processed left to right. When one is
//! rejected the call returns at once; edges added for earlier children stay
//! in place and later children are never looked at.

use std::collections::HashSet;

use tracing::{debug, trace};

use super::registry::TokenRegistry;
use super::report::{Report, ReportEntry};
use super::token::{Token, TokenId};
use crate::declaration::Declaration;
use crate::error::{CyclicDependencyError, DeclarationError};

/// Acyclic graph of named tokens.
#[derive(Debug, Default, Clone)]
pub struct DependencyGraph {
    registry: TokenRegistry,
}

impl DependencyGraph {
    /// Create an empty graph with its own registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty graph pre-sized for `capacity` tokens.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            registry: TokenRegistry::with_capacity(capacity),
        }
    }

    /// The registry backing this graph.
    pub fn registry(&self) -> &TokenRegistry {
        &self.registry
    }

    /// Resolve a name to its token, creating it on first reference.
    pub fn get_or_create(&mut self, name: &str) -> TokenId {
        self.registry.get_or_create(name)
    }

    /// Look up a token id by name without creating it.
    pub fn get(&self, name: &str) -> Option<TokenId> {
        self.registry.get(name)
    }

    /// Get a token by id.
    pub fn token(&self, id: TokenId) -> Option<&Token> {
        self.registry.token(id)
    }

    /// Number of tokens in the graph.
    pub fn token_count(&self) -> usize {
        self.registry.len()
    }

    /// Declare that `parent` depends on each of `children`, in order.
    ///
    /// The parent is registered even if `children` is empty. On the first
    /// child that would create a cycle the call fails without rolling back
    /// edges already added for earlier children.
    pub fn declare_dependencies<I, S>(
        &mut self,
        parent: &str,
        children: I,
    ) -> Result<(), CyclicDependencyError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let parent_id = self.registry.get_or_create(parent);

        for child in children {
            let child = child.as_ref();
            let child_id = self.registry.get_or_create(child);
            if !self.try_add_edge(parent_id, child_id) {
                debug!(parent, child, "rejected cyclic dependency");
                return Err(CyclicDependencyError {
                    parent: parent.to_string(),
                    child: child.to_string(),
                });
            }
        }

        Ok(())
    }

    /// Apply a parsed declaration.
    pub fn declare(&mut self, declaration: &Declaration) -> Result<(), CyclicDependencyError> {
        self.declare_dependencies(declaration.parent(), declaration.children())
    }

    /// Parse a whitespace-separated line (`"A B C"`: A depends on B and C) and
    /// apply it.
    pub fn declare_line(&mut self, line: &str) -> Result<(), DeclarationError> {
        let declaration: Declaration = line.parse()?;
        self.declare(&declaration)?;
        Ok(())
    }

    /// Insert `parent -> child` unless it would close a cycle.
    ///
    /// Returns false, leaving the graph untouched, if it would.
    fn try_add_edge(&mut self, parent: TokenId, child: TokenId) -> bool {
        if parent == child || self.descendants(child).contains(&parent) {
            return false;
        }

        if let Some(token) = self.registry.token_mut(parent) {
            if token.add_child(child) {
                trace!(parent = parent.index(), child = child.index(), "added edge");
            }
        }

        true
    }

    /// All tokens reachable from `id` through one or more edges.
    ///
    /// Recomputed on every call. Never contains `id` itself while the graph
    /// is acyclic. Unknown ids have no descendants.
    pub fn descendants(&self, id: TokenId) -> HashSet<TokenId> {
        let mut visited = HashSet::new();
        let mut stack: Vec<TokenId> = self.direct_children(id).collect();

        while let Some(next) = stack.pop() {
            if !visited.insert(next) {
                continue;
            }
            stack.extend(self.direct_children(next).filter(|c| !visited.contains(c)));
        }

        visited
    }

    fn direct_children(&self, id: TokenId) -> impl Iterator<Item = TokenId> + '_ {
        self.registry
            .token(id)
            .into_iter()
            .flat_map(|token| token.children().iter().copied())
    }

    /// Names of all descendants of `id`, sorted.
    pub fn descendant_names(&self, id: TokenId) -> Vec<&str> {
        self.sorted_names(self.descendants(id))
    }

    /// Names of the direct dependencies of `id`, sorted.
    pub fn children(&self, id: TokenId) -> Vec<&str> {
        self.sorted_names(self.direct_children(id))
    }

    fn sorted_names(&self, ids: impl IntoIterator<Item = TokenId>) -> Vec<&str> {
        let mut names: Vec<&str> = ids
            .into_iter()
            .filter_map(|id| self.registry.name(id))
            .collect();
        names.sort_unstable();
        names
    }

    /// Whether `dependent` transitively depends on `dependency`.
    pub fn depends_on(&self, dependent: &str, dependency: &str) -> bool {
        match (self.registry.get(dependent), self.registry.get(dependency)) {
            (Some(from), Some(to)) => self.descendants(from).contains(&to),
            _ => false,
        }
    }

    /// Whether no token is its own descendant.
    pub fn is_acyclic(&self) -> bool {
        self.registry
            .iter()
            .all(|(id, _)| !self.descendants(id).contains(&id))
    }

    /// `"<name> <sorted descendant names>"`, or `None` for an unknown id.
    pub fn describe(&self, id: TokenId) -> Option<String> {
        self.entry(id).map(|entry| entry.to_string())
    }

    fn entry(&self, id: TokenId) -> Option<ReportEntry> {
        let name = self.registry.name(id)?;
        let descendants = self
            .descendant_names(id)
            .into_iter()
            .map(str::to_string)
            .collect();
        Some(ReportEntry::new(name, descendants))
    }

    /// Snapshot every token's descendants, sorted by token name.
    pub fn report(&self) -> Report {
        let mut entries: Vec<ReportEntry> = self
            .registry
            .iter()
            .filter_map(|(id, _)| self.entry(id))
            .collect();
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Report::new(entries)
    }
}
