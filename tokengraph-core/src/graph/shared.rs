//! Shared Graph Handle
//!
//! `DependencyGraph` is single-threaded. `SharedGraph` wraps one in a single
//! exclusive lock so it can be handed to several threads. Every operation
//! holds the lock for its whole duration: a closure computation reads the
//! full transitive state and must never interleave with an insertion.

use std::sync::Arc;

use parking_lot::Mutex;

use super::dependency::DependencyGraph;
use super::report::Report;
use crate::error::{CyclicDependencyError, DeclarationError};

/// Cloneable, lock-guarded handle to one dependency graph.
#[derive(Debug, Clone, Default)]
pub struct SharedGraph {
    inner: Arc<Mutex<DependencyGraph>>,
}

impl SharedGraph {
    /// Create a handle to a new, empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// See [`DependencyGraph::declare_dependencies`].
    pub fn declare_dependencies<I, S>(
        &self,
        parent: &str,
        children: I,
    ) -> Result<(), CyclicDependencyError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.inner.lock().declare_dependencies(parent, children)
    }

    /// See [`DependencyGraph::declare_line`].
    pub fn declare_line(&self, line: &str) -> Result<(), DeclarationError> {
        self.inner.lock().declare_line(line)
    }

    /// Sorted descendant names of `name`, or `None` if it was never declared.
    pub fn descendant_names(&self, name: &str) -> Option<Vec<String>> {
        let graph = self.inner.lock();
        let id = graph.get(name)?;
        Some(
            graph
                .descendant_names(id)
                .into_iter()
                .map(str::to_string)
                .collect(),
        )
    }

    /// See [`DependencyGraph::describe`].
    pub fn describe(&self, name: &str) -> Option<String> {
        let graph = self.inner.lock();
        graph.get(name).and_then(|id| graph.describe(id))
    }

    pub fn report(&self) -> Report {
        self.inner.lock().report()
    }

    pub fn token_count(&self) -> usize {
        self.inner.lock().token_count()
    }

    /// Run `f` against the graph while holding the lock.
    pub fn with<R>(&self, f: impl FnOnce(&DependencyGraph) -> R) -> R {
        f(&self.inner.lock())
    }
}

impl From<DependencyGraph> for SharedGraph {
    fn from(graph: DependencyGraph) -> Self {
        Self {
            inner: Arc::new(Mutex::new(graph)),
        }
    }
}
