//! Closure Reports
//!
//! A report is a point-in-time snapshot of every token's descendant set,
//! sorted by name so that output is reproducible regardless of registration
//! order.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One token and its sorted descendant names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportEntry {
    pub name: String,
    pub descendants: Vec<String>,
}

impl ReportEntry {
    pub fn new(name: impl Into<String>, descendants: Vec<String>) -> Self {
        Self {
            name: name.into(),
            descendants,
        }
    }
}

impl fmt::Display for ReportEntry {
    /// `"<name> <descendants joined by spaces>"`. A leaf keeps the separator.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.descendants.join(" "))
    }
}

/// Name-sorted snapshot of a whole graph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    entries: Vec<ReportEntry>,
}

impl Report {
    pub(crate) fn new(entries: Vec<ReportEntry>) -> Self {
        Self { entries }
    }

    /// All entries, sorted by token name.
    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    /// Find the entry for a token name.
    pub fn get(&self, name: &str) -> Option<&ReportEntry> {
        self.entries
            .binary_search_by(|entry| entry.name.as_str().cmp(name))
            .ok()
            .and_then(|index| self.entries.get(index))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialize the report as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parse a report previously produced by [`Report::to_json`].
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl fmt::Display for Report {
    /// One line per token.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{entry}")?;
        }
        Ok(())
    }
}
