//! Structured validation output.

use std::collections::BTreeMap;

use serde::Serialize;

/// Per-attribute validation findings.
///
/// Keys are programmatic names; each carries its messages in the order
/// the checks ran. An empty report means every value passed. Reports are
/// created fresh per validation call and owned by the caller.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    errors: BTreeMap<String, Vec<String>>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one finding for `programmatic_name`.
    pub fn add(&mut self, programmatic_name: &str, message: impl Into<String>) {
        self.errors
            .entry(programmatic_name.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Total number of messages across all attributes.
    pub fn error_count(&self) -> usize {
        self.errors.values().map(Vec::len).sum()
    }

    /// Number of attributes with at least one finding.
    pub fn attribute_count(&self) -> usize {
        self.errors.len()
    }

    /// Messages for one attribute; empty when it passed.
    pub fn messages_for(&self, programmatic_name: &str) -> &[String] {
        self.errors
            .get(programmatic_name)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.errors
            .iter()
            .map(|(name, messages)| (name.as_str(), messages.as_slice()))
    }
}
