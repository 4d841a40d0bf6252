//! Canonical attribute rules.
//!
//! An [`AttributeRule`] is the normalized, fully-typed form of one
//! declared attribute; a [`RuleSet`] maps programmatic names to rules.
//! Both are built once during normalization and never mutated afterwards,
//! which is what makes sharing a rule set across threads safe.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::cardinality::CardinalityExpr;
use crate::error::{DescriptorError, Result};
use crate::pattern::ValuePattern;
use crate::view::FieldView;

/// A raw scalar carried through from the declaration unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Bool(bool),
    Int(i64),
    Str(String),
}

impl Scalar {
    /// The value in its string form, however it was declared.
    pub fn to_text(&self) -> String {
        match self {
            Scalar::Bool(flag) => flag.to_string(),
            Scalar::Int(number) => number.to_string(),
            Scalar::Str(text) => text.clone(),
        }
    }
}

/// Permitted-value set: literal entries plus pattern entries, with
/// declaration order preserved within each bucket.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidValues {
    pub literals: Vec<String>,
    pub patterns: Vec<ValuePattern>,
}

impl ValidValues {
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty() && self.patterns.is_empty()
    }

    /// Whether `candidate` equals a literal or fully matches a pattern.
    pub fn admits(&self, candidate: &str) -> bool {
        self.literals.iter().any(|literal| literal == candidate)
            || self.patterns.iter().any(|pattern| pattern.matches(candidate))
    }
}

/// One attribute's validation contract, immutable once built.
#[derive(Debug, Clone)]
pub struct AttributeRule {
    /// Original declared label, e.g. "NHS.net email address".
    pub key: String,
    /// Sanitized identifier, unique within a rule set.
    pub programmatic_name: String,
    /// Human-readable description; defaults to the label.
    pub description: String,
    /// Whether a value must be supplied. Defaults to true.
    pub required: bool,
    /// Anchored full-string pattern, when one was declared.
    pub pattern: Option<ValuePattern>,
    /// Minimum scalar length in characters.
    pub min_length: usize,
    /// Maximum scalar length in characters; `None` means unbounded.
    pub max_length: Option<usize>,
    /// Permitted-value set, when one was declared.
    pub valid_values: Option<ValidValues>,
    /// Element-count constraint applied to collection values.
    pub cardinality: Option<CardinalityExpr>,
    /// Sentinel value treated as absent.
    pub placeholder: Option<String>,
    /// Sample value from the declaration.
    pub example: Option<String>,
    /// Unrecognized declared keys, passed through verbatim. Reading a key
    /// that was never declared simply yields `None`.
    pub extra: BTreeMap<String, Scalar>,
}

impl AttributeRule {
    /// A rule with every constraint at its default: required free text.
    pub fn new(key: impl Into<String>, programmatic_name: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            description: key.clone(),
            key,
            programmatic_name: programmatic_name.into(),
            required: true,
            pattern: None,
            min_length: 0,
            max_length: None,
            valid_values: None,
            cardinality: None,
            placeholder: None,
            example: None,
            extra: BTreeMap::new(),
        }
    }

    /// Read-only surface a form-rendering collaborator needs.
    pub fn view(&self) -> FieldView<'_> {
        FieldView {
            programmatic_name: &self.programmatic_name,
            description: &self.description,
            placeholder: self.placeholder.as_deref(),
            choices: self
                .valid_values
                .as_ref()
                .map(|valid| valid.literals.as_slice())
                .unwrap_or(&[]),
            example: self.example.as_deref(),
        }
    }
}

/// Immutable mapping from programmatic name to rule.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: BTreeMap<String, AttributeRule>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a rule under its programmatic name.
    ///
    /// Two declarations resolving to the same name is a configuration
    /// error; source labels are assumed distinct, so last-wins is never
    /// silently applied.
    pub fn insert(&mut self, rule: AttributeRule) -> Result<()> {
        let name = rule.programmatic_name.clone();
        if self.rules.contains_key(&name) {
            return Err(DescriptorError::DuplicateName { name });
        }
        self.rules.insert(name, rule);
        Ok(())
    }

    pub fn get(&self, programmatic_name: &str) -> Option<&AttributeRule> {
        self.rules.get(programmatic_name)
    }

    pub fn contains(&self, programmatic_name: &str) -> bool {
        self.rules.contains_key(programmatic_name)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Programmatic names, in stable (sorted) order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttributeRule)> {
        self.rules.iter().map(|(name, rule)| (name.as_str(), rule))
    }

    /// Names of the rules that require a value.
    pub fn required_names(&self) -> Vec<&str> {
        self.rules
            .values()
            .filter(|rule| rule.required)
            .map(|rule| rule.programmatic_name.as_str())
            .collect()
    }
}
