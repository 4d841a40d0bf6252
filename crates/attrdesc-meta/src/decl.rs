//! Raw declaration payloads.
//!
//! A declaration document maps a human-readable attribute label to either
//! nothing (all defaults), a compact `k=v k=v` string, or a mapping of
//! declared keys. The types here are the deserialization target for
//! whatever collaborator parses that document; the core itself never
//! reads files.

use std::collections::BTreeMap;

use serde::Deserialize;

use attrdesc_model::Result;

/// Mapping of attribute label to raw declaration, in the shape a
/// declaration document deserializes into.
pub type RawDecls = BTreeMap<String, RawDecl>;

/// One attribute's declaration before normalization.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawDecl {
    /// No body at all: every rule default applies.
    Empty,
    /// Compact syntax, e.g. `"require=false example=jojo"`.
    Compact(String),
    /// Full syntax: declared keys with raw values.
    Fields(BTreeMap<String, RawValue>),
}

/// A raw declared value, prior to key-specific coercion.
///
/// Compact syntax only ever produces strings; full syntax may carry the
/// scalar types the document format supports, plus lists for
/// `valid_values`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Bool(bool),
    Int(i64),
    Str(String),
    List(Vec<String>),
}

impl RawValue {
    /// Display form used when reporting a value that failed coercion.
    pub fn display(&self) -> String {
        match self {
            RawValue::Bool(flag) => flag.to_string(),
            RawValue::Int(number) => number.to_string(),
            RawValue::Str(text) => text.clone(),
            RawValue::List(items) => items.join(", "),
        }
    }
}

/// Supplies a raw declaration payload.
///
/// Parsing a declaration document (a file on disk, an embedded literal)
/// lives behind this seam, outside the core; the normalizer only ever
/// sees the parsed mapping.
pub trait DeclSource {
    fn declarations(&self) -> Result<RawDecls>;
}

/// An already-parsed mapping is its own source.
impl DeclSource for RawDecls {
    fn declarations(&self) -> Result<RawDecls> {
        Ok(self.clone())
    }
}
