//! Permitted element counts for collection-valued attributes.

use serde::{Deserialize, Serialize};

use crate::error::{DescriptorError, Result};

/// Canonical count bounds. `max: None` means unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cardinality {
    pub min: usize,
    pub max: Option<usize>,
}

impl Cardinality {
    /// Parses a raw range expression.
    ///
    /// Grammar: `"5"` is an exact count, `"5+"` at least five, `"2-5"` an
    /// inclusive range. Anything else is a configuration error; `attribute`
    /// only labels that error.
    pub fn parse(raw: &str, attribute: &str) -> Result<Self> {
        let expr = raw.trim();
        if let Some(base) = expr.strip_suffix('+') {
            if let Some(min) = parse_count(base) {
                return Ok(Self { min, max: None });
            }
        } else if let Some((low, high)) = expr.split_once('-') {
            if let (Some(min), Some(max)) = (parse_count(low), parse_count(high)) {
                if min > max {
                    return Err(DescriptorError::InvertedCardinality {
                        attribute: attribute.to_string(),
                        min,
                        max,
                    });
                }
                return Ok(Self {
                    min,
                    max: Some(max),
                });
            }
        } else if let Some(exact) = parse_count(expr) {
            return Ok(Self {
                min: exact,
                max: Some(exact),
            });
        }
        Err(DescriptorError::InvalidCardinality {
            attribute: attribute.to_string(),
            raw: raw.to_string(),
        })
    }

    /// Whether `count` elements satisfy these bounds.
    pub fn admits(&self, count: usize) -> bool {
        count >= self.min && self.max.is_none_or(|max| count <= max)
    }
}

/// Digits-only count parse; rejects signs, whitespace and empty input.
fn parse_count(text: &str) -> Option<usize> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

/// How a declaration constrained the element count.
///
/// `valid_num_values` ranges stay raw until a collection is actually
/// validated, so a malformed range only surfaces for attributes that are
/// used as collections. Bounds declared numerically are already checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardinalityExpr {
    /// Raw range expression from `valid_num_values`, e.g. `"2-5"`.
    Range(String),
    /// Explicit bounds from `min_num_values` / `max_num_values`.
    Bounds { min: usize, max: Option<usize> },
}

impl CardinalityExpr {
    /// Resolves to canonical bounds, parsing a raw range lazily.
    pub fn resolve(&self, attribute: &str) -> Result<Cardinality> {
        match self {
            CardinalityExpr::Range(raw) => Cardinality::parse(raw, attribute),
            CardinalityExpr::Bounds { min, max } => Ok(Cardinality {
                min: *min,
                max: *max,
            }),
        }
    }
}
