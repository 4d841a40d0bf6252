//! Declaration normalization.
//!
//! Consumes a raw declaration mapping, expands compact syntax, layers in
//! defaults, derives programmatic names and coerces every declared key
//! to its canonical form. Normalization is atomic: either every
//! declaration yields a rule or the first configuration error aborts
//! with no rule set at all, so callers never see a half-built set.

use std::collections::BTreeMap;

use attrdesc_model::{
    AttributeRule, CardinalityExpr, DescriptorError, Result, RuleSet, Scalar, ValidValues,
    ValuePattern,
};

use crate::decl::{RawDecl, RawDecls, RawValue};
use crate::keys::{KnownKey, warn_if_misspelled};
use crate::names::programmatic_name;

/// Normalizes a raw declaration mapping into a rule set.
///
/// Built-in defaults apply for anything a declaration leaves out: a rule
/// is required free text with no length, pattern or count constraints.
pub fn normalize(decls: &RawDecls) -> Result<RuleSet> {
    normalize_with_defaults(decls, &BTreeMap::new())
}

/// Normalizes with caller-supplied default keys.
///
/// Precedence per key: declared value, then `defaults`, then the
/// built-in defaults. Default values go through the same coercion table
/// as declared ones.
pub fn normalize_with_defaults(
    decls: &RawDecls,
    defaults: &BTreeMap<String, RawValue>,
) -> Result<RuleSet> {
    let mut rules = RuleSet::new();
    for (label, decl) in decls {
        let rule = normalize_one(label, decl, defaults)?;
        tracing::debug!(
            label = %label,
            name = %rule.programmatic_name,
            "normalized attribute declaration"
        );
        rules.insert(rule)?;
    }
    Ok(rules)
}

fn normalize_one(
    label: &str,
    decl: &RawDecl,
    defaults: &BTreeMap<String, RawValue>,
) -> Result<AttributeRule> {
    // 1. Expand compact syntax into a flat key table
    let mut fields = match decl {
        RawDecl::Empty => BTreeMap::new(),
        RawDecl::Compact(text) => expand_compact(text),
        RawDecl::Fields(map) => map.clone(),
    };

    // 2. Caller defaults for keys not explicitly declared
    for (key, value) in defaults {
        fields
            .entry(key.clone())
            .or_insert_with(|| value.clone());
    }

    // 3. Resolve the programmatic name
    let name = match fields.get(KnownKey::ProgrammaticName.as_str()) {
        Some(value) => coerce_text(value).ok_or_else(|| invalid(label, "programmatic_name", value))?,
        None => programmatic_name(label),
    };
    if name.is_empty() {
        return Err(DescriptorError::InvalidValue {
            attribute: label.to_string(),
            key: "programmatic_name".to_string(),
            raw: String::new(),
        });
    }

    // 4. Coerce every declared key through the table
    let mut rule = AttributeRule::new(label, name);
    let mut min_count = None;
    let mut max_count = None;
    for (key, value) in &fields {
        match KnownKey::parse(key) {
            Some(known) => {
                apply_known(&mut rule, &mut min_count, &mut max_count, known, value, label)?;
            }
            None => {
                warn_if_misspelled(key);
                let scalar = to_scalar(value).ok_or_else(|| invalid(label, key, value))?;
                rule.extra.insert(key.clone(), scalar);
            }
        }
    }

    // 5. Numeric count bounds apply only when no raw range was declared
    if rule.cardinality.is_none() && (min_count.is_some() || max_count.is_some()) {
        let min = min_count.unwrap_or(0);
        if let Some(max) = max_count
            && min > max
        {
            return Err(DescriptorError::InvertedCardinality {
                attribute: label.to_string(),
                min,
                max,
            });
        }
        rule.cardinality = Some(CardinalityExpr::Bounds {
            min,
            max: max_count,
        });
    }

    Ok(rule)
}

fn apply_known(
    rule: &mut AttributeRule,
    min_count: &mut Option<usize>,
    max_count: &mut Option<usize>,
    known: KnownKey,
    value: &RawValue,
    label: &str,
) -> Result<()> {
    let key = known.as_str();
    match known {
        KnownKey::Require => {
            rule.required = coerce_bool(value).ok_or_else(|| invalid(label, key, value))?;
        }
        KnownKey::Validate => {
            let raw = coerce_text(value).ok_or_else(|| invalid(label, key, value))?;
            rule.pattern = Some(compile_pattern(&raw, label)?);
        }
        KnownKey::ValidValues => {
            let entries = coerce_list(value).ok_or_else(|| invalid(label, key, value))?;
            rule.valid_values = Some(split_valid_values(&entries, label)?);
        }
        KnownKey::ValidNumValues => {
            let raw = coerce_text(value).ok_or_else(|| invalid(label, key, value))?;
            rule.cardinality = Some(CardinalityExpr::Range(raw));
        }
        KnownKey::MinNumValues => {
            *min_count = Some(coerce_usize(value).ok_or_else(|| invalid(label, key, value))?);
        }
        KnownKey::MaxNumValues => {
            *max_count = Some(coerce_usize(value).ok_or_else(|| invalid(label, key, value))?);
        }
        KnownKey::MinLength => {
            rule.min_length = coerce_usize(value).ok_or_else(|| invalid(label, key, value))?;
        }
        KnownKey::MaxLength => {
            rule.max_length = Some(coerce_usize(value).ok_or_else(|| invalid(label, key, value))?);
        }
        KnownKey::ProgrammaticName => {
            // Resolved ahead of the loop; nothing further to do here.
        }
        KnownKey::Description => {
            rule.description = coerce_text(value).ok_or_else(|| invalid(label, key, value))?;
        }
        KnownKey::Placeholder => {
            rule.placeholder = Some(coerce_text(value).ok_or_else(|| invalid(label, key, value))?);
        }
        KnownKey::Example => {
            rule.example = Some(coerce_text(value).ok_or_else(|| invalid(label, key, value))?);
        }
    }
    Ok(())
}

/// Expands `"require=false example=jojo"` into a flat key table.
///
/// Tokens split on the first `=`; a token without one declares the key
/// with an empty value. Every value is a string here, whatever its
/// semantic type; the coercion table sorts that out afterwards.
fn expand_compact(text: &str) -> BTreeMap<String, RawValue> {
    let mut fields = BTreeMap::new();
    for assignment in text.split_whitespace() {
        let (key, value) = assignment.split_once('=').unwrap_or((assignment, ""));
        fields.insert(key.to_string(), RawValue::Str(value.to_string()));
    }
    fields
}

/// Routes slash-delimited entries into the pattern bucket and keeps the
/// rest as literals, preserving declaration order within each bucket.
fn split_valid_values(entries: &[String], label: &str) -> Result<ValidValues> {
    let mut valid = ValidValues::default();
    for entry in entries {
        if entry.len() >= 2 && entry.starts_with('/') && entry.ends_with('/') {
            valid.patterns.push(compile_pattern(entry, label)?);
        } else {
            valid.literals.push(entry.clone());
        }
    }
    Ok(valid)
}

fn compile_pattern(raw: &str, label: &str) -> Result<ValuePattern> {
    ValuePattern::compile(raw).map_err(|source| DescriptorError::InvalidPattern {
        attribute: label.to_string(),
        pattern: raw.to_string(),
        source,
    })
}

fn invalid(label: &str, key: &str, value: &RawValue) -> DescriptorError {
    DescriptorError::InvalidValue {
        attribute: label.to_string(),
        key: key.to_string(),
        raw: value.display(),
    }
}

fn coerce_bool(value: &RawValue) -> Option<bool> {
    match value {
        RawValue::Bool(flag) => Some(*flag),
        RawValue::Str(text) => match text.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" | "1" => Some(true),
            "false" | "no" | "0" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

fn coerce_usize(value: &RawValue) -> Option<usize> {
    match value {
        RawValue::Int(number) => usize::try_from(*number).ok(),
        RawValue::Str(text) => text.trim().parse().ok(),
        _ => None,
    }
}

fn coerce_text(value: &RawValue) -> Option<String> {
    match value {
        RawValue::Str(text) => Some(text.clone()),
        RawValue::Int(number) => Some(number.to_string()),
        RawValue::Bool(flag) => Some(flag.to_string()),
        RawValue::List(_) => None,
    }
}

fn coerce_list(value: &RawValue) -> Option<Vec<String>> {
    match value {
        RawValue::List(items) => Some(items.clone()),
        RawValue::Str(text) => Some(vec![text.clone()]),
        _ => None,
    }
}

fn to_scalar(value: &RawValue) -> Option<Scalar> {
    match value {
        RawValue::Bool(flag) => Some(Scalar::Bool(*flag)),
        RawValue::Int(number) => Some(Scalar::Int(*number)),
        RawValue::Str(text) => Some(Scalar::Str(text.clone())),
        RawValue::List(_) => None,
    }
}
