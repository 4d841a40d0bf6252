//! Rule evaluation.
//!
//! Checks run per rule in a fixed precedence: required, then collection
//! cardinality, then per-value content. The first applicable branch wins
//! for each value, so a missing required value reports `is required` and
//! nothing else, whatever other constraints the rule declares.
//!
//! Value-level failures are never errors here; they accumulate in the
//! report. The engine fails hard only on a malformed rule, e.g. an
//! unparseable `valid_num_values` range reached lazily.

use attrdesc_model::{AttrValue, AttributeRule, Result, RuleSet, ValidationReport};

use crate::source::ValueSource;

/// Validates every rule in `rules` against the values from `source`.
///
/// Pure function of the rule set and the value snapshot: no state is
/// kept between calls, and neither input is mutated. Rules are evaluated
/// in rule-set order; each attribute's messages keep the order its
/// checks ran in.
pub fn validate<S: ValueSource + ?Sized>(rules: &RuleSet, source: &S) -> Result<ValidationReport> {
    let mut report = ValidationReport::new();
    for (name, rule) in rules.iter() {
        check_rule(rule, source.get(name), &mut report)?;
    }
    tracing::debug!(
        attributes = rules.len(),
        findings = report.error_count(),
        "validated value snapshot"
    );
    Ok(report)
}

fn check_rule(
    rule: &AttributeRule,
    value: Option<&AttrValue>,
    report: &mut ValidationReport,
) -> Result<()> {
    // 1. Required check: absence short-circuits everything else. An
    // explicitly supplied empty collection is exempt when the rule
    // declares a count window: the author asked for bounds on it, so it
    // reports "too few values given" below rather than stopping here.
    let Some(value) = value else {
        if rule.required {
            report.add(&rule.programmatic_name, "is required");
        }
        return Ok(());
    };
    let counted_collection = matches!(value, AttrValue::Many(_)) && rule.cardinality.is_some();
    if !counted_collection && (value.is_blank() || is_placeholder(rule, value)) {
        if rule.required {
            report.add(&rule.programmatic_name, "is required");
        }
        return Ok(());
    }

    match value {
        // 2. Collection check: count bounds, then every element
        AttrValue::Many(elements) => {
            if let Some(expr) = &rule.cardinality {
                let bounds = expr.resolve(&rule.programmatic_name)?;
                if elements.len() < bounds.min {
                    report.add(&rule.programmatic_name, "too few values given");
                } else if bounds.max.is_some_and(|max| elements.len() > max) {
                    report.add(&rule.programmatic_name, "too many values given");
                }
            }
            for element in elements {
                check_value(rule, element, report);
            }
        }
        // A scalar under a cardinality rule counts as one value and
        // needs no count check
        AttrValue::Scalar(scalar) => check_value(rule, scalar, report),
    }
    Ok(())
}

/// 3. Per-value check; exactly one branch fires per value.
fn check_value(rule: &AttributeRule, candidate: &str, report: &mut ValidationReport) {
    let length = candidate.chars().count();
    if rule.min_length > 0 && length < rule.min_length {
        report.add(&rule.programmatic_name, "is too small");
    } else if rule.max_length.is_some_and(|max| length > max) {
        report.add(&rule.programmatic_name, "is too big");
    } else if let Some(valid) = &rule.valid_values {
        if !valid.admits(candidate) {
            report.add(&rule.programmatic_name, "is invalid");
        }
    } else if let Some(pattern) = &rule.pattern
        && !pattern.matches(candidate)
    {
        report.add(&rule.programmatic_name, "is invalid");
    }
}

fn is_placeholder(rule: &AttributeRule, value: &AttrValue) -> bool {
    matches!(
        value,
        AttrValue::Scalar(scalar) if rule.placeholder.as_deref() == Some(scalar)
    )
}
