//! Rule-set filtering.
//!
//! A host binding rarely wants every declared attribute at once; a
//! sign-up form validates a subset, an admin form the complement. Both
//! requests produce a new independent rule set so derived views can be
//! validated against concurrently.

use attrdesc_model::{DescriptorError, Result, RuleSet};

/// Subset selection for a rule set.
///
/// One mode per request; asking for `only` and `except` together is
/// unrepresentable by construction.
#[derive(Debug, Clone)]
pub enum FilterSpec {
    /// Keep exactly these programmatic names.
    Only(Vec<String>),
    /// Keep everything but these programmatic names.
    Except(Vec<String>),
}

/// Produces a new rule set containing the requested subset.
///
/// Naming an attribute absent from `rules` is a configuration error,
/// whichever mode is used.
pub fn filter(rules: &RuleSet, spec: &FilterSpec) -> Result<RuleSet> {
    match spec {
        FilterSpec::Only(names) => {
            let mut subset = RuleSet::new();
            for name in names {
                let rule = rules.get(name).ok_or_else(|| unknown(name))?;
                subset.insert(rule.clone())?;
            }
            Ok(subset)
        }
        FilterSpec::Except(names) => {
            for name in names {
                if !rules.contains(name) {
                    return Err(unknown(name));
                }
            }
            let mut subset = RuleSet::new();
            for (name, rule) in rules.iter() {
                if !names.iter().any(|excluded| excluded == name) {
                    subset.insert(rule.clone())?;
                }
            }
            Ok(subset)
        }
    }
}

fn unknown(name: &str) -> DescriptorError {
    DescriptorError::UnknownAttribute {
        attribute: name.to_string(),
    }
}
