//! Recognized declaration keys.
//!
//! Coercion is table dispatch: each recognized key is an enum variant
//! paired with its canonical spelling, and the normalizer routes raw
//! values through the matching arm. Adding a recognized key is a new
//! table row, not new control flow.

/// A declaration key the normalizer understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KnownKey {
    Require,
    Validate,
    ValidValues,
    ValidNumValues,
    MinNumValues,
    MaxNumValues,
    MinLength,
    MaxLength,
    ProgrammaticName,
    Description,
    Placeholder,
    Example,
}

/// Canonical spellings, as they appear in declaration documents.
const KNOWN_KEYS: &[(&str, KnownKey)] = &[
    ("require", KnownKey::Require),
    ("validate", KnownKey::Validate),
    ("valid_values", KnownKey::ValidValues),
    ("valid_num_values", KnownKey::ValidNumValues),
    ("min_num_values", KnownKey::MinNumValues),
    ("max_num_values", KnownKey::MaxNumValues),
    ("min_length", KnownKey::MinLength),
    ("max_length", KnownKey::MaxLength),
    ("programmatic_name", KnownKey::ProgrammaticName),
    ("description", KnownKey::Description),
    ("placeholder", KnownKey::Placeholder),
    ("example", KnownKey::Example),
];

impl KnownKey {
    /// Looks a declared key up in the table.
    pub fn parse(key: &str) -> Option<Self> {
        KNOWN_KEYS
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, known)| *known)
    }

    pub fn as_str(self) -> &'static str {
        KNOWN_KEYS
            .iter()
            .find(|(_, known)| *known == self)
            .map(|(name, _)| *name)
            .expect("every variant has a table row")
    }
}

/// Best-effort misspelling diagnostic for unrecognized keys.
///
/// Substring containment against the table, either direction, so
/// "requir" and "max_lengths" both warn. Purely advisory: false
/// positives and negatives are inherent to the heuristic, the key is
/// stored in `extra` either way, and nothing may depend on the warning.
pub(crate) fn warn_if_misspelled(key: &str) {
    let lowered = key.to_ascii_lowercase();
    if lowered.len() < 3 {
        return;
    }
    for (name, _) in KNOWN_KEYS {
        if name.contains(&lowered) || lowered.contains(name) {
            tracing::warn!(
                key = %key,
                recognized = %name,
                "declaration key looks like a misspelling; keeping it as extra data"
            );
            return;
        }
    }
}
