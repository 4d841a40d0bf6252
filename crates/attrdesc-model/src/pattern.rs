//! Full-string pattern rules.
//!
//! Declared patterns are rewritten so they can only ever match an entire
//! candidate string. Author-supplied `^`/`$` anchors are stripped rather
//! than honored: both can be satisfied by a single line embedded in a
//! larger payload, so the `\A`/`\z` anchors are enforced unconditionally
//! regardless of how the pattern was written.
//!
//! Matching is backed by the `regex` crate, whose engine runs in time
//! linear in the input, so attacker-controlled values cannot trigger
//! catastrophic backtracking.

use regex::Regex;

/// A compiled pattern that only matches whole strings.
#[derive(Debug, Clone)]
pub struct ValuePattern {
    regex: Regex,
}

impl ValuePattern {
    /// Compiles a raw pattern expression into its anchored form.
    ///
    /// Accepts bare expressions (`\d{6}`) and slash-delimited ones
    /// (`/\d{6}/`). Compile failures are configuration errors; callers
    /// attach the offending attribute name.
    pub fn compile(raw: &str) -> Result<Self, regex::Error> {
        let canonical = canonicalize(raw);
        Ok(Self {
            regex: Regex::new(&canonical)?,
        })
    }

    /// The canonical (anchored) expression this pattern was compiled from.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Whether `candidate` is matched in full.
    pub fn matches(&self, candidate: &str) -> bool {
        self.regex.is_match(candidate)
    }
}

impl PartialEq for ValuePattern {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

/// Rewrites a raw pattern expression into the enforced `\A..\z` form.
fn canonicalize(raw: &str) -> String {
    let mut expr = raw;
    if expr.len() >= 2 && expr.starts_with('/') && expr.ends_with('/') {
        expr = &expr[1..expr.len() - 1];
    }
    expr = expr.strip_prefix('^').unwrap_or(expr);
    expr = expr.strip_suffix('$').unwrap_or(expr);

    let mut canonical = String::with_capacity(expr.len() + 4);
    if !expr.starts_with(r"\A") {
        canonical.push_str(r"\A");
    }
    canonical.push_str(expr);
    if !expr.ends_with(r"\z") {
        canonical.push_str(r"\z");
    }
    canonical
}
