//! Candidate value snapshots.

/// A candidate value for one attribute: a single scalar or a flat
/// collection of scalars. Absence is modelled by the value accessor
/// returning no value at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    Scalar(String),
    Many(Vec<String>),
}

impl AttrValue {
    /// Whether the value counts as "nothing was supplied".
    ///
    /// An empty collection is blank, and so is a scalar that is empty or
    /// whitespace-only (values are trimmed before the emptiness test, the
    /// same way every other string check in this workspace trims first).
    pub fn is_blank(&self) -> bool {
        match self {
            AttrValue::Scalar(scalar) => scalar.trim().is_empty(),
            AttrValue::Many(elements) => elements.is_empty(),
        }
    }

    /// Number of contained elements; a scalar counts as one.
    pub fn len(&self) -> usize {
        match self {
            AttrValue::Scalar(_) => 1,
            AttrValue::Many(elements) => elements.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<&str> for AttrValue {
    fn from(scalar: &str) -> Self {
        AttrValue::Scalar(scalar.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(scalar: String) -> Self {
        AttrValue::Scalar(scalar)
    }
}

impl From<Vec<String>> for AttrValue {
    fn from(elements: Vec<String>) -> Self {
        AttrValue::Many(elements)
    }
}

impl From<Vec<&str>> for AttrValue {
    fn from(elements: Vec<&str>) -> Self {
        AttrValue::Many(elements.into_iter().map(str::to_string).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blankness() {
        assert!(AttrValue::from("").is_blank());
        assert!(AttrValue::from("   ").is_blank());
        assert!(AttrValue::Many(Vec::new()).is_blank());
        assert!(!AttrValue::from("x").is_blank());
        assert!(!AttrValue::from(vec![""]).is_blank());
    }
}
