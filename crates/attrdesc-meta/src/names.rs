//! Programmatic name derivation.

/// Characters replaced when deriving a programmatic name from a label.
const SEPARATORS: &str = " !\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Derives a safe identifier from an arbitrary attribute label.
///
/// Every separator character becomes `_`, empty segments collapse, so the
/// result carries no leading, trailing or doubled underscores. The
/// function is deterministic, pure and total; distinct labels can still
/// collide ("a.b" and "a b" both give `a_b`), and long labels give long
/// names, so declarations are advised to carry an explicit
/// `programmatic_name` for anything unwieldy. Collision detection is the
/// caller's job.
pub fn programmatic_name(label: &str) -> String {
    label
        .split(|ch: char| SEPARATORS.contains(ch))
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join("_")
}
