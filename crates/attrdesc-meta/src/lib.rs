//! Attribute declaration parsing and normalization.
//!
//! Turns a raw declaration payload (label → compact string or key
//! mapping) into the canonical [`attrdesc_model::RuleSet`]: defaults
//! applied, compact syntax expanded, programmatic names derived,
//! patterns anchored and every declared key coerced to its semantic
//! type. Filtering derives independent sub-sets from a normalized set.

pub mod decl;
pub mod filter;
pub mod keys;
pub mod names;
pub mod normalize;

pub use decl::{DeclSource, RawDecl, RawDecls, RawValue};
pub use filter::{FilterSpec, filter};
pub use keys::KnownKey;
pub use names::programmatic_name;
pub use normalize::{normalize, normalize_with_defaults};
