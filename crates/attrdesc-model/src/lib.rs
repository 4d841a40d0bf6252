//! Canonical attribute rule definitions.
//!
//! The types here are the contract between the metadata normalizer (which
//! builds them) and the validation engine (which reads them): immutable
//! [`AttributeRule`]s collected into a [`RuleSet`], candidate values as
//! [`AttrValue`] snapshots, and findings gathered in a
//! [`ValidationReport`].

pub mod cardinality;
pub mod error;
pub mod pattern;
pub mod report;
pub mod rule;
pub mod value;
pub mod view;

pub use cardinality::{Cardinality, CardinalityExpr};
pub use error::{DescriptorError, Result};
pub use pattern::ValuePattern;
pub use report::ValidationReport;
pub use rule::{AttributeRule, RuleSet, Scalar, ValidValues};
pub use value::AttrValue;
pub use view::FieldView;
