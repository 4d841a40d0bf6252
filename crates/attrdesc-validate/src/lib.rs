//! Rule evaluation engine for attribute descriptors.
//!
//! Consumes a canonical [`attrdesc_model::RuleSet`] plus a value
//! accessor and produces a structured
//! [`attrdesc_model::ValidationReport`]. Evaluation is a pure function
//! over immutable inputs; nothing here mutates a rule or remembers a
//! previous call, so one rule set can back any number of concurrent
//! validations.

mod engine;
mod source;

pub use engine::validate;
pub use source::ValueSource;
