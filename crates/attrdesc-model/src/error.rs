use thiserror::Error;

/// Configuration errors: the declaration itself is malformed.
///
/// These are author errors, surfaced immediately and treated as fatal for
/// the declaration load that produced them. Value-level failures are not
/// errors; they accumulate in a [`crate::ValidationReport`].
#[derive(Debug, Error)]
pub enum DescriptorError {
    #[error("attribute '{attribute}': pattern '{pattern}' does not compile: {source}")]
    InvalidPattern {
        attribute: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },
    #[error("attribute '{attribute}': unrecognized cardinality range '{raw}'")]
    InvalidCardinality { attribute: String, raw: String },
    #[error("attribute '{attribute}': cardinality minimum {min} exceeds maximum {max}")]
    InvertedCardinality {
        attribute: String,
        min: usize,
        max: usize,
    },
    #[error("attribute '{attribute}': key '{key}' has unusable value '{raw}'")]
    InvalidValue {
        attribute: String,
        key: String,
        raw: String,
    },
    #[error("'{attribute}' is not a valid attribute")]
    UnknownAttribute { attribute: String },
    #[error("programmatic name '{name}' resolves from more than one declaration")]
    DuplicateName { name: String },
}

pub type Result<T> = std::result::Result<T, DescriptorError>;
