use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SaceError {
    /// Encoded class identifier is too short to hold stage, subject and credits.
    #[error("malformed class code '{code}': expected at least 6 characters")]
    MalformedClassCode { code: String },
    /// A required identifier was empty after trimming.
    #[error("empty {kind} identifier")]
    EmptyIdentifier { kind: &'static str },
    /// A required field was missing or null.
    #[error("missing required field {field}")]
    MissingField { field: &'static str },
}

pub type Result<T> = std::result::Result<T, SaceError>;
