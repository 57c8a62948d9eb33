//! Error types for rule registration and parsing.
//!
//! Only two things can go wrong: a rule table that fails to compile, and input
//! that is not a sane release label. A pattern that does not match, or a
//! capture that a transform rejects, is ordinary control flow and never
//! surfaces here.

/// Error type for the extraction engine.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A registered pattern is not a valid regular expression.
    #[error("Invalid pattern for field `{field}`: {source}")]
    InvalidPattern {
        /// The field the rule was registered under.
        field: String,
        /// The underlying compile error.
        #[source]
        source: regex::Error,
    },

    /// The input exceeds the configured length limit.
    #[error("Input too long: {len} bytes exceeds limit of {max}")]
    InputTooLong {
        /// Length of the rejected input in bytes.
        len: usize,
        /// The configured limit.
        max: usize,
    },

    /// The input bytes are not valid UTF-8.
    #[error("Invalid encoding: {0}")]
    InvalidEncoding(#[from] std::str::Utf8Error),
}

impl Error {
    /// Create a new InvalidPattern error.
    pub fn invalid_pattern<S: Into<String>>(field: S, source: regex::Error) -> Self {
        Self::InvalidPattern {
            field: field.into(),
            source,
        }
    }

    /// Returns true if the error was caused by the input rather than the rule table.
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::InputTooLong { .. } | Self::InvalidEncoding(_))
    }
}

/// Result type alias using the engine Error type.
pub type Result<T> = std::result::Result<T, Error>;
