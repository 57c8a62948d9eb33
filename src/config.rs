//! Parser configuration.

use scenetag_engine::{ConflictPolicy, DEFAULT_MAX_INPUT_LEN};

/// Configuration for the parser.
///
/// Use the builder pattern to create a configuration:
///
/// ```
/// use scenetag::config::ParserConfig;
/// use scenetag::ConflictPolicy;
///
/// let config = ParserConfig::builder()
///     .max_input_len(512)
///     .conflict_policy(ConflictPolicy::Overwrite)
///     .build();
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParserConfig {
    /// Longest accepted input in bytes; longer input is an error.
    /// Default: 4096
    pub max_input_len: usize,

    /// What a rule that keeps searching does to a field that already has a
    /// value.
    /// Default: KeepFirst
    pub conflict_policy: ConflictPolicy,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_input_len: DEFAULT_MAX_INPUT_LEN,
            conflict_policy: ConflictPolicy::default(),
        }
    }
}

impl ParserConfig {
    /// Create a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration builder.
    pub fn builder() -> ParserConfigBuilder {
        ParserConfigBuilder::default()
    }
}

/// Builder for `ParserConfig`.
#[derive(Debug, Clone, Default)]
pub struct ParserConfigBuilder {
    max_input_len: Option<usize>,
    conflict_policy: Option<ConflictPolicy>,
}

impl ParserConfigBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the longest accepted input in bytes.
    ///
    /// Release names are short; the limit only guards against feeding the
    /// parser whole documents by mistake.
    pub fn max_input_len(mut self, max: usize) -> Self {
        self.max_input_len = Some(max);
        self
    }

    /// Set the conflict policy.
    ///
    /// - `KeepFirst` (default): the first accepted value stays, later matches
    ///   only clean the title
    /// - `Overwrite`: the last accepted match wins
    pub fn conflict_policy(mut self, policy: ConflictPolicy) -> Self {
        self.conflict_policy = Some(policy);
        self
    }

    /// Build the configuration.
    pub fn build(self) -> ParserConfig {
        ParserConfig {
            max_input_len: self.max_input_len.unwrap_or(DEFAULT_MAX_INPUT_LEN),
            conflict_policy: self.conflict_policy.unwrap_or_default(),
        }
    }
}
