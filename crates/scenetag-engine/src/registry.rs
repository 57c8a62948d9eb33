//! Rule definitions and the frozen, ordered rule registry.
//!
//! Rules are registered through [`RegistryBuilder`] in the exact order they
//! must run. Order matters across fields, not just within one: a custom
//! handler may read spans recorded by rules for unrelated fields that ran
//! before it. [`RegistryBuilder::build`] compiles every pattern and yields a
//! [`Registry`] that has no mutation API, so a registry that is being used
//! for parsing can never change underneath a caller.

use regex::{Captures, Regex};

use crate::error::{Error, Result};
use crate::matched::MatchRecord;
use crate::transform::Transform;
use crate::value::Fields;

/// Default upper bound on input length in bytes.
pub const DEFAULT_MAX_INPUT_LEN: usize = 4096;

/// Per-rule matching options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleOptions {
    /// Skip the rule when its field already has a value.
    pub skip_if_already_found: bool,
    /// Consume the matched text so later rules cannot match it again.
    pub remove: bool,
    /// Never accept a match starting at the first character.
    pub not_at_start: bool,
}

impl Default for RuleOptions {
    fn default() -> Self {
        Self {
            skip_if_already_found: true,
            remove: true,
            not_at_start: false,
        }
    }
}

impl RuleOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn skip_if_already_found(mut self, skip: bool) -> Self {
        self.skip_if_already_found = skip;
        self
    }

    pub fn remove(mut self, remove: bool) -> Self {
        self.remove = remove;
        self
    }

    pub fn not_at_start(mut self, not_at_start: bool) -> Self {
        self.not_at_start = not_at_start;
        self
    }
}

/// What to do when a rule that keeps searching matches a field that already
/// has a value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ConflictPolicy {
    /// Record the span for title cleanup, keep the existing value.
    #[default]
    KeepFirst,
    /// Record the span and replace the existing value.
    Overwrite,
}

/// Read-only view handed to custom handlers.
#[derive(Debug, Clone, Copy)]
pub struct HandlerContext<'a> {
    /// The original, unconsumed input.
    pub input: &'a str,
    /// Everything matched so far.
    pub matched: &'a MatchRecord,
}

/// A custom rule: takes the accumulator, returns it (possibly updated).
pub type Handler = fn(&HandlerContext<'_>, Fields) -> Fields;

/// A compiled pattern rule.
#[derive(Debug, Clone)]
pub struct PatternRule {
    pub(crate) field: String,
    pub(crate) regex: Regex,
    pub(crate) transform: Transform,
    pub(crate) options: RuleOptions,
}

impl PatternRule {
    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    pub fn options(&self) -> RuleOptions {
        self.options
    }

    /// First match in `text`, honoring `not_at_start`.
    pub(crate) fn captures<'t>(&self, text: &'t str) -> Option<Captures<'t>> {
        if !self.options.not_at_start {
            return self.regex.captures(text);
        }
        let first = text.chars().next()?;
        self.regex.captures_at(text, first.len_utf8())
    }
}

/// A custom handler rule.
#[derive(Debug, Clone)]
pub struct CustomRule {
    pub(crate) field: String,
    pub(crate) handler: Handler,
}

impl CustomRule {
    pub fn field(&self) -> &str {
        &self.field
    }
}

/// One registered rule.
#[derive(Debug, Clone)]
pub enum Rule {
    Pattern(PatternRule),
    Custom(CustomRule),
}

impl Rule {
    /// The field this rule competes for.
    pub fn field(&self) -> &str {
        match self {
            Self::Pattern(rule) => rule.field(),
            Self::Custom(rule) => rule.field(),
        }
    }
}

/// A rule waiting for its pattern to be compiled.
#[derive(Debug, Clone)]
enum PendingRule {
    Pattern {
        field: String,
        pattern: String,
        transform: Transform,
        options: RuleOptions,
    },
    Custom {
        field: String,
        handler: Handler,
    },
}

/// Builder for [`Registry`].
///
/// ```
/// use scenetag_engine::{Registry, RuleOptions, Transform};
///
/// let registry = Registry::builder()
///     .pattern("resolution", r"(?i)([0-9]{3,4}[pi])", Transform::Lowercase)
///     .pattern_with(
///         "season",
///         r"(?i)s(\d{1,2})",
///         Transform::Integer,
///         RuleOptions::new().remove(false),
///     )
///     .build()
///     .unwrap();
///
/// let parsed = registry.parse("Show S02 720P").unwrap();
/// assert_eq!(parsed.fields.text("resolution"), Some("720p"));
/// assert_eq!(parsed.fields.int("season"), Some(2));
/// ```
#[derive(Debug, Clone)]
pub struct RegistryBuilder {
    pending: Vec<PendingRule>,
    plurals: Vec<(String, String)>,
    max_input_len: usize,
    conflict_policy: ConflictPolicy,
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self {
            pending: Vec::new(),
            plurals: Vec::new(),
            max_input_len: DEFAULT_MAX_INPUT_LEN,
            conflict_policy: ConflictPolicy::default(),
        }
    }
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a pattern rule with default options.
    pub fn pattern(
        self,
        field: impl Into<String>,
        pattern: impl Into<String>,
        transform: Transform,
    ) -> Self {
        self.pattern_with(field, pattern, transform, RuleOptions::default())
    }

    /// Append a pattern rule with explicit options.
    pub fn pattern_with(
        mut self,
        field: impl Into<String>,
        pattern: impl Into<String>,
        transform: Transform,
        options: RuleOptions,
    ) -> Self {
        self.pending.push(PendingRule::Pattern {
            field: field.into(),
            pattern: pattern.into(),
            transform,
            options,
        });
        self
    }

    /// Append a custom handler.
    pub fn handler(mut self, field: impl Into<String>, handler: Handler) -> Self {
        self.pending.push(PendingRule::Custom {
            field: field.into(),
            handler,
        });
        self
    }

    /// Declare a multi-valued field family, e.g. `episode` / `episodes`.
    pub fn plural(mut self, singular: impl Into<String>, plural: impl Into<String>) -> Self {
        self.plurals.push((singular.into(), plural.into()));
        self
    }

    /// Set the longest accepted input in bytes.
    pub fn max_input_len(mut self, max: usize) -> Self {
        self.max_input_len = max;
        self
    }

    /// Set how rules that keep searching treat an already-resolved field.
    pub fn conflict_policy(mut self, policy: ConflictPolicy) -> Self {
        self.conflict_policy = policy;
        self
    }

    /// Compile every pattern and freeze the rule order.
    pub fn build(self) -> Result<Registry> {
        let rules = self
            .pending
            .into_iter()
            .map(|pending| match pending {
                PendingRule::Pattern {
                    field,
                    pattern,
                    transform,
                    options,
                } => {
                    let regex = Regex::new(&pattern)
                        .map_err(|source| Error::invalid_pattern(field.clone(), source))?;
                    Ok(Rule::Pattern(PatternRule {
                        field,
                        regex,
                        transform,
                        options,
                    }))
                }
                PendingRule::Custom { field, handler } => {
                    Ok(Rule::Custom(CustomRule { field, handler }))
                }
            })
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(rules = rules.len(), "rule registry built");

        Ok(Registry {
            rules,
            plurals: self.plurals,
            max_input_len: self.max_input_len,
            conflict_policy: self.conflict_policy,
        })
    }
}

/// An immutable, ordered set of rules.
///
/// `Registry` is `Send + Sync`; one instance can serve any number of
/// concurrent [`Registry::parse`] calls.
#[derive(Debug, Clone)]
pub struct Registry {
    rules: Vec<Rule>,
    plurals: Vec<(String, String)>,
    max_input_len: usize,
    conflict_policy: ConflictPolicy,
}

impl Registry {
    /// Create a registry builder.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Rules in execution order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Declared `(singular, plural)` field families.
    pub fn plurals(&self) -> &[(String, String)] {
        &self.plurals
    }

    pub fn max_input_len(&self) -> usize {
        self.max_input_len
    }

    pub fn conflict_policy(&self) -> ConflictPolicy {
        self.conflict_policy
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
