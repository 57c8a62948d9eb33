//! # scenetag
//!
//! Extract structured metadata from movie and TV release names.
//!
//! Release names follow many loose conventions. This crate runs an ordered
//! table of patterns over the name, keeps the first value each field
//! resolves to, and returns whatever text is left as the title.
//!
//! ## Quick Start
//!
//! ```
//! let result = scenetag::parse("The Simpsons S28E21 720p HDTV x264-AVS").unwrap();
//!
//! assert_eq!(result.title, "The Simpsons");
//! assert_eq!(result.season, Some(28));
//! assert_eq!(result.episode, Some(21));
//! assert_eq!(result.resolution.as_deref(), Some("720p"));
//! assert_eq!(result.group.as_deref(), Some("AVS"));
//! ```
//!
//! ## Configurable Parsing
//!
//! ```
//! use scenetag::Parser;
//! use scenetag::config::ParserConfig;
//!
//! let config = ParserConfig::builder().max_input_len(256).build();
//! let parser = Parser::new(config).unwrap();
//! assert!(parser.parse(&"x".repeat(300)).is_err());
//! ```
//!
//! ## Inspecting Matches
//!
//! [`Parser::parse_raw`] returns the engine output, including the span of
//! the input each field was read from.
//!
//! ```
//! let parser = scenetag::Parser::default();
//! let raw = parser.parse_raw("Movie.2014.1080p.BluRay").unwrap();
//! let year = raw.matched.get("year").unwrap();
//! assert_eq!(year.span, 6..10);
//! ```

pub mod config;
pub mod model;
pub mod rules;

use std::sync::LazyLock;

use config::ParserConfig;
use scenetag_engine::{Parsed, Registry};

pub use model::{ParsedTitle, Year};
pub use scenetag_engine::{ConflictPolicy, Error, Result};

static DEFAULT_PARSER: LazyLock<Parser> = LazyLock::new(Parser::default);

/// Parse a release name using the default rule table and settings.
///
/// For more control, use [`Parser`] with a custom [`ParserConfig`].
///
/// # Errors
///
/// Fails only for input longer than the default limit of 4096 bytes.
///
/// # Examples
///
/// ```
/// let result = scenetag::parse("Dawn.of.the.Planet.of.the.Apes.2014.HDRip.XViD-EVO").unwrap();
/// assert_eq!(result.title, "Dawn of the Planet of the Apes");
/// assert_eq!(result.year, Some(scenetag::Year::Single(2014)));
/// ```
pub fn parse(input: &str) -> Result<ParsedTitle> {
    DEFAULT_PARSER.parse(input)
}

/// A configurable release name parser.
///
/// Building a parser compiles the whole rule table, so build it once and
/// reuse it. A `Parser` is `Send + Sync`.
#[derive(Debug, Clone)]
pub struct Parser {
    registry: Registry,
}

impl Parser {
    /// Create a new parser with the given configuration.
    pub fn new(config: ParserConfig) -> Result<Self> {
        Ok(Self {
            registry: rules::default_registry(&config)?,
        })
    }

    /// Parse a release name into structured metadata.
    pub fn parse(&self, input: &str) -> Result<ParsedTitle> {
        self.parse_raw(input)
            .map(|parsed| ParsedTitle::from_parsed(&parsed))
    }

    /// Parse a release name and return the untyped engine output.
    pub fn parse_raw(&self, input: &str) -> Result<Parsed> {
        self.registry.parse(input)
    }

    /// Parse a release name given as raw bytes, which must be UTF-8.
    pub fn parse_bytes(&self, input: &[u8]) -> Result<ParsedTitle> {
        self.registry
            .parse_bytes(input)
            .map(|parsed| ParsedTitle::from_parsed(&parsed))
    }

    /// The compiled rule table.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new(ParserConfig::default()).expect("built-in rule table compiles")
    }
}
