//! # scenetag-engine
//!
//! An ordered, regex-driven rule engine for pulling structured fields out of
//! free-form media release labels.
//!
//! Rules are registered per field in priority order. Each pattern rule runs
//! once against a working copy of the input; the first accepted match for a
//! field wins, and its text is cut out so later rules for other fields cannot
//! claim it again. Whatever is left over becomes the title.
//!
//! The engine knows nothing about media: field names, patterns and the
//! singular/plural families all come from the caller.
//!
//! ## Quick Start
//!
//! ```
//! use scenetag_engine::{Registry, Transform};
//!
//! let registry = Registry::builder()
//!     .pattern("resolution", r"(?i)([0-9]{3,4}[pi])", Transform::Lowercase)
//!     .pattern("source", r"(?i)\bHDTV\b", Transform::value("HDTV"))
//!     .pattern("episode", r"(?i)\be(\d{1,2}(?:-\d{1,2})?)\b", Transform::Range)
//!     .plural("episode", "episodes")
//!     .build()
//!     .unwrap();
//!
//! let parsed = registry.parse("Some Show E01-03 720P hdtv").unwrap();
//! assert_eq!(parsed.title, "Some Show");
//! assert_eq!(parsed.fields.text("resolution"), Some("720p"));
//! assert_eq!(parsed.fields.text("source"), Some("HDTV"));
//! assert_eq!(parsed.fields.seq("episodes"), Some(&[1, 2, 3][..]));
//! ```

mod assemble;
mod engine;
mod error;
mod matched;
mod registry;
mod title;
mod value;
mod working;

pub mod transform;

pub use engine::Parsed;
pub use error::{Error, Result};
pub use matched::{MatchRecord, MatchedSpan};
pub use registry::{
    ConflictPolicy, CustomRule, Handler, HandlerContext, PatternRule, Registry, RegistryBuilder,
    Rule, RuleOptions, DEFAULT_MAX_INPUT_LEN,
};
pub use transform::Transform;
pub use value::{Fields, Value};
