//! The matching engine: runs a registry against one input.

use tracing::{debug, trace};

use crate::assemble::assemble;
use crate::error::{Error, Result};
use crate::matched::MatchRecord;
use crate::registry::{ConflictPolicy, HandlerContext, PatternRule, Registry, Rule};
use crate::title::residual_title;
use crate::value::Fields;
use crate::working::WorkingTitle;

/// Output of one parse call.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Parsed {
    /// Input with every matched span removed and separators tidied.
    pub title: String,
    /// Resolved fields after plural collapsing.
    pub fields: Fields,
    /// Every accepted match, with offsets into the input.
    pub matched: MatchRecord,
}

impl Registry {
    /// Parse `input` against this registry.
    ///
    /// Deterministic: the same registry and input always give the same
    /// result. Only input longer than the configured limit is an error.
    pub fn parse(&self, input: &str) -> Result<Parsed> {
        if input.len() > self.max_input_len() {
            debug!(
                len = input.len(),
                max = self.max_input_len(),
                "rejecting oversized input"
            );
            return Err(Error::InputTooLong {
                len: input.len(),
                max: self.max_input_len(),
            });
        }

        let mut working = WorkingTitle::new(input);
        let mut fields = Fields::new();
        let mut matched = MatchRecord::default();

        for (index, rule) in self.rules().iter().enumerate() {
            match rule {
                Rule::Pattern(rule) => apply_pattern(
                    rule,
                    index,
                    self.conflict_policy(),
                    &mut working,
                    &mut fields,
                    &mut matched,
                ),
                Rule::Custom(rule) => {
                    let ctx = HandlerContext {
                        input,
                        matched: &matched,
                    };
                    fields = (rule.handler)(&ctx, fields);
                }
            }
        }

        Ok(Parsed {
            title: residual_title(input, &matched),
            fields: assemble(fields, self.plurals()),
            matched,
        })
    }

    /// Parse raw bytes, rejecting anything that is not UTF-8.
    pub fn parse_bytes(&self, input: &[u8]) -> Result<Parsed> {
        self.parse(std::str::from_utf8(input)?)
    }
}

fn apply_pattern(
    rule: &PatternRule,
    index: usize,
    policy: ConflictPolicy,
    working: &mut WorkingTitle,
    fields: &mut Fields,
    matched: &mut MatchRecord,
) {
    let already_found = fields.contains(&rule.field);
    if already_found && rule.options.skip_if_already_found {
        return;
    }

    let Some(caps) = rule.captures(working.as_str()) else {
        return;
    };
    let Some(whole) = caps.get(0).filter(|m| !m.is_empty()) else {
        return;
    };
    let capture = caps
        .get(1)
        .filter(|m| !m.is_empty())
        .map_or(whole.as_str(), |m| m.as_str());

    let Some(value) = rule.transform.apply(capture) else {
        debug!(field = %rule.field, rule = index, capture, "transform rejected capture");
        return;
    };

    trace!(field = %rule.field, rule = index, raw = whole.as_str(), ?value, "rule matched");

    let range = whole.range();
    matched.push(&rule.field, whole.as_str(), working.original_span(range.clone()));

    if !already_found || policy == ConflictPolicy::Overwrite {
        fields.insert(rule.field.clone(), value);
    }

    if rule.options.remove {
        working.excise(range);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::RuleOptions;
    use crate::transform::Transform;

    fn keep_searching() -> RuleOptions {
        RuleOptions::new().skip_if_already_found(false)
    }

    #[test]
    fn test_first_rule_wins_by_default() {
        let registry = Registry::builder()
            .pattern("source", r"\bHDTV\b", Transform::Identity)
            .pattern("source", r"\bWEB-DL\b", Transform::Identity)
            .build()
            .unwrap();

        let parsed = registry.parse("Show HDTV WEB-DL").unwrap();
        assert_eq!(parsed.fields.text("source"), Some("HDTV"));
        // the second rule never ran, so its text is still in the title
        assert_eq!(parsed.title, "Show WEB-DL");
        assert_eq!(parsed.matched.all("source").count(), 1);
    }

    #[test]
    fn test_rejected_transform_falls_through() {
        let registry = Registry::builder()
            .pattern("episode", r"(\d{1,3}(?:-\d{1,3})+)", Transform::Range)
            .pattern("episode", r"(?i)\be(\d{2})\b", Transform::Integer)
            .build()
            .unwrap();

        let parsed = registry.parse("22-7 Show E05").unwrap();
        assert_eq!(parsed.fields.int("episode"), Some(5));
        assert_eq!(parsed.matched.len(), 1);
        // nothing was consumed by the rejected rule
        assert_eq!(parsed.title, "22-7 Show");
    }

    #[test]
    fn test_removal_prevents_rematch_by_other_fields() {
        let registry = Registry::builder()
            .pattern("resolution", r"(?i)([0-9]{3,4}p)", Transform::Lowercase)
            .pattern("group", r"-([^\-. ]+)[. ]*$", Transform::Identity)
            .build()
            .unwrap();

        let parsed = registry.parse("Some.Movie.2019.HDTV-720p").unwrap();
        assert_eq!(parsed.fields.text("resolution"), Some("720p"));
        assert!(parsed.fields.get("group").is_none());
    }

    #[test]
    fn test_without_removal_text_stays_visible() {
        let registry = Registry::builder()
            .pattern_with(
                "season",
                r"(?i)s(\d{1,2})e",
                Transform::Integer,
                RuleOptions::new().remove(false),
            )
            .pattern("episode", r"(?i)s\d{1,2}e(\d{1,2})", Transform::Integer)
            .build()
            .unwrap();

        let parsed = registry.parse("Show S03E07").unwrap();
        assert_eq!(parsed.fields.int("season"), Some(3));
        assert_eq!(parsed.fields.int("episode"), Some(7));
        assert_eq!(parsed.title, "Show");
    }

    #[test]
    fn test_keep_searching_keeps_first_value() {
        let registry = Registry::builder()
            .pattern("season", r"(?i)season (\d{1,2})", Transform::Integer)
            .pattern_with("season", r"(?i)\bs(\d{1,2})\b", Transform::Integer, keep_searching())
            .build()
            .unwrap();

        let parsed = registry.parse("Show Season 2 S3 Extras").unwrap();
        assert_eq!(parsed.fields.int("season"), Some(2));
        // the extra span is still recorded and cleaned out of the title
        assert_eq!(parsed.matched.all("season").count(), 2);
        assert_eq!(parsed.title, "Show Extras");
    }

    #[test]
    fn test_keep_searching_with_overwrite_policy() {
        let registry = Registry::builder()
            .pattern("season", r"(?i)season (\d{1,2})", Transform::Integer)
            .pattern_with("season", r"(?i)\bs(\d{1,2})\b", Transform::Integer, keep_searching())
            .conflict_policy(ConflictPolicy::Overwrite)
            .build()
            .unwrap();

        let parsed = registry.parse("Show Season 2 S3 Extras").unwrap();
        assert_eq!(parsed.fields.int("season"), Some(3));
        assert_eq!(parsed.matched.all("season").count(), 2);
    }

    #[test]
    fn test_skip_if_found_never_evaluates_later_rules() {
        fn count_calls(_: &HandlerContext<'_>, mut fields: Fields) -> Fields {
            let seen = fields.int("calls").unwrap_or(0);
            fields.insert("calls", seen + 1);
            fields
        }

        let registry = Registry::builder()
            .pattern("year", r"(\d{4})", Transform::Integer)
            .pattern("year", r"(\d{2})", Transform::Integer)
            .handler("calls", count_calls)
            .build()
            .unwrap();

        let parsed = registry.parse("Movie 1999 42").unwrap();
        assert_eq!(parsed.fields.int("year"), Some(1999));
        // the two-digit rule was skipped, so "42" remains
        assert_eq!(parsed.title, "Movie 42");
        assert_eq!(parsed.fields.int("calls"), Some(1));
    }

    #[test]
    fn test_handler_sees_earlier_spans() {
        fn locate(ctx: &HandlerContext<'_>, mut fields: Fields) -> Fields {
            if let Some(m) = ctx.matched.get("resolution") {
                fields.insert("resolution_at", m.span.start as u32);
            }
            fields
        }

        let registry = Registry::builder()
            .pattern("resolution", r"\d{3,4}p", Transform::Identity)
            .handler("resolution_at", locate)
            .build()
            .unwrap();

        let parsed = registry.parse("Clip 1080p").unwrap();
        assert_eq!(parsed.fields.int("resolution_at"), Some(5));
    }

    #[test]
    fn test_plural_family_collapses() {
        let registry = Registry::builder()
            .pattern("episode", r"(?i)e(\d{2}(?:-\d{2})?)\b", Transform::Range)
            .plural("episode", "episodes")
            .build()
            .unwrap();

        let single = registry.parse("Show E05").unwrap();
        assert_eq!(single.fields.int("episode"), Some(5));
        assert!(single.fields.get("episodes").is_none());

        let many = registry.parse("Show E05-07").unwrap();
        assert_eq!(many.fields.seq("episodes"), Some(&[5, 6, 7][..]));
        assert!(many.fields.get("episode").is_none());
    }

    #[test]
    fn test_input_too_long() {
        let registry = Registry::builder().max_input_len(8).build().unwrap();
        let err = registry.parse("far too long for this").unwrap_err();
        assert!(matches!(err, Error::InputTooLong { len: 21, max: 8 }));
        assert!(registry.parse("short").is_ok());
    }

    #[test]
    fn test_parse_bytes_rejects_invalid_utf8() {
        let registry = Registry::builder().build().unwrap();
        assert!(matches!(
            registry.parse_bytes(b"bad \xff bytes"),
            Err(Error::InvalidEncoding(_))
        ));
        assert_eq!(registry.parse_bytes(b"ok").unwrap().title, "ok");
    }

    #[test]
    fn test_deterministic() {
        let registry = Registry::builder()
            .pattern("resolution", r"\d{3,4}p", Transform::Identity)
            .pattern("episode", r"(?i)e(\d{2})", Transform::Integer)
            .build()
            .unwrap();

        let input = "Show E01 720p";
        assert_eq!(registry.parse(input).unwrap(), registry.parse(input).unwrap());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_parsed_serde_round_trip() {
        let registry = Registry::builder()
            .pattern("source", r"\bHDTV\b", Transform::Identity)
            .pattern("proper", r"PROPER", Transform::Boolean)
            .pattern("episode", r"(?i)e(\d{2}(?:-\d{2})?)\b", Transform::Range)
            .plural("episode", "episodes")
            .build()
            .unwrap();

        let parsed = registry.parse("Show E01-03 PROPER HDTV").unwrap();
        let json = serde_json::to_value(&parsed).unwrap();
        assert_eq!(
            json["fields"],
            serde_json::json!({ "episodes": [1, 2, 3], "proper": true, "source": "HDTV" })
        );
        assert_eq!(json["title"], "Show");
        assert_eq!(
            json["matched"][0],
            serde_json::json!({ "field": "source", "raw": "HDTV", "span": { "start": 19, "end": 23 } })
        );

        let back: Parsed = serde_json::from_value(json).unwrap();
        assert_eq!(back, parsed);
    }

    #[test]
    fn test_empty_matches_are_ignored() {
        let registry = Registry::builder()
            .pattern("region", r"(R\d)?", Transform::Identity)
            .build()
            .unwrap();

        let parsed = registry.parse("Movie DVD").unwrap();
        assert!(parsed.fields.get("region").is_none());
        assert!(parsed.matched.is_empty());
    }
}
