//! Record of which text resolved which field, and where.

use std::ops::Range;

/// One accepted match.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchedSpan {
    /// Field the match was accepted for.
    pub field: String,
    /// The text the pattern matched, as seen in the working title.
    pub raw: String,
    /// Byte range in the original input.
    pub span: Range<usize>,
}

/// All accepted matches of one parse call, in the order they were accepted.
///
/// The first entry for a field is the one that resolved it. Later entries for
/// the same field come from rules that keep searching after the field is set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchRecord {
    spans: Vec<MatchedSpan>,
}

impl MatchRecord {
    pub(crate) fn push(&mut self, field: &str, raw: &str, span: Range<usize>) {
        self.spans.push(MatchedSpan {
            field: field.to_string(),
            raw: raw.to_string(),
            span,
        });
    }

    /// The match that resolved `field`, if any.
    pub fn get(&self, field: &str) -> Option<&MatchedSpan> {
        self.spans.iter().find(|m| m.field == field)
    }

    /// Every match recorded for `field`.
    pub fn all<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a MatchedSpan> + 'a {
        self.spans.iter().filter(move |m| m.field == field)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MatchedSpan> {
        self.spans.iter()
    }

    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }
}
