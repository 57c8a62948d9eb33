//! Volume, season and episode numbering.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;
use scenetag_engine::{Fields, HandlerContext, RegistryBuilder, RuleOptions, Transform};
use tracing::trace;

/// Fields whose first match marks where the technical tail of a label
/// starts; absolute episode numbers are only looked for before it.
const TAIL_FIELDS: [&str; 4] = ["resolution", "source", "codec", "audio"];

/// A bare 1-3 digit number between separators, optionally split into a/b
/// parts (`107a`).
static ISOLATED_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:[ ._(\[-]|^)(\d{1,3})[ab]?(?:[ ._(\]-]|$)").expect("valid isolated number regex")
});

pub(crate) fn volumes(builder: RegistryBuilder) -> RegistryBuilder {
    builder
        .pattern(
            "volume",
            r"(?i)\bvol(?:s|umes?)?[. -]*((?:\d{1,2}[., +/\\&-]+)+\d{1,2}\b)",
            Transform::Range,
        )
        .pattern("volume", r"(?i)\bvol(?:ume)?[. -]*(\d{1,3})", Transform::Integer)
}

/// Season rules. The last three read the season out of a combined marker
/// (`S01E02`, `1x02`, `[5.01]`) and leave the text for the episode rules.
pub(crate) fn seasons(builder: RegistryBuilder) -> RegistryBuilder {
    let keep_text = RuleOptions::new().remove(false);
    builder
        .pattern(
            "season",
            r"(?i)((?:s\d{1,2}[., +/\\&-]+)+s\d{1,2}\b)",
            Transform::Range,
        )
        .pattern(
            "season",
            r"(?i)(?:\bcomplete\W)?\bseasons?\b[. -]?[(\[]?((?:\d{1,2}[., /\\&-]+)+\d{1,2}\b)[)\]]?",
            Transform::Range,
        )
        .pattern(
            "season",
            r"(?i)(?:\bcomplete\W)?\bseasons?\b[. -]?(\d{1,2}[. -]?(?:to|thru|and|\+|:)[. -]?\d{1,2})\b",
            Transform::Range,
        )
        .pattern(
            "season",
            r"(?i)(?:\bcomplete\W)?(?:saison|season)[. -]?(\d{1,2})",
            Transform::Integer,
        )
        .pattern_with(
            "season",
            r"(?i)(?:\bcomplete\W)?s(\d{1,2})(?:[\Wex]|$)",
            Transform::Integer,
            keep_text.skip_if_already_found(false),
        )
        .pattern_with("season", r"(\d{1,2})x\d{1,2}", Transform::Integer, keep_text)
        .pattern_with(
            "season",
            r"[(\[](\d{1,2})\.\d{1,2}[)\]]",
            Transform::Integer,
            keep_text,
        )
}

pub(crate) fn episodes(builder: RegistryBuilder) -> RegistryBuilder {
    builder
        .pattern(
            "episode",
            r"(?i)(?:[\W\d]|^)[ex]p?(?:isode)?s?[ .]?[(\[]?(\d{1,3}(?:[ .-]*[ex&-]p?[ .]?\d{1,3})+)(?:\D|$)",
            Transform::Range,
        )
        .pattern(
            "episode",
            r"(?i)(?:[s .(\[-]|^)\d{1,2}[. -]*[ex]p?[. ]?(\d{1,2})(?:\D|$)",
            Transform::Integer,
        )
        .pattern(
            "episode",
            r"(?i)(?:[ .(\[-]|^)(\d{1,3}(?:[ .]?[,&-][ .]?\d{1,3})+)(?:[ .()\]-]|$)",
            Transform::Range,
        )
        .pattern(
            "episode",
            r"(?i)[ée]p(?:isode)?[. -]?(\d{1,3})(?:\D|$)",
            Transform::Integer,
        )
        .pattern(
            "episode",
            r"[(\[]\d{1,2}\.(\d{1,2})[)\]]",
            Transform::Integer,
        )
        .handler("episode", absolute_episode)
}

/// Anime numbering often carries a bare episode number with no marker at
/// all (`Naruto Shippuden - 107 [720p]`). Dated releases are numbered by
/// their air date instead.
fn absolute_episode(ctx: &HandlerContext<'_>, mut fields: Fields) -> Fields {
    if ["season", "episode", "date"]
        .iter()
        .any(|field| fields.contains(field))
    {
        return fields;
    }

    let anchors: Vec<Range<usize>> = TAIL_FIELDS
        .iter()
        .filter_map(|field| ctx.matched.get(field))
        .map(|m| m.span.clone())
        .collect();

    if let Some(episode) = infer_absolute_episode(ctx.input, &anchors) {
        trace!(episode, "inferred absolute episode");
        fields.insert("episode", episode);
    }
    fields
}

/// Guess a bare episode number from the part of `input` before the first
/// anchor that does not start the label.
///
/// When several isolated numbers are present the last one wins; the first
/// is usually part of the title (`Mob Psycho 100 - 09`).
pub fn infer_absolute_episode(input: &str, anchors: &[Range<usize>]) -> Option<u32> {
    let end = anchors
        .iter()
        .map(|span| span.start)
        .filter(|&start| start > 0)
        .min()
        .unwrap_or(input.len());

    ISOLATED_NUMBER
        .captures_iter(&input[..end])
        .filter_map(|caps| caps.get(1))
        .filter_map(|m| m.as_str().parse().ok())
        .last()
}
