//! Residual title construction.
//!
//! The display title is whatever is left of the input once every recorded
//! span has been cut out. Spans are removed by offset, never by searching for
//! their text again, so a token that also appears inside the real title
//! (`"2012 2009 1080p"`) only loses the occurrence that actually matched.

use crate::matched::MatchRecord;

/// Punctuation that only separates tokens; words made of nothing else are
/// dropped and it is trimmed from both ends of the title.
fn is_separator(c: char) -> bool {
    matches!(
        c,
        '-' | '–' | '.' | ',' | ';' | ':' | '+' | '/' | '\\' | '|' | '~' | '_' | '*'
    )
}

/// Separators plus brackets left empty once their content was matched.
fn is_filler(c: char) -> bool {
    is_separator(c) || matches!(c, '(' | ')' | '[' | ']' | '{' | '}')
}

fn bracket_kind(c: char) -> Option<usize> {
    match c {
        '(' | ')' => Some(0),
        '[' | ']' => Some(1),
        '{' | '}' => Some(2),
        _ => None,
    }
}

fn is_closing(c: char) -> bool {
    matches!(c, ')' | ']' | '}')
}

/// Build the cleaned title from the input and every matched span.
///
/// Dots only act as word separators in inputs that contain no whitespace
/// (`The.Simpsons.S28E21`); otherwise they are kept (`Mr. Robot`). An input
/// made entirely of recognized tokens yields an empty title.
pub fn residual_title(input: &str, matched: &MatchRecord) -> String {
    let mut removed = vec![false; input.len()];
    for m in matched.iter() {
        removed[m.span.clone()].fill(true);
    }

    let mut residual = String::with_capacity(input.len());
    let mut in_gap = false;
    let mut open = [0usize; 3];
    for (offset, c) in input.char_indices() {
        if removed[offset] {
            if !in_gap {
                residual.push(' ');
                in_gap = true;
            }
            continue;
        }
        in_gap = false;

        // a closing bracket whose opener was matched away
        if let Some(kind) = bracket_kind(c) {
            if is_closing(c) {
                if open[kind] == 0 {
                    continue;
                }
                open[kind] -= 1;
            } else {
                open[kind] += 1;
            }
        }
        residual.push(c);
    }

    let dotted = !input.chars().any(char::is_whitespace);
    let words: Vec<&str> = residual
        .split(|c: char| c.is_whitespace() || c == '_' || (dotted && c == '.'))
        .filter(|word| !word.is_empty() && !word.chars().all(is_filler))
        .collect();

    words
        .join(" ")
        .trim_matches(|c: char| c == ' ' || is_separator(c))
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(input: &str, tokens: &[&str]) -> MatchRecord {
        let mut record = MatchRecord::default();
        for token in tokens {
            let start = input.find(token).unwrap();
            record.push("test", token, start..start + token.len());
        }
        record
    }

    #[test]
    fn test_spaced_input() {
        let input = "The Simpsons S28E21 720p HDTV x264-AVS";
        let matched = record(input, &["S28E21 ", "720p", "HDTV", "x264", "-AVS"]);
        assert_eq!(residual_title(input, &matched), "The Simpsons");
    }

    #[test]
    fn test_dotted_input() {
        let input = "The.Simpsons.S28E21.720p.HDTV.x264-AVS";
        let matched = record(input, &["S28E21.", "720p", "HDTV", "x264", "-AVS"]);
        assert_eq!(residual_title(input, &matched), "The Simpsons");
    }

    #[test]
    fn test_dots_kept_when_spaced() {
        let input = "Mr. Robot S02 1080p";
        let matched = record(input, &["S02", "1080p"]);
        assert_eq!(residual_title(input, &matched), "Mr. Robot");
    }

    #[test]
    fn test_empty_brackets_and_dashes_dropped() {
        let input = "Friends - [7x23-24] - The One.mkv";
        let matched = record(input, &["7x23-24]", "mkv"]);
        assert_eq!(residual_title(input, &matched), "Friends The One");
    }

    #[test]
    fn test_removal_by_offset_not_text() {
        let input = "2012 2009 1080p";
        let mut matched = MatchRecord::default();
        matched.push("year", "2009", 5..9);
        matched.push("resolution", "1080p", 10..15);
        assert_eq!(residual_title(input, &matched), "2012");
    }

    #[test]
    fn test_everything_matched() {
        let input = "720p.HDTV";
        let matched = record(input, &["720p", "HDTV"]);
        assert_eq!(residual_title(input, &matched), "");
    }

    #[test]
    fn test_overlapping_spans() {
        let input = "Show S01E02 x";
        let mut matched = MatchRecord::default();
        matched.push("season", "S01E", 5..9);
        matched.push("episode", "S01E02 ", 5..12);
        assert_eq!(residual_title(input, &matched), "Show x");
    }

    #[test]
    fn test_closing_bracket_without_opener_dropped() {
        let input = "[TBox] Dragon Ball Z Full 1-291(Subbed Jap Vers)";
        let matched = record(input, &[" 1-291("]);
        assert_eq!(
            residual_title(input, &matched),
            "[TBox] Dragon Ball Z Full Subbed Jap Vers"
        );

        let input = "Smallville (1x02 Metamorphosis).avi";
        let matched = record(input, &["(1x02 ", "avi"]);
        assert_eq!(residual_title(input, &matched), "Smallville Metamorphosis");
    }

    #[test]
    fn test_balanced_brackets_kept() {
        let input = "Orange Is The New Black S05 (LEAKED)";
        let matched = record(input, &["S05"]);
        assert_eq!(
            residual_title(input, &matched),
            "Orange Is The New Black (LEAKED)"
        );
    }

    #[test]
    fn test_underscores_are_separators() {
        let input = "doctor_who_2005.8x12";
        let matched = record(input, &["8x12"]);
        assert_eq!(residual_title(input, &matched), "doctor who 2005");
    }
}
