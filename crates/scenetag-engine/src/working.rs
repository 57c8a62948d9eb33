//! The progressively consumed copy of the input.

use std::ops::Range;

/// Replacement written where a consumed span used to be, so the text on
/// either side is never glued into a new token.
const SEPARATOR: &str = " ";

/// Mutable copy of the input owned by one parse call.
///
/// `origin[i]` is the byte offset in the original input of working byte `i`;
/// the extra trailing entry maps the end of the text. A separator inserted by
/// [`WorkingTitle::excise`] maps to the start of the text it replaced.
#[derive(Debug)]
pub(crate) struct WorkingTitle {
    text: String,
    origin: Vec<usize>,
}

impl WorkingTitle {
    pub(crate) fn new(input: &str) -> Self {
        Self {
            text: input.to_string(),
            origin: (0..=input.len()).collect(),
        }
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.text
    }

    /// Translate a range of the working text back to the original input.
    ///
    /// A range touching an inserted separator widens to cover the text that
    /// separator replaced.
    pub(crate) fn original_span(&self, range: Range<usize>) -> Range<usize> {
        self.origin[range.start]..self.origin[range.end]
    }

    /// Remove `range` from the working text, leaving a single separator.
    pub(crate) fn excise(&mut self, range: Range<usize>) {
        let anchor = self.origin[range.start];
        self.text.replace_range(range.clone(), SEPARATOR);
        self.origin.splice(range, std::iter::once(anchor));
    }
}
