//! Value transforms applied to captured text.
//!
//! Every transform is a pure function from the captured substring to a
//! [`Value`]. Returning `None` rejects the match: the engine then treats the
//! rule as not having matched and moves on to the next rule for the field.

use chrono::NaiveDate;

use crate::value::Value;

/// Longest digit run any numeric transform will parse.
///
/// Release labels never carry numbers this long; anything longer is a hash or
/// an id and is rejected before it can overflow.
pub const MAX_DIGITS: usize = 6;

/// How a rule turns its capture into a value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Transform {
    /// The capture itself, as text.
    #[default]
    Identity,
    /// Base-10 integer.
    Integer,
    /// Presence of the match means `true`.
    Boolean,
    /// Case-folded text.
    Lowercase,
    /// A fixed canonical value regardless of spelling.
    Constant(Value),
    /// Integer (or the inner transform's numbers) wrapped in a sequence.
    ///
    /// Sequences only hold numbers, so a capture or inner value that is not
    /// numeric rejects the match.
    Array(Option<Box<Transform>>),
    /// Strictly ascending step-1 run, see [`as_contiguous_range`].
    Range,
    /// Single year or `"start-end"` range, see [`as_year_range`].
    YearRange,
    /// Calendar date rendered `YYYY-MM-DD`, see [`as_date`].
    Date,
}

impl Transform {
    /// Shorthand for [`Transform::Constant`].
    pub fn value(value: impl Into<Value>) -> Self {
        Self::Constant(value.into())
    }

    /// Shorthand for an `Array` wrapping another transform.
    pub fn array_of(inner: Transform) -> Self {
        Self::Array(Some(Box::new(inner)))
    }

    /// Apply the transform to a captured substring.
    pub fn apply(&self, raw: &str) -> Option<Value> {
        match self {
            Self::Identity => Some(Value::Text(raw.to_string())),
            Self::Integer => as_integer(raw).map(Value::Int),
            Self::Boolean => Some(Value::Bool(true)),
            Self::Lowercase => Some(Value::Text(raw.to_lowercase())),
            Self::Constant(value) => Some(value.clone()),
            Self::Array(inner) => {
                let value = match inner {
                    Some(inner) => inner.apply(raw)?,
                    None => Value::Int(as_integer(raw)?),
                };
                match value {
                    Value::Int(n) => Some(Value::Seq(vec![n])),
                    Value::Seq(v) => Some(Value::Seq(v)),
                    _ => None,
                }
            }
            Self::Range => as_contiguous_range(raw).map(Value::Seq),
            Self::YearRange => as_year_range(raw),
            Self::Date => as_date(raw).map(Value::Text),
        }
    }
}

/// Parse a bounded run of ASCII digits.
fn parse_digits(digits: &str) -> Option<u32> {
    if digits.is_empty()
        || digits.len() > MAX_DIGITS
        || !digits.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }
    digits.parse().ok()
}

/// Split on anything that is not an ASCII digit, dropping empty pieces.
fn digit_groups(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(|c: char| !c.is_ascii_digit())
        .filter(|group| !group.is_empty())
}

/// Base-10 integer from the trimmed capture.
pub fn as_integer(raw: &str) -> Option<u32> {
    parse_digits(raw.trim())
}

/// Reconstruct a contiguous run of numbers from a capture like `"23-24"`,
/// `"1,2,3"` or `"01-E04"`.
///
/// Two numbers with the first below the second are expanded to the full
/// inclusive run. The result must then ascend in steps of exactly one, so a
/// capture such as `"103, The, 09"` is rejected rather than accepted as a
/// bogus pair. A run of two or more starting at zero is rejected as well:
/// it is almost always a fragment of a hex checksum (`[436E0E90]`).
///
/// ```
/// use scenetag_engine::transform::as_contiguous_range;
///
/// assert_eq!(as_contiguous_range("23-24"), Some(vec![23, 24]));
/// assert_eq!(as_contiguous_range("1-4"), Some(vec![1, 2, 3, 4]));
/// assert_eq!(as_contiguous_range("103, The, 09"), None);
/// ```
pub fn as_contiguous_range(raw: &str) -> Option<Vec<u32>> {
    let mut numbers = digit_groups(raw)
        .map(parse_digits)
        .collect::<Option<Vec<u32>>>()?;

    if let [] | [0, _, ..] = numbers.as_slice() {
        return None;
    }

    if let [start, end] = numbers[..] {
        if start < end {
            numbers = (start..=end).collect();
        }
    }

    numbers
        .windows(2)
        .all(|pair| pair[0] + 1 == pair[1])
        .then_some(numbers)
}

/// Normalize a year or year range.
///
/// A lone year comes back as `Int`. A two-digit end year borrows the start's
/// century (`"1988-89"` becomes `"1988-1989"`). An end that does not come
/// after the start rejects the capture so a plain single-year rule can try.
///
/// ```
/// use scenetag_engine::transform::as_year_range;
/// use scenetag_engine::Value;
///
/// assert_eq!(as_year_range("1988 - 89"), Some(Value::Text("1988-1989".into())));
/// assert_eq!(as_year_range("2014"), Some(Value::Int(2014)));
/// assert_eq!(as_year_range("1999-1998"), None);
/// ```
pub fn as_year_range(raw: &str) -> Option<Value> {
    let mut groups = digit_groups(raw);
    let start = parse_digits(groups.next()?)?;

    let Some(end_digits) = groups.next() else {
        return Some(Value::Int(start));
    };
    let mut end = parse_digits(end_digits)?;

    if end_digits.len() < 4 {
        end += start - start % 100;
    }
    if end <= start {
        return None;
    }

    Some(Value::Text(format!("{start}-{end}")))
}

/// Normalize an air date written year-first or day-first to `YYYY-MM-DD`.
///
/// Impossible dates (`2019 02 30`) are rejected.
pub fn as_date(raw: &str) -> Option<String> {
    let groups: Vec<&str> = digit_groups(raw).collect();
    let [first, month, last] = groups[..] else {
        return None;
    };

    let (year, day) = if first.len() == 4 {
        (first, last)
    } else {
        (last, first)
    };

    let date = NaiveDate::from_ymd_opt(
        i32::try_from(parse_digits(year)?).ok()?,
        parse_digits(month)?,
        parse_digits(day)?,
    )?;
    Some(date.format("%Y-%m-%d").to_string())
}
