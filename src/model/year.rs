//! Release year, which may be a span of years for collections.

use super::ParseError;

/// A release year or an inclusive span of years.
///
/// Serializes as a bare integer for a single year and as `"start-end"` for a
/// span, matching how the span appears in release names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Year {
    /// One year, e.g. `2014`
    Single(u16),
    /// A collection spanning several years, e.g. `2001-2011`
    Range { start: u16, end: u16 },
}

impl Year {
    /// The first year covered.
    pub fn start(&self) -> u16 {
        match self {
            Year::Single(year) => *year,
            Year::Range { start, .. } => *start,
        }
    }

    /// The last year covered.
    pub fn end(&self) -> u16 {
        match self {
            Year::Single(year) => *year,
            Year::Range { end, .. } => *end,
        }
    }

    pub fn is_range(&self) -> bool {
        matches!(self, Year::Range { .. })
    }
}

impl std::fmt::Display for Year {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Year::Single(year) => write!(f, "{}", year),
            Year::Range { start, end } => write!(f, "{}-{}", start, end),
        }
    }
}

impl std::str::FromStr for Year {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseError(format!("invalid year: {}", s));
        match s.split_once('-') {
            None => s.trim().parse().map(Year::Single).map_err(|_| invalid()),
            Some((start, end)) => {
                let start: u16 = start.trim().parse().map_err(|_| invalid())?;
                let end: u16 = end.trim().parse().map_err(|_| invalid())?;
                if end <= start {
                    return Err(invalid());
                }
                Ok(Year::Range { start, end })
            }
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Year {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Year::Single(year) => serializer.serialize_u16(*year),
            Year::Range { .. } => serializer.collect_str(self),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Year {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Number(u16),
            Text(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Number(year) => Ok(Year::Single(year)),
            Repr::Text(text) => text.parse().map_err(serde::de::Error::custom),
        }
    }
}
