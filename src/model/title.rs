//! Typed view over the fields the default rule table produces.

use scenetag_engine::{Fields, Parsed};

use super::Year;

#[cfg(feature = "serde")]
fn is_false(flag: &bool) -> bool {
    !*flag
}

/// Metadata extracted from a single release name.
///
/// Every field except `title` is optional. Numbered families come either as
/// a single number (`season`) or as a run of two or more (`seasons`), never
/// both.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ParsedTitle {
    /// Whatever is left once every recognized token is removed
    pub title: String,

    /// Air date, `YYYY-MM-DD`
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub date: Option<String>,
    /// Release year or span of years
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub year: Option<Year>,

    // Quality
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub resolution: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub source: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub codec: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub audio: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub container: Option<String>,

    // Release metadata
    /// DVD region code, e.g. `R5`
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub region: Option<String>,
    /// Release group name
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub group: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub language: Option<String>,

    // Flags
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "is_false"))]
    pub extended: bool,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "is_false"))]
    pub unrated: bool,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "is_false"))]
    pub proper: bool,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "is_false"))]
    pub repack: bool,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "is_false"))]
    pub convert: bool,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "is_false"))]
    pub hardcoded: bool,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "is_false"))]
    pub retail: bool,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "is_false"))]
    pub remastered: bool,
    /// Full season or full collection pack
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "is_false"))]
    pub complete: bool,

    // Numbering
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub season: Option<u32>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Vec::is_empty"))]
    pub seasons: Vec<u32>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub episode: Option<u32>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Vec::is_empty"))]
    pub episodes: Vec<u32>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub volume: Option<u32>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Vec::is_empty"))]
    pub volumes: Vec<u32>,
}

impl ParsedTitle {
    /// Build the typed view from the engine's raw output.
    ///
    /// Values of an unexpected shape are ignored rather than coerced.
    pub fn from_parsed(parsed: &Parsed) -> Self {
        let fields = &parsed.fields;
        let text = |field: &str| fields.text(field).map(str::to_string);
        let seq = |field: &str| fields.seq(field).map(<[u32]>::to_vec).unwrap_or_default();

        Self {
            title: parsed.title.clone(),
            date: text("date"),
            year: year(fields),
            resolution: text("resolution"),
            source: text("source"),
            codec: text("codec"),
            audio: text("audio"),
            container: text("container"),
            region: text("region"),
            group: text("group"),
            language: text("language"),
            extended: fields.flag("extended"),
            unrated: fields.flag("unrated"),
            proper: fields.flag("proper"),
            repack: fields.flag("repack"),
            convert: fields.flag("convert"),
            hardcoded: fields.flag("hardcoded"),
            retail: fields.flag("retail"),
            remastered: fields.flag("remastered"),
            complete: fields.flag("complete"),
            season: fields.int("season"),
            seasons: seq("seasons"),
            episode: fields.int("episode"),
            episodes: seq("episodes"),
            volume: fields.int("volume"),
            volumes: seq("volumes"),
        }
    }

    /// Every season this release covers.
    pub fn all_seasons(&self) -> Vec<u32> {
        self.season.into_iter().chain(self.seasons.iter().copied()).collect()
    }

    /// Every episode this release covers.
    pub fn all_episodes(&self) -> Vec<u32> {
        self.episode.into_iter().chain(self.episodes.iter().copied()).collect()
    }

    /// True when any season or episode number was found.
    pub fn is_episode(&self) -> bool {
        self.season.is_some()
            || !self.seasons.is_empty()
            || self.episode.is_some()
            || !self.episodes.is_empty()
    }
}

fn year(fields: &Fields) -> Option<Year> {
    if let Some(year) = fields.int("year") {
        return u16::try_from(year).ok().map(Year::Single);
    }
    fields.text("year").and_then(|span| span.parse().ok())
}
