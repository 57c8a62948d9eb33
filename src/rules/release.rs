//! Release-level rules: dates, years, edition flags, container, group,
//! completeness and language.

use scenetag_engine::{RegistryBuilder, RuleOptions, Transform};

/// Air dates, year-first then day-first.
pub(crate) fn dates(builder: RegistryBuilder) -> RegistryBuilder {
    builder
        .pattern(
            "date",
            r"(?:\W|^)[(\[]?((?:19[6-9]|20[012])\d[. \-/\\](?:0[1-9]|1[012])[. \-/\\](?:0[1-9]|[12]\d|3[01]))[)\]]?(?:\W|$)",
            Transform::Date,
        )
        .pattern(
            "date",
            r"(?:\W|^)[(\[]?((?:0[1-9]|[12]\d|3[01])[. \-/\\](?:0[1-9]|1[012])[. \-/\\](?:19[6-9]|20[012])\d)[)\]]?(?:\W|$)",
            Transform::Date,
        )
}

/// Year spans first so `2001-2011` is not split into two single years. A
/// year at the very start is the title (`2012 2009 1080p`), never metadata.
pub(crate) fn years(builder: RegistryBuilder) -> RegistryBuilder {
    let not_at_start = RuleOptions::new().not_at_start(true);
    builder
        .pattern_with(
            "year",
            r"[(\[]?((?:19\d|20[012])\d\s?[-–/\\]\s?(?:(?:19\d|20[012])\d|\d{2}))[)\]]?",
            Transform::YearRange,
            not_at_start,
        )
        .pattern_with(
            "year",
            r"[(\[]?((?:19\d|20[012])\d)[)\]]?",
            Transform::Integer,
            not_at_start,
        )
}

/// Edition and revision flags, region code and container.
pub(crate) fn flags(builder: RegistryBuilder) -> RegistryBuilder {
    builder
        .pattern("extended", r"\bEXTENDED\b", Transform::Boolean)
        .pattern("convert", r"\bCONVERT\b", Transform::Boolean)
        .pattern("hardcoded", r"\bHC\b|\bHARDCODED\b", Transform::Boolean)
        .pattern("proper", r"(?:REAL.)?PROPER", Transform::Boolean)
        .pattern("repack", r"REPACK|RERIP", Transform::Boolean)
        .pattern("retail", r"(?i)\bRetail\b", Transform::Boolean)
        .pattern("remastered", r"(?i)\bRemaster(?:ed)?\b", Transform::Boolean)
        .pattern("unrated", r"(?i)\bunrated|uncensored\b", Transform::Boolean)
        .pattern("region", r"\bR[0-9]\b", Transform::Identity)
        .pattern(
            "container",
            r"(?i)\b(MKV|AVI|MP4|WMV|MPG|MPEG)\b",
            Transform::Lowercase,
        )
}

/// Release group: the last dash-separated token. A token made only of
/// digits and `s`/`e`/`x` markers (`-291`, `-E03`, `-S01E04`) is numbering,
/// not a group.
pub(crate) fn group(builder: RegistryBuilder) -> RegistryBuilder {
    builder.pattern(
        "group",
        r"- ?([^\-. ]*[^\-. \dsSeExX][^\-. ]*)[. ]*$",
        Transform::Identity,
    )
}

pub(crate) fn complete(builder: RegistryBuilder) -> RegistryBuilder {
    builder
        .pattern(
            "complete",
            r"(?i)\b(?:complete|collection|dvd)?\b[ .]?\bbox[ .-]?set\b",
            Transform::Boolean,
        )
        .pattern(
            "complete",
            r"(?i)\b(?:complete|collection|dvd)?\b[ .]?\bmini[ .-]?series\b",
            Transform::Boolean,
        )
        .pattern(
            "complete",
            r"(?i)\b(?:complete|full|all)\b.*\b(?:series|seasons|collection)\b",
            Transform::Boolean,
        )
        .pattern(
            "complete",
            r"(?i)\bseries\b[ .]\b(?:complete|collection)\b",
            Transform::Boolean,
        )
        .pattern(
            "complete",
            r"(?i)\bseasons\b[ .]\b(?:complete|collection)\b",
            Transform::Boolean,
        )
}

pub(crate) fn language(builder: RegistryBuilder) -> RegistryBuilder {
    builder
        .pattern("language", r"(?i)\bRUS\b", Transform::Lowercase)
        .pattern("language", r"\bNL\b", Transform::Lowercase)
        .pattern("language", r"\bFLEMISH\b", Transform::Lowercase)
        .pattern("language", r"\bGERMAN\b", Transform::Lowercase)
        .pattern("language", r"\bDUBBED\b", Transform::Lowercase)
        .pattern("language", r"\b(ITA(?:LIAN)?|iTALiAN)\b", Transform::value("ita"))
        .pattern("language", r"\bFR(?:ENCH)?\b", Transform::Lowercase)
        .pattern("language", r"(?i)\bTruefrench|VF(?:[FI])\b", Transform::Lowercase)
        .pattern(
            "language",
            r"(?i)\bVOST(?:(?:F(?:R)?)|A)?|SUBFRENCH\b",
            Transform::Lowercase,
        )
        .pattern("language", r"(?i)\bMULTi(?:Lang|-VF2)?\b", Transform::Lowercase)
}
