//! Resolution and source rules.

use scenetag_engine::{RegistryBuilder, Transform};

pub(crate) fn resolution(builder: RegistryBuilder) -> RegistryBuilder {
    builder
        .pattern("resolution", r"(?i)([0-9]{3,4}[pi])", Transform::Lowercase)
        .pattern("resolution", r"(?i)(4k)", Transform::Lowercase)
}

/// Sources, most specific spelling first. Rips are canonicalized; camera and
/// telesync releases keep the label's own spelling.
pub(crate) fn source(builder: RegistryBuilder) -> RegistryBuilder {
    builder
        .pattern("source", r"\b(?:HD-?)?CAM\b", Transform::Identity)
        .pattern("source", r"(?i)\b(?:HD-?)?T(?:ELE)?S(?:YNC)?\b", Transform::Identity)
        .pattern("source", r"(?i)\bHD-?Rip\b", Transform::Identity)
        .pattern("source", r"(?i)\bBRRip\b", Transform::value("BRRip"))
        .pattern("source", r"(?i)\bBDRip\b", Transform::value("BDRip"))
        .pattern("source", r"(?i)\bDVDRip\b", Transform::value("DVDRip"))
        .pattern("source", r"(?i)\bDVD(?:R[0-9])?\b", Transform::value("DVD"))
        .pattern("source", r"(?i)\bDVD?Scr\b", Transform::value("DVDScr"))
        .pattern("source", r"(?i)\b(?:HD-?)?TVRip\b", Transform::Identity)
        .pattern("source", r"\bTC\b", Transform::value("TC"))
        .pattern("source", r"(?i)\bPPVRip\b", Transform::value("PPVRip"))
        .pattern("source", r"(?i)\bTVRips?\b", Transform::value("TVRip"))
        .pattern("source", r"(?i)\bR5\b", Transform::value("R5"))
        .pattern("source", r"(?i)\bVHSScr\b", Transform::value("VHSScr"))
        .pattern("source", r"(?i)\bBluRay\b", Transform::value("BluRay"))
        .pattern("source", r"(?i)\bWEB-?DL\b", Transform::value("WEB-DL"))
        .pattern("source", r"(?i)\bWEB-?Rip\b", Transform::value("WEBRip"))
        .pattern("source", r"(?i)\b(?:DL|WEB|BD|BR)MUX\b", Transform::Identity)
        .pattern("source", r"\b(DivX|XviD)\b", Transform::Identity)
        .pattern("source", r"(?i)\bHDTV\b", Transform::value("HDTV"))
}
