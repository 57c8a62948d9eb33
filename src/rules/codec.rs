//! Video codec and audio rules.

use scenetag_engine::{Fields, HandlerContext, RegistryBuilder, Transform, Value};

pub(crate) fn video(builder: RegistryBuilder) -> RegistryBuilder {
    builder
        .pattern(
            "codec",
            r"(?i)dvix|mpeg2|divx|xvid|[xh][-. ]?26[45]|avc|hevc",
            Transform::Lowercase,
        )
        .handler("codec", tidy_codec)
}

/// `H 264` and `x.265` become `h264` and `x265`.
fn tidy_codec(_: &HandlerContext<'_>, mut fields: Fields) -> Fields {
    if let Some(Value::Text(codec)) = fields.get_mut("codec") {
        if let Some(at) = codec.find([' ', '.', '-']) {
            codec.remove(at);
        }
    }
    fields
}

pub(crate) fn audio(builder: RegistryBuilder) -> RegistryBuilder {
    builder
        .pattern(
            "audio",
            r"\b(?:MD|MP3|mp3|FLAC|Atmos|DTS(?:-HD)?|TrueHD)\b",
            Transform::Lowercase,
        )
        .pattern("audio", r"(?i)Dual[- ]Audio", Transform::Lowercase)
        .pattern("audio", r"(?i)AC-?3(?:[.-]5\.1)?", Transform::value("ac3"))
        .pattern("audio", r"(?i)DD5[. ]?1", Transform::value("dd5.1"))
        .pattern("audio", r"AAC(?:[. ]?2[. ]0)?", Transform::value("aac"))
}
