//! The default movie/TV rule table.
//!
//! Order is significant across fields: every rule consumes the text it
//! matches, so a token claimed by an earlier field is invisible to later
//! ones. Dates and years come first, the technical tail (resolution, source,
//! codec, audio) next, and the loosest numbering rules last.

mod codec;
mod episode;
mod quality;
mod release;

pub use episode::infer_absolute_episode;

use phf::phf_map;
use scenetag_engine::{Registry, Result};

use crate::config::ParserConfig;

/// Multi-valued field families: singular key to plural key.
pub static PLURAL_FIELDS: phf::Map<&'static str, &'static str> = phf_map! {
    "season" => "seasons",
    "episode" => "episodes",
    "volume" => "volumes",
};

/// Build the default registry with the given configuration.
pub fn default_registry(config: &ParserConfig) -> Result<Registry> {
    let mut builder = Registry::builder()
        .max_input_len(config.max_input_len)
        .conflict_policy(config.conflict_policy);

    for (singular, plural) in PLURAL_FIELDS.entries() {
        builder = builder.plural(*singular, *plural);
    }

    let builder = release::dates(builder);
    let builder = release::years(builder);
    let builder = quality::resolution(builder);
    let builder = release::flags(builder);
    let builder = quality::source(builder);
    let builder = codec::video(builder);
    let builder = codec::audio(builder);
    let builder = release::group(builder);
    let builder = episode::volumes(builder);
    let builder = episode::seasons(builder);
    let builder = episode::episodes(builder);
    let builder = release::complete(builder);
    let builder = release::language(builder);

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use scenetag_engine::Rule;

    #[test]
    fn test_default_table_compiles() {
        let registry = default_registry(&ParserConfig::default()).unwrap();
        assert!(registry.len() > 60);
        assert_eq!(registry.plurals().len(), PLURAL_FIELDS.len());
    }

    #[test]
    fn test_default_table_order() {
        let registry = default_registry(&ParserConfig::default()).unwrap();
        let mut order: Vec<&str> = Vec::new();
        for rule in registry.rules() {
            if order.last() != Some(&rule.field()) {
                order.push(rule.field());
            }
        }

        let position = |field: &str| order.iter().position(|f| *f == field).unwrap();
        assert_eq!(order[0], "date");
        assert!(position("year") < position("resolution"));
        assert!(position("resolution") < position("source"));
        assert!(position("codec") < position("audio"));
        assert!(position("group") < position("season"));
        assert!(position("season") < position("episode"));
        assert_eq!(*order.last().unwrap(), "language");
    }

    #[test]
    fn test_default_table_has_handlers() {
        let registry = default_registry(&ParserConfig::default()).unwrap();
        let handlers: Vec<&str> = registry
            .rules()
            .iter()
            .filter(|rule| matches!(rule, Rule::Custom(_)))
            .map(Rule::field)
            .collect();
        assert_eq!(handlers, vec!["codec", "episode"]);
    }

    #[test]
    fn test_config_is_applied() {
        let config = ParserConfig::builder().max_input_len(10).build();
        let registry = default_registry(&config).unwrap();
        assert_eq!(registry.max_input_len(), 10);
    }
}
