//! wordnum core - spelled-out numbers to digits
//!
//! This library provides:
//! - Per-language lexicons (built-in English and Persian, or custom files)
//! - A phrase parser: "two million twenty three thousand and forty nine" to 2023049
//! - A free-text converter that rewrites every number phrase inside prose
//! - Configuration and language detection for applications

pub mod config;
pub mod error;
pub mod lexicon;
pub mod number;
pub mod parser;

mod segment;

pub use config::{env_vars, Config};
pub use error::ParseError;
pub use lexicon::{Lexicon, LexiconError, LanguageRegistry};
pub use number::{Number, NumberInput};
pub use parser::{NumberParser, ParseOptions};

/// Evaluate a number phrase in `language`, or the configured language when `None`
pub fn word_to_num(input: impl Into<NumberInput>, language: Option<&str>) -> anyhow::Result<Number> {
    word_to_num_with_config(input, language, None)
}

/// Replace number phrases in `text`, honoring the configured leading-zero setting
pub fn text_to_num(text: &str, language: Option<&str>) -> anyhow::Result<String> {
    text_to_num_with_config(text, language, None)
}

/// [`word_to_num`] reading the config from `config_path` instead of the default location
pub fn word_to_num_with_config(
    input: impl Into<NumberInput>,
    language: Option<&str>,
    config_path: Option<&str>,
) -> anyhow::Result<Number> {
    let config = Config::load(config_path)?;
    let parser = config.parser(language)?;
    Ok(parser.word_to_num(input)?)
}

/// [`text_to_num`] reading the config from `config_path` instead of the default location
pub fn text_to_num_with_config(
    text: &str,
    language: Option<&str>,
    config_path: Option<&str>,
) -> anyhow::Result<String> {
    let config = Config::load(config_path)?;
    let parser = config.parser(language)?;
    Ok(parser.text_to_num(text, config.ignore_leading_zero))
}
