//! Number phrase parser
//!
//! A phrase goes through four stages:
//! 1. normalize: lowercase and apply the lexicon's rewrites
//! 2. tokenize: keep number words, the point keyword and the conjunction
//! 3. validate: measure-word grammar, split at the decimal point
//! 4. compose: checked arithmetic into the exact literal, then a [`Number`]

mod compose;
mod grammar;
mod normalize;

pub use normalize::Token;

pub(crate) use normalize::{classify, normalize_phrase, word_spans};

use crate::error::ParseError;
use crate::lexicon::{Lexicon, LexiconError};
use crate::number::{Number, NumberInput};
use std::sync::Arc;

/// Evaluation switches for [`NumberParser::word_to_num_with`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Concatenate independent chunks instead of summing them
    /// ("ninety eight thirty one" becomes 9831)
    pub separate: bool,
}

/// Converts number phrases of one language
///
/// Cloning is cheap, the lexicon is shared.
#[derive(Debug, Clone)]
pub struct NumberParser {
    lexicon: Arc<Lexicon>,
}

impl NumberParser {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    /// Parser over a built-in lexicon
    pub fn for_language(language: &str) -> Result<Self, LexiconError> {
        Ok(Self::new(Arc::new(Lexicon::builtin(language)?)))
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Evaluate a phrase such as "two million twenty three thousand and forty nine"
    pub fn word_to_num(&self, input: impl Into<NumberInput>) -> Result<Number, ParseError> {
        self.word_to_num_with(input, ParseOptions::default())
    }

    pub fn word_to_num_with(
        &self,
        input: impl Into<NumberInput>,
        options: ParseOptions,
    ) -> Result<Number, ParseError> {
        match input.into() {
            NumberInput::Integer(value) => Ok(Number::Integer(value)),
            NumberInput::Decimal(value) => Ok(Number::Decimal(value)),
            NumberInput::Missing => Err(ParseError::EmptyOrUnrecognized),
            NumberInput::Text(text) => Number::from_literal(&self.phrase_literal(&text, options)?),
        }
    }

    /// Same as [`word_to_num_with`](Self::word_to_num_with), rendered as text
    ///
    /// Decimals keep every fractional digit as spoken, so "two point three zero"
    /// renders as `2.30`, and fractions of any length come back intact.
    pub fn word_to_num_string(
        &self,
        input: impl Into<NumberInput>,
        options: ParseOptions,
    ) -> Result<String, ParseError> {
        match input.into() {
            NumberInput::Integer(value) => Ok(value.to_string()),
            NumberInput::Decimal(value) => Ok(value.to_string()),
            NumberInput::Missing => Err(ParseError::EmptyOrUnrecognized),
            NumberInput::Text(text) => self.phrase_literal(&text, options),
        }
    }

    /// Exact `<int>` or `<int>.<digits>` text of a phrase
    fn phrase_literal(&self, text: &str, options: ParseOptions) -> Result<String, ParseError> {
        let phrase = normalize_phrase(&self.lexicon, text);
        if normalize::is_literal(&phrase) {
            return Ok(phrase);
        }

        let tokens = normalize::tokenize(&self.lexicon, &phrase);
        self.evaluate_tokens(&tokens, options.separate)
    }

    pub(crate) fn evaluate_tokens(&self, tokens: &[Token], separate: bool) -> Result<String, ParseError> {
        let phrase = grammar::validate(&self.lexicon, tokens)?;
        let integer = compose::evaluate(&self.lexicon, &phrase.integer, separate)?;

        match phrase.decimal {
            Some(decimal) if !decimal.is_empty() => {
                let digits = compose::decimal_digits(&self.lexicon, &decimal);
                Ok(format!("{}.{}", integer, digits))
            }
            _ => Ok(integer.to_string()),
        }
    }
}
