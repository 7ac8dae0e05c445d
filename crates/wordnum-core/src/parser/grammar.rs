//! Measure-word grammar checks
//!
//! Runs on the token list before any arithmetic. Conjunction tokens carry no
//! value and are ignored here.

use super::normalize::Token;
use crate::error::ParseError;
use crate::lexicon::Lexicon;

/// A validated phrase split at the decimal point
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phrase {
    pub integer: Vec<u64>,
    /// Values after the point, `None` when the phrase has no point
    pub decimal: Option<Vec<u64>>,
}

pub fn validate(lexicon: &Lexicon, tokens: &[Token]) -> Result<Phrase, ParseError> {
    let tokens: Vec<Token> = tokens
        .iter()
        .copied()
        .filter(|t| *t != Token::Conjunction)
        .collect();

    if tokens.is_empty() {
        return Err(ParseError::EmptyOrUnrecognized);
    }

    let points = tokens.iter().filter(|t| **t == Token::Point).count();
    if points > 1 {
        return Err(ParseError::RedundantDecimalPoint {
            word: lexicon.point().to_string(),
        });
    }

    let (integer_tokens, decimal_tokens) = match tokens.iter().position(|t| *t == Token::Point) {
        Some(idx) => (&tokens[..idx], Some(&tokens[idx + 1..])),
        None => (&tokens[..], None),
    };

    let integer = values(integer_tokens);
    let decimal = decimal_tokens.map(values);

    check_measures(lexicon, &integer)?;

    if let Some(decimal) = &decimal {
        if let Some(&measure) = decimal.iter().find(|v| lexicon.is_measure(**v)) {
            return Err(ParseError::MeasureWordAfterDecimal {
                word: word_for(lexicon, measure),
            });
        }
    }

    Ok(Phrase { integer, decimal })
}

fn values(tokens: &[Token]) -> Vec<u64> {
    tokens
        .iter()
        .filter_map(|t| match t {
            Token::Number(v) => Some(*v),
            _ => None,
        })
        .collect()
}

/// Measures at or above the language's floor must be unique and appear largest first
fn check_measures(lexicon: &Lexicon, integer: &[u64]) -> Result<(), ParseError> {
    let floor = lexicon.rules().unique_measure_floor;
    let mut positions = Vec::new();

    for &measure in lexicon.measures().iter().filter(|m| **m >= floor) {
        let count = integer.iter().filter(|v| **v == measure).count();
        if count > 1 {
            return Err(ParseError::RedundantMeasureWord {
                word: word_for(lexicon, measure),
            });
        }
        if let Some(idx) = integer.iter().position(|v| *v == measure) {
            positions.push(idx);
        }
    }

    if positions.windows(2).any(|pair| pair[0] > pair[1]) {
        return Err(ParseError::MeasureWordOutOfOrder);
    }
    Ok(())
}

fn word_for(lexicon: &Lexicon, value: u64) -> String {
    lexicon
        .name_of(value)
        .map(str::to_string)
        .unwrap_or_else(|| value.to_string())
}
