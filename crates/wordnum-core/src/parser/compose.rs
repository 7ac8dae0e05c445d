//! Numeric composition of validated values
//!
//! Values are consumed measure by measure, largest first. Whatever precedes a
//! measure is its multiplier; what is left after the last measure is added as is.

use crate::error::ParseError;
use crate::lexicon::{same_class, Lexicon};

fn add(a: u64, b: u64) -> Result<u64, ParseError> {
    a.checked_add(b).ok_or(ParseError::Overflow)
}

fn mul(a: u64, b: u64) -> Result<u64, ParseError> {
    a.checked_mul(b).ok_or(ParseError::Overflow)
}

/// Compose the integer part of a phrase
///
/// In `separate` mode the values left after the measure pass are split into
/// chunks and the chunk values are concatenated instead of summed, so
/// "ninety eight thirty one" reads as 9831.
pub fn evaluate(lexicon: &Lexicon, values: &[u64], separate: bool) -> Result<u64, ParseError> {
    let hundred = lexicon.rules().hundred;
    let mut total = 0u64;
    let mut rest = values;

    for &measure in lexicon.measures() {
        if let Some(idx) = rest.iter().position(|v| *v == measure) {
            let multiplier = if idx == 0 {
                1
            } else {
                parse_number_list(&rest[..idx], hundred)?
            };
            total = add(total, mul(multiplier, measure)?)?;
            rest = &rest[idx + 1..];
        }
    }

    if !rest.is_empty() {
        let tail = if separate {
            concat_chunks(rest, hundred)?
        } else {
            parse_number_list(rest, hundred)?
        };
        total = add(total, tail)?;
    }

    Ok(total)
}

/// Collapse a short run of values below the smallest measure
///
/// Handles the different ways languages build hundreds: "one hundred" collapses
/// when the hundred sits right after its multiplier, and longer runs multiply
/// their leading pair before everything is summed.
pub fn parse_number_list(values: &[u64], hundred: u64) -> Result<u64, ParseError> {
    let mut digits = values.to_vec();

    if digits.iter().position(|v| *v == hundred) == Some(1) {
        digits[0] = mul(digits[0], digits[1])?;
        digits.remove(1);
    }

    if digits.len() > 3 {
        if digits[0] < hundred {
            digits[0] = mul(digits[0], digits[1])?;
            digits.remove(1);
        } else {
            digits[1] = mul(digits[1], digits[2])?;
            digits.remove(2);
        }
    }

    digits.into_iter().try_fold(0u64, add)
}

/// Split where the descending order breaks or two neighbours share a class
pub fn split_by_terminate_number(values: &[u64]) -> Vec<&[u64]> {
    let mut chunks = Vec::new();
    let mut start = 0;

    for idx in 1..values.len() {
        let (prev, curr) = (values[idx - 1], values[idx]);
        if curr > prev || same_class(curr, prev) {
            chunks.push(&values[start..idx]);
            start = idx;
        }
    }
    if start < values.len() {
        chunks.push(&values[start..]);
    }
    chunks
}

fn concat_chunks(values: &[u64], hundred: u64) -> Result<u64, ParseError> {
    let mut digits = String::new();
    for chunk in split_by_terminate_number(values) {
        digits.push_str(&parse_number_list(chunk, hundred)?.to_string());
    }
    digits.parse().map_err(|_| ParseError::Overflow)
}

/// Render the values after the decimal point as literal digits
///
/// Only digit words are allowed after the point; anything else turns the whole
/// fraction into "0".
pub fn decimal_digits(lexicon: &Lexicon, values: &[u64]) -> String {
    if values.iter().all(|v| lexicon.is_digit(*v)) {
        values.iter().map(u64::to_string).collect()
    } else {
        "0".to_string()
    }
}
