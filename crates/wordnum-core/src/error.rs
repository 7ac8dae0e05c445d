//! Errors reported while turning a phrase into a number

use thiserror::Error;

/// Reasons a phrase cannot be evaluated
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Input of type {found} is neither text nor a number")]
    InvalidInputType { found: String },

    #[error("No valid number words found. Please enter a valid number phrase (e.g. two million twenty three thousand and forty nine)")]
    EmptyOrUnrecognized,

    #[error("Redundant point word {word:?}. Please enter a valid number phrase (e.g. two million twenty three thousand and forty nine)")]
    RedundantDecimalPoint { word: String },

    #[error("Redundant number word {word:?}. Please enter a valid number phrase (e.g. two million twenty three thousand and forty nine)")]
    RedundantMeasureWord { word: String },

    #[error("Measure words out of order (e.g. trillion after thousand). Please enter a valid number phrase (e.g. two million twenty three thousand and forty nine)")]
    MeasureWordOutOfOrder,

    #[error("Measure word {word:?} after the decimal point. Please enter a valid number phrase (e.g. two million twenty three thousand and forty nine)")]
    MeasureWordAfterDecimal { word: String },

    #[error("Number is too large to represent")]
    Overflow,
}
