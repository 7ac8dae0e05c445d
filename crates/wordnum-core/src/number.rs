//! Parse results and accepted inputs

use crate::error::ParseError;
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// Value of a parsed phrase
///
/// Decimals are built from their literal digit string, so "two point three six"
/// is exactly `2.36` and keeps its scale when printed.
#[derive(Debug, Clone, Copy)]
pub enum Number {
    Integer(u64),
    Decimal(Decimal),
}

impl Number {
    /// Parse a literal like `"112"` or `"2023049.2369"` without losing digits
    pub fn from_literal(literal: &str) -> Result<Self, ParseError> {
        if !literal.contains('.') {
            if let Ok(value) = literal.parse::<u64>() {
                return Ok(Self::Integer(value));
            }
        }
        Decimal::from_str_exact(literal)
            .map(Self::Decimal)
            .map_err(|_| ParseError::Overflow)
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::Integer(value) => Some(*value),
            Self::Decimal(_) => None,
        }
    }

    pub fn to_decimal(&self) -> Decimal {
        match self {
            Self::Integer(value) => Decimal::from(*value),
            Self::Decimal(value) => *value,
        }
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, Self::Integer(_))
    }
}

/// Numeric equality, so `Integer(0)` equals `Decimal(0.0)`
impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a == b,
            _ => self.to_decimal() == other.to_decimal(),
        }
    }
}

impl Eq for Number {}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{}", value),
            Self::Decimal(value) => write!(f, "{}", value),
        }
    }
}

impl From<u64> for Number {
    fn from(value: u64) -> Self {
        Self::Integer(value)
    }
}

/// Anything `word_to_num` accepts
#[derive(Debug, Clone, PartialEq)]
pub enum NumberInput {
    Text(String),
    Integer(u64),
    Decimal(Decimal),
    /// No input at all (a null value)
    Missing,
}

impl From<&str> for NumberInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for NumberInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for NumberInput {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<Option<&str>> for NumberInput {
    fn from(value: Option<&str>) -> Self {
        value.map_or(Self::Missing, Self::from)
    }
}

impl From<u64> for NumberInput {
    fn from(value: u64) -> Self {
        Self::Integer(value)
    }
}

impl From<u32> for NumberInput {
    fn from(value: u32) -> Self {
        Self::Integer(u64::from(value))
    }
}

impl From<Decimal> for NumberInput {
    fn from(value: Decimal) -> Self {
        Self::Decimal(value)
    }
}

impl From<Number> for NumberInput {
    fn from(value: Number) -> Self {
        match value {
            Number::Integer(v) => Self::Integer(v),
            Number::Decimal(v) => Self::Decimal(v),
        }
    }
}

impl TryFrom<serde_json::Value> for NumberInput {
    type Error = ParseError;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        use serde_json::Value;

        match value {
            Value::Null => Ok(Self::Missing),
            Value::String(text) => Ok(Self::Text(text)),
            Value::Number(n) => match n.as_u64() {
                Some(v) => Ok(Self::Integer(v)),
                None => Decimal::from_str(&n.to_string())
                    .map(Self::Decimal)
                    .map_err(|_| ParseError::Overflow),
            },
            Value::Bool(_) => Err(ParseError::InvalidInputType {
                found: "boolean".to_string(),
            }),
            Value::Array(_) => Err(ParseError::InvalidInputType {
                found: "array".to_string(),
            }),
            Value::Object(_) => Err(ParseError::InvalidInputType {
                found: "object".to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_literal() {
        assert_eq!(Number::from_literal("112").unwrap(), Number::Integer(112));
        let value = Number::from_literal("2023049.2369").unwrap();
        assert_eq!(value.to_string(), "2023049.2369");
        assert!(!value.is_integer());
    }

    #[test]
    fn test_from_literal_beyond_u64() {
        let value = Number::from_literal("123456789012345678901234").unwrap();
        assert_eq!(value.to_string(), "123456789012345678901234");
        assert!(matches!(
            Number::from_literal("1234567890123456789012345678901234567890"),
            Err(ParseError::Overflow)
        ));
    }

    #[test]
    fn test_numeric_equality() {
        let zero = Number::from_literal("0.0").unwrap();
        assert_eq!(zero, Number::Integer(0));
        assert_eq!(zero.to_string(), "0.0");
        assert_ne!(Number::from_literal("2.3").unwrap(), Number::Integer(2));
    }

    #[test]
    fn test_json_inputs() {
        assert_eq!(
            NumberInput::try_from(json!("nineteen")).unwrap(),
            NumberInput::Text("nineteen".to_string())
        );
        assert_eq!(NumberInput::try_from(json!(112)).unwrap(), NumberInput::Integer(112));
        assert_eq!(
            NumberInput::try_from(json!(2.5)).unwrap(),
            NumberInput::Decimal(Decimal::from_str("2.5").unwrap())
        );
        assert_eq!(NumberInput::try_from(json!(null)).unwrap(), NumberInput::Missing);
        assert!(matches!(
            NumberInput::try_from(json!(true)),
            Err(ParseError::InvalidInputType { .. })
        ));
        assert!(matches!(
            NumberInput::try_from(json!(["one"])),
            Err(ParseError::InvalidInputType { .. })
        ));
    }

    #[test]
    fn test_optional_text() {
        assert_eq!(NumberInput::from(None::<&str>), NumberInput::Missing);
        assert_eq!(NumberInput::from(Some("five")), NumberInput::Text("five".to_string()));
    }
}
