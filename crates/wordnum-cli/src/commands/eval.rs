//! Evaluation command - run a JSON file of expected conversions
//!
//! The file holds an array of cases:
//!
//! ```json
//! [
//!   { "input": "nineteen", "expected": 19 },
//!   { "input": "zero nine one two", "expected": "0912", "mode": "text", "keep_leading_zero": true },
//!   { "input": "thousand million", "mode": "error" }
//! ]
//! ```

use anyhow::{Context, Result};
use console::{style, Term};
use serde::Deserialize;
use serde_json::Value;
use wordnum_core::{Config, Number, NumberInput, NumberParser};

/// How a case is evaluated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// `word_to_num`, compared numerically
    #[default]
    Word,
    /// `text_to_num`, compared as text
    Text,
    /// `word_to_num` must fail
    Error,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Case {
    pub input: Value,
    #[serde(default)]
    pub expected: Option<Value>,
    #[serde(default)]
    pub mode: Mode,
    #[serde(default)]
    pub keep_leading_zero: bool,
}

/// Outcome of one case, `Err` carries what was produced instead
type Outcome = std::result::Result<(), String>;

pub fn run(config: &Config, lang: Option<&str>, path: &str) -> Result<()> {
    let term = Term::stdout();

    let contents =
        std::fs::read_to_string(path).with_context(|| format!("Failed to read cases from {}", path))?;
    let cases: Vec<Case> =
        serde_json::from_str(&contents).with_context(|| format!("Failed to parse cases from {}", path))?;

    let parser = config.parser(lang)?;
    term.write_line(&format!(
        "{} Running {} cases ({})",
        style("⚙").cyan(),
        cases.len(),
        parser.lexicon().language()
    ))?;
    term.write_line("")?;

    let mut failed = 0;
    for (idx, case) in cases.iter().enumerate() {
        if let Err(actual) = check(&parser, case) {
            failed += 1;
            term.write_line(&format!(
                "{} #{} {}",
                style("✗").red(),
                idx + 1,
                case.input
            ))?;
            term.write_line(&format!(
                "    expected: {}",
                describe_expected(case)
            ))?;
            term.write_line(&format!("    actual:   {}", style(actual).yellow()))?;
        }
    }

    let passed = cases.len() - failed;
    term.write_line("")?;
    term.write_line(&format!(
        "{} {} passed, {} failed",
        style("Summary:").bold(),
        style(passed).green(),
        if failed > 0 {
            style(failed).red()
        } else {
            style(failed).dim()
        }
    ))?;

    if failed > 0 {
        anyhow::bail!("{} of {} cases failed", failed, cases.len());
    }
    Ok(())
}

fn describe_expected(case: &Case) -> String {
    match (case.mode, &case.expected) {
        (Mode::Error, _) => "an error".to_string(),
        (_, Some(Value::String(s))) => s.clone(),
        (_, Some(value)) => value.to_string(),
        (_, None) => "(missing)".to_string(),
    }
}

pub fn check(parser: &NumberParser, case: &Case) -> Outcome {
    match case.mode {
        Mode::Text => {
            let Value::String(text) = &case.input else {
                return Err(format!("text input must be a string, got {}", case.input));
            };
            let actual = parser.text_to_num(text, !case.keep_leading_zero);
            match &case.expected {
                Some(Value::String(expected)) if *expected == actual => Ok(()),
                _ => Err(actual),
            }
        }
        Mode::Word => {
            let actual = NumberInput::try_from(case.input.clone())
                .and_then(|input| parser.word_to_num(input))
                .map_err(|e| e.to_string())?;
            let expected = case
                .expected
                .as_ref()
                .and_then(expected_number)
                .ok_or_else(|| format!("{} (no usable expected value)", actual))?;
            if actual == expected {
                Ok(())
            } else {
                Err(actual.to_string())
            }
        }
        Mode::Error => match NumberInput::try_from(case.input.clone())
            .and_then(|input| parser.word_to_num(input))
        {
            Ok(number) => Err(number.to_string()),
            Err(_) => Ok(()),
        },
    }
}

fn expected_number(value: &Value) -> Option<Number> {
    match value {
        Value::String(s) => Number::from_literal(s.trim()).ok(),
        Value::Number(n) => Number::from_literal(&n.to_string()).ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn cases(value: Value) -> Vec<Case> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_case_defaults() {
        let parsed = cases(json!([{ "input": "nineteen", "expected": 19 }]));
        assert_eq!(parsed[0].mode, Mode::Word);
        assert!(!parsed[0].keep_leading_zero);
    }

    #[test]
    fn test_check_modes() {
        let parser = NumberParser::for_language("en").unwrap();
        let parsed = cases(json!([
            { "input": "nineteen", "expected": 19 },
            { "input": "two point five", "expected": "2.5" },
            { "input": "two point five", "expected": 2.5 },
            { "input": 112, "expected": "112" },
            { "input": "zero nine", "expected": "09", "mode": "text", "keep_leading_zero": true },
            { "input": "thousand million", "mode": "error" },
        ]));
        for case in &parsed {
            assert_eq!(check(&parser, case), Ok(()), "{:?}", case);
        }
    }

    #[test]
    fn test_check_reports_actual() {
        let parser = NumberParser::for_language("en").unwrap();
        let parsed = cases(json!([
            { "input": "nineteen", "expected": 20 },
            { "input": "nineteen", "mode": "error" },
            { "input": true, "expected": 1 },
        ]));
        assert_eq!(check(&parser, &parsed[0]), Err("19".to_string()));
        assert_eq!(check(&parser, &parsed[1]), Err("19".to_string()));
        assert!(check(&parser, &parsed[2]).is_err());
    }
}
