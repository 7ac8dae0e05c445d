//! Line-oriented `key=value` lexicon format
//!
//! ```text
//! # comment
//! twenty=20
//! point=point
//! conjunction=and
//! measure:thousand=1000
//! replace:fourty=forty
//! rule:conjunction_required=false
//! ```

use super::{Lexicon, LexiconError, LexiconRules};
use std::collections::HashMap;

const REPLACE_PREFIX: &str = "replace:";
const MEASURE_PREFIX: &str = "measure:";
const RULE_PREFIX: &str = "rule:";

impl Lexicon {
    /// Parse a lexicon from properties text
    pub fn parse(language: &str, source: &str) -> Result<Self, LexiconError> {
        let mut words: HashMap<String, u64> = HashMap::new();
        let mut names: HashMap<u64, String> = HashMap::new();
        let mut replacements = Vec::new();
        let mut measures = Vec::new();
        let mut point = None;
        let mut conjunction = None;
        let mut rules = LexiconRules::default();

        for (idx, raw) in source.lines().enumerate() {
            let line_no = idx + 1;
            let line = raw.trim_start_matches('\u{feff}').trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (key, value) = line.split_once('=').ok_or_else(|| LexiconError::MalformedLine {
                line: line_no,
                content: line.to_string(),
            })?;
            let key = key.trim();
            let value = value.trim();

            if let Some(from) = key.strip_prefix(REPLACE_PREFIX) {
                replacements.push((from.to_lowercase(), value.to_lowercase()));
            } else if let Some(name) = key.strip_prefix(MEASURE_PREFIX) {
                let measure = parse_value(line_no, key, value)?;
                measures.push(measure);
                let name = name.to_lowercase();
                names.entry(measure).or_insert_with(|| name.clone());
                words.entry(name).or_insert(measure);
            } else if let Some(rule) = key.strip_prefix(RULE_PREFIX) {
                apply_rule(&mut rules, line_no, rule, value)?;
            } else if key == "point" {
                point = Some(value.to_lowercase());
            } else if key == "conjunction" {
                conjunction = Some(value.to_lowercase());
            } else {
                let number = parse_value(line_no, key, value)?;
                let word = key.to_lowercase();
                names.entry(number).or_insert_with(|| word.clone());
                words.insert(word, number);
            }
        }

        let point = point.ok_or_else(|| LexiconError::MissingPoint {
            language: language.to_string(),
        })?;

        measures.sort_unstable_by(|a, b| b.cmp(a));
        measures.dedup();

        Ok(Self {
            language: language.to_string(),
            words,
            names,
            replacements,
            measures,
            point,
            conjunction,
            rules,
        })
    }
}

fn parse_value(line: usize, key: &str, value: &str) -> Result<u64, LexiconError> {
    value.parse().map_err(|_| LexiconError::InvalidValue {
        line,
        key: key.to_string(),
        value: value.to_string(),
    })
}

fn apply_rule(
    rules: &mut LexiconRules,
    line: usize,
    name: &str,
    value: &str,
) -> Result<(), LexiconError> {
    let key = format!("{}{}", RULE_PREFIX, name);
    match name {
        "unique_measure_floor" => rules.unique_measure_floor = parse_value(line, &key, value)?,
        "hundred" => rules.hundred = parse_value(line, &key, value)?,
        "conjunction_required" => {
            rules.conjunction_required = match value {
                "true" | "yes" | "1" => true,
                "false" | "no" | "0" => false,
                _ => {
                    return Err(LexiconError::InvalidValue {
                        line,
                        key,
                        value: value.to_string(),
                    })
                }
            }
        }
        _ => {
            return Err(LexiconError::UnknownRule {
                line,
                name: name.to_string(),
            })
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal() {
        let lexicon = Lexicon::parse(
            "xx",
            "# numbers\n\none=1\nTwo=2\npoint=Dot\nmeasure:hundred=100\nmeasure:thousand=1000\n",
        )
        .unwrap();

        assert_eq!(lexicon.value_of("two"), Some(2));
        assert_eq!(lexicon.value_of("thousand"), Some(1000));
        assert_eq!(lexicon.point(), "dot");
        assert_eq!(lexicon.conjunction(), None);
        assert_eq!(lexicon.measures(), &[1000, 100]);
        assert_eq!(lexicon.rules(), &LexiconRules::default());
    }

    #[test]
    fn test_parse_rules_and_replacements() {
        let lexicon = Lexicon::parse(
            "xx",
            "one=1\npoint=p\nreplace:won=one\nrule:unique_measure_floor=100\nrule:conjunction_required=yes\n",
        )
        .unwrap();

        assert_eq!(lexicon.value_of("won"), Some(1));
        assert_eq!(lexicon.rules().unique_measure_floor, 100);
        assert!(lexicon.rules().conjunction_required);
    }

    #[test]
    fn test_parse_missing_separator() {
        let err = Lexicon::parse("xx", "one=1\nbogus line\n").unwrap_err();
        assert!(matches!(err, LexiconError::MalformedLine { line: 2, .. }));
    }

    #[test]
    fn test_parse_invalid_value() {
        let err = Lexicon::parse("xx", "one=uno\n").unwrap_err();
        assert!(matches!(err, LexiconError::InvalidValue { line: 1, .. }));
    }

    #[test]
    fn test_parse_unknown_rule() {
        let err = Lexicon::parse("xx", "point=p\nrule:shout=1\n").unwrap_err();
        assert!(matches!(err, LexiconError::UnknownRule { .. }));
    }

    #[test]
    fn test_parse_missing_point() {
        let err = Lexicon::parse("xx", "one=1\n").unwrap_err();
        assert!(matches!(err, LexiconError::MissingPoint { .. }));
    }
}
