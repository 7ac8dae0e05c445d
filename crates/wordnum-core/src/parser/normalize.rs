//! Phrase normalization and tokenization

use crate::lexicon::Lexicon;
use regex::Regex;
use std::sync::OnceLock;

static WORD_REGEX: OnceLock<Regex> = OnceLock::new();

fn word_regex() -> &'static Regex {
    WORD_REGEX.get_or_init(|| Regex::new(r"\w+").expect("word pattern is valid"))
}

/// A recognized word of a phrase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Number(u64),
    Point,
    Conjunction,
}

/// Lowercase the phrase and apply the lexicon's synonym rewrites
pub fn normalize_phrase(lexicon: &Lexicon, phrase: &str) -> String {
    let mut text = phrase.to_lowercase();
    for (from, to) in lexicon.replacements() {
        if text.contains(from.as_str()) {
            text = text.replace(from.as_str(), to);
        }
    }
    text.trim().to_string()
}

/// A normalized phrase made only of ASCII digits is a literal numeral
pub fn is_literal(phrase: &str) -> bool {
    !phrase.is_empty() && phrase.bytes().all(|b| b.is_ascii_digit())
}

/// Classify a single word, `None` for words the lexicon does not know
pub fn classify(lexicon: &Lexicon, word: &str) -> Option<Token> {
    if let Some(value) = lexicon.value_of(word) {
        Some(Token::Number(value))
    } else if lexicon.is_point(word) {
        Some(Token::Point)
    } else if lexicon.is_conjunction(word) {
        Some(Token::Conjunction)
    } else {
        None
    }
}

/// Word runs of `text` with their byte ranges
pub fn word_spans<'a>(text: &'a str) -> impl Iterator<Item = (usize, usize, &'a str)> + 'a {
    word_regex()
        .find_iter(text)
        .map(|m| (m.start(), m.end(), m.as_str()))
}

/// Recognized words of a normalized phrase, unknown words dropped
pub fn tokenize(lexicon: &Lexicon, phrase: &str) -> Vec<Token> {
    word_spans(phrase)
        .filter_map(|(_, _, word)| classify(lexicon, word))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn english() -> Lexicon {
        Lexicon::builtin("en").unwrap()
    }

    #[test]
    fn test_normalize_lowercases_and_rewrites() {
        let lexicon = english();
        assert_eq!(normalize_phrase(&lexicon, "  Fourty TWO "), "forty two");
    }

    #[test]
    fn test_normalize_persian_letter_forms() {
        let lexicon = Lexicon::builtin("fa").unwrap();
        // Arabic yeh in "یک"
        assert_eq!(normalize_phrase(&lexicon, "يک"), "یک");
    }

    #[test]
    fn test_is_literal() {
        assert!(is_literal("11211234"));
        assert!(!is_literal("112-"));
        assert!(!is_literal(""));
        assert!(!is_literal("12.5"));
    }

    #[test]
    fn test_tokenize_drops_unknown_words() {
        let lexicon = english();
        let tokens = tokenize(&lexicon, "chapter one hundred and fifteen");
        assert_eq!(
            tokens,
            vec![
                Token::Number(1),
                Token::Number(100),
                Token::Conjunction,
                Token::Number(15)
            ]
        );
    }

    #[test]
    fn test_tokenize_splits_on_punctuation() {
        let lexicon = english();
        let tokens = tokenize(&lexicon, "twenty-three, point five");
        assert_eq!(
            tokens,
            vec![
                Token::Number(20),
                Token::Number(3),
                Token::Point,
                Token::Number(5)
            ]
        );
    }

    #[test]
    fn test_word_spans_positions() {
        let spans: Vec<_> = word_spans("ab, cd").collect();
        assert_eq!(spans, vec![(0, 2, "ab"), (4, 6, "cd")]);
    }
}
