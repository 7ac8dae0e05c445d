//! Free-text number spans
//!
//! Scans prose word by word and replaces every run of number words with its
//! digits, leaving everything else untouched. Each word gets one [`Boundary`]
//! decision. A span is a maximal run of number words, and a span can hold several
//! groups: independent numbers spoken back to back (a phone number read in
//! pieces) that render next to each other without a separator.

use crate::lexicon::{is_dependent, Lexicon, Magnitude};
use crate::parser::{classify, normalize_phrase, word_spans, NumberParser, Token};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WordKind {
    Number(u64),
    Point,
    Conjunction,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Boundary {
    /// Extend the open group
    Continue,
    /// Start a new group inside the open span
    Group,
    /// Start a new span
    Span,
    /// Leave the word verbatim and close the open span
    Skip,
}

struct Word {
    start: usize,
    end: usize,
    kind: WordKind,
}

#[derive(Debug, Default)]
struct Group {
    tokens: Vec<Token>,
}

impl Group {
    fn last(&self) -> Option<Token> {
        self.tokens.last().copied()
    }

    fn has_point(&self) -> bool {
        self.tokens.contains(&Token::Point)
    }

    fn is_lone_zero(&self) -> bool {
        self.tokens == [Token::Number(0)]
    }
}

#[derive(Debug)]
struct Span {
    start: usize,
    end: usize,
    groups: Vec<Group>,
}

/// A pending replacement: byte range in the normalized text and its digits
struct Replacement {
    start: usize,
    end: usize,
    text: String,
}

/// Only whitespace or a single hyphen may sit between two words of a span
fn is_soft_gap(gap: &str) -> bool {
    gap == "-" || gap.chars().all(char::is_whitespace)
}

fn scan(lexicon: &Lexicon, text: &str) -> Vec<Word> {
    word_spans(text)
        .map(|(start, end, word)| {
            let kind = match classify(lexicon, word) {
                Some(Token::Number(value)) => WordKind::Number(value),
                Some(Token::Point) => WordKind::Point,
                Some(Token::Conjunction) => WordKind::Conjunction,
                None => WordKind::Other,
            };
            Word { start, end, kind }
        })
        .collect()
}

struct Segmenter<'a> {
    lexicon: &'a Lexicon,
    text: &'a str,
    words: Vec<Word>,
    open: Option<Span>,
    spans: Vec<Span>,
}

impl<'a> Segmenter<'a> {
    fn new(lexicon: &'a Lexicon, text: &'a str) -> Self {
        Self {
            lexicon,
            text,
            words: scan(lexicon, text),
            open: None,
            spans: Vec::new(),
        }
    }

    fn run(mut self) -> Vec<Span> {
        for idx in 0..self.words.len() {
            if idx > 0 {
                let gap = &self.text[self.words[idx - 1].end..self.words[idx].start];
                if !is_soft_gap(gap) {
                    self.close();
                }
            }

            let decision = self.decide(idx);
            let word = &self.words[idx];
            tracing::debug!("{:?} -> {:?}", &self.text[word.start..word.end], decision);
            self.apply(idx, decision);
        }
        self.close();
        self.spans
    }

    fn current_group(&self) -> Option<&Group> {
        self.open.as_ref().and_then(|span| span.groups.last())
    }

    fn decide(&self, idx: usize) -> Boundary {
        let group = self.current_group();

        match self.words[idx].kind {
            WordKind::Other => Boundary::Skip,
            WordKind::Point if group.is_some() => Boundary::Continue,
            WordKind::Point => Boundary::Span,
            WordKind::Conjunction if self.conjunction_joins(idx) => Boundary::Continue,
            WordKind::Conjunction => Boundary::Skip,
            WordKind::Number(value) => match group {
                Some(group) => self.place_number(group, value),
                None => Boundary::Span,
            },
        }
    }

    /// A conjunction only joins a number to a dependent non-zero number right after it
    fn conjunction_joins(&self, idx: usize) -> bool {
        let Some(group) = self.current_group() else {
            return false;
        };
        if group.has_point() {
            return false;
        }
        let Some(Token::Number(prev)) = group.last() else {
            return false;
        };
        let Some(next) = self.words.get(idx + 1) else {
            return false;
        };
        let WordKind::Number(next_value) = next.kind else {
            return false;
        };

        let gap = &self.text[self.words[idx].end..next.start];
        next_value != 0 && is_soft_gap(gap) && is_dependent(prev, next_value)
    }

    fn place_number(&self, group: &Group, value: u64) -> Boundary {
        let prev = match group.last() {
            Some(Token::Number(prev)) => prev,
            // after a conjunction or inside a fraction
            _ => return Boundary::Continue,
        };
        if group.has_point() {
            return Boundary::Continue;
        }
        if value == 0 {
            return Boundary::Group;
        }
        if group.is_lone_zero() {
            return Boundary::Continue;
        }
        if self.lexicon.is_measure(value) && prev < value {
            return Boundary::Continue;
        }
        if is_dependent(prev, value) && (is_scale(prev) || !self.lexicon.rules().conjunction_required) {
            return Boundary::Continue;
        }
        Boundary::Group
    }

    fn apply(&mut self, idx: usize, decision: Boundary) {
        let (start, end, kind) = {
            let word = &self.words[idx];
            (word.start, word.end, word.kind)
        };

        match decision {
            Boundary::Skip => {
                self.close();
                return;
            }
            Boundary::Span => {
                self.close();
                self.open = Some(Span {
                    start,
                    end,
                    groups: vec![Group::default()],
                });
            }
            Boundary::Group => {
                if let Some(span) = self.open.as_mut() {
                    span.groups.push(Group::default());
                }
            }
            Boundary::Continue => {}
        }

        let lexicon = self.lexicon;
        if let Some(span) = self.open.as_mut() {
            span.end = end;
            if let Some(group) = span.groups.last_mut() {
                push_word(lexicon, group, kind);
            }
        }
    }

    fn close(&mut self) {
        if let Some(span) = self.open.take() {
            self.spans.push(span);
        }
    }
}

fn is_scale(value: u64) -> bool {
    Magnitude::of(value).is_some_and(Magnitude::is_scale)
}

fn push_word(lexicon: &Lexicon, group: &mut Group, kind: WordKind) {
    match kind {
        WordKind::Number(value) => {
            // "thousand" on its own means "one thousand"
            let has_multiplier = matches!(group.last(), Some(Token::Number(_)));
            if lexicon.is_measure(value) && is_scale(value) && !has_multiplier && !group.has_point() {
                group.tokens.push(Token::Number(1));
            }
            group.tokens.push(Token::Number(value));
        }
        WordKind::Point => group.tokens.push(Token::Point),
        WordKind::Conjunction => group.tokens.push(Token::Conjunction),
        WordKind::Other => {}
    }
}

impl NumberParser {
    /// Replace every number phrase in `text` with its digits
    ///
    /// The text is normalized first, so the result is lowercased and carries the
    /// lexicon's rewrites. A leading zero word ("zero nine one two") is dropped
    /// unless `ignore_leading_zero` is false, in which case it is kept as `0`.
    /// Never fails: a phrase that does not evaluate renders as `0`.
    pub fn text_to_num(&self, text: &str, ignore_leading_zero: bool) -> String {
        let normalized = normalize_phrase(self.lexicon(), text);
        let spans = Segmenter::new(self.lexicon(), &normalized).run();

        let mut replacements: Vec<Replacement> = spans
            .iter()
            .map(|span| Replacement {
                start: span.start,
                end: span.end,
                text: span
                    .groups
                    .iter()
                    .map(|group| self.render_group(group, ignore_leading_zero))
                    .collect(),
            })
            .collect();

        // Apply from end to start so earlier byte ranges stay valid
        replacements.sort_by(|a, b| b.start.cmp(&a.start));

        let mut result = normalized;
        for r in &replacements {
            tracing::debug!("Span {}..{} -> {:?}", r.start, r.end, r.text);
            result.replace_range(r.start..r.end, &r.text);
        }
        result
    }

    fn render_group(&self, group: &Group, ignore_leading_zero: bool) -> String {
        let (leading_zero, tokens) = match group.tokens.split_first() {
            Some((Token::Number(0), rest)) => (true, rest),
            _ => (false, &group.tokens[..]),
        };

        let digits = if tokens.is_empty() {
            String::new()
        } else {
            match self.evaluate_tokens(tokens, true) {
                Ok(literal) if literal == "0.0" => "0".to_string(),
                Ok(literal) => literal,
                Err(e) => {
                    tracing::debug!("Group {:?} did not evaluate: {}", tokens, e);
                    "0".to_string()
                }
            }
        };

        if leading_zero && !ignore_leading_zero {
            format!("0{}", digits)
        } else {
            digits
        }
    }
}
