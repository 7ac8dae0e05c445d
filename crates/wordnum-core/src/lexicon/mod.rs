//! Per-language number lexicons
//!
//! A [`Lexicon`] maps number words to values and carries everything else a
//! language needs: the decimal-point keyword, the conjunction word, synonym
//! rewrites, the measure magnitudes and a few grammar rules. It is built once and
//! never mutated, so parsers share it through an `Arc`.

mod builtin;
mod magnitude;
mod properties;

pub use builtin::{BuiltinLanguage, LanguageRegistry};
pub use magnitude::{is_dependent, same_class, Magnitude};

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while building a lexicon
#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("line {line}: expected `key=value`, found {content:?}")]
    MalformedLine { line: usize, content: String },

    #[error("line {line}: value {value:?} for {key:?} is not a non-negative integer")]
    InvalidValue {
        line: usize,
        key: String,
        value: String,
    },

    #[error("line {line}: unknown rule {name:?}")]
    UnknownRule { line: usize, name: String },

    #[error("lexicon for {language:?} does not define the decimal point keyword")]
    MissingPoint { language: String },

    #[error("no lexicon available for language {language:?}")]
    UnsupportedLanguage { language: String },

    #[error("failed to read lexicon {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Language-specific grammar rules
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexiconRules {
    /// Measure words at or above this value may appear only once before the point
    pub unique_measure_floor: u64,
    /// Value that collapses with a preceding multiplier ("one hundred")
    pub hundred: u64,
    /// Adjacent number words only combine through the conjunction word
    pub conjunction_required: bool,
}

impl Default for LexiconRules {
    fn default() -> Self {
        Self {
            unique_measure_floor: 1_000,
            hundred: 100,
            conjunction_required: false,
        }
    }
}

/// Immutable number vocabulary of one language
#[derive(Debug, Clone)]
pub struct Lexicon {
    language: String,
    words: HashMap<String, u64>,
    /// First declared word for each value
    names: HashMap<u64, String>,
    replacements: Vec<(String, String)>,
    /// Sorted descending
    measures: Vec<u64>,
    point: String,
    conjunction: Option<String>,
    rules: LexiconRules,
}

impl Lexicon {
    /// Load one of the lexicons compiled into the crate
    pub fn builtin(language: &str) -> Result<Self, LexiconError> {
        let entry = LanguageRegistry::get().get_by_code(language).ok_or_else(|| {
            LexiconError::UnsupportedLanguage {
                language: language.to_string(),
            }
        })?;
        Self::parse(entry.code, entry.source())
    }

    /// Load a lexicon from a properties file
    pub fn load<P: AsRef<Path>>(language: &str, path: P) -> Result<Self, LexiconError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| LexiconError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let lexicon = Self::parse(language, &contents)?;
        tracing::info!(
            "Loaded {} lexicon with {} words from {:?}",
            language,
            lexicon.words.len(),
            path
        );
        Ok(lexicon)
    }

    /// Resolve a lexicon for `language`, preferring `config_<code>.properties` in
    /// `custom_dir` over the built-in resource
    pub fn for_language(language: &str, custom_dir: Option<&Path>) -> Result<Self, LexiconError> {
        if let Some(dir) = custom_dir {
            let path = dir.join(Self::file_name(language));
            if path.exists() {
                return Self::load(language, path);
            }
            tracing::debug!("No custom lexicon at {:?}, using built-in", path);
        }
        Self::builtin(language)
    }

    /// File name a lexicon for `language` is stored under
    pub fn file_name(language: &str) -> String {
        format!("config_{}.properties", language)
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Value of a number word (after synonym mapping)
    pub fn value_of(&self, word: &str) -> Option<u64> {
        self.words.get(self.synonym(word)).copied()
    }

    /// Canonical word for a value
    pub fn name_of(&self, value: u64) -> Option<&str> {
        self.names.get(&value).map(String::as_str)
    }

    /// Whole-word synonym mapping, identity for unknown words
    pub fn synonym<'a>(&'a self, word: &'a str) -> &'a str {
        self.replacements
            .iter()
            .find(|(from, _)| from == word)
            .map(|(_, to)| to.as_str())
            .unwrap_or(word)
    }

    pub fn replacements(&self) -> &[(String, String)] {
        &self.replacements
    }

    pub fn point(&self) -> &str {
        &self.point
    }

    pub fn is_point(&self, word: &str) -> bool {
        self.synonym(word) == self.point
    }

    pub fn conjunction(&self) -> Option<&str> {
        self.conjunction.as_deref()
    }

    pub fn is_conjunction(&self, word: &str) -> bool {
        self.conjunction.as_deref() == Some(self.synonym(word))
    }

    /// Measure magnitudes, largest first
    pub fn measures(&self) -> &[u64] {
        &self.measures
    }

    pub fn is_measure(&self, value: u64) -> bool {
        self.measures.contains(&value)
    }

    /// Whether a value may appear after the decimal point
    pub fn is_digit(&self, value: u64) -> bool {
        value <= 9
    }

    pub fn rules(&self) -> &LexiconRules {
        &self.rules
    }

    /// Number of distinct number words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_english() {
        let lexicon = Lexicon::builtin("en").unwrap();
        assert_eq!(lexicon.language(), "en");
        assert_eq!(lexicon.value_of("nineteen"), Some(19));
        assert_eq!(lexicon.value_of("fourty"), Some(40));
        assert_eq!(lexicon.point(), "point");
        assert_eq!(lexicon.conjunction(), Some("and"));
        assert_eq!(
            lexicon.measures(),
            &[1_000_000_000_000, 1_000_000_000, 1_000_000, 1_000, 100]
        );
        assert!(!lexicon.rules().conjunction_required);
    }

    #[test]
    fn test_builtin_persian() {
        let lexicon = Lexicon::builtin("fa").unwrap();
        assert_eq!(lexicon.value_of("نوزده"), Some(19));
        assert_eq!(lexicon.value_of("یکصد"), Some(100));
        // first declared word wins
        assert_eq!(lexicon.name_of(100), Some("صد"));
        assert_eq!(lexicon.name_of(18), Some("هجده"));
        assert!(lexicon.is_point("ممیز"));
        assert!(lexicon.is_conjunction("و"));
        assert!(lexicon.rules().conjunction_required);
    }

    #[test]
    fn test_unsupported_language() {
        assert!(matches!(
            Lexicon::builtin("xx"),
            Err(LexiconError::UnsupportedLanguage { .. })
        ));
    }

    #[test]
    fn test_custom_dir_takes_precedence() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("config_en.properties"),
            "one=1\nfive=5\npoint=dot\nmeasure:hundred=100\nhundred=100\n",
        )
        .unwrap();

        let lexicon = Lexicon::for_language("en", Some(dir.path())).unwrap();
        assert_eq!(lexicon.point(), "dot");
        assert_eq!(lexicon.value_of("nineteen"), None);

        let fallback = Lexicon::for_language("fa", Some(dir.path())).unwrap();
        assert_eq!(fallback.point(), "ممیز");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Lexicon::load("en", dir.path().join("nope.properties"));
        assert!(matches!(result, Err(LexiconError::Io { .. })));
    }
}
