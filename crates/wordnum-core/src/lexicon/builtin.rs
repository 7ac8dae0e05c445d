//! Lexicons compiled into the crate
//!
//! The registry is initialized once on first access and stays immutable.

use std::sync::OnceLock;

/// A language whose lexicon ships with the crate
#[derive(Debug, Clone)]
pub struct BuiltinLanguage {
    /// ISO 639-1 code (e.g. "en", "fa")
    pub code: &'static str,
    /// English name of the language
    pub name: &'static str,
    /// Native name of the language
    pub native_name: &'static str,
    source: &'static str,
}

impl BuiltinLanguage {
    /// Raw properties text of the lexicon
    pub fn source(&self) -> &'static str {
        self.source
    }
}

/// Registry of built-in lexicons
pub struct LanguageRegistry {
    languages: Vec<BuiltinLanguage>,
}

static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    pub fn get_by_code(&self, code: &str) -> Option<&BuiltinLanguage> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    pub fn list_all(&self) -> Vec<&BuiltinLanguage> {
        self.languages.iter().collect()
    }

    pub fn is_supported(&self, code: &str) -> bool {
        self.get_by_code(code).is_some()
    }
}

fn default_languages() -> Vec<BuiltinLanguage> {
    vec![
        BuiltinLanguage {
            code: "en",
            name: "English",
            native_name: "English",
            source: include_str!("../../data/config_en.properties"),
        },
        BuiltinLanguage {
            code: "fa",
            name: "Persian",
            native_name: "فارسی",
            source: include_str!("../../data/config_fa.properties"),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::Lexicon;

    #[test]
    fn test_registry_lookup() {
        let registry = LanguageRegistry::get();
        assert!(registry.is_supported("en"));
        assert!(registry.is_supported("fa"));
        assert!(!registry.is_supported("de"));
        assert_eq!(registry.get_by_code("fa").map(|l| l.name), Some("Persian"));
    }

    #[test]
    fn test_every_builtin_parses() {
        for lang in LanguageRegistry::get().list_all() {
            let lexicon = Lexicon::parse(lang.code, lang.source()).unwrap();
            assert!(!lexicon.is_empty(), "{} lexicon is empty", lang.code);
            assert!(lexicon.conjunction().is_some());
        }
    }
}
