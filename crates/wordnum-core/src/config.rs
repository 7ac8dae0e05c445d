//! Configuration management for wordnum

use crate::lexicon::{Lexicon, LanguageRegistry};
use crate::parser::NumberParser;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;

/// Environment variables read by wordnum
pub mod env_vars {
    /// Language override, e.g. `fa`
    pub const LANG: &str = "WORDNUM_LANG";
    /// Directory holding custom `config_<code>.properties` lexicons
    pub const LEXICON_DIR: &str = "WORDNUM_LEXICON_DIR";
}

/// Fallback when nothing else names a language
pub const DEFAULT_LANGUAGE: &str = "en";

const LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

/// Main configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Preferred language code, `None` to follow the environment
    pub language: Option<String>,
    /// Drop a spoken leading zero in free text ("zero nine" becomes "9")
    pub ignore_leading_zero: bool,
    /// Directory searched for custom lexicons before the built-in ones
    pub lexicon_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            ignore_leading_zero: true,
            lexicon_dir: None,
        }
    }
}

impl Config {
    /// Load configuration from file, or defaults when the file does not exist
    pub fn load(path: Option<&str>) -> Result<Self> {
        let config_path = match path {
            Some(p) => PathBuf::from(p),
            None => Self::default_config_path()?,
        };

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read config from {:?}", config_path))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {:?}", config_path))
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self, path: Option<&str>) -> Result<()> {
        let config_path = match path {
            Some(p) => PathBuf::from(p),
            None => Self::default_config_path()?,
        };

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&config_path, contents)
            .with_context(|| format!("Failed to write config to {:?}", config_path))?;
        Ok(())
    }

    /// Get the default config file path
    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("org", "wordnum", "wordnum")
            .context("Could not determine config directory")?;
        Ok(proj_dirs.config_dir().join("config.toml"))
    }

    /// Get the default directory for custom lexicons
    pub fn default_lexicon_dir() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("org", "wordnum", "wordnum")
            .context("Could not determine data directory")?;
        Ok(proj_dirs.data_dir().join("lexicons"))
    }

    /// Custom lexicon directory: `WORDNUM_LEXICON_DIR`, then the config, then the default
    pub fn lexicon_dir(&self) -> Option<PathBuf> {
        if let Ok(dir) = std::env::var(env_vars::LEXICON_DIR) {
            if !dir.is_empty() {
                return Some(PathBuf::from(dir));
            }
        }
        self.lexicon_dir
            .clone()
            .or_else(|| Self::default_lexicon_dir().ok())
    }

    /// Language to use when `explicit` is not given
    pub fn resolve_language(&self, explicit: Option<&str>) -> String {
        self.resolve_language_with(explicit, |key| std::env::var(key).ok())
    }

    /// Resolution order: explicit, `WORDNUM_LANG`, config, POSIX locale,
    /// `LANGUAGE`, then English
    pub fn resolve_language_with<F>(&self, explicit: Option<&str>, env: F) -> String
    where
        F: Fn(&str) -> Option<String>,
    {
        let candidates = explicit
            .map(str::to_string)
            .into_iter()
            .chain(env(env_vars::LANG))
            .chain(self.language.clone());

        for candidate in candidates {
            if let Some(code) = language_code(&candidate) {
                return code;
            }
        }

        for key in LOCALE_VARS {
            if let Some(locale) = env(key) {
                if locale == "C" || locale == "POSIX" {
                    continue;
                }
                if let Some(code) = language_code(&locale) {
                    return code;
                }
            }
        }

        // GNU priority list, e.g. "fa:en"
        if let Some(list) = env("LANGUAGE") {
            if let Some(code) = list.split(':').find_map(language_code) {
                return code;
            }
        }

        DEFAULT_LANGUAGE.to_string()
    }

    /// Lexicon for the resolved language, custom directory first
    pub fn load_lexicon(&self, explicit: Option<&str>) -> Result<Lexicon> {
        let language = self.resolve_language(explicit);
        let dir = self.lexicon_dir();
        let lexicon = Lexicon::for_language(&language, dir.as_deref())
            .with_context(|| format!("Failed to load lexicon for {:?}", language))?;
        Ok(lexicon)
    }

    /// Parser for the resolved language
    pub fn parser(&self, explicit: Option<&str>) -> Result<NumberParser> {
        Ok(NumberParser::new(Arc::new(self.load_lexicon(explicit)?)))
    }

    /// Language codes with a custom lexicon in the lexicon directory
    pub fn custom_languages(&self) -> Vec<String> {
        let Some(dir) = self.lexicon_dir() else {
            return Vec::new();
        };
        let Ok(entries) = std::fs::read_dir(&dir) else {
            return Vec::new();
        };

        let mut codes: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| {
                let name = entry.file_name().into_string().ok()?;
                let code = name.strip_prefix("config_")?.strip_suffix(".properties")?;
                Some(code.to_string())
            })
            .collect();
        codes.sort();
        codes
    }
}

/// Two-letter lowercase code from a tag like `fa_IR.UTF-8` or `en-US`
fn language_code(tag: &str) -> Option<String> {
    let code: String = tag.trim().chars().take(2).collect::<String>().to_lowercase();
    if code.len() == 2 && code.chars().all(|c| c.is_ascii_alphabetic()) {
        if !LanguageRegistry::get().is_supported(&code) {
            tracing::debug!("No built-in lexicon for {:?}", code);
        }
        Some(code)
    } else {
        if !tag.trim().is_empty() {
            tracing::warn!("Ignoring malformed language tag {:?}", tag);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.ignore_leading_zero);
        assert!(config.language.is_none());
        assert!(config.lexicon_dir.is_none());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let path = path.to_str().unwrap();

        let config = Config {
            language: Some("fa".to_string()),
            ignore_leading_zero: false,
            lexicon_dir: Some(PathBuf::from("/tmp/lexicons")),
        };
        config.save(Some(path)).unwrap();

        let loaded = Config::load(Some(path)).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let loaded = Config::load(path.to_str()).unwrap();
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "language = \"fa\"\n").unwrap();

        let loaded = Config::load(path.to_str()).unwrap();
        assert_eq!(loaded.language.as_deref(), Some("fa"));
        assert!(loaded.ignore_leading_zero);
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "ignore_leading_zero = \"maybe\"\n").unwrap();
        assert!(Config::load(path.to_str()).is_err());
    }

    #[test]
    fn test_language_resolution_order() {
        let mut config = Config::default();
        let env = env_from(&[
            (env_vars::LANG, "fa"),
            ("LANG", "de_DE.UTF-8"),
        ]);
        assert_eq!(config.resolve_language_with(Some("EN"), &env), "en");
        assert_eq!(config.resolve_language_with(None, &env), "fa");

        config.language = Some("fr".to_string());
        let env = env_from(&[("LANG", "de_DE.UTF-8")]);
        assert_eq!(config.resolve_language_with(None, &env), "fr");

        config.language = None;
        assert_eq!(config.resolve_language_with(None, &env), "de");
    }

    #[test]
    fn test_posix_locale_is_skipped() {
        let config = Config::default();
        let env = env_from(&[("LC_ALL", "C"), ("LANG", "POSIX"), ("LANGUAGE", "fa:en")]);
        assert_eq!(config.resolve_language_with(None, &env), "fa");

        let env = env_from(&[("LC_MESSAGES", "fa_IR.UTF-8"), ("LANG", "en_US.UTF-8")]);
        assert_eq!(config.resolve_language_with(None, &env), "fa");
    }

    #[test]
    fn test_language_fallback() {
        let config = Config::default();
        assert_eq!(config.resolve_language_with(None, env_from(&[])), "en");
        assert_eq!(config.resolve_language_with(Some(""), env_from(&[])), "en");
    }

    #[test]
    fn test_parser_from_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            language: Some("fa".to_string()),
            ignore_leading_zero: true,
            lexicon_dir: Some(dir.path().to_path_buf()),
        };
        let parser = config.parser(Some("fa")).unwrap();
        assert_eq!(parser.lexicon().language(), "fa");
        assert!(config.parser(Some("xx")).is_err());
    }

    #[test]
    fn test_custom_languages() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("config_de.properties"), "eins=1\npoint=komma\n").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let config = Config {
            lexicon_dir: Some(dir.path().to_path_buf()),
            ..Config::default()
        };
        if std::env::var(env_vars::LEXICON_DIR).is_err() {
            assert_eq!(config.custom_languages(), vec!["de".to_string()]);
            let parser = config.parser(Some("de")).unwrap();
            assert_eq!(parser.lexicon().point(), "komma");
        }
    }
}
