//! Config command - manage configuration

use anyhow::Result;
use console::{style, Term};
use std::path::PathBuf;
use wordnum_core::{Config, LanguageRegistry};

pub fn show(config: &Config, lang: Option<&str>) -> Result<()> {
    let term = Term::stdout();

    term.write_line(&format!("{}", style("wordnum Configuration").bold()))?;
    term.write_line("")?;

    let configured = config.language.as_deref().unwrap_or("(from environment)");
    term.write_line(&format!("Language:           {}", style(configured).cyan()))?;
    term.write_line(&format!(
        "  Resolved:         {}",
        style(config.resolve_language(lang)).cyan()
    ))?;
    term.write_line(&format!(
        "Ignore leading 0:   {}",
        style(config.ignore_leading_zero).cyan()
    ))?;

    let lexicon_dir = config
        .lexicon_dir()
        .map(|dir| dir.display().to_string())
        .unwrap_or_else(|| "(none)".to_string());
    term.write_line(&format!("Lexicon directory:  {}", style(lexicon_dir).cyan()))?;

    Ok(())
}

pub fn show_path(path: Option<&str>) -> Result<()> {
    let term = Term::stdout();
    let config_path = match path {
        Some(p) => PathBuf::from(p),
        None => Config::default_config_path()?,
    };

    term.write_line(&format!("Config file: {:?}", config_path))?;

    if config_path.exists() {
        term.write_line(&format!("{} File exists", style("✓").green()))?;
    } else {
        term.write_line(&format!(
            "{} File does not exist (using defaults)",
            style("ℹ").blue()
        ))?;
    }

    Ok(())
}

pub fn set_language(config: &mut Config, path: Option<&str>, code: &str) -> Result<()> {
    let term = Term::stdout();
    let code = code.trim().to_lowercase();

    let known = LanguageRegistry::get().is_supported(&code)
        || config.custom_languages().contains(&code);
    if !known {
        let available: Vec<&str> = LanguageRegistry::get()
            .list_all()
            .iter()
            .map(|lang| lang.code)
            .collect();
        term.write_line(&format!(
            "{} Unknown language '{}'. Available: {}",
            style("✗").red(),
            code,
            available.join(", ")
        ))?;
        return Ok(());
    }

    config.language = Some(code.clone());
    config.save(path)?;

    term.write_line(&format!(
        "{} Language set to: {}",
        style("✓").green(),
        code
    ))?;

    Ok(())
}

pub fn set_lexicon_dir(config: &mut Config, path: Option<&str>, dir: &str) -> Result<()> {
    let term = Term::stdout();
    let dir = PathBuf::from(dir);

    if !dir.is_dir() {
        term.write_line(&format!(
            "{} {:?} is not a directory yet, lexicons will be looked up there once it exists",
            style("⚠").yellow(),
            dir
        ))?;
    }

    config.lexicon_dir = Some(dir.clone());
    config.save(path)?;

    term.write_line(&format!(
        "{} Lexicon directory set to: {}",
        style("✓").green(),
        dir.display()
    ))?;

    Ok(())
}
