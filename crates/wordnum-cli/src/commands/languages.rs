//! Languages command - list available lexicons

use anyhow::Result;
use console::{style, Term};
use wordnum_core::{Config, LanguageRegistry};

pub fn list(config: &Config) -> Result<()> {
    let term = Term::stdout();
    let custom = config.custom_languages();

    term.write_line(&format!("{}", style("Available Languages").bold()))?;
    term.write_line("")?;

    for lang in LanguageRegistry::get().list_all() {
        let marker = if custom.iter().any(|code| code == lang.code) {
            style("✓ custom").green()
        } else {
            style("built-in").dim()
        };
        term.write_line(&format!(
            "  {:4} {:10} {:10} {}",
            lang.code, lang.name, lang.native_name, marker
        ))?;
    }

    for code in custom
        .iter()
        .filter(|code| !LanguageRegistry::get().is_supported(code))
    {
        term.write_line(&format!(
            "  {:4} {:10} {:10} {}",
            code,
            "",
            "",
            style("✓ custom").green()
        ))?;
    }

    term.write_line("")?;
    if let Some(dir) = config.lexicon_dir() {
        term.write_line(&format!(
            "Custom lexicons are read from {}",
            style(dir.display()).cyan()
        ))?;
    }

    Ok(())
}
