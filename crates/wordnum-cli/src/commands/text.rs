//! Text command - convert number phrases inside prose

use anyhow::{Context, Result};
use console::Term;
use std::io::Read;
use std::path::Path;
use wordnum_core::Config;

pub fn run(
    config: &Config,
    lang: Option<&str>,
    text: Option<&str>,
    file: Option<&str>,
    keep_leading_zero: bool,
) -> Result<()> {
    let term = Term::stdout();
    let parser = config.parser(lang)?;

    let input = match (text, file) {
        (Some(text), _) => text.to_string(),
        (None, Some(path)) => {
            if !Path::new(path).exists() {
                anyhow::bail!("File not found: {}", path);
            }
            std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read text from {}", path))?
        }
        (None, None) => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read text from stdin")?;
            buffer
        }
    };

    let ignore_leading_zero = config.ignore_leading_zero && !keep_leading_zero;
    tracing::debug!(
        "Converting {} bytes of {} text",
        input.len(),
        parser.lexicon().language()
    );

    // Line by line keeps line breaks out of the normalizer's trim
    for line in input.lines() {
        term.write_line(&parser.text_to_num(line, ignore_leading_zero))?;
    }

    Ok(())
}
