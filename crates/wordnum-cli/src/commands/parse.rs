//! Parse command - evaluate one phrase

use anyhow::Result;
use console::{style, Term};
use wordnum_core::{Config, ParseOptions};

pub fn run(
    config: &Config,
    lang: Option<&str>,
    phrase: &str,
    separate: bool,
    as_string: bool,
) -> Result<()> {
    let term = Term::stdout();
    let parser = config.parser(lang)?;
    let options = ParseOptions { separate };

    // Bare text for scripts
    if as_string {
        let value = parser.word_to_num_string(phrase, options)?;
        term.write_line(&value)?;
        return Ok(());
    }

    match parser.word_to_num_with(phrase, options) {
        Ok(number) => {
            let kind = if number.is_integer() { "integer" } else { "decimal" };
            term.write_line(&format!(
                "{} {}",
                style(number.to_string()).cyan().bold(),
                style(format!("({})", kind)).dim()
            ))?;
            Ok(())
        }
        Err(e) => {
            term.write_line(&format!("{} {}", style("✗").red(), e))?;
            anyhow::bail!("Could not parse {:?} as {}", phrase, parser.lexicon().language())
        }
    }
}
