//! wordnum CLI - spelled-out numbers to digits

use anyhow::Result;
use clap::{Parser, Subcommand};
use wordnum_core::Config;

mod commands;

#[derive(Parser)]
#[command(name = "wordnum")]
#[command(version)]
#[command(about = "Convert spelled-out numbers to digits", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Language code (en, fa, or any custom lexicon)
    #[arg(short, long, global = true)]
    lang: Option<String>,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Verbose output (show segmentation decisions)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a single number phrase
    Parse {
        /// Phrase such as "two million twenty three thousand and forty nine"
        phrase: String,

        /// Concatenate independent chunks instead of summing them
        #[arg(long)]
        separate: bool,

        /// Print the exact decimal text
        #[arg(long)]
        as_string: bool,
    },

    /// Replace number phrases inside text (reads stdin when no text or file is given)
    Text {
        /// Text to convert
        text: Option<String>,

        /// Read the text from a file
        #[arg(short, long, conflicts_with = "text")]
        file: Option<String>,

        /// Keep a spoken leading zero ("zero nine" becomes "09")
        #[arg(long)]
        keep_leading_zero: bool,
    },

    /// Run a JSON file of test cases and report failures
    Eval {
        /// Path to a JSON array of cases
        path: String,
    },

    /// List available languages
    Languages,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration
    Show,

    /// Show config file path
    Path,

    /// Set the default language
    SetLanguage {
        /// Language code, e.g. fa
        code: String,
    },

    /// Set the directory searched for custom lexicons
    SetLexiconDir {
        /// Directory holding config_<code>.properties files
        path: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let mut config = Config::load(cli.config.as_deref())?;
    let lang = cli.lang.as_deref();

    match cli.command {
        Commands::Parse {
            phrase,
            separate,
            as_string,
        } => commands::parse::run(&config, lang, &phrase, separate, as_string),

        Commands::Text {
            text,
            file,
            keep_leading_zero,
        } => commands::text::run(
            &config,
            lang,
            text.as_deref(),
            file.as_deref(),
            keep_leading_zero,
        ),

        Commands::Eval { path } => commands::eval::run(&config, lang, &path),

        Commands::Languages => commands::languages::list(&config),

        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::show(&config, lang),
            ConfigAction::Path => commands::config::show_path(cli.config.as_deref()),
            ConfigAction::SetLanguage { code } => {
                commands::config::set_language(&mut config, cli.config.as_deref(), &code)
            }
            ConfigAction::SetLexiconDir { path } => {
                commands::config::set_lexicon_dir(&mut config, cli.config.as_deref(), &path)
            }
        },
    }
}
