//! Hangman - CLI
//!
//! Menu-driven hangman over stdin/stdout. Word lists and the rules text
//! live in a data directory; both fall back to built-in defaults when
//! missing.

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use hangman::session::Session;
use hangman::wordlists::store::{RULES_FILE, WORD_LISTS_FILE, WordListStore, load_rules};

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Guess the hidden word letter by letter before the figure is complete",
    version,
    author
)]
struct Cli {
    /// Directory holding word_lists.json and rules.txt
    /// (defaults to the user config directory)
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();
    let data_dir = cli.data_dir.unwrap_or_else(default_data_dir);

    let store = WordListStore::new(data_dir.join(WORD_LISTS_FILE));
    let rules = load_rules(&data_dir.join(RULES_FILE));

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    let mut session = Session::new(store, rules, stdin, stdout);
    session.run()
}

/// Diagnostics go to stderr so they never interleave with the game text
fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .with_writer(std::io::stderr)
        .init();
}

fn default_data_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("hangman")
}
