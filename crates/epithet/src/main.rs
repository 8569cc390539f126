//! Epithet CLI - Adjectives for photos, learned from their own metadata.
//!
//! Epithet reads photo records (id, title, description, tags), picks
//! descriptive words for each one, and keeps growing its vocabulary from
//! everything it reads. The vocabulary persists as a JSON snapshot between
//! runs.
//!
//! # Usage
//!
//! ```bash
//! # Analyze a batch of photos
//! epithet analyze photos.jsonl --output results.json
//!
//! # Teach it some words
//! epithet learn "a moody, windswept, and desolate coastline"
//!
//! # Inspect the vocabulary
//! epithet vocab frequent --limit 10
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod cli;
mod logging;

use cli::store::VocabularyFile;

/// Epithet - Adjectives for photos, learned from their own metadata.
#[derive(Parser, Debug)]
#[command(name = "epithet")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long, global = true)]
    json_logs: bool,

    /// Vocabulary file (overrides `[general] vocabulary_path`)
    #[arg(long, global = true, env = "EPITHET_VOCABULARY")]
    vocabulary: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Pick adjectives for a JSON or JSONL file of photos
    Analyze(cli::analyze::AnalyzeArgs),

    /// Learn descriptive words from text
    Learn(cli::learn::LearnArgs),

    /// Inspect and manage the vocabulary
    Vocab(cli::vocab::VocabArgs),

    /// View and manage configuration
    Config(cli::config::ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logging isn't initialized yet, so use eprintln for config warnings.
    let config = match epithet_core::Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Failed to load config: {e}\n  \
                 Using default configuration. Check your config file with `epithet config path`."
            );
            epithet_core::Config::default()
        }
    };
    logging::init_from_config(&config, cli.verbose, cli.json_logs);

    tracing::debug!("Epithet v{}", epithet_core::VERSION);

    let store = VocabularyFile::new(cli.vocabulary.unwrap_or_else(|| config.vocabulary_path()));

    match cli.command {
        Commands::Analyze(args) => cli::analyze::execute(args, config, store).await,
        Commands::Learn(args) => cli::learn::execute(args, config, store).await,
        Commands::Vocab(args) => cli::vocab::execute(args, config, store).await,
        Commands::Config(args) => cli::config::execute(args, config, store).await,
    }
}
