//! The `epithet config` command for configuration management.

use std::path::Path;

use clap::{Args, Subcommand};
use epithet_core::{Config, VocabularySnapshot};

use super::store::VocabularyFile;

/// Arguments for the `config` command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Subcommands for configuration management.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Display the effective configuration and vocabulary file status
    Show,

    /// Show config file path
    Path,

    /// Write a commented default config file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}

/// Comment lines written above each section by `config init`.
const SECTION_NOTES: &[(&str, &str)] = &[
    (
        "[general]",
        "# Learned vocabulary is saved here between runs (`~` is expanded).\n\
         # `--vocabulary <PATH>` or EPITHET_VOCABULARY override it per run.",
    ),
    (
        "[analysis]",
        "# Defaults for `epithet analyze`. Each one has a matching flag.",
    ),
    (
        "[selection]",
        "# Selector tuning. Add `seed = <number>` for reproducible catalog picks.",
    ),
    ("[output]", "# format: json | jsonl"),
    (
        "[logging]",
        "# level: error | warn | info | debug | trace\n# format: pretty | json",
    ),
];

/// Execute the config command.
pub async fn execute(
    args: ConfigArgs,
    config: Config,
    store: VocabularyFile,
) -> anyhow::Result<()> {
    match args.command {
        ConfigCommand::Show => {
            println!("{}", config.to_toml()?);
            println!("# vocabulary file: {}", vocabulary_status(store.path()).await);
        }

        ConfigCommand::Path => {
            println!("{}", Config::default_path().display());
        }

        ConfigCommand::Init { force } => {
            let path = Config::default_path();
            init_at(&path, force).await?;
            tracing::info!("Config file created at: {}", path.display());
            println!("Configuration initialized at: {}", path.display());
        }
    }

    Ok(())
}

/// Write the commented default config to `path`.
async fn init_at(path: &Path, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "Config file already exists at: {}\nUse --force to overwrite.",
            path.display()
        );
    }

    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(path, annotated_default_toml()?).await?;
    Ok(())
}

/// Default config as TOML with a note above every section.
fn annotated_default_toml() -> anyhow::Result<String> {
    let mut out = String::from("# Epithet configuration. Every key is optional.\n\n");
    for line in Config::default().to_toml()?.lines() {
        let header = SECTION_NOTES.iter().find(|(h, _)| line.trim() == *h);
        if let Some((_, note)) = header {
            out.push_str(note);
            out.push('\n');
        }
        out.push_str(line);
        out.push('\n');
    }
    Ok(out)
}

/// One-line description of the vocabulary file at `path`.
async fn vocabulary_status(path: &Path) -> String {
    if !path.exists() {
        return format!("{} (not created yet)", path.display());
    }
    let parsed = match tokio::fs::read_to_string(path).await {
        Ok(json) => VocabularySnapshot::from_json(&json).map_err(|e| e.to_string()),
        Err(e) => Err(e.to_string()),
    };
    match parsed {
        Ok(snapshot) => format!(
            "{} ({} learned word(s), {} categories)",
            path.display(),
            snapshot.records.len(),
            snapshot.categories.len()
        ),
        Err(e) => format!("{} (unreadable: {e})", path.display()),
    }
}
