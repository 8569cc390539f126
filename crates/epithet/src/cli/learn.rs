//! The `epithet learn` command: grow the vocabulary from free text.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use epithet_core::{Config, Epithet};

use super::store::VocabularyFile;

/// Arguments for the `learn` command.
#[derive(Args, Debug, Default)]
pub struct LearnArgs {
    /// Text to learn from (each argument is learned separately)
    pub text: Vec<String>,

    /// Learn from each non-empty line of a file
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Context label recorded with the learned words
    #[arg(short, long, default_value = "description")]
    pub context: String,
}

/// Execute the learn command.
pub async fn execute(args: LearnArgs, config: Config, store: VocabularyFile) -> anyhow::Result<()> {
    let mut texts = args.text;
    if let Some(path) = &args.file {
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read {path:?}"))?;
        texts.extend(
            content
                .lines()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .map(String::from),
        );
    }
    if texts.is_empty() {
        anyhow::bail!("Nothing to learn\n\n  Hint: Pass text arguments or --file <PATH>.");
    }

    let epithet = Epithet::new(config);
    store.load_into(&epithet).await?;

    let learned = epithet.learn_from_text_batch(&texts, &args.context);
    if learned.is_empty() {
        println!("No descriptive words found.");
    } else {
        println!("Learned {} word(s) under {:?}:", learned.len(), args.context);
        for word in &learned {
            println!("  {word}");
        }
    }

    store.save(&epithet).await
}
