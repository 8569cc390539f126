//! The `epithet vocab` command for inspecting and managing the vocabulary.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Subcommand};
use epithet_core::{Config, Epithet, VocabularySnapshot};

use super::store::{write_snapshot, VocabularyFile};

/// Arguments for the `vocab` command.
#[derive(Args, Debug)]
pub struct VocabArgs {
    #[command(subcommand)]
    pub command: VocabCommand,
}

/// Subcommands for vocabulary management.
#[derive(Subcommand, Debug)]
pub enum VocabCommand {
    /// Show word and category counts
    Stats,

    /// List all category names
    Categories,

    /// List the words in a category
    Words {
        /// Category name
        category: String,
    },

    /// Show learned words by frequency
    Frequent {
        /// Number of words to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Add a word to a category without filtering
    Add {
        /// Word to add
        word: String,

        /// Category to add it to (created if missing)
        category: String,

        /// Context label for the learning record
        #[arg(short, long, default_value = "manual")]
        context: String,
    },

    /// Write a snapshot of the vocabulary (defaults to stdout)
    Export {
        /// Destination file
        path: Option<PathBuf>,
    },

    /// Replace the vocabulary with a snapshot file
    Import {
        /// Snapshot file to import
        path: PathBuf,
    },
}

/// Execute the vocab command.
pub async fn execute(args: VocabArgs, config: Config, store: VocabularyFile) -> anyhow::Result<()> {
    let epithet = Epithet::new(config);
    store.load_into(&epithet).await?;

    match args.command {
        VocabCommand::Stats => {
            let stats = epithet.stats();
            println!("Vocabulary: {}", store.path().display());
            println!("  Words:              {}", stats.total_words);
            println!("  Categories:         {}", stats.category_count);
            println!("  Learned words:      {}", stats.learned_count);
            println!("  Dynamic categories: {}", stats.dynamic_category_count);
            println!();
            for category in epithet.all_categories() {
                let count = stats.per_category.get(&category).copied().unwrap_or(0);
                println!("  {category:<20} {count:>5}");
            }
        }

        VocabCommand::Categories => {
            for category in epithet.all_categories() {
                println!("{category}");
            }
        }

        VocabCommand::Words { category } => {
            let words = epithet.words_by_category(&category);
            if words.is_empty() {
                tracing::warn!("No words in category {:?}", category);
            }
            for word in words {
                println!("{word}");
            }
        }

        VocabCommand::Frequent { limit } => {
            for entry in epithet.most_frequent(limit) {
                println!("{:>6}  {}", entry.frequency, entry.word);
            }
        }

        VocabCommand::Add {
            word,
            category,
            context,
        } => {
            if epithet.add_custom_word(&word, &category, &context) {
                println!("Added {word:?} to {category:?}");
            } else {
                println!("{word:?} is already in {category:?}; frequency updated");
            }
            store.save(&epithet).await?;
        }

        VocabCommand::Export { path } => {
            let snapshot = epithet.export_vocabulary();
            match path {
                Some(path) => {
                    write_snapshot(&path, &snapshot).await?;
                    println!("Vocabulary exported to: {}", path.display());
                }
                None => println!("{}", snapshot.to_json(true)?),
            }
        }

        VocabCommand::Import { path } => {
            let json = tokio::fs::read_to_string(&path)
                .await
                .with_context(|| format!("Failed to read {path:?}"))?;
            let snapshot = VocabularySnapshot::from_json(&json)
                .with_context(|| format!("{path:?} is not a valid vocabulary snapshot"))?;
            epithet.import_vocabulary(snapshot)?;
            store.save(&epithet).await?;
            println!("Vocabulary imported from: {}", path.display());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn run(command: VocabCommand, vocabulary: &std::path::Path) -> anyhow::Result<()> {
        execute(
            VocabArgs { command },
            Config::default(),
            VocabularyFile::new(vocabulary),
        )
        .await
    }

    async fn reload(vocabulary: &std::path::Path) -> Epithet {
        let epithet = Epithet::new(Config::default());
        VocabularyFile::new(vocabulary).load_into(&epithet).await.unwrap();
        epithet
    }

    #[tokio::test]
    async fn test_add_persists() {
        let dir = tempfile::tempdir().unwrap();
        let vocabulary = dir.path().join("vocabulary.json");

        let add = || VocabCommand::Add {
            word: "Sepia".into(),
            category: "tone".into(),
            context: "manual".into(),
        };
        run(add(), &vocabulary).await.unwrap();
        run(add(), &vocabulary).await.unwrap();

        let epithet = reload(&vocabulary).await;
        assert_eq!(epithet.words_by_category("tone"), ["sepia"]);
        assert_eq!(epithet.most_frequent(1)[0].frequency, 2);
    }

    #[tokio::test]
    async fn test_export_then_import() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("source.json");
        let target = dir.path().join("target.json");
        let exported = dir.path().join("exported.json");

        run(
            VocabCommand::Add {
                word: "gritty".into(),
                category: "texture".into(),
                context: "manual".into(),
            },
            &source,
        )
        .await
        .unwrap();
        run(VocabCommand::Export { path: Some(exported.clone()) }, &source)
            .await
            .unwrap();
        run(VocabCommand::Import { path: exported }, &target)
            .await
            .unwrap();

        let epithet = reload(&target).await;
        assert_eq!(epithet.words_by_category("texture"), ["gritty"]);
    }

    #[tokio::test]
    async fn test_import_rejects_malformed_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let vocabulary = dir.path().join("vocabulary.json");
        let bad = dir.path().join("bad.json");
        std::fs::write(&bad, r#"{"version": 1}"#).unwrap();

        let result = run(VocabCommand::Import { path: bad }, &vocabulary).await;
        assert!(result.is_err());
        assert!(!vocabulary.exists());
    }

    #[tokio::test]
    async fn test_read_only_commands_do_not_write() {
        let dir = tempfile::tempdir().unwrap();
        let vocabulary = dir.path().join("vocabulary.json");
        run(VocabCommand::Stats, &vocabulary).await.unwrap();
        run(VocabCommand::Categories, &vocabulary).await.unwrap();
        run(VocabCommand::Frequent { limit: 5 }, &vocabulary).await.unwrap();
        run(VocabCommand::Words { category: "mood".into() }, &vocabulary)
            .await
            .unwrap();
        assert!(!vocabulary.exists());
    }
}
