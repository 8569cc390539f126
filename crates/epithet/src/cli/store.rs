//! The vocabulary file: a JSON snapshot persisted between runs.

use std::path::{Path, PathBuf};

use anyhow::Context;
use epithet_core::{Epithet, VocabularySnapshot};

/// Where the CLI keeps the learned vocabulary.
#[derive(Debug, Clone)]
pub struct VocabularyFile {
    path: PathBuf,
}

impl VocabularyFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the saved vocabulary into `epithet`. A missing file keeps the seed store.
    pub async fn load_into(&self, epithet: &Epithet) -> anyhow::Result<()> {
        if !self.path.exists() {
            tracing::debug!("No vocabulary file at {:?}, starting from seed", self.path);
            return Ok(());
        }

        let json = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read vocabulary file {:?}", self.path))?;
        epithet.import_vocabulary_json(&json).with_context(|| {
            format!(
                "Vocabulary file {:?} could not be loaded\n\n  \
                 Hint: Move it aside to start from the seed vocabulary.",
                self.path
            )
        })?;
        Ok(())
    }

    /// Write the current vocabulary, creating parent directories as needed.
    pub async fn save(&self, epithet: &Epithet) -> anyhow::Result<()> {
        write_snapshot(&self.path, &epithet.export_vocabulary()).await?;
        tracing::debug!("Vocabulary saved to {:?}", self.path);
        Ok(())
    }
}

/// Serialize a snapshot as pretty JSON to `path`.
pub async fn write_snapshot(path: &Path, snapshot: &VocabularySnapshot) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }
    let json = snapshot.to_json(true)?;
    tokio::fs::write(path, json)
        .await
        .with_context(|| format!("Failed to write vocabulary to {path:?}"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use epithet_core::Config;

    #[tokio::test]
    async fn test_missing_file_keeps_seed_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = VocabularyFile::new(dir.path().join("vocabulary.json"));
        let epithet = Epithet::new(Config::default());

        store.load_into(&epithet).await.unwrap();
        assert_eq!(epithet.stats().learned_count, 0);
    }

    #[tokio::test]
    async fn test_save_then_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = VocabularyFile::new(dir.path().join("nested").join("vocabulary.json"));

        let first = Epithet::new(Config::default());
        first.add_custom_word("sepia", "tone", "manual");
        store.save(&first).await.unwrap();

        let second = Epithet::new(Config::default());
        store.load_into(&second).await.unwrap();
        assert_eq!(second.stats(), first.stats());
        assert_eq!(second.words_by_category("tone"), ["sepia"]);
    }

    #[tokio::test]
    async fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vocabulary.json");
        std::fs::write(&path, "not a snapshot").unwrap();

        let epithet = Epithet::new(Config::default());
        let err = VocabularyFile::new(&path).load_into(&epithet).await.unwrap_err();
        assert!(err.to_string().contains("could not be loaded"));
        assert_eq!(epithet.stats().learned_count, 0);
    }
}
