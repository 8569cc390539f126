//! Configuration validation with range checks.

use crate::error::ConfigError;

use super::Config;

const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

impl Config {
    /// Validate configuration values are within acceptable ranges.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.selection.context_word_limit == 0 {
            return Err(ConfigError::ValidationError(
                "selection.context_word_limit must be > 0".into(),
            ));
        }
        if self.selection.description_words == 0 {
            return Err(ConfigError::ValidationError(
                "selection.description_words must be > 0".into(),
            ));
        }
        if !matches!(self.output.format.as_str(), "json" | "jsonl") {
            return Err(ConfigError::ValidationError(format!(
                "output.format must be \"json\" or \"jsonl\", got {:?}",
                self.output.format
            )));
        }
        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(ConfigError::ValidationError(format!(
                "logging.format must be \"pretty\" or \"json\", got {:?}",
                self.logging.format
            )));
        }
        if !LOG_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "logging.level must be one of {}, got {:?}",
                LOG_LEVELS.join(", "),
                self.logging.level
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_passes_validation() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_context_word_limit() {
        let mut config = Config::default();
        config.selection.context_word_limit = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("context_word_limit"));
    }

    #[test]
    fn test_validate_rejects_zero_description_words() {
        let mut config = Config::default();
        config.selection.description_words = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("description_words"));
    }

    #[test]
    fn test_validate_rejects_unknown_log_settings() {
        let mut config = Config::default();
        config.logging.level = "verbose".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("logging.level"));

        let mut config = Config::default();
        config.logging.format = "xml".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("logging.format"));
    }

    #[test]
    fn test_validate_accepts_zero_max_adjectives() {
        // A zero cap is a legitimate request for an empty selection.
        let mut config = Config::default();
        config.analysis.max_adjectives = 0;
        assert!(config.validate().is_ok());
    }
}
