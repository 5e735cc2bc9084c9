// --- File: src/config.rs
//! Custom word lists loaded from TOML.
//!
//! ```toml
//! include_builtin = true
//!
//! [[words]]
//! romanized = "karai"
//! nepali = "कराई"
//! ```
//!
//! Words are added after the built-in vocabulary, in file order, so a custom
//! entry for a built-in key replaces its rendering.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("word list is empty and built-in words are excluded")]
    Empty,
    #[error("empty romanized key")]
    EmptyKey,
    #[error("romanized key must be a single word: {0:?}")]
    WhitespaceInKey(String),
    #[error("empty value for key: {0}")]
    EmptyValue(String),
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("romanizer already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WordEntry {
    pub romanized: String,
    pub nepali: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WordsConfig {
    #[serde(default = "default_include_builtin")]
    pub include_builtin: bool,
    #[serde(default)]
    pub words: Vec<WordEntry>,
}

fn default_include_builtin() -> bool {
    true
}

impl Default for WordsConfig {
    fn default() -> Self {
        Self { include_builtin: true, words: Vec::new() }
    }
}

/// Parse and validate a TOML word list.
pub fn parse_words_toml(toml_str: &str) -> Result<WordsConfig, ConfigError> {
    let config: WordsConfig =
        toml::from_str(toml_str).map_err(|e| ConfigError::Parse(e.to_string()))?;

    if config.words.is_empty() && !config.include_builtin {
        return Err(ConfigError::Empty);
    }

    for entry in &config.words {
        let key = entry.romanized.trim();
        if key.is_empty() {
            return Err(ConfigError::EmptyKey);
        }
        if key.chars().any(char::is_whitespace) {
            return Err(ConfigError::WhitespaceInKey(entry.romanized.clone()));
        }
        if entry.nepali.trim().is_empty() {
            return Err(ConfigError::EmptyValue(entry.romanized.clone()));
        }
    }

    debug!(words = config.words.len(), include_builtin = config.include_builtin, "parsed word list");
    Ok(config)
}

/// Read a word list from disk.
pub fn load_words_file(path: &Path) -> Result<WordsConfig, ConfigError> {
    let content = fs::read_to_string(path)
        .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
    parse_words_toml(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parse_valid_toml() {
        let toml = r#"
[[words]]
romanized = "karai"
nepali = "कराई"

[[words]]
romanized = "dabba"
nepali = "डब्बा"
"#;
        let config = parse_words_toml(toml).unwrap();
        assert!(config.include_builtin);
        assert_eq!(config.words.len(), 2);
        assert_eq!(config.words[0].romanized, "karai");
        assert_eq!(config.words[1].nepali, "डब्बा");
    }

    #[test]
    fn builtin_only_is_valid() {
        let config = parse_words_toml("").unwrap();
        assert_eq!(config, WordsConfig::default());
    }

    #[test]
    fn error_empty_without_builtin() {
        let err = parse_words_toml("include_builtin = false\n").unwrap_err();
        assert!(matches!(err, ConfigError::Empty));
    }

    #[test]
    fn error_empty_key() {
        let toml = r#"
[[words]]
romanized = "  "
nepali = "क"
"#;
        assert!(matches!(parse_words_toml(toml).unwrap_err(), ConfigError::EmptyKey));
    }

    #[test]
    fn error_multi_word_key() {
        let toml = r#"
[[words]]
romanized = "steel thali"
nepali = "स्टिल थाली"
"#;
        let err = parse_words_toml(toml).unwrap_err();
        assert!(matches!(err, ConfigError::WhitespaceInKey(ref k) if k == "steel thali"));
    }

    #[test]
    fn error_empty_value() {
        let toml = r#"
[[words]]
romanized = "karai"
nepali = ""
"#;
        assert!(matches!(parse_words_toml(toml).unwrap_err(), ConfigError::EmptyValue(_)));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_words_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[[words]]\nromanized = \"karai\"\nnepali = \"कराई\"").unwrap();
        let config = load_words_file(file.path()).unwrap();
        assert_eq!(config.words[0].nepali, "कराई");
    }

    #[test]
    fn load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_words_file(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
