// --- File: src/core/engine.rs
use crate::config::{parse_words_toml, ConfigError, WordsConfig};
use crate::core::converter::RomanizationEngine;
use crate::core::lexicon::Lexicon;
use crate::core::tables::NEPALI_DIGRAPHS;
use crate::core::types::{Preview, Suggestion};
use std::sync::OnceLock;
use tracing::debug_span;

/// Completions returned per lookup.
pub const MAX_SUGGESTIONS: usize = 5;
/// Shortest prefix that triggers completion.
pub const MIN_PREFIX_LEN: usize = 2;

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();
static INSTANCE: OnceLock<Romanizer> = OnceLock::new();

/// Dictionary-first Romanization to Devanagari transliterator.
///
/// Known shop words are looked up whole; everything else goes through the
/// phonetic converter. None of the operations can fail: bad input degrades to
/// an empty string or to characters copied through.
#[derive(Debug, Clone)]
pub struct Romanizer {
    lexicon: Lexicon,
    converter: RomanizationEngine,
}

impl Default for Romanizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Romanizer {
    /// Engine with the built-in shop vocabulary.
    pub fn new() -> Self {
        Self::with_lexicon(Lexicon::builtin())
    }

    pub fn with_lexicon(lexicon: Lexicon) -> Self {
        Self { lexicon, converter: RomanizationEngine::new() }
    }

    pub fn from_config(config: &WordsConfig) -> Self {
        let mut lexicon = if config.include_builtin { Lexicon::builtin() } else { Lexicon::new() };
        lexicon.extend(config.words.iter().map(|w| (w.romanized.as_str(), w.nepali.as_str())));
        Self::with_lexicon(lexicon)
    }

    /// Set a custom TOML word list before the first `global()` call.
    /// Fails with `AlreadyInitialized` once the global engine exists.
    pub fn init_custom(toml_content: String) -> Result<(), ConfigError> {
        // Validate eagerly
        parse_words_toml(&toml_content)?;
        if INSTANCE.get().is_some() {
            return Err(ConfigError::AlreadyInitialized);
        }
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| ConfigError::AlreadyInitialized)
    }

    /// Get or initialize the process-wide engine.
    pub fn global() -> &'static Romanizer {
        INSTANCE.get_or_init(|| match CUSTOM_TOML.get() {
            // init_custom already validated the document.
            Some(toml_str) => parse_words_toml(toml_str)
                .map(|config| Self::from_config(&config))
                .unwrap_or_else(|_| Self::new()),
            None => Self::new(),
        })
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Transliterates romanized text word by word. Absent or blank input gives
    /// an empty string.
    pub fn convert<'a>(&self, input: impl Into<Option<&'a str>>) -> String {
        let Some(input) = input.into() else {
            return String::new();
        };
        let _span = debug_span!("convert", input).entered();
        let text = input.to_lowercase();

        text.split_whitespace()
            .map(|word| match self.lexicon.get(word) {
                Some(nepali) => nepali.to_string(),
                None => self.converter.transliterate(word),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Dictionary words starting with `prefix`, in definition order.
    /// The length check applies to the prefix as typed, before trimming.
    pub fn suggest<'a>(&self, prefix: impl Into<Option<&'a str>>) -> Vec<Suggestion> {
        let Some(prefix) = prefix.into() else {
            return vec![];
        };
        if prefix.chars().count() < MIN_PREFIX_LEN {
            return vec![];
        }
        let text = prefix.trim().to_lowercase();
        let _span = debug_span!("suggest", prefix = %text).entered();
        self.lexicon.prefix_search(&text, MAX_SUGGESTIONS)
    }

    /// Heuristic check for romanized Nepali: a dictionary word, or one of the
    /// aspirated/palatal letter pairs. English words like "the" also pass.
    pub fn looks_romanized<'a>(&self, text: impl Into<Option<&'a str>>) -> bool {
        let Some(text) = text.into() else {
            return false;
        };
        let lower = text.to_lowercase();
        lower.split_whitespace().any(|word| self.lexicon.contains(word))
            || NEPALI_DIGRAPHS.iter().any(|pair| lower.contains(pair))
    }

    /// Live preview for an input field; completions are for the last word.
    pub fn preview<'a>(&self, input: impl Into<Option<&'a str>>) -> Preview {
        let input = input.into().unwrap_or_default();
        let last_word = if input.ends_with(char::is_whitespace) {
            None
        } else {
            input.split_whitespace().last()
        };
        Preview {
            input: input.to_string(),
            nepali: self.convert(input),
            looks_romanized: self.looks_romanized(input),
            suggestions: self.suggest(last_word),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WordEntry;

    fn romanizer() -> Romanizer {
        Romanizer::new()
    }

    #[test]
    fn absent_and_blank_input() {
        let r = romanizer();
        assert_eq!(r.convert(None), "");
        assert_eq!(r.convert(""), "");
        assert_eq!(r.convert("   \t\n"), "");
    }

    #[test]
    fn dictionary_wins_over_phonetics() {
        let r = romanizer();
        assert_eq!(r.convert("thali"), "थाली");
        assert_ne!(r.converter.transliterate("thali"), "थाली");
    }

    #[test]
    fn case_and_whitespace_normalized() {
        let r = romanizer();
        assert_eq!(r.convert("STEEL"), r.convert("steel"));
        assert_eq!(r.convert("  Steel   Thali\t"), "स्टिल थाली");
    }

    #[test]
    fn mixed_dictionary_and_phonetic_words() {
        let r = romanizer();
        assert_eq!(r.convert("thulo namaste 12"), "ठूलो नमस्ते १२");
    }

    #[test]
    fn suggest_requires_two_characters() {
        let r = romanizer();
        assert!(r.suggest("t").is_empty());
        assert!(r.suggest(None).is_empty());
        assert!(r.suggest("").is_empty());
    }

    #[test]
    fn suggest_trims_after_length_check() {
        let r = romanizer();
        for typed in [" t", "t ", " T "] {
            let keys: Vec<_> = r.suggest(typed).into_iter().map(|s| s.romanized).collect();
            assert_eq!(keys, ["thali", "thermos", "tama", "thulo", "tawa"], "typed {typed:?}");
        }
    }

    #[test]
    fn suggest_prefix_matches() {
        let r = romanizer();
        let hits = r.suggest("TH");
        assert!(!hits.is_empty() && hits.len() <= MAX_SUGGESTIONS);
        assert!(hits.iter().all(|s| s.romanized.starts_with("th")));
        assert_eq!(hits[0], Suggestion { romanized: "thali".into(), nepali: "थाली".into() });
    }

    #[test]
    fn suggest_caps_at_five() {
        let r = romanizer();
        assert_eq!(r.suggest("pl").len(), 2);
        let k = r.suggest("ka");
        let keys: Vec<_> = k.iter().map(|s| s.romanized.as_str()).collect();
        assert_eq!(keys, ["katori", "kalash", "kanta", "kadhai", "kadai"]);
    }

    #[test]
    fn looks_romanized_heuristic() {
        let r = romanizer();
        assert!(r.looks_romanized("steel thali"));
        assert!(r.looks_romanized("Mero Ghar"));
        assert!(r.looks_romanized("the"));
        assert!(!r.looks_romanized("xyz123"));
        assert!(!r.looks_romanized(""));
        assert!(!r.looks_romanized(None));
    }

    #[test]
    fn custom_words_override_builtin() {
        let config = WordsConfig {
            include_builtin: true,
            words: vec![
                WordEntry { romanized: "Karai".into(), nepali: "कराई".into() },
                WordEntry { romanized: "thali".into(), nepali: "थाल".into() },
            ],
        };
        let r = Romanizer::from_config(&config);
        assert_eq!(r.convert("karai thali"), "कराई थाल");
        assert_eq!(r.suggest("th")[0].nepali, "थाल");
        assert_eq!(r.suggest("kar")[0].romanized, "karai");
    }

    #[test]
    fn custom_words_without_builtin() {
        let config = WordsConfig {
            include_builtin: false,
            words: vec![WordEntry { romanized: "karai".into(), nepali: "कराई".into() }],
        };
        let r = Romanizer::from_config(&config);
        assert_eq!(r.lexicon().len(), 1);
        assert_eq!(r.convert("thali"), r.converter.transliterate("thali"));
    }

    #[test]
    fn preview_completes_last_word() {
        let r = romanizer();
        let p = r.preview("steel tha");
        assert_eq!(p.nepali, "स्टिल थ");
        assert!(p.looks_romanized);
        let keys: Vec<_> = p.suggestions.iter().map(|s| s.romanized.as_str()).collect();
        assert_eq!(keys, ["thali", "than"]);

        assert!(r.preview("steel ").suggestions.is_empty());
        assert_eq!(r.preview(None), Preview {
            input: String::new(),
            nepali: String::new(),
            looks_romanized: false,
            suggestions: vec![],
        });
    }
}
