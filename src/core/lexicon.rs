// --- File: src/core/lexicon.rs
use crate::core::tables::COMMON_WORDS;
use crate::core::trie::WordTrie;
use crate::core::types::{Suggestion, WordId};
use std::collections::HashMap;
use tracing::debug;

/// Whole-word dictionary that bypasses phonetic conversion.
///
/// Entries keep their definition order. Registering a word twice replaces its
/// rendering but not its position.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: Vec<Suggestion>,
    index: HashMap<String, WordId>,
    trie: WordTrie,
}

impl Lexicon {
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in shop vocabulary.
    pub fn builtin() -> Self {
        let mut lexicon = Self::new();
        lexicon.extend(COMMON_WORDS.iter().copied());
        lexicon
    }

    /// Adds or replaces a word. Keys are trimmed and lowercased.
    /// Returns the previous rendering when the key was already present.
    pub fn insert(&mut self, romanized: &str, nepali: &str) -> Option<String> {
        let key = romanized.trim().to_lowercase();
        if let Some(&id) = self.index.get(&key) {
            debug!(word = %key, "duplicate lexicon entry, later definition wins");
            let previous = std::mem::replace(&mut self.entries[id].nepali, nepali.to_string());
            return Some(previous);
        }

        let id = self.entries.len();
        self.trie.insert(&key, id);
        self.index.insert(key.clone(), id);
        self.entries.push(Suggestion { romanized: key, nepali: nepali.to_string() });
        None
    }

    pub fn extend<'a, I>(&mut self, words: I)
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        for (romanized, nepali) in words {
            self.insert(romanized, nepali);
        }
    }

    /// Exact lookup of an already lowercased word.
    pub fn get(&self, word: &str) -> Option<&str> {
        self.index.get(word).map(|&id| self.entries[id].nepali.as_str())
    }

    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    /// Up to `k` entries whose key starts with `prefix`, in definition order.
    pub fn prefix_search(&self, prefix: &str, k: usize) -> Vec<Suggestion> {
        self.trie
            .first_k_with_prefix(prefix, k)
            .into_iter()
            .map(|id| self.entries[id].clone())
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Suggestion> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
