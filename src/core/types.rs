// --- File: src/core/types.rs
use serde::{Deserialize, Serialize};

/// Position of a word in the lexicon, in definition order.
pub type WordId = usize;

/// One dictionary word and its precomposed Devanagari rendering.
/// This is also what an autocomplete dropdown receives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub romanized: String,
    pub nepali: String,
}

/// Everything an input field shows while the user types:
/// the live transliteration, whether the text reads as romanized Nepali,
/// and completions for the word still being typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preview {
    pub input: String,
    pub nepali: String,
    pub looks_romanized: bool,
    pub suggestions: Vec<Suggestion>,
}
