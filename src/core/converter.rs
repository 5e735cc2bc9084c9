// --- File: src/core/converter.rs
use crate::core::tables::{self, HALANTA, MAX_KEY_LEN};

/// A vowel found right after a consonant: the matra it contributes and the
/// number of characters it spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VowelMatch {
    pub modifier: &'static str,
    pub len: usize,
}

/// Greedy phonetic Romanization to Devanagari converter over the static tables.
///
/// The converter is stateless; it works on one word at a time and never fails.
/// Dictionary lookups happen a layer above, in [`crate::Romanizer`].
#[derive(Debug, Default, Clone, Copy)]
pub struct RomanizationEngine;

impl RomanizationEngine {
    pub fn new() -> Self {
        Self
    }

    /// Transliterates a single lowercase word, left to right.
    ///
    /// At each position the converter tries, in order: a two-letter consonant,
    /// a one-letter consonant, a standalone vowel and a special symbol (three,
    /// two then one letters). Anything else is copied through unchanged.
    pub fn transliterate(&self, word: &str) -> String {
        let chars: Vec<char> = word.chars().collect();
        let mut result = String::with_capacity(word.len() * 3);
        let mut i = 0;

        while i < chars.len() {
            if let Some((text, consumed)) = self.consonant_syllable(&chars, i) {
                result.push_str(&text);
                i += consumed;
            } else if let Some((glyph, consumed)) = self.standalone(&chars, i) {
                result.push_str(glyph);
                i += consumed;
            } else {
                result.push(chars[i]);
                i += 1;
            }
        }

        result
    }

    /// Looks for the vowel sound starting at `start`, two letters first.
    /// Only reports the match; the caller moves the cursor.
    pub fn next_vowel(&self, chars: &[char], start: usize) -> Option<VowelMatch> {
        if start >= chars.len() {
            return None;
        }
        (1..=2).rev().find_map(|len| {
            let key = slice(chars, start, len);
            tables::vowel(&key)?;
            Some(VowelMatch {
                modifier: tables::vowel_modifier(&key).unwrap_or(""),
                len: key.chars().count(),
            })
        })
    }

    /// Consonant (two letters, then one) plus whatever vowel follows it.
    /// Without a following vowel the consonant gets a halant.
    fn consonant_syllable(&self, chars: &[char], i: usize) -> Option<(String, usize)> {
        let (base, cons_len) = (1..=2).rev().find_map(|len| {
            let key = slice(chars, i, len);
            tables::consonant(&key).map(|glyph| (glyph, key.chars().count()))
        })?;

        let next = i + cons_len;
        let syllable = match self.next_vowel(chars, next) {
            Some(vowel) => (format!("{base}{}", vowel.modifier), cons_len + vowel.len),
            None => (format!("{base}{HALANTA}"), cons_len),
        };
        Some(syllable)
    }

    /// Vowel without a preceding consonant, or a digit/punctuation symbol.
    fn standalone(&self, chars: &[char], i: usize) -> Option<(&'static str, usize)> {
        (1..=MAX_KEY_LEN).rev().find_map(|len| {
            let key = slice(chars, i, len);
            let consumed = key.chars().count();
            tables::vowel(&key)
                .or_else(|| tables::special(&key))
                .map(|glyph| (glyph, consumed))
        })
    }
}

/// Up to `len` characters from `start`, clipped at the end of the word.
fn slice(chars: &[char], start: usize, len: usize) -> String {
    let end = (start + len).min(chars.len());
    chars[start.min(end)..end].iter().collect()
}
