// --- File: src/lib.rs
//! Romanized Nepali to Devanagari transliteration for shop item names.
//!
//! ```
//! assert_eq!(romanizer_core::convert("steel thali"), "स्टिल थाली");
//! assert_eq!(romanizer_core::convert("namaste"), "नमस्ते");
//! ```

// The C API null-checks pointers before dereferencing them.
// Clippy cannot verify this statically, so we allow it at crate level.
#![allow(clippy::not_unsafe_ptr_arg_deref)]

pub mod c_api;
pub mod config;
pub mod core;

pub use crate::config::{ConfigError, WordsConfig};
pub use crate::core::engine::Romanizer;
pub use crate::core::types::{Preview, Suggestion};

/// Transliterates with the process-wide engine. See [`Romanizer::convert`].
pub fn convert<'a>(input: impl Into<Option<&'a str>>) -> String {
    Romanizer::global().convert(input)
}

/// Completions from the process-wide engine. See [`Romanizer::suggest`].
pub fn suggest<'a>(prefix: impl Into<Option<&'a str>>) -> Vec<Suggestion> {
    Romanizer::global().suggest(prefix)
}

/// See [`Romanizer::looks_romanized`].
pub fn looks_romanized<'a>(text: impl Into<Option<&'a str>>) -> bool {
    Romanizer::global().looks_romanized(text)
}
