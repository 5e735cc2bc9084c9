// --- File: src/core/mod.rs
pub mod converter;
pub mod engine;
pub mod lexicon;
pub mod tables;
pub mod trie;
pub mod types;
