// --- File: tests/late_init.rs
// Runs in its own process: the global engine is built before any word list.
use romanizer_core::c_api::romanizer_init;
use romanizer_core::{convert, ConfigError, Romanizer};
use std::ffi::CString;

const KARAI: &str = r#"
[[words]]
romanized = "karai"
nepali = "कराई"
"#;

#[test]
fn word_list_after_first_use_is_rejected() {
    let before = convert("karai");
    assert_ne!(before, "कराई");

    let err = Romanizer::init_custom(KARAI.to_string()).unwrap_err();
    assert!(matches!(err, ConfigError::AlreadyInitialized));

    let toml = CString::new(KARAI).unwrap();
    assert!(!romanizer_init(toml.as_ptr()));

    assert_eq!(convert("karai"), before);
}
