// --- File: src/c_api.rs
// C entry points for UI hosts that embed the romanizer.
// Every call goes through catch_unwind so no panic crosses the boundary;
// this needs the unwinding panic strategy, which the release profile keeps.
use crate::Romanizer;
use std::ffi::{c_char, CStr, CString};
use std::panic::{catch_unwind, AssertUnwindSafe};

/// Borrows a C string. Null or invalid UTF-8 reads as absent input.
unsafe fn read_str<'a>(ptr: *const c_char) -> Option<&'a str> {
    if ptr.is_null() {
        return None;
    }
    CStr::from_ptr(ptr).to_str().ok()
}

fn into_c_string(s: String) -> *mut c_char {
    // Devanagari output never contains NUL; fall back to "" if input did.
    CString::new(s).unwrap_or_default().into_raw()
}

/// Installs a custom TOML word list. Must run before any other call.
/// Null installs nothing and reports success.
#[no_mangle]
pub extern "C" fn romanizer_init(words_toml: *const c_char) -> bool {
    let Some(toml) = (unsafe { read_str(words_toml) }) else {
        return words_toml.is_null();
    };
    let result = catch_unwind(AssertUnwindSafe(|| match Romanizer::init_custom(toml.to_string()) {
        Ok(()) => {
            let words = Romanizer::global().lexicon().len();
            tracing::debug!(words, "romanizer initialized with custom words");
            true
        }
        Err(e) => {
            tracing::warn!("romanizer init failed: {e}");
            false
        }
    }));
    result.unwrap_or(false)
}

#[no_mangle]
pub extern "C" fn romanizer_convert(input: *const c_char) -> *mut c_char {
    let text = unsafe { read_str(input) };
    let result = catch_unwind(AssertUnwindSafe(|| Romanizer::global().convert(text)));
    into_c_string(result.unwrap_or_default())
}

/// Returns a JSON array of `{"romanized", "nepali"}` objects.
#[no_mangle]
pub extern "C" fn romanizer_suggest(prefix: *const c_char) -> *mut c_char {
    let text = unsafe { read_str(prefix) };
    let result = catch_unwind(AssertUnwindSafe(|| {
        let suggestions = Romanizer::global().suggest(text);
        serde_json::to_string(&suggestions).unwrap_or_else(|_| "[]".to_string())
    }));
    into_c_string(result.unwrap_or_else(|_| "[]".to_string()))
}

/// Returns the JSON preview for an input field.
#[no_mangle]
pub extern "C" fn romanizer_preview(input: *const c_char) -> *mut c_char {
    let text = unsafe { read_str(input) };
    let result = catch_unwind(AssertUnwindSafe(|| {
        let preview = Romanizer::global().preview(text);
        serde_json::to_string(&preview).unwrap_or_else(|_| "{}".to_string())
    }));
    into_c_string(result.unwrap_or_else(|_| "{}".to_string()))
}

#[no_mangle]
pub extern "C" fn romanizer_looks_romanized(text: *const c_char) -> bool {
    let text = unsafe { read_str(text) };
    catch_unwind(AssertUnwindSafe(|| Romanizer::global().looks_romanized(text))).unwrap_or(false)
}

/// Frees a string returned by this library.
#[no_mangle]
pub extern "C" fn romanizer_free_string(s: *mut c_char) {
    if !s.is_null() {
        unsafe {
            let _ = CString::from_raw(s);
        }
    }
}
