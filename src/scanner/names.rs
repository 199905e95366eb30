//! File name and extension normalization.
//!
//! Both roots must agree on what "the same name" means, so every key goes
//! through the same pipeline: Unicode NFC normalization, then lowercasing.
//!
//! # Background
//!
//! macOS uses NFD (Decomposed) normalization for file names, while Windows
//! and Linux typically use NFC (Composed). The same visual name can therefore
//! have different byte representations:
//!
//! - NFC: `café.ydr` - 'é' is U+00E9 (single code point)
//! - NFD: `café.ydr` - 'e' U+0065 + combining acute accent U+0301
//!
//! Without normalization a folder copied from a Mac would never match its
//! Windows counterpart.
//!
//! # Example
//!
//! ```
//! use namedupe::scanner::names::{name_key, normalize_extension};
//! use std::path::Path;
//!
//! assert_eq!(name_key(Path::new("/a/Cafe\u{0301}.YDR")).unwrap(), "café.ydr");
//! assert_eq!(normalize_extension("YCD").unwrap(), ".ycd");
//! ```

use std::path::Path;
use unicode_normalization::UnicodeNormalization;

/// Normalize a name to NFC and lowercase it.
///
/// # Example
///
/// ```
/// use namedupe::scanner::names::normalize_name;
///
/// assert_eq!(normalize_name("Skin.YDR"), "skin.ydr");
/// assert_eq!(normalize_name("cafe\u{0301}.ydr"), "café.ydr");
/// ```
#[must_use]
pub fn normalize_name(s: &str) -> String {
    s.nfc().collect::<String>().to_lowercase()
}

/// Grouping key for a file: its normalized, lowercased base name.
///
/// Returns `None` for paths without a final component (e.g. `/` or `..`).
/// Non-UTF-8 names are converted lossily.
#[must_use]
pub fn name_key(path: &Path) -> Option<String> {
    path.file_name()
        .map(|name| normalize_name(&name.to_string_lossy()))
}

/// Lowercased, dot-prefixed final suffix of a path (`"a/b.YDR"` → `".ydr"`).
///
/// Dotfiles such as `.ycd` have no extension, same as `Path::extension`.
#[must_use]
pub fn extension_key(path: &Path) -> Option<String> {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()))
}

/// Normalize user input into an extension filter entry.
///
/// Accepts `ycd`, `.ycd`, `.YCD` and surrounding whitespace. Returns `None`
/// for input that is empty or consists only of dots.
#[must_use]
pub fn normalize_extension(input: &str) -> Option<String> {
    let trimmed = input.trim().trim_start_matches('.');
    if trimmed.is_empty() {
        return None;
    }
    Some(format!(".{}", normalize_name(trimmed)))
}
