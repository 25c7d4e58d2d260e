//! Item key normalization.

/// Normalize a menu item key for storage and lookup.
///
/// Keys are compared case-insensitively, so both sides of every comparison go
/// through this function: surrounding whitespace is dropped and the rest is
/// uppercased.
pub fn normalize_key(key: &str) -> String {
    key.trim().to_uppercase()
}
