//! Minimal markup escaper for note text.
//!
//! Only `&`, `<` and `>` are replaced. Quotes pass through untouched, so the
//! output is safe for element content but not for attribute values.
//!
//! Escaping is single-pass: text that already contains entities is escaped
//! again (`&amp;` becomes `&amp;amp;`).

/// Escapes `&`, `<` and `>` for embedding into element content.
///
/// `&` is handled first so entities introduced for `<`/`>` are not escaped a
/// second time.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escapes optional text, treating absent input as empty.
pub fn escape_optional(text: Option<&str>) -> String {
    escape_html(text.unwrap_or_default())
}
