//! Identifier Normalizer
//!
//! Turns display text ("Đỏ tươi", "  navy   blue ") into compact ASCII
//! uppercase tokens usable as SKU fragments.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Normalize display text into an uppercase ASCII token
///
/// - strips diacritics (NFD decomposition, combining marks dropped, plus the
///   stroke letters that have no decomposition such as `Đ`)
/// - drops everything outside `[A-Za-z0-9]` and whitespace
/// - collapses whitespace runs into a single space and trims the ends
/// - upper-cases, then truncates to `max_len` characters when given
///
/// Empty input (or input with nothing representable) yields an empty string.
pub fn normalize(text: &str, max_len: Option<usize>) -> String {
    let folded: String = text
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(fold_stroke_letter)
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
        .collect();

    let collapsed = folded.split_whitespace().collect::<Vec<_>>().join(" ");
    let upper = collapsed.to_ascii_uppercase();

    match max_len {
        Some(len) => upper.chars().take(len).collect::<String>().trim_end().to_string(),
        None => upper,
    }
}

/// Normalize and remove internal whitespace entirely
///
/// Used for per-value SKU fragments where a space would break the token.
pub fn normalize_compact(text: &str, max_len: Option<usize>) -> String {
    let compact: String = normalize(text, None)
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    match max_len {
        Some(len) => compact.chars().take(len).collect(),
        None => compact,
    }
}

// Letters whose diacritic is part of the glyph and survive NFD.
fn fold_stroke_letter(c: char) -> char {
    match c {
        'Đ' | 'Ð' => 'D',
        'đ' | 'ð' => 'd',
        'Ø' => 'O',
        'ø' => 'o',
        'Ł' => 'L',
        'ł' => 'l',
        'Ħ' => 'H',
        'ħ' => 'h',
        'ı' => 'i',
        _ => c,
    }
}
