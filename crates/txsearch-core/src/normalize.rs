//! Search key normalization
//!
//! Stored notes and incoming queries go through the same `normalize`, so
//! any rule added here must apply to both sides.

use unicode_normalization::UnicodeNormalization;

/// Lowercase, strip diacritics and whitespace, fold each run of `đ` to one `d`
pub fn normalize(s: &str) -> String {
    let mut key = String::with_capacity(s.len());
    let mut in_stroke_run = false;
    for c in s
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c) && !is_space(*c))
    {
        // đ carries a stroke, not a combining mark, so NFD leaves it intact
        if c == 'đ' {
            if !in_stroke_run {
                key.push('d');
            }
            in_stroke_run = true;
        } else {
            key.push(c);
            in_stroke_run = false;
        }
    }
    key
}

/// Query form used for amount comparison: the normalized query without dots
pub fn amount_form(normalized: &str) -> String {
    normalized.chars().filter(|c| *c != '.').collect()
}

fn is_combining_mark(c: char) -> bool {
    ('\u{0300}'..='\u{036F}').contains(&c)
}

fn is_space(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}
