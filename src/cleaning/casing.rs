//! Title-case normalization.
//!
//! The whole string is lower-cased first, then the first alphabetic character of every maximal
//! run of Unicode word characters (`\w`: letters, combining marks, digits and connector
//! punctuation such as `_`) is upper-cased. This is locale-insensitive and
//! lossy: acronyms such as `NASA` become `Nasa`, and `McDonald` becomes `Mcdonald`.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::{Cell, Grid};

static WORD_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").expect("word run pattern is valid"));

/// Returns a new grid with every non-blank text cell rewritten to title case.
///
/// Blank text cells and non-text cells pass through unchanged.
pub fn normalize_casing(grid: &Grid) -> Grid {
    grid.map_cells(|cell| match cell {
        Cell::Text(s) if !s.trim().is_empty() => Cell::Text(title_case(s)),
        other => other.clone(),
    })
}

/// Convert `input` to title case.
pub fn title_case(input: &str) -> String {
    let lowered = input.to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    let mut last = 0;

    for word in WORD_RUN.find_iter(&lowered) {
        out.push_str(&lowered[last..word.start()]);
        capitalize_first_letter(word.as_str(), &mut out);
        last = word.end();
    }
    out.push_str(&lowered[last..]);
    out
}

fn capitalize_first_letter(word: &str, out: &mut String) {
    match word.char_indices().find(|(_, ch)| ch.is_alphabetic()) {
        Some((at, ch)) => {
            out.push_str(&word[..at]);
            out.extend(ch.to_uppercase());
            out.push_str(&word[at + ch.len_utf8()..]);
        }
        None => out.push_str(word),
    }
}
