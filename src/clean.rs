//! Normalization of raw encyclopedia extracts
//!
//! Three passes, in this order:
//!
//! 1. newlines are dropped (lines are joined with no separator)
//! 2. every `( ... )` group without an inner `)` is deleted, parentheses included
//! 3. every run of decimal digits (any script) is replaced by its spelled-out
//!    Kyrgyz form
//!
//! Digits inside a deleted group never reach the number speller. Whitespace
//! around a deleted group is left as-is, so `"a (b) c"` becomes `"a  c"`.

use crate::numerals::{TOO_LARGE, number_to_words};
use regex::{Captures, Regex};
use std::sync::LazyLock;

static PARENTHETICAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\([^)]*\)").expect("parenthetical pattern is valid"));

static DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("digit pattern is valid"));

static DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d$").expect("digit pattern is valid"));

/// Run all normalization passes over an article extract.
///
/// # Example
///
/// ```
/// use termdict::clean::clean_article;
///
/// assert_eq!(clean_article("Round 5 times"), "Round беш times");
/// assert_eq!(clean_article("Bishkek (1926)\n is a city."), "Bishkek  is a city.");
/// ```
pub fn clean_article(raw: &str) -> String {
    let joined = strip_newlines(raw);
    let without_groups = strip_parentheticals(&joined);
    spell_numbers(&without_groups)
}

/// Remove `\n` and `\r` without inserting any separator.
pub fn strip_newlines(text: &str) -> String {
    text.chars().filter(|c| *c != '\n' && *c != '\r').collect()
}

/// Delete parenthesized groups.
///
/// Matching stops at the first closing parenthesis, so for nested input the
/// span from the outer `(` to the inner `)` is removed and the tail of the
/// outer group survives: `"a (b (c) d) e"` becomes `"a  d) e"`.
pub fn strip_parentheticals(text: &str) -> String {
    PARENTHETICAL.replace_all(text, "").into_owned()
}

/// Replace each maximal run of decimal digits with [`number_to_words`].
///
/// Any Unicode decimal digit counts, so `"١٢"` reads as twelve. Runs too long
/// to fit in a `u64` are spelled as [`TOO_LARGE`], the same as any other value
/// past the speller's range.
pub fn spell_numbers(text: &str) -> String {
    DIGITS
        .replace_all(text, |caps: &Captures| match parse_digits(&caps[0]) {
            Some(n) => number_to_words(n),
            None => TOO_LARGE.to_string(),
        })
        .into_owned()
}

/// Value of a digit run, `None` on `u64` overflow
fn parse_digits(run: &str) -> Option<u64> {
    run.chars().try_fold(0u64, |acc, c| {
        acc.checked_mul(10)?.checked_add(u64::from(digit_value(c)))
    })
}

/// Numeric value of one decimal digit
///
/// Decimal digits are encoded in contiguous blocks of ten starting at zero,
/// so the value is the offset from the start of the run of digit code points.
fn digit_value(c: char) -> u32 {
    if let Some(d) = c.to_digit(10) {
        return d;
    }
    let mut buf = [0u8; 4];
    let mut start = c as u32;
    while let Some(prev) = start.checked_sub(1).and_then(char::from_u32) {
        if !DIGIT.is_match(prev.encode_utf8(&mut buf)) {
            break;
        }
        start -= 1;
    }
    (c as u32 - start) % 10
}
