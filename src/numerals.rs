//! Kyrgyz number names
//!
//! Spells out non-negative integers below ten thousand. Larger values collapse
//! to [`TOO_LARGE`] instead of failing, so article text can always be rewritten.
//!
//! # Example
//!
//! ```
//! use termdict::numerals::number_to_words;
//!
//! assert_eq!(number_to_words(5), "беш");
//! assert_eq!(number_to_words(42), "кырк эки");
//! assert_eq!(number_to_words(1991), "бир миң тогуз жүз токсон бир");
//! ```

const UNITS: [&str; 10] = [
    "ноль", "бир", "эки", "уч", "төрт", "беш", "алты", "жети", "сегиз", "тогуз",
];

/// 10..=19, indexed by `n - 10`
const TEENS: [&str; 10] = [
    "он",
    "он бир",
    "он эки",
    "он уч",
    "он төрт",
    "он беш",
    "он алты",
    "он жети",
    "он сегиз",
    "он тогуз",
];

/// Tens digit 2..=9 for two-digit numbers from twenty up; 0 and 1 are unused
const TENS: [&str; 10] = [
    "", "", "жыйырма", "отуз", "кырк", "элүү", "алтымыш", "жетимиш", "сексен", "токсон",
];

const HUNDRED: &str = "жүз";
const THOUSAND: &str = "миң";

/// Returned for any value of ten thousand or more
pub const TOO_LARGE: &str = "Сан сыяктырды";

/// Spell out `number` in Kyrgyz.
///
/// Hundreds and thousands always carry their leading digit word ("бир жүз"),
/// and a zero remainder is dropped rather than spelled as "ноль".
pub fn number_to_words(number: u64) -> String {
    match number {
        0..=9 => UNITS[number as usize].to_string(),
        10..=19 => TEENS[(number - 10) as usize].to_string(),
        20..=99 => {
            let tens = TENS[(number / 10) as usize];
            match number % 10 {
                0 => tens.to_string(),
                units => format!("{} {}", tens, UNITS[units as usize]),
            }
        }
        100..=999 => with_scale(number, 100, HUNDRED),
        1_000..=9_999 => with_scale(number, 1_000, THOUSAND),
        _ => TOO_LARGE.to_string(),
    }
}

fn with_scale(number: u64, scale: u64, word: &str) -> String {
    let head = UNITS[(number / scale) as usize];
    match number % scale {
        0 => format!("{} {}", head, word),
        rest => format!("{} {} {}", head, word, number_to_words(rest)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_units() {
        assert_eq!(number_to_words(0), "ноль");
        assert_eq!(number_to_words(1), "бир");
        assert_eq!(number_to_words(9), "тогуз");
    }

    #[test]
    fn test_teens_are_distinct_from_tens() {
        assert_eq!(number_to_words(10), "он");
        assert_eq!(number_to_words(11), "он бир");
        assert_eq!(number_to_words(19), "он тогуз");
        assert_ne!(number_to_words(11), number_to_words(20));
    }

    #[test]
    fn test_two_digit_numbers() {
        assert_eq!(number_to_words(20), "жыйырма");
        assert_eq!(number_to_words(21), "жыйырма бир");
        assert_eq!(number_to_words(50), "элүү");
        assert_eq!(number_to_words(99), "токсон тогуз");
    }

    #[test]
    fn test_hundreds_skip_zero_filler() {
        assert_eq!(number_to_words(100), "бир жүз");
        assert_eq!(number_to_words(101), "бир жүз бир");
        assert_eq!(number_to_words(110), "бир жүз он");
        assert_eq!(number_to_words(999), "тогуз жүз токсон тогуз");
    }

    #[test]
    fn test_thousands() {
        assert_eq!(number_to_words(1000), "бир миң");
        assert_eq!(number_to_words(1001), "бир миң бир");
        assert_eq!(number_to_words(2024), "эки миң жыйырма төрт");
        assert_eq!(number_to_words(9999), "тогуз миң тогуз жүз токсон тогуз");
    }

    #[test]
    fn test_too_large_falls_back() {
        assert_eq!(number_to_words(10_000), TOO_LARGE);
        assert_eq!(number_to_words(123_456), TOO_LARGE);
        assert_eq!(number_to_words(u64::MAX), TOO_LARGE);
    }

    #[test]
    fn test_whole_range_is_spelled() {
        for n in 0..10_000 {
            let words = number_to_words(n);
            assert!(!words.is_empty(), "empty output for {}", n);
            assert_ne!(words, TOO_LARGE, "fallback used for {}", n);
            assert_eq!(words, number_to_words(n));
            if n > 0 {
                assert!(!words.contains("ноль"), "zero filler in {} -> {}", n, words);
            }
            assert!(!words.contains("  "), "double space in {} -> {}", n, words);
        }
    }
}
