//! Character-class and number counts.

use std::sync::LazyLock;

use regex::Regex;

static NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[-+(]?[$€£]?[-+(]?\d+\)?\b").expect("valid regex literal")
});

/// Simple character-class tallies of a cleaned document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharCounts {
    /// ASCII letters plus ASCII digits.
    pub alphanumeric: usize,
    /// ASCII letters `A`-`Z`.
    pub alphabetic: usize,
    /// ASCII digits `0`-`9`.
    pub digits: usize,
    /// Standalone digit runs, optionally signed or with a currency mark.
    pub numbers: usize,
}

/// Count letters, digits and numbers in cleaned text.
///
/// Only upper-case letters are counted. The document pipeline passes the
/// output of [`crate::Cleaner::clean`], where non-word runs are already
/// spaces, so `1,250.5` counts as three numbers there. On text that still
/// has punctuation, `.` and `,` directly before a digit are removed (so
/// `1,000.50` is one number) and the remaining ASCII punctuation separates
/// numbers.
pub fn char_counts(cleaned: &str) -> CharCounts {
    let mut alphabetic = 0;
    let mut digits = 0;
    for b in cleaned.bytes() {
        match b {
            b'A'..=b'Z' => alphabetic += 1,
            b'0'..=b'9' => digits += 1,
            _ => {}
        }
    }

    CharCounts {
        alphanumeric: alphabetic + digits,
        alphabetic,
        digits,
        numbers: count_numbers(cleaned),
    }
}

fn count_numbers(text: &str) -> usize {
    let mut joined = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        let before_digit = chars.peek().is_some_and(|n| n.is_ascii_digit());
        if (c == '.' || c == ',') && before_digit {
            continue;
        }
        joined.push(if c.is_ascii_punctuation() { ' ' } else { c });
    }
    NUMBER.find_iter(&joined).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_ascii_letters_and_digits() {
        let c = char_counts("ABC 12 É");
        assert_eq!(c.alphabetic, 3);
        assert_eq!(c.digits, 2);
        assert_eq!(c.alphanumeric, 5);
    }

    #[test]
    fn lowercase_letters_are_not_counted() {
        assert_eq!(char_counts("abc").alphabetic, 0);
    }

    #[test]
    fn separators_inside_numbers_do_not_split_them() {
        assert_eq!(char_counts("REVENUE WAS $1,000.50 IN 2024").numbers, 2);
    }

    #[test]
    fn digits_glued_to_letters_are_not_numbers() {
        assert_eq!(char_counts("ITEM 7A AND 10-K").numbers, 1);
    }

    #[test]
    fn signed_and_parenthesized_numbers_count_once() {
        assert_eq!(char_counts("(25) -3 +4").numbers, 3);
    }

    #[test]
    fn collapsed_separators_split_numbers() {
        assert_eq!(char_counts("REVENUE WAS 1 000 50 IN 2024").numbers, 4);
    }

    #[test]
    fn underscores_separate_numbers() {
        assert_eq!(char_counts("FY_2023_2024").numbers, 2);
    }

    #[test]
    fn empty_text_has_no_counts() {
        assert_eq!(char_counts(""), CharCounts::default());
    }
}
