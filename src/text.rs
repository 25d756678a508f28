//! Text cleanup helpers shared by the normalizer, facet extraction and
//! the filter pipeline.

use once_cell::sync::Lazy;
use regex::Regex;

/// Anything that is not a letter, digit or whitespace. Facet matching
/// strips these from record fields before comparing; free-text search
/// deliberately does not, so the two stages can disagree on punctuated
/// source data.
static NON_FACET_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-zA-Z0-9\s]").expect("valid regex"));

/// Anything that is not a digit or a decimal point.
static NON_NUMERIC_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^0-9.]").expect("valid regex"));

/// Strip stray punctuation from a facet field, keeping letters, digits
/// and whitespace.
pub fn strip_punctuation(input: &str) -> String {
    NON_FACET_CHARS.replace_all(input, "").into_owned()
}

/// Parse a possibly currency-formatted value ("$1,234.50") as a number.
/// Everything but digits and "." is dropped first; an empty or
/// unparseable remainder degrades to 0.0 rather than failing.
pub fn clean_number(input: &str) -> f64 {
    let cleaned = NON_NUMERIC_CHARS.replace_all(input, "");
    if cleaned.is_empty() {
        0.0
    } else {
        cleaned.parse().unwrap_or(0.0)
    }
}

/// Case-insensitive substring test.
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_punctuation_keeps_letters_digits_whitespace() {
        assert_eq!(strip_punctuation("France*"), "France");
        assert_eq!(strip_punctuation("Nero d'Avola"), "Nero dAvola");
        assert_eq!(strip_punctuation("Rhône 2019"), "Rhne 2019");
        assert_eq!(strip_punctuation("plain text"), "plain text");
    }

    #[test]
    fn clean_number_strips_currency_noise() {
        assert_eq!(clean_number("$1,234.50"), 1234.5);
        assert_eq!(clean_number("25"), 25.0);
        assert_eq!(clean_number("~ $19.99 !"), 19.99);
    }

    #[test]
    fn clean_number_degrades_to_zero() {
        assert_eq!(clean_number(""), 0.0);
        assert_eq!(clean_number("N/A"), 0.0);
        // Two decimal points survive the strip but fail the parse.
        assert_eq!(clean_number("1.2.3"), 0.0);
    }

    #[test]
    fn contains_ci_ignores_case() {
        assert!(contains_ci("Cabernet Sauvignon", "cabernet"));
        assert!(contains_ci("GEWÜRZTRAMINER", "gewürz"));
        assert!(!contains_ci("Merlot", "pinot"));
    }
}
