// Character classification for input words and dictionary entries.
//
// Only the 52 ASCII letters are accepted as word characters. Case folding
// is plain ASCII lowercasing; no locale or Unicode tables are consulted.

/// Check whether a character is an ASCII letter (`A-Z` or `a-z`).
#[inline]
pub fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Convert an ASCII uppercase letter to lowercase. Other characters are
/// returned unchanged.
#[inline]
pub fn simple_lower(c: char) -> char {
    c.to_ascii_lowercase()
}

/// Find the first character of `word` that is not a letter.
///
/// Returns the character and its position (in characters, not bytes).
pub fn first_non_letter(word: &str) -> Option<(usize, char)> {
    word.chars().enumerate().find(|&(_, c)| !is_letter(c))
}

/// Lowercase every ASCII letter in `word`.
///
/// Dictionary entries and input words go through this same function so the
/// membership test compares like with like.
pub fn fold_case(word: &str) -> String {
    word.chars().map(simple_lower).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_letters_only() {
        assert!(is_letter('A'));
        assert!(is_letter('z'));
        assert!(!is_letter('\u{00E4}')); // ä
        assert!(!is_letter('0'));
        assert!(!is_letter(' '));
        assert!(!is_letter('-'));
    }

    #[test]
    fn simple_lower_basic() {
        assert_eq!(simple_lower('A'), 'a');
        assert_eq!(simple_lower('z'), 'z');
        assert_eq!(simple_lower('1'), '1');
    }

    #[test]
    fn first_non_letter_reports_char_position() {
        assert_eq!(first_non_letter("apple"), None);
        assert_eq!(first_non_letter("ap ple"), Some((2, ' ')));
        assert_eq!(first_non_letter("\u{00E4}b"), Some((0, '\u{00E4}')));
    }

    #[test]
    fn fold_case_mixed() {
        assert_eq!(fold_case("CaT"), "cat");
        assert_eq!(fold_case(""), "");
    }
}
