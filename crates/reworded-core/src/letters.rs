// Letter slots of one input word.

use std::fmt;

use crate::InputError;
use crate::character::{first_non_letter, simple_lower};

/// The validated, lowercased letters of an input word.
///
/// Each position is a distinct slot: `"aa"` has two slots even though both
/// hold the same character. Enumeration works on slots, and duplicate
/// strings are collapsed only when results are collected into a set.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Letters {
    slots: Vec<char>,
}

impl Letters {
    /// Validate and normalize an input word.
    ///
    /// Surrounding whitespace is trimmed first. The remaining text must be
    /// non-empty and consist of ASCII letters only; it is lowercased.
    pub fn new(word: &str) -> Result<Self, InputError> {
        let word = word.trim();
        if word.is_empty() {
            return Err(InputError::Empty);
        }
        if let Some((position, ch)) = first_non_letter(word) {
            return Err(InputError::NonAlphabetic { ch, position });
        }
        Ok(Self {
            slots: word.chars().map(simple_lower).collect(),
        })
    }

    /// Number of slots (`n`).
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Always `false` for a successfully constructed value.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The slots in their original order.
    pub fn as_slice(&self) -> &[char] {
        &self.slots
    }

    /// Read the characters at the given positions, in the given order.
    ///
    /// Positions must be in range; callers obtain them from the subset
    /// enumerator, which only yields valid indices.
    pub fn pick(&self, positions: &[usize]) -> Vec<char> {
        positions.iter().map(|&i| self.slots[i]).collect()
    }
}

impl fmt::Display for Letters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &c in &self.slots {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

impl TryFrom<&str> for Letters {
    type Error = InputError;

    fn try_from(word: &str) -> Result<Self, Self::Error> {
        Self::new(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_lowercases() {
        let l = Letters::new("CaT").unwrap();
        assert_eq!(l.as_slice(), &['c', 'a', 't']);
        assert_eq!(l.to_string(), "cat");
        assert_eq!(l.len(), 3);
    }

    #[test]
    fn new_trims_surrounding_whitespace() {
        let l = Letters::new("  apple\n").unwrap();
        assert_eq!(l.to_string(), "apple");
    }

    #[test]
    fn empty_is_rejected() {
        assert_eq!(Letters::new(""), Err(InputError::Empty));
        assert_eq!(Letters::new("   "), Err(InputError::Empty));
    }

    #[test]
    fn non_letters_are_rejected() {
        assert_eq!(
            Letters::new("ab3"),
            Err(InputError::NonAlphabetic { ch: '3', position: 2 })
        );
        assert_eq!(
            Letters::new("two words"),
            Err(InputError::NonAlphabetic { ch: ' ', position: 3 })
        );
        assert!(Letters::new("caf\u{00E9}").is_err());
    }

    #[test]
    fn duplicate_letters_keep_separate_slots() {
        let l = Letters::new("aa").unwrap();
        assert_eq!(l.len(), 2);
        assert_eq!(l.pick(&[1, 0]), vec!['a', 'a']);
    }

    #[test]
    fn pick_follows_given_order() {
        let l = Letters::try_from("cat").unwrap();
        assert_eq!(l.pick(&[2, 0]), vec!['t', 'c']);
    }
}
