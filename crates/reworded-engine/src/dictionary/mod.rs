// Dictionary word set, its providers, and the shared snapshot store.

pub mod provider;
pub mod store;

use std::io::{self, BufRead};
use std::path::PathBuf;

use hashbrown::HashSet;
use reworded_core::character::fold_case;

pub use provider::{DictionaryProvider, FileDictionaryProvider, StaticDictionaryProvider};
pub use store::DictionaryStore;

/// Default dictionary file name looked up by file-backed providers.
pub const DEFAULT_DICTIONARY_FILE: &str = "words_alpha.txt";

/// Error type for dictionary loading.
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    /// None of the candidate locations held a dictionary file.
    #[error("no dictionary found (searched {} location(s))", searched.len())]
    Unavailable { searched: Vec<PathBuf> },

    /// A dictionary file exists but could not be read.
    #[error("failed to read dictionary {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A set of lowercase words used to classify generated strings.
///
/// Entries are trimmed and lowercased on insertion; blank lines are skipped.
/// An empty dictionary is valid and simply matches nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    /// A dictionary with no entries.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from in-memory words, normalizing each one.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dict = Self::empty();
        for w in words {
            dict.insert(w.as_ref());
        }
        dict
    }

    /// Parse the one-word-per-line text format.
    pub fn parse(text: &str) -> Self {
        Self::from_words(text.lines())
    }

    /// Read the one-word-per-line text format from a reader.
    pub fn from_reader<R: BufRead>(reader: R) -> io::Result<Self> {
        let mut dict = Self::empty();
        for line in reader.lines() {
            dict.insert(&line?);
        }
        Ok(dict)
    }

    /// Insert one entry. Returns `false` for blank entries and duplicates.
    pub fn insert(&mut self, word: &str) -> bool {
        let word = word.trim();
        if word.is_empty() {
            return false;
        }
        self.words.insert(fold_case(word))
    }

    /// Exact membership test. `word` is expected to be lowercase already.
    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for Dictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_words(iter)
    }
}
