// Dictionary providers: where a Dictionary comes from.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use super::{Dictionary, DictionaryError};

/// Source of a dictionary.
///
/// Hosts decide where words come from (a file, an embedded list, a
/// download); the engine only ever sees the resulting [`Dictionary`].
pub trait DictionaryProvider {
    fn load(&self) -> Result<Dictionary, DictionaryError>;
}

/// Loads the first existing file from an ordered list of candidate paths.
#[derive(Debug, Clone)]
pub struct FileDictionaryProvider {
    candidates: Vec<PathBuf>,
}

impl FileDictionaryProvider {
    /// A provider with a single candidate path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            candidates: vec![path.into()],
        }
    }

    /// A provider that tries each path in order.
    pub fn with_candidates(candidates: Vec<PathBuf>) -> Self {
        Self { candidates }
    }

    pub fn candidates(&self) -> &[PathBuf] {
        &self.candidates
    }

    /// The first candidate that is an existing regular file.
    pub fn locate(&self) -> Option<&Path> {
        self.candidates
            .iter()
            .map(PathBuf::as_path)
            .find(|p| p.is_file())
    }
}

impl DictionaryProvider for FileDictionaryProvider {
    fn load(&self) -> Result<Dictionary, DictionaryError> {
        let Some(path) = self.locate() else {
            tracing::debug!(searched = self.candidates.len(), "no dictionary file found");
            return Err(DictionaryError::Unavailable {
                searched: self.candidates.clone(),
            });
        };

        let io_err = |source| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(io_err)?;
        let dict = Dictionary::from_reader(BufReader::new(file)).map_err(io_err)?;

        tracing::info!(path = %path.display(), entries = dict.len(), "dictionary loaded");
        Ok(dict)
    }
}

/// Serves a fixed in-memory word list.
#[derive(Debug, Clone, Default)]
pub struct StaticDictionaryProvider {
    words: Vec<String>,
}

impl StaticDictionaryProvider {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }
}

impl DictionaryProvider for StaticDictionaryProvider {
    fn load(&self) -> Result<Dictionary, DictionaryError> {
        Ok(Dictionary::from_words(&self.words))
    }
}
