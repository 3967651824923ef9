// Shared dictionary snapshot.
//
// Runs never read through the lock: they clone the current Arc once and
// classify against that snapshot, so a concurrent reload is either fully
// visible to a run or not at all.

use std::sync::Arc;

use parking_lot::RwLock;

use super::{Dictionary, DictionaryError, DictionaryProvider};

/// Holds the currently loaded dictionary, if any.
#[derive(Debug, Default)]
pub struct DictionaryStore {
    current: RwLock<Option<Arc<Dictionary>>>,
}

impl DictionaryStore {
    /// A store with no dictionary loaded.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dictionary(dictionary: Dictionary) -> Self {
        Self {
            current: RwLock::new(Some(Arc::new(dictionary))),
        }
    }

    /// The dictionary as of now. Later replacements do not affect it.
    pub fn snapshot(&self) -> Option<Arc<Dictionary>> {
        self.current.read().clone()
    }

    pub fn is_loaded(&self) -> bool {
        self.current.read().is_some()
    }

    /// Install a new dictionary, returning the previous one.
    pub fn replace(&self, dictionary: Dictionary) -> Option<Arc<Dictionary>> {
        let entries = dictionary.len();
        let previous = self.current.write().replace(Arc::new(dictionary));
        tracing::info!(entries, replaced = previous.is_some(), "dictionary installed");
        previous
    }

    /// Drop the current dictionary, returning to the "not loaded" state.
    pub fn clear(&self) -> Option<Arc<Dictionary>> {
        self.current.write().take()
    }

    /// Load from `provider` and install the result.
    ///
    /// On failure the current dictionary, if any, is kept.
    pub fn load_from(&self, provider: &dyn DictionaryProvider) -> Result<usize, DictionaryError> {
        let dictionary = provider.load()?;
        let entries = dictionary.len();
        self.replace(dictionary);
        Ok(entries)
    }
}
