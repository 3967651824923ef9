// RewordedHandle: long-lived entry point for hosts.
//
// Owns the shared dictionary store and the run options. Every call to
// `generate` or `spawn` is an independent, stateless run against the
// dictionary snapshot current at the time of the call. The handle itself
// keeps no per-run state, so a host can share it behind an Arc.

use std::sync::Arc;

use reworded_core::letters::Letters;
use reworded_core::report::Reports;
use reworded_core::threshold::MinLength;

use crate::GenerateError;
use crate::control::{CancelToken, GenerateOptions, GenerationLimits};
use crate::dictionary::{Dictionary, DictionaryError, DictionaryProvider, DictionaryStore};
use crate::pipeline::generate_with;
use crate::worker::{self, GenerationTask};

/// Top-level handle combining a dictionary store with run options.
pub struct RewordedHandle {
    store: Arc<DictionaryStore>,
    options: GenerateOptions,
}

impl RewordedHandle {
    /// A handle with no dictionary loaded. Runs fail with
    /// [`GenerateError::DictionaryUnavailable`] until one is installed.
    pub fn new() -> Self {
        Self::with_store(Arc::new(DictionaryStore::new()))
    }

    /// A handle sharing an existing store, e.g. one a host reloads from
    /// elsewhere.
    pub fn with_store(store: Arc<DictionaryStore>) -> Self {
        Self {
            store,
            options: GenerateOptions::default(),
        }
    }

    pub fn with_dictionary(dictionary: Dictionary) -> Self {
        Self::with_store(Arc::new(DictionaryStore::with_dictionary(dictionary)))
    }

    /// Load a dictionary from `provider` and create a handle around it.
    pub fn from_provider(provider: &dyn DictionaryProvider) -> Result<Self, DictionaryError> {
        let handle = Self::new();
        handle.store.load_from(provider)?;
        Ok(handle)
    }

    // =========================================================================
    // Generation
    // =========================================================================

    /// Run the engine synchronously on the calling thread.
    pub fn generate(&self, word: &str, min_length: MinLength) -> Result<Reports, GenerateError> {
        self.generate_cancellable(word, min_length, &CancelToken::new())
    }

    /// Run the engine synchronously, stopping early if `cancel` fires.
    pub fn generate_cancellable(
        &self,
        word: &str,
        min_length: MinLength,
        cancel: &CancelToken,
    ) -> Result<Reports, GenerateError> {
        let (letters, dictionary) = self.prepare(word)?;
        generate_with(&letters, min_length, &dictionary, &self.options, cancel)
    }

    /// Run the engine on a worker thread.
    ///
    /// Input validation and the dictionary check happen here, on the
    /// calling thread, so those errors are reported before anything is
    /// spawned.
    pub fn spawn(&self, word: &str, min_length: MinLength) -> Result<GenerationTask, GenerateError> {
        let (letters, dictionary) = self.prepare(word)?;
        Ok(worker::spawn(dictionary, letters, min_length, self.options))
    }

    /// Parse a threshold typed by a user, logging when the default is
    /// substituted.
    pub fn resolve_min_length(&self, text: &str) -> MinLength {
        let resolution = MinLength::parse(text);
        if let Some(raw) = &resolution.substituted {
            tracing::warn!(
                input = %raw,
                default = %resolution.value,
                "minimum length is not a positive integer; using default"
            );
        }
        resolution.value
    }

    fn prepare(&self, word: &str) -> Result<(Letters, Arc<Dictionary>), GenerateError> {
        let letters = Letters::new(word)?;
        let dictionary = self
            .store
            .snapshot()
            .ok_or(GenerateError::DictionaryUnavailable)?;
        Ok((letters, dictionary))
    }

    // =========================================================================
    // Dictionary
    // =========================================================================

    /// The shared store, for hosts that reload dictionaries.
    pub fn store(&self) -> &Arc<DictionaryStore> {
        &self.store
    }

    pub fn is_dictionary_loaded(&self) -> bool {
        self.store.is_loaded()
    }

    /// Number of entries in the current dictionary, or `None` if none is
    /// loaded.
    pub fn dictionary_len(&self) -> Option<usize> {
        self.store.snapshot().map(|d| d.len())
    }

    /// Replace the current dictionary. Runs already in progress keep the
    /// snapshot they started with.
    pub fn set_dictionary(&self, dictionary: Dictionary) {
        self.store.replace(dictionary);
    }

    /// Reload from a provider. On failure the current dictionary stays.
    pub fn reload(&self, provider: &dyn DictionaryProvider) -> Result<usize, DictionaryError> {
        self.store.load_from(provider)
    }

    // =========================================================================
    // Option setters
    // =========================================================================

    pub fn options(&self) -> &GenerateOptions {
        &self.options
    }

    pub fn set_limits(&mut self, limits: GenerationLimits) {
        self.options.limits = limits;
    }

    /// Reject words longer than `value` letters. `None` removes the limit.
    pub fn set_max_letters(&mut self, value: Option<usize>) {
        self.options.limits.max_letters = value;
    }

    /// Abort runs producing more than `value` distinct strings. `None`
    /// removes the limit.
    pub fn set_max_generated(&mut self, value: Option<usize>) {
        self.options.limits.max_generated = value;
    }

    pub fn set_cancel_check_interval(&mut self, value: usize) {
        self.options.cancel_check_interval = value.max(1);
    }
}

impl Default for RewordedHandle {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::StaticDictionaryProvider;
    use crate::LimitKind;

    #[test]
    fn no_dictionary_is_distinct_from_empty_dictionary() {
        let unloaded = RewordedHandle::new();
        assert_eq!(
            unloaded.generate("ab", MinLength::new(2)),
            Err(GenerateError::DictionaryUnavailable)
        );

        assert!(!unloaded.is_dictionary_loaded());
        assert_eq!(unloaded.dictionary_len(), None);

        let empty = RewordedHandle::with_dictionary(Dictionary::empty());
        assert!(empty.is_dictionary_loaded());
        let reports = empty.generate("ab", MinLength::new(2)).unwrap();
        assert_eq!(reports.all.total, 2);
        assert_eq!(reports.valid.total, 0);
    }

    #[test]
    fn invalid_input_wins_over_missing_dictionary() {
        let handle = RewordedHandle::new();
        assert!(matches!(
            handle.generate("a b", MinLength::new(1)),
            Err(GenerateError::InvalidInput(_))
        ));
    }

    #[test]
    fn from_provider_loads() {
        let handle = RewordedHandle::from_provider(&StaticDictionaryProvider::new(["ab", "ba"]))
            .unwrap();
        assert_eq!(handle.dictionary_len(), Some(2));
        let reports = handle.generate("ab", MinLength::new(2)).unwrap();
        assert_eq!(reports.valid.total, 2);
    }

    #[test]
    fn set_dictionary_affects_later_runs() {
        let handle = RewordedHandle::with_dictionary(Dictionary::empty());
        assert_eq!(handle.generate("ab", MinLength::new(2)).unwrap().valid.total, 0);
        handle.set_dictionary(Dictionary::from_words(["ba"]));
        assert_eq!(handle.generate("ab", MinLength::new(2)).unwrap().valid.total, 1);
    }

    #[test]
    fn resolve_min_length_substitutes_default() {
        let handle = RewordedHandle::new();
        assert_eq!(handle.resolve_min_length("4"), MinLength::new(4));
        assert_eq!(handle.resolve_min_length("x"), MinLength::new(2));
    }

    #[test]
    fn limits_apply() {
        let mut handle = RewordedHandle::with_dictionary(Dictionary::empty());
        handle.set_max_letters(Some(3));
        assert_eq!(
            handle.generate("abcd", MinLength::new(4)),
            Err(GenerateError::LimitExceeded {
                kind: LimitKind::Letters,
                limit: 3
            })
        );
        handle.set_limits(GenerationLimits::default());
        assert!(handle.generate("abcd", MinLength::new(4)).is_ok());
    }

    #[test]
    fn cancel_check_interval_never_drops_to_zero() {
        let mut handle = RewordedHandle::new();
        handle.set_cancel_check_interval(64);
        assert_eq!(handle.options().cancel_check_interval, 64);
        handle.set_cancel_check_interval(0);
        assert_eq!(handle.options().cancel_check_interval, 1);
    }

    #[test]
    fn spawn_runs_in_background() {
        let handle = RewordedHandle::with_dictionary(Dictionary::from_words(["act", "cat"]));
        let task = handle.spawn("cat", MinLength::new(3)).unwrap();
        let reports = task.wait().unwrap();
        assert_eq!(reports.valid.group(3).unwrap().words, vec!["act", "cat"]);
    }

    #[test]
    fn spawn_reports_missing_dictionary_synchronously() {
        let handle = RewordedHandle::new();
        assert!(matches!(
            handle.spawn("cat", MinLength::new(3)),
            Err(GenerateError::DictionaryUnavailable)
        ));
    }

    #[test]
    fn cancellable_run_honors_token() {
        let handle = RewordedHandle::with_dictionary(Dictionary::empty());
        let cancel = CancelToken::new();
        cancel.cancel();
        assert_eq!(
            handle.generate_cancellable("abc", MinLength::new(1), &cancel),
            Err(GenerateError::Cancelled)
        );
    }
}
