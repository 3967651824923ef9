// Background execution of a single generation run.
//
// A run can take a long time for longer words, so hosts with an event loop
// hand it to a worker thread and poll or wait for the result. Each task
// owns exactly one run; dropping the task cancels it.

use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread::{self, JoinHandle};

use reworded_core::letters::Letters;
use reworded_core::report::Reports;
use reworded_core::threshold::MinLength;

use crate::GenerateError;
use crate::control::{CancelToken, GenerateOptions};
use crate::dictionary::Dictionary;
use crate::pipeline::generate_with;

/// A generation run executing on its own thread.
pub struct GenerationTask {
    receiver: Receiver<Result<Reports, GenerateError>>,
    cancel: CancelToken,
    thread: Option<JoinHandle<()>>,
}

impl GenerationTask {
    /// Ask the run to stop at its next cancellation check. The task then
    /// resolves to [`GenerateError::Cancelled`] unless it already finished.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// A token that cancels this run when triggered.
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Whether the worker thread has exited.
    pub fn is_finished(&self) -> bool {
        self.thread.as_ref().is_none_or(JoinHandle::is_finished)
    }

    /// Non-blocking poll. Returns `None` while the run is still going.
    pub fn try_result(&mut self) -> Option<Result<Reports, GenerateError>> {
        match self.receiver.try_recv() {
            Ok(result) => {
                self.join();
                Some(result)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                self.join();
                Some(Err(GenerateError::WorkerDisconnected))
            }
        }
    }

    /// Block until the run delivers its result.
    pub fn wait(mut self) -> Result<Reports, GenerateError> {
        let result = self
            .receiver
            .recv()
            .unwrap_or(Err(GenerateError::WorkerDisconnected));
        self.join();
        result
    }

    fn join(&mut self) {
        if let Some(handle) = self.thread.take() {
            if handle.join().is_err() {
                tracing::error!("generation worker panicked");
            }
        }
    }
}

impl Drop for GenerationTask {
    fn drop(&mut self) {
        // An abandoned run has no one to deliver to.
        if self.thread.is_some() {
            self.cancel.cancel();
        }
    }
}

/// Start a run on a new thread against a fixed dictionary snapshot.
pub fn spawn(
    dictionary: Arc<Dictionary>,
    letters: Letters,
    min_length: MinLength,
    options: GenerateOptions,
) -> GenerationTask {
    let cancel = CancelToken::new();
    let (sender, receiver) = mpsc::channel();
    let token = cancel.clone();

    let thread = thread::spawn(move || {
        let result = generate_with(&letters, min_length, &dictionary, &options, &token);
        if let Err(e) = &result {
            tracing::debug!(error = %e, "generation run failed");
        }
        // The receiver may be gone if the task was dropped.
        let _ = sender.send(result);
    });

    GenerationTask {
        receiver,
        cancel,
        thread: Some(thread),
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn dict(words: &[&str]) -> Arc<Dictionary> {
        Arc::new(Dictionary::from_words(words.iter().copied()))
    }

    #[test]
    fn wait_returns_reports() {
        let task = spawn(
            dict(&["act", "cat"]),
            Letters::new("cat").unwrap(),
            MinLength::new(3),
            GenerateOptions::default(),
        );
        let reports = task.wait().unwrap();
        assert_eq!(reports.all.total, 6);
        assert_eq!(reports.valid.total, 2);
    }

    #[test]
    fn try_result_eventually_resolves() {
        let mut task = spawn(
            dict(&["ab"]),
            Letters::new("ab").unwrap(),
            MinLength::new(2),
            GenerateOptions::default(),
        );
        let result = loop {
            if let Some(r) = task.try_result() {
                break r;
            }
            std::thread::sleep(Duration::from_millis(1));
        };
        assert_eq!(result.unwrap().valid.total, 1);
        assert!(task.is_finished());
    }

    #[test]
    fn cancelled_long_run_reports_cancelled() {
        let options = GenerateOptions {
            cancel_check_interval: 1,
            ..GenerateOptions::default()
        };
        let task = spawn(
            dict(&[]),
            Letters::new("abcdefghijkl").unwrap(),
            MinLength::new(1),
            options,
        );
        task.cancel();
        assert_eq!(task.wait(), Err(GenerateError::Cancelled));
    }

    #[test]
    fn dropping_a_task_cancels_it() {
        let task = spawn(
            dict(&[]),
            Letters::new("abcdefghijkl").unwrap(),
            MinLength::new(1),
            GenerateOptions::default(),
        );
        let token = task.cancel_token();
        drop(task);
        assert!(token.is_cancelled());
    }
}
