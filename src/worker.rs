//! Background jobs with a single completion event.
//!
//! A [`Job`] runs a closure on a named worker thread and hands its return
//! value back through a bounded channel of capacity one. The foreground
//! consumes that event exactly once, either blocking with [`Job::wait`] or
//! polling with [`Job::try_finish`].
//!
//! There is no cancellation: once spawned, a job runs to completion.
//!
//! # Example
//!
//! ```
//! use namedupe::worker::Job;
//!
//! let job = Job::spawn("answer", || 40 + 2).unwrap();
//! assert_eq!(job.wait().unwrap(), 42);
//! ```

use std::thread;

use crossbeam_channel::{bounded, Receiver, TryRecvError};
use thiserror::Error;

/// Errors from the job handoff itself.
#[derive(Debug, Error)]
pub enum WorkerError {
    /// The worker thread could not be started.
    #[error("failed to spawn worker thread '{name}': {source}")]
    Spawn {
        /// Thread name
        name: String,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The worker ended without delivering its completion event (it panicked).
    #[error("worker thread ended without reporting a result")]
    Lost,
}

/// Handle to a running background job.
#[derive(Debug)]
pub struct Job<T> {
    rx: Receiver<T>,
    handle: Option<thread::JoinHandle<()>>,
}

impl<T: Send + 'static> Job<T> {
    /// Run `work` on a new thread named `namedupe-{name}`.
    ///
    /// # Errors
    ///
    /// Returns [`WorkerError::Spawn`] if the OS refuses to create the thread.
    pub fn spawn<F>(name: &str, work: F) -> Result<Self, WorkerError>
    where
        F: FnOnce() -> T + Send + 'static,
    {
        let (tx, rx) = bounded::<T>(1);
        let thread_name = format!("namedupe-{name}");

        let handle = thread::Builder::new()
            .name(thread_name.clone())
            .spawn(move || {
                let value = work();
                // The receiver may have been dropped; nothing to report then.
                let _ = tx.send(value);
            })
            .map_err(|source| WorkerError::Spawn {
                name: thread_name,
                source,
            })?;

        Ok(Self {
            rx,
            handle: Some(handle),
        })
    }

    /// Block until the job delivers its completion event.
    ///
    /// # Errors
    ///
    /// Returns [`WorkerError::Lost`] if the worker died before sending.
    pub fn wait(mut self) -> Result<T, WorkerError> {
        let result = self.rx.recv().map_err(|_| WorkerError::Lost);
        self.join();
        result
    }

    /// Poll for the completion event without blocking.
    ///
    /// Returns `Ok(None)` while the job is still running.
    ///
    /// # Errors
    ///
    /// Returns [`WorkerError::Lost`] if the worker died before sending.
    pub fn try_finish(&mut self) -> Result<Option<T>, WorkerError> {
        match self.rx.try_recv() {
            Ok(value) => {
                self.join();
                Ok(Some(value))
            }
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => {
                self.join();
                Err(WorkerError::Lost)
            }
        }
    }

    fn join(&mut self) {
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                log::error!("Worker thread panicked");
            }
        }
    }
}
