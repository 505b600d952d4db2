//! Deferred loading of screen data.
//!
//! An [`AsyncResource`] wraps a value that becomes available after a
//! simulated network delay. Loading runs on a spawned task that reports back
//! through a oneshot channel; the owner picks the outcome up with
//! [`poll`](AsyncResource::poll) on its own thread, so all state changes happen
//! where the resource lives.
//!
//! Dropping the resource drops the receiver. A completion that arrives after
//! that finds the channel closed and is discarded, which is how an unmounted
//! screen ignores its in-flight loads.

use std::time::Duration;

use tokio::sync::oneshot::{self, error::TryRecvError};

use crate::error::ResourceError;

/// Lifecycle of an [`AsyncResource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed,
}

type Outcome<T> = Result<T, ResourceError>;

/// A value that is loaded once, after a fixed delay.
///
/// Invariants: `Ready` implies a value, `Failed` implies no value and an
/// error. There is no caching: every call to [`load`](Self::load) starts over
/// from `Idle` and waits the full delay.
#[derive(Debug)]
pub struct AsyncResource<T> {
    name: &'static str,
    state: LoadState,
    value: Option<T>,
    error: Option<ResourceError>,
    pending: Option<oneshot::Receiver<Outcome<T>>>,
}

impl<T> AsyncResource<T> {
    /// A resource that has not started loading.
    pub fn idle(name: &'static str) -> Self {
        Self {
            name,
            state: LoadState::Idle,
            value: None,
            error: None,
            pending: None,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn error(&self) -> Option<&ResourceError> {
        self.error.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.state == LoadState::Loading
    }

    pub fn is_ready(&self) -> bool {
        self.state == LoadState::Ready
    }

    /// Apply a completed load. Only legal while `Loading`.
    fn settle(&mut self, outcome: Outcome<T>) {
        debug_assert_eq!(self.state, LoadState::Loading);
        match outcome {
            Ok(value) => {
                self.value = Some(value);
                self.error = None;
                self.state = LoadState::Ready;
                tracing::debug!("resource {} ready", self.name);
            }
            Err(err) => {
                tracing::warn!("resource {} failed: {}", self.name, err);
                self.value = None;
                self.error = Some(err);
                self.state = LoadState::Failed;
            }
        }
    }

    fn abandoned(&self) -> ResourceError {
        ResourceError::load_failed(self.name, "loader stopped before producing a value")
    }

    /// Pick up a finished load without blocking.
    ///
    /// Returns `true` when this call changed the state.
    pub fn poll(&mut self) -> bool {
        let Some(rx) = self.pending.as_mut() else {
            return false;
        };
        let outcome = match rx.try_recv() {
            Ok(outcome) => outcome,
            Err(TryRecvError::Empty) => return false,
            Err(TryRecvError::Closed) => Err(self.abandoned()),
        };
        self.pending = None;
        self.settle(outcome);
        true
    }

    /// Wait for the pending load to finish and apply it.
    ///
    /// Returns the resulting state; a resource that is not loading returns
    /// immediately.
    pub async fn wait(&mut self) -> LoadState {
        if let Some(rx) = self.pending.take() {
            let outcome = match rx.await {
                Ok(outcome) => outcome,
                Err(_) => Err(self.abandoned()),
            };
            self.settle(outcome);
        }
        self.state
    }
}

impl<T: Send + 'static> AsyncResource<T> {
    /// Start loading: `Idle -> Loading`, then `Ready` or `Failed` once
    /// `source` has run after `delay`.
    ///
    /// Must be called inside a tokio runtime. Without one the resource goes
    /// straight to `Failed`.
    pub fn load<F>(name: &'static str, source: F, delay: Duration) -> Self
    where
        F: FnOnce() -> Outcome<T> + Send + 'static,
    {
        let mut resource = Self::idle(name);
        resource.start(source, delay);
        resource
    }

    /// Restart a load from scratch, discarding any value or pending load.
    pub fn start<F>(&mut self, source: F, delay: Duration)
    where
        F: FnOnce() -> Outcome<T> + Send + 'static,
    {
        self.value = None;
        self.error = None;
        self.pending = None;
        self.state = LoadState::Loading;

        let handle = match tokio::runtime::Handle::try_current() {
            Ok(handle) => handle,
            Err(e) => {
                self.settle(Err(ResourceError::load_failed(self.name, e.to_string())));
                return;
            }
        };

        let (tx, rx) = oneshot::channel();
        self.pending = Some(rx);
        let name = self.name;
        tracing::debug!("resource {} loading ({} ms)", name, delay.as_millis());

        handle.spawn(async move {
            tokio::time::sleep(delay).await;
            if tx.is_closed() {
                tracing::debug!("resource {} dropped before load finished", name);
                return;
            }
            if tx.send(source()).is_err() {
                tracing::debug!("resource {} dropped before load finished", name);
            }
        });
    }
}
