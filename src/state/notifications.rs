//! Single-slot transient notifications (toasts).
//!
//! Posting a message replaces whatever is showing and arms an expiry timer
//! keyed to the new notification's id. The timer does not touch the center
//! directly: it sends [`AppMessage::ToastExpired`] to the app's message
//! channel, and [`NotificationCenter::expire`] only clears the slot if the id
//! still matches. A timer from a superseded toast is therefore harmless even
//! if it races with a newer one.

use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::AbortHandle;

use crate::app::AppMessage;

/// How long a toast stays visible unless replaced or dismissed.
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(3000);

/// A visible toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
}

/// Holds at most one notification and schedules its expiry.
#[derive(Debug)]
pub struct NotificationCenter {
    current: Option<Notification>,
    next_id: u64,
    duration: Duration,
    expiry_tx: Option<UnboundedSender<AppMessage>>,
    pending_expiry: Option<AbortHandle>,
}

impl NotificationCenter {
    /// A center without an expiry channel. Toasts stay until replaced,
    /// dismissed, or expired by hand through [`expire`](Self::expire).
    pub fn detached(duration: Duration) -> Self {
        Self {
            current: None,
            next_id: 1,
            duration,
            expiry_tx: None,
            pending_expiry: None,
        }
    }

    /// A center whose expiry timers report to `tx`.
    pub fn new(duration: Duration, tx: UnboundedSender<AppMessage>) -> Self {
        let mut center = Self::detached(duration);
        center.expiry_tx = Some(tx);
        center
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Show `message`, replacing any current notification.
    ///
    /// Returns the new notification's id. Messages are not queued: the
    /// previous one is discarded.
    pub fn post(&mut self, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        let message = message.into();
        tracing::debug!("toast #{} posted: {}", id, message);

        if let Some(replaced) = self.current.replace(Notification { id, message }) {
            tracing::debug!("toast #{} replaced by #{}", replaced.id, id);
        }
        self.disarm();
        self.arm(id);
        id
    }

    /// Clear the current notification, whatever it is.
    pub fn dismiss(&mut self) {
        if let Some(dismissed) = self.current.take() {
            tracing::debug!("toast #{} dismissed", dismissed.id);
        }
        self.disarm();
    }

    /// Expiry callback for notification `id`.
    ///
    /// Clears the slot only if `id` is still the current notification and
    /// returns whether it did. Stale expiries are ignored.
    pub fn expire(&mut self, id: u64) -> bool {
        match &self.current {
            Some(current) if current.id == id => {
                self.current = None;
                self.pending_expiry = None;
                tracing::debug!("toast #{} expired", id);
                true
            }
            _ => {
                tracing::trace!("ignoring stale expiry for toast #{}", id);
                false
            }
        }
    }

    fn arm(&mut self, id: u64) {
        let Some(tx) = self.expiry_tx.clone() else {
            return;
        };
        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            tracing::warn!("no runtime; toast #{} will not expire on its own", id);
            return;
        };
        let duration = self.duration;
        let task = handle.spawn(async move {
            tokio::time::sleep(duration).await;
            // Receiver gone means the app is shutting down.
            let _ = tx.send(AppMessage::ToastExpired { id });
        });
        self.pending_expiry = Some(task.abort_handle());
    }

    fn disarm(&mut self) {
        if let Some(handle) = self.pending_expiry.take() {
            handle.abort();
        }
    }
}

impl Drop for NotificationCenter {
    fn drop(&mut self) {
        self.disarm();
    }
}
