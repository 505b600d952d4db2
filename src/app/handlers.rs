//! Handlers for messages from spawned tasks.

use super::{App, AppMessage};

impl App {
    /// Apply a message from a timer.
    pub fn handle_message(&mut self, msg: AppMessage) {
        match msg {
            AppMessage::ToastExpired { id } => {
                if self.notifications.expire(id) {
                    self.mark_dirty();
                }
            }
        }
    }

    /// Apply every message already waiting in the channel.
    ///
    /// Used when the app runs without the event loop, e.g. in tests. Does
    /// nothing once the loop has taken the receiver.
    pub fn drain_messages(&mut self) -> usize {
        let mut pending = Vec::new();
        if let Some(rx) = self.message_rx.as_mut() {
            while let Ok(msg) = rx.try_recv() {
                pending.push(msg);
            }
        }
        let count = pending.len();
        for msg in pending {
            self.handle_message(msg);
        }
        count
    }
}
