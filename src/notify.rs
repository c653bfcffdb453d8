//! Notification collaborator.
//!
//! Short, purely informational strings about the outcome of each
//! operation. No acknowledgement.

use std::collections::VecDeque;
use std::sync::Mutex;

use tracing::info;

pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

/// Keeps the most recent toasts, newest first.
#[derive(Debug)]
pub struct ToastBuffer {
    capacity: usize,
    toasts: Mutex<VecDeque<String>>,
}

impl ToastBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            toasts: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }

    /// Newest first.
    pub fn recent(&self) -> Vec<String> {
        self.lock().iter().cloned().collect()
    }

    pub fn latest(&self) -> Option<String> {
        self.lock().front().cloned()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, VecDeque<String>> {
        // A poisoned toast list is still a valid list of strings.
        self.toasts.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for ToastBuffer {
    fn default() -> Self {
        Self::new(3)
    }
}

impl Notifier for ToastBuffer {
    fn notify(&self, message: &str) {
        let mut toasts = self.lock();
        toasts.push_front(message.to_string());
        toasts.truncate(self.capacity);
    }
}

/// Writes notifications to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, message: &str) {
        info!(target: "purchais::notify", "{message}");
    }
}
