//! Progress narration sinks.
//!
//! Jobs run interleaved on one task, so a sink sees messages from different platforms in
//! completion order, not platform order.

use parking_lot::Mutex;

pub trait ProgressSink: Sync {
    fn report(&self, message: &str);
}

impl<F> ProgressSink for F
where
    F: Fn(&str) + Sync,
{
    fn report(&self, message: &str) {
        self(message)
    }
}

/// Sink that records every message in arrival order.
#[derive(Default)]
pub struct ProgressLog {
    messages: Mutex<Vec<String>>,
}

impl ProgressLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.messages.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.lock().is_empty()
    }

    /// Messages containing `needle`, in arrival order.
    pub fn matching(&self, needle: &str) -> Vec<String> {
        self.messages
            .lock()
            .iter()
            .filter(|m| m.contains(needle))
            .cloned()
            .collect()
    }
}

impl ProgressSink for ProgressLog {
    fn report(&self, message: &str) {
        self.messages.lock().push(message.to_string());
    }
}
