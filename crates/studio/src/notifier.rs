//! Toast-style notices with auto-dismiss.
//!
//! A [`Notifier`] owns the single visible notice and its dismiss timer.
//! Showing a new message cancels the pending timer and starts a fresh one,
//! so the latest notice always stays up for the full duration.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::info;

/// Where notices are displayed.
pub trait NoticeSink: Send + Sync {
    fn show(&self, message: &str);
    fn dismiss(&self);
}

/// Sink that only records notices in the log.
pub struct LogSink;

impl NoticeSink for LogSink {
    fn show(&self, message: &str) {
        info!(message, "notice shown");
    }

    fn dismiss(&self) {}
}

#[derive(Debug, Default)]
struct ToastState {
    message: Option<String>,
    /// Bumped on every `show`; a dismiss timer only acts on its own epoch.
    epoch: u64,
}

/// Owner of the visible notice. Requires a tokio runtime for the dismiss timer.
pub struct Notifier {
    sink: Arc<dyn NoticeSink>,
    duration: Duration,
    state: Arc<parking_lot::Mutex<ToastState>>,
    pending: parking_lot::Mutex<Option<JoinHandle<()>>>,
}

impl Notifier {
    pub fn new(sink: Arc<dyn NoticeSink>, duration: Duration) -> Self {
        Self {
            sink,
            duration,
            state: Arc::new(parking_lot::Mutex::new(ToastState::default())),
            pending: parking_lot::Mutex::new(None),
        }
    }

    /// Display `message`, replacing any visible notice and restarting the
    /// dismiss timer.
    pub fn show(&self, message: impl Into<String>) {
        let message = message.into();
        let mut pending = self.pending.lock();
        if let Some(handle) = pending.take() {
            handle.abort();
        }

        let epoch = {
            let mut state = self.state.lock();
            state.epoch += 1;
            state.message = Some(message.clone());
            state.epoch
        };
        self.sink.show(&message);

        let state = self.state.clone();
        let sink = self.sink.clone();
        let duration = self.duration;
        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            let mut state = state.lock();
            if state.epoch == epoch {
                state.message = None;
                sink.dismiss();
            }
        }));
    }

    /// Message currently on screen, if any.
    pub fn current(&self) -> Option<String> {
        self.state.lock().message.clone()
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }
}

impl Drop for Notifier {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.get_mut().take() {
            handle.abort();
        }
    }
}
