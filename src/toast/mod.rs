//! Transient notification state machine.
//!
//! At most one toast is live at a time. Showing a toast while one is
//! already visible replaces the content and resets the expiry timer; the
//! superseded timer is cancelled. Expiry is a scheduled tokio task, not a
//! busy-poll.

use crate::models::{Toast, ToastKind};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;

struct ToastState {
    current: Option<Toast>,
    timer: Option<JoinHandle<()>>,
    // Incremented on every show; an expiry task only clears the toast it
    // was scheduled for.
    epoch: u64,
}

/// Owner of the single live toast.
///
/// Cheap to clone; clones share state. Requires a tokio runtime for the
/// expiry timer.
#[derive(Clone)]
pub struct ToastCenter {
    state: Arc<Mutex<ToastState>>,
    ttl: Duration,
}

impl ToastCenter {
    /// Create a toast center whose toasts expire after `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            state: Arc::new(Mutex::new(ToastState {
                current: None,
                timer: None,
                epoch: 0,
            })),
            ttl,
        }
    }

    /// Show a toast, replacing any pending one and resetting the timer.
    pub fn show(&self, message: impl Into<String>, kind: ToastKind) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());

        if let Some(timer) = state.timer.take() {
            timer.abort();
        }

        state.epoch += 1;
        let epoch = state.epoch;
        state.current = Some(Toast::new(message, kind));

        let shared = self.state.clone();
        let ttl = self.ttl;
        state.timer = Some(tokio::spawn(async move {
            tokio::time::sleep(ttl).await;
            let mut state = shared.lock().unwrap_or_else(|e| e.into_inner());
            if state.epoch == epoch {
                state.current = None;
                state.timer = None;
            }
        }));
    }

    /// The live toast, if it has not expired.
    pub fn current(&self) -> Option<Toast> {
        let state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.current.clone()
    }
}
