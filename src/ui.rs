//! Process-wide UI state: the global loading flag and the current
//! user-facing error.
//!
//! [`UiState`] is a cheap cloneable handle over shared state, constructed
//! once and handed to every consumer (the HTTP client publishes into it, a
//! page-level banner reads from it). Published errors auto-dismiss after
//! [`ERROR_DISMISS_DELAY`]; publishing a new error cancels the pending
//! dismissal and restarts the window.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use tokio::task::JoinHandle;
use tracing::debug;

use crate::config::ERROR_DISMISS_DELAY;

// ---------------------------------------------------------------------------
// Severity / UiError
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiError {
    pub message: String,
    pub severity: Severity,
}

// ---------------------------------------------------------------------------
// UiState
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub struct UiState {
    inner: Arc<UiInner>,
}

struct UiInner {
    loading: AtomicBool,
    slot: Mutex<ErrorSlot>,
}

#[derive(Default)]
struct ErrorSlot {
    current: Option<UiError>,
    // Bumped on every mutation so a stale dismissal task that survived its
    // abort cannot clear a newer error.
    generation: u64,
    dismiss_task: Option<JoinHandle<()>>,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(UiInner {
                loading: AtomicBool::new(false),
                slot: Mutex::new(ErrorSlot::default()),
            }),
        }
    }

    /// Whether any tracked request is currently in flight.
    pub fn loading(&self) -> bool {
        self.inner.loading.load(Ordering::SeqCst)
    }

    /// Unconditional overwrite of the loading flag.
    pub fn set_loading(&self, value: bool) {
        self.inner.loading.store(value, Ordering::SeqCst);
    }

    /// The most recent user-facing error, if one is still visible.
    pub fn error(&self) -> Option<UiError> {
        self.inner.lock_slot().current.clone()
    }

    /// Publish an error with [`Severity::Error`].
    ///
    /// Must be called from within a Tokio runtime (the dismissal timer is a
    /// spawned task).
    pub fn set_error(&self, message: impl Into<String>) {
        self.set_error_with_severity(message, Severity::Error);
    }

    /// Publish an error or warning, replacing any current one and
    /// rescheduling the auto-dismissal.
    pub fn set_error_with_severity(&self, message: impl Into<String>, severity: Severity) {
        let message = message.into();
        debug!(%message, ?severity, "publishing UI error");

        let mut slot = self.inner.lock_slot();
        if let Some(task) = slot.dismiss_task.take() {
            task.abort();
        }
        slot.generation += 1;
        slot.current = Some(UiError { message, severity });

        let generation = slot.generation;
        let inner = Arc::clone(&self.inner);
        slot.dismiss_task = Some(tokio::spawn(async move {
            tokio::time::sleep(ERROR_DISMISS_DELAY).await;
            let mut slot = inner.lock_slot();
            if slot.generation == generation {
                slot.current = None;
                slot.dismiss_task = None;
            }
        }));
    }

    /// Drop the current error immediately and cancel its dismissal timer.
    pub fn clear_error(&self) {
        let mut slot = self.inner.lock_slot();
        if let Some(task) = slot.dismiss_task.take() {
            task.abort();
        }
        slot.generation += 1;
        slot.current = None;
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

impl UiInner {
    fn lock_slot(&self) -> MutexGuard<'_, ErrorSlot> {
        self.slot.lock().unwrap_or_else(|e| e.into_inner())
    }
}
