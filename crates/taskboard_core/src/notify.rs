//! User-visible notification sink.
//!
//! # Responsibility
//! - Give mutation operations one seam for confirmation/error toasts without
//!   coupling core logic to any presentation layer.
//!
//! # Invariants
//! - Notifying never fails and never mutates board state.

use log::{info, warn};
use std::sync::{Mutex, PoisonError};

/// One user-visible message emitted by an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Confirmation of a completed mutation.
    Success(String),
    /// A requested change was not applied (gateway failure and the like).
    Error(String),
}

impl Notice {
    pub fn message(&self) -> &str {
        match self {
            Self::Success(message) | Self::Error(message) => message,
        }
    }
}

/// Sink for user-visible notices.
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: &Notice);
}

/// Default sink: forwards notices to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notice: &Notice) {
        match notice {
            Notice::Success(message) => {
                info!("event=notice module=notify status=ok message={message}")
            }
            Notice::Error(message) => {
                warn!("event=notice module=notify status=error message={message}")
            }
        }
    }
}

/// Test sink: records every notice for assertions.
#[derive(Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: &Notice) {
        self.notices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notice.clone());
    }
}
