//! Notification relay
//!
//! Page notifications arrive through the bridge as [`NotificationRequest`]s
//! and are handed to the OS exactly once. Failures stop here: they are
//! logged and never reach the page.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationRequest {
    pub title: String,
    pub body: String,
}

impl NotificationRequest {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

/// OS notification backend
pub trait NotificationSink: Send + Sync {
    fn deliver(&self, request: NotificationRequest) -> Result<()>;
}

pub struct NotificationRelay<S: NotificationSink> {
    sink: S,
    delivered: AtomicU64,
    failed: AtomicU64,
}

impl<S: NotificationSink> NotificationRelay<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            delivered: AtomicU64::new(0),
            failed: AtomicU64::new(0),
        }
    }

    /// Forward one request to the OS. Never fails.
    pub fn relay(&self, request: NotificationRequest) {
        let title_len = request.title.len();
        match self.sink.deliver(request) {
            Ok(()) => {
                self.delivered.fetch_add(1, Ordering::Relaxed);
                tracing::debug!(title_len, "Notification delivered");
            }
            Err(e) => {
                self.failed.fetch_add(1, Ordering::Relaxed);
                tracing::warn!(error = %e, "Notification dispatch failed");
            }
        }
    }

    pub fn delivered(&self) -> u64 {
        self.delivered.load(Ordering::Relaxed)
    }

    pub fn failed(&self) -> u64 {
        self.failed.load(Ordering::Relaxed)
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}
