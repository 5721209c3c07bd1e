//! "Copy email" feedback: the button shows a check for a fixed delay after
//! the last copy, then reverts.

use serde::{Deserialize, Serialize};

use crate::outputs::Notification;

pub const COPIED_MESSAGE: &str = "Email copied to clipboard!";
pub const DEFAULT_COPY_DELAY_MS: f64 = 2000.0;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CopyIndicator {
    Copy,
    Check,
}

/// What the host must do for one copy action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CopyEffects {
    pub clipboard_text: String,
    pub notification: Notification,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CopyFeedback {
    delay_ms: f64,
    copied_until: Option<f64>,
}

impl Default for CopyFeedback {
    fn default() -> Self {
        Self::new(DEFAULT_COPY_DELAY_MS)
    }
}

impl CopyFeedback {
    pub fn new(delay_ms: f64) -> Self {
        Self {
            delay_ms: if delay_ms.is_finite() {
                delay_ms.max(0.0)
            } else {
                DEFAULT_COPY_DELAY_MS
            },
            copied_until: None,
        }
    }

    pub fn delay_ms(&self) -> f64 {
        self.delay_ms
    }

    /// Record a copy at `now_ms`. Restarts the revert timer.
    pub fn copy(&mut self, now_ms: f64, email: &str) -> CopyEffects {
        self.copied_until = Some(now_ms + self.delay_ms);
        CopyEffects {
            clipboard_text: email.to_string(),
            notification: Notification::success(COPIED_MESSAGE),
        }
    }

    pub fn is_copied(&self, now_ms: f64) -> bool {
        self.copied_until.is_some_and(|until| now_ms < until)
    }

    pub fn indicator(&self, now_ms: f64) -> CopyIndicator {
        if self.is_copied(now_ms) {
            CopyIndicator::Check
        } else {
            CopyIndicator::Copy
        }
    }

    /// Deadline of the pending revert, if any.
    pub fn reverts_at(&self) -> Option<f64> {
        self.copied_until
    }
}
