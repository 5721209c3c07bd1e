//! Output contracts from the stage.
//!
//! `changes` carries state that should be re-rendered this tick; `events` are
//! one-shot signals (toasts, clipboard writes, scroll requests) the adapter
//! must act on exactly once.

use serde::{Deserialize, Serialize};

use crate::clipboard::CopyIndicator;
use crate::ids::{CarouselId, RevealId, TiltId};
use crate::nav::ScrollCommand;
use crate::reveal::RevealPhase;
use crate::tilt::TiltPose;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
}

/// A transient user-visible toast.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }
}

/// One piece of render state that changed this tick.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Change {
    Reveal { id: RevealId, phase: RevealPhase },
    Tilt { id: TiltId, pose: TiltPose },
    Carousel { id: CarouselId, selected: usize },
    NavScrolled { scrolled: bool },
    CopyIndicator { indicator: CopyIndicator },
}

/// Discrete signals emitted during a tick or by a direct action.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
#[non_exhaustive]
pub enum StageEvent {
    Revealed { id: RevealId },
    CarouselSettled { id: CarouselId, index: usize },
    Notification(Notification),
    ClipboardWrite { text: String },
    ScrollTo { target: ScrollCommand },
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Outputs {
    pub changes: Vec<Change>,
    pub events: Vec<StageEvent>,
    /// Inputs that referenced controllers the stage does not know.
    pub warnings: Vec<String>,
}

impl Outputs {
    pub fn clear(&mut self) {
        self.changes.clear();
        self.events.clear();
        self.warnings.clear();
    }

    pub fn notifications(&self) -> impl Iterator<Item = &Notification> {
        self.events.iter().filter_map(|e| match e {
            StageEvent::Notification(n) => Some(n),
            _ => None,
        })
    }
}
