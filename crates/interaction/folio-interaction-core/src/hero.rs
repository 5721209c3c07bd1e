//! Hero banner scroll parallax and entrance timing.

use serde::{Deserialize, Serialize};

use crate::interp::map_range;

/// Entrance delays (seconds) for the hero's staged elements in document order.
/// The last entry is the scroll cue.
pub const ENTRANCE_DELAYS: [f32; 9] = [0.2, 0.4, 0.6, 0.7, 0.8, 0.9, 1.0, 1.2, 1.5];

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HeroFrame {
    /// Downward content offset as a percentage of its own height.
    pub offset_percent: f32,
    pub opacity: f32,
}

/// Maps the hero's scroll progress (0 when its top meets the viewport top,
/// 1 when its bottom does) onto content drift and fade.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroParallax {
    pub max_offset_percent: f32,
    /// Progress at which the content is fully faded.
    pub fade_out_at: f32,
}

impl Default for HeroParallax {
    fn default() -> Self {
        Self {
            max_offset_percent: 30.0,
            fade_out_at: 0.5,
        }
    }
}

impl HeroParallax {
    pub fn sample(&self, progress: f32) -> HeroFrame {
        HeroFrame {
            offset_percent: map_range(progress, [0.0, 1.0], [0.0, self.max_offset_percent]),
            opacity: map_range(progress, [0.0, self.fade_out_at], [1.0, 0.0]),
        }
    }

    /// Progress for a hero box at `top` (client space) with `height`.
    pub fn progress(top: f32, height: f32) -> f32 {
        if height <= 0.0 || !height.is_finite() {
            return 0.0;
        }
        (-top / height).clamp(0.0, 1.0)
    }
}
