//! Stage configuration.

use serde::{Deserialize, Serialize};

use crate::carousel::EmphasisConfig;
use crate::clipboard::DEFAULT_COPY_DELAY_MS;
use crate::contact::RelayConfig;
use crate::hero::HeroParallax;
use crate::nav::DEFAULT_SCROLLED_THRESHOLD;
use crate::reveal::RevealMargin;
use crate::spring::SpringConfig;
use crate::tilt::{GlowLevels, TiltRange};

pub const DEFAULT_MAX_FRAME_DT: f32 = 0.1;

/// Tunables for every controller a stage hosts. Missing keys take defaults,
/// so hosts can pass partial JSON.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default margin for reveals added without an explicit one.
    pub reveal_margin: RevealMargin,
    /// Spring shared by tilt axes and glow.
    pub spring: SpringConfig,
    pub portrait_tilt: TiltRange,
    pub card_tilt: TiltRange,
    pub glow: GlowLevels,
    pub emphasis: EmphasisConfig,
    pub hero: HeroParallax,
    /// How long the copy button shows its check mark.
    pub copy_feedback_ms: f64,
    /// Scroll offset past which the nav bar switches to its frosted look.
    pub nav_scrolled_threshold: f32,
    /// Longest spring step per tick, in seconds. The stage clock still
    /// advances by the full `dt`.
    pub max_frame_dt: f32,
    /// Email relay identifiers. Contact submission fails fast without them.
    pub relay: Option<RelayConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reveal_margin: RevealMargin::default(),
            spring: SpringConfig::default(),
            portrait_tilt: TiltRange::PORTRAIT,
            card_tilt: TiltRange::PROJECT_CARD,
            glow: GlowLevels::default(),
            emphasis: EmphasisConfig::default(),
            hero: HeroParallax::default(),
            copy_feedback_ms: DEFAULT_COPY_DELAY_MS,
            nav_scrolled_threshold: DEFAULT_SCROLLED_THRESHOLD,
            max_frame_dt: DEFAULT_MAX_FRAME_DT,
            relay: None,
        }
    }
}
