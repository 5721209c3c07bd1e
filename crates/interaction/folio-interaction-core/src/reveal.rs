//! Viewport reveal: a section flips from hidden to visible the first time its
//! container meets the viewport (shrunk by a margin), and stays visible.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::geometry::Rect;

/// Inset applied to the viewport before testing intersection. Negative values
/// shrink the viewport so the trigger fires once the container is that far
/// inside the screen.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RevealMargin {
    pub px: f32,
}

impl Default for RevealMargin {
    fn default() -> Self {
        Self { px: -100.0 }
    }
}

impl RevealMargin {
    pub fn new(px: f32) -> Self {
        Self { px }
    }

    pub fn satisfied_by(&self, entry: &IntersectionEntry) -> bool {
        let margin = if self.px.is_finite() { self.px } else { 0.0 };
        entry.target.overlaps(&entry.viewport.expand(margin))
    }
}

/// One intersection report: the container's box and the viewport's box, both
/// in client coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IntersectionEntry {
    pub target: Rect,
    pub viewport: Rect,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RevealPhase {
    Hidden,
    Visible,
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct RevealState {
    pub has_revealed: bool,
}

/// Capability of anything that turns intersection reports into a reveal flag.
pub trait RevealObserver {
    /// Feed one intersection report. Returns true only on the call that
    /// performs the hidden -> visible transition.
    fn observe(&mut self, entry: &IntersectionEntry) -> bool;

    fn is_revealed(&self) -> bool;

    fn phase(&self) -> RevealPhase {
        if self.is_revealed() {
            RevealPhase::Visible
        } else {
            RevealPhase::Hidden
        }
    }
}

/// Reveal with "once" semantics.
#[derive(Clone, Debug, Default)]
pub struct OnceReveal {
    margin: RevealMargin,
    state: RevealState,
}

impl OnceReveal {
    pub fn new(margin: RevealMargin) -> Self {
        Self {
            margin,
            state: RevealState::default(),
        }
    }

    pub fn margin(&self) -> RevealMargin {
        self.margin
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    /// Keyframe for the `index`-th child of the section.
    pub fn keyframe_for(&self, index: usize, stagger: &Stagger) -> RevealKeyframe {
        RevealKeyframe {
            phase: self.phase(),
            delay: stagger.delay(index),
        }
    }

    /// Keyframe for skill `inner` of category `outer` in a revealed grid.
    pub fn grid_keyframe_for(
        &self,
        outer: usize,
        inner: usize,
        grid: &GridStagger,
    ) -> RevealKeyframe {
        RevealKeyframe {
            phase: self.phase(),
            delay: grid.delay(outer, inner),
        }
    }

    /// Skill bar width in percent: the skill level once revealed, zero before.
    pub fn bar_width(&self, level: u8) -> f32 {
        if self.state.has_revealed {
            f32::from(level.min(100))
        } else {
            0.0
        }
    }
}

impl RevealObserver for OnceReveal {
    fn observe(&mut self, entry: &IntersectionEntry) -> bool {
        if self.state.has_revealed {
            return false;
        }
        if self.margin.satisfied_by(entry) {
            self.state.has_revealed = true;
            debug!("reveal: container entered viewport at top={}", entry.target.top);
            return true;
        }
        false
    }

    fn is_revealed(&self) -> bool {
        self.state.has_revealed
    }
}

/// Per-child delay in seconds: `base + index * step`.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Stagger {
    pub base: f32,
    pub step: f32,
}

impl Stagger {
    pub const PROJECTS: Stagger = Stagger::new(0.0, 0.1);
    pub const ACHIEVEMENTS: Stagger = Stagger::new(0.0, 0.1);
    pub const EXPERIENCE: Stagger = Stagger::new(0.0, 0.15);
    /// Timeline dots pop in after their card.
    pub const EXPERIENCE_DOT: Stagger = Stagger::new(0.3, 0.15);
    pub const NAV: Stagger = Stagger::new(0.0, 0.1);

    pub const fn new(base: f32, step: f32) -> Self {
        Self { base, step }
    }

    pub fn delay(&self, index: usize) -> f32 {
        self.base + index as f32 * self.step
    }
}

/// Named section staggers, as hosts refer to them.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StaggerPreset {
    Projects,
    Achievements,
    Experience,
    ExperienceDot,
    Nav,
}

impl StaggerPreset {
    pub fn stagger(self) -> Stagger {
        match self {
            Self::Projects => Stagger::PROJECTS,
            Self::Achievements => Stagger::ACHIEVEMENTS,
            Self::Experience => Stagger::EXPERIENCE,
            Self::ExperienceDot => Stagger::EXPERIENCE_DOT,
            Self::Nav => Stagger::NAV,
        }
    }
}

/// Two-level stagger for grids: `outer * outer_step + inner * inner_step`.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridStagger {
    pub outer_step: f32,
    pub inner_step: f32,
}

impl GridStagger {
    /// Skill categories and the bars within them.
    pub const SKILLS: GridStagger = GridStagger {
        outer_step: 0.1,
        inner_step: 0.05,
    };

    pub fn delay(&self, outer: usize, inner: usize) -> f32 {
        outer as f32 * self.outer_step + inner as f32 * self.inner_step
    }
}

/// Target presentation for one child and when to start moving towards it.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RevealKeyframe {
    pub phase: RevealPhase,
    pub delay: f32,
}
