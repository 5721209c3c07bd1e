//! Pointer-driven 3D tilt.
//!
//! The pointer's offset from the container centre is normalized to
//! `[-0.5, 0.5]` per axis, mapped linearly onto a rotation range and fed
//! through a spring per axis so the surface eases towards the pointer.

use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Rect};
use crate::interp::map_range;
use crate::spring::{Spring, SpringConfig};

const NORMALIZED: [f32; 2] = [-0.5, 0.5];

/// Maximum rotation magnitude in degrees on either axis.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TiltRange {
    pub max_degrees: f32,
}

impl TiltRange {
    pub const PORTRAIT: TiltRange = TiltRange { max_degrees: 8.0 };
    pub const PROJECT_CARD: TiltRange = TiltRange { max_degrees: 5.0 };
}

impl Default for TiltRange {
    fn default() -> Self {
        Self::PORTRAIT
    }
}

/// Glow intensity while hovered and at rest.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlowLevels {
    pub rest: f32,
    pub hover: f32,
}

impl Default for GlowLevels {
    fn default() -> Self {
        Self {
            rest: 0.5,
            hover: 1.0,
        }
    }
}

/// The two tilt surfaces the site uses.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TiltPreset {
    /// Hero portrait: 8 degrees with a hover glow.
    Portrait,
    /// Project card: 5 degrees, no glow.
    ProjectCard,
}

/// Normalized pointer offset from the container centre.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PointerPose {
    pub normalized_x: f32,
    pub normalized_y: f32,
}

impl PointerPose {
    pub const NEUTRAL: PointerPose = PointerPose {
        normalized_x: 0.0,
        normalized_y: 0.0,
    };

    /// Normalize `pointer` against `bounds`. Each axis lands in `[-0.5, 0.5]`;
    /// an axis whose extent is not positive and finite, or whose position is
    /// NaN, stays at 0.
    pub fn from_pointer(pointer: Point, bounds: Rect) -> Self {
        let axis = |pos: f32, start: f32, extent: f32| {
            if pos.is_nan() || !(extent > 0.0 && extent.is_finite() && start.is_finite()) {
                return 0.0;
            }
            ((pos - start) / extent - 0.5).clamp(-0.5, 0.5)
        };
        Self {
            normalized_x: axis(pointer.x, bounds.left, bounds.width),
            normalized_y: axis(pointer.y, bounds.top, bounds.height),
        }
    }
}

/// Rotation angles (degrees) and optional glow intensity.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TiltPose {
    pub rotate_x: f32,
    pub rotate_y: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub glow: Option<f32>,
}

/// Capability of a pointer-reactive surface.
pub trait TiltTracker {
    fn pointer_move(&mut self, pointer: Point, bounds: Rect);
    fn pointer_enter(&mut self);
    fn pointer_leave(&mut self);
    /// Advance the springs and return the pose to render.
    fn step(&mut self, dt: f32) -> TiltPose;
    fn pointer_pose(&self) -> PointerPose;
    /// Where the springs are heading.
    fn targets(&self) -> TiltPose;
}

#[derive(Clone, Debug)]
pub struct PointerTilt {
    range: TiltRange,
    pointer: PointerPose,
    rotate_x: Spring,
    rotate_y: Spring,
    glow: Option<(GlowLevels, Spring)>,
    hovered: bool,
}

impl PointerTilt {
    pub fn new(range: TiltRange, spring: SpringConfig, glow: Option<GlowLevels>) -> Self {
        Self {
            range,
            pointer: PointerPose::NEUTRAL,
            rotate_x: Spring::new(spring, 0.0),
            rotate_y: Spring::new(spring, 0.0),
            glow: glow.map(|levels| (levels, Spring::new(spring, levels.rest))),
            hovered: false,
        }
    }

    pub fn portrait(spring: SpringConfig, glow: GlowLevels) -> Self {
        Self::new(TiltRange::PORTRAIT, spring, Some(glow))
    }

    pub fn project_card(spring: SpringConfig) -> Self {
        Self::new(TiltRange::PROJECT_CARD, spring, None)
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn range(&self) -> TiltRange {
        self.range
    }

    /// Current pose without advancing time.
    pub fn pose(&self) -> TiltPose {
        TiltPose {
            rotate_x: self.rotate_x.position(),
            rotate_y: self.rotate_y.position(),
            glow: self.glow.as_ref().map(|(_, s)| s.position()),
        }
    }

    pub fn is_settled(&self, eps: f32) -> bool {
        self.rotate_x.is_settled(eps)
            && self.rotate_y.is_settled(eps)
            && self.glow.as_ref().map_or(true, |(_, s)| s.is_settled(eps))
    }

    fn retarget(&mut self) {
        let max = self.range.max_degrees;
        // X rotation runs opposite to the pointer's Y so the surface leans towards it.
        self.rotate_x
            .set_target(map_range(self.pointer.normalized_y, NORMALIZED, [max, -max]));
        self.rotate_y
            .set_target(map_range(self.pointer.normalized_x, NORMALIZED, [-max, max]));
    }
}

impl TiltTracker for PointerTilt {
    fn pointer_move(&mut self, pointer: Point, bounds: Rect) {
        self.pointer = PointerPose::from_pointer(pointer, bounds);
        self.retarget();
    }

    fn pointer_enter(&mut self) {
        self.hovered = true;
        if let Some((levels, spring)) = self.glow.as_mut() {
            spring.set_target(levels.hover);
        }
    }

    fn pointer_leave(&mut self) {
        self.hovered = false;
        self.pointer = PointerPose::NEUTRAL;
        self.retarget();
        if let Some((levels, spring)) = self.glow.as_mut() {
            spring.set_target(levels.rest);
        }
    }

    fn step(&mut self, dt: f32) -> TiltPose {
        self.rotate_x.step(dt);
        self.rotate_y.step(dt);
        if let Some((_, spring)) = self.glow.as_mut() {
            spring.step(dt);
        }
        self.pose()
    }

    fn pointer_pose(&self) -> PointerPose {
        self.pointer
    }

    fn targets(&self) -> TiltPose {
        TiltPose {
            rotate_x: self.rotate_x.target(),
            rotate_y: self.rotate_y.target(),
            glow: self.glow.as_ref().map(|(_, s)| s.target()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_left_corner_tilts_towards_pointer() {
        let mut t = PointerTilt::portrait(SpringConfig::default(), GlowLevels::default());
        t.pointer_move(Point::new(0.0, 0.0), Rect::new(0.0, 0.0, 200.0, 100.0));
        let targets = t.targets();
        assert_eq!(targets.rotate_x, 8.0);
        assert_eq!(targets.rotate_y, -8.0);
    }

    #[test]
    fn zero_size_bounds_stay_neutral() {
        let pose = PointerPose::from_pointer(Point::new(5.0, 5.0), Rect::new(5.0, 5.0, 0.0, 0.0));
        assert_eq!(pose, PointerPose::NEUTRAL);
    }

    #[test]
    fn malformed_bounds_stay_neutral() {
        let negative = Rect {
            left: 10.0,
            top: 0.0,
            width: -4.0,
            height: 20.0,
        };
        let pose = PointerPose::from_pointer(Point::new(8.0, 20.0), negative);
        assert_eq!(pose.normalized_x, 0.0);
        assert_eq!(pose.normalized_y, 0.5);

        let nan = Rect {
            left: 0.0,
            top: f32::NAN,
            width: 10.0,
            height: 10.0,
        };
        let pose = PointerPose::from_pointer(Point::new(10.0, f32::NAN), nan);
        assert_eq!(pose.normalized_x, 0.5);
        assert_eq!(pose.normalized_y, 0.0);
    }
}
