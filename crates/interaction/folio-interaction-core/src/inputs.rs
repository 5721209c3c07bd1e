//! Input contracts for the stage.
//!
//! Adapters collect host events between ticks and pass them to
//! `Stage::update()`. Within each list, events apply in the order given.

use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Rect};
use crate::ids::{CarouselId, RevealId, TiltId};

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Inputs {
    #[serde(default)]
    pub intersections: Vec<IntersectionInput>,
    #[serde(default)]
    pub pointer: Vec<PointerInput>,
    #[serde(default)]
    pub carousel: Vec<CarouselInput>,
    /// Latest window scroll offset, if it moved.
    #[serde(default)]
    pub scroll_y: Option<f32>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IntersectionInput {
    pub reveal: RevealId,
    pub target: Rect,
    pub viewport: Rect,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PointerInput {
    pub tilt: TiltId,
    pub event: PointerEvent,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PointerEvent {
    Enter,
    Move { pointer: Point, bounds: Rect },
    Leave,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CarouselInput {
    Settled { carousel: CarouselId, index: usize },
    Next { carousel: CarouselId },
    Previous { carousel: CarouselId },
}
