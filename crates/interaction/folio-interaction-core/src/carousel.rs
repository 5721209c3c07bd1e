//! Selection tracking for the project-detail image carousel.
//!
//! The scrolling itself belongs to the host; it reports a settle event whenever
//! a drag or snap ends on a slide. The tracker keeps the centred index and
//! derives the emphasis every slide renders with.

use log::debug;
use serde::{Deserialize, Serialize};

/// Scale/opacity for the centred slide and for the rest.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmphasisConfig {
    pub selected_scale: f32,
    pub selected_opacity: f32,
    pub other_scale: f32,
    pub other_opacity: f32,
}

impl Default for EmphasisConfig {
    fn default() -> Self {
        Self {
            selected_scale: 1.0,
            selected_opacity: 1.0,
            other_scale: 0.97,
            other_opacity: 0.7,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SlideEmphasis {
    pub scale: f32,
    pub opacity: f32,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlideAlign {
    Start,
    Center,
    End,
}

/// Options handed to the host's slide-scroll mechanism.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarouselOptions {
    pub align: SlideAlign,
    #[serde(rename = "loop")]
    pub looping: bool,
    pub skip_snaps: bool,
    pub drag_free: bool,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            align: SlideAlign::Center,
            looping: true,
            skip_snaps: false,
            drag_free: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CarouselTracker {
    slide_count: usize,
    selected_index: usize,
    looping: bool,
    attached: bool,
    emphasis: EmphasisConfig,
}

impl CarouselTracker {
    /// Tracker over `slide_count` slides, attached and selecting slide 0.
    pub fn new(slide_count: usize, looping: bool) -> Self {
        Self {
            slide_count,
            selected_index: 0,
            looping,
            attached: true,
            emphasis: EmphasisConfig::default(),
        }
    }

    pub fn with_emphasis(mut self, emphasis: EmphasisConfig) -> Self {
        self.emphasis = emphasis;
        self
    }

    #[inline]
    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    #[inline]
    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn next(&mut self) -> usize {
        if self.slide_count > 0 {
            self.selected_index = if self.looping {
                (self.selected_index + 1) % self.slide_count
            } else {
                (self.selected_index + 1).min(self.slide_count - 1)
            };
        }
        self.selected_index
    }

    pub fn previous(&mut self) -> usize {
        if self.slide_count > 0 {
            self.selected_index = if self.looping {
                (self.selected_index + self.slide_count - 1) % self.slide_count
            } else {
                self.selected_index.saturating_sub(1)
            };
        }
        self.selected_index
    }

    /// Handle the host's settle event. Returns true if the selection changed.
    /// Ignored once detached.
    pub fn on_settle(&mut self, index: usize) -> bool {
        if !self.attached {
            debug!("carousel: settle on {index} after detach ignored");
            return false;
        }
        if self.slide_count == 0 {
            return false;
        }
        let index = index % self.slide_count;
        let changed = index != self.selected_index;
        self.selected_index = index;
        changed
    }

    /// Stop reacting to settle events; called when the owning view unmounts.
    pub fn detach(&mut self) {
        self.attached = false;
    }

    pub fn emphasis(&self, index: usize) -> SlideEmphasis {
        if index == self.selected_index {
            SlideEmphasis {
                scale: self.emphasis.selected_scale,
                opacity: self.emphasis.selected_opacity,
            }
        } else {
            SlideEmphasis {
                scale: self.emphasis.other_scale,
                opacity: self.emphasis.other_opacity,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_when_not_looping() {
        let mut c = CarouselTracker::new(3, false);
        assert_eq!(c.previous(), 0);
        c.next();
        c.next();
        assert_eq!(c.next(), 2);
    }

    #[test]
    fn empty_carousel_stays_at_zero() {
        let mut c = CarouselTracker::new(0, true);
        assert_eq!(c.next(), 0);
        assert_eq!(c.previous(), 0);
        assert!(!c.on_settle(4));
    }

    #[test]
    fn options_serialize_loop_key() {
        let v = serde_json::to_value(CarouselOptions::default()).unwrap();
        assert_eq!(v["loop"], true);
        assert_eq!(v["align"], "center");
        assert_eq!(v["dragFree"], true);
    }
}
