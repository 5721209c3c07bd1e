//! Identifiers and a simple allocator for stage-hosted controllers.

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct RevealId(pub u32);

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct TiltId(pub u32);

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct CarouselId(pub u32);

/// Monotonic allocator. Ids are never reused within a stage, so a stale id
/// from an unmounted view cannot address a newer controller.
#[derive(Default, Debug)]
pub struct IdAllocator {
    next_reveal: u32,
    next_tilt: u32,
    next_carousel: u32,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn alloc_reveal(&mut self) -> RevealId {
        let id = RevealId(self.next_reveal);
        self.next_reveal = self.next_reveal.wrapping_add(1);
        id
    }

    #[inline]
    pub fn alloc_tilt(&mut self) -> TiltId {
        let id = TiltId(self.next_tilt);
        self.next_tilt = self.next_tilt.wrapping_add(1);
        id
    }

    #[inline]
    pub fn alloc_carousel(&mut self) -> CarouselId {
        let id = CarouselId(self.next_carousel);
        self.next_carousel = self.next_carousel.wrapping_add(1);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alloc_monotonic() {
        let mut alloc = IdAllocator::new();
        assert_eq!(alloc.alloc_reveal(), RevealId(0));
        assert_eq!(alloc.alloc_reveal(), RevealId(1));
        assert_eq!(alloc.alloc_tilt(), TiltId(0));
        assert_eq!(alloc.alloc_carousel(), CarouselId(0));
        assert_eq!(alloc.alloc_carousel(), CarouselId(1));
    }
}
