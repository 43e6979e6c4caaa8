//! Smoothed scroll index for the spiral carousel.

use crate::constants::{
    SCROLL_LERP_EASE, SCROLL_Y_MULTIPLIER, SPIRAL_ITEM_SPACING, SPIRAL_SCALE_EXPONENT,
    SPIRAL_SCALE_FALLOFF, SPIRAL_ZERO_PROGRESS_OFFSET,
};
use crate::geometry::lerp;

/// Placement of one carousel item relative to the current scroll index.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpiralSlot {
    /// Signed distance in items from the focused index.
    pub d_index: f32,
    /// Position along the spiral spline.
    pub spline_progress: f32,
    /// Uniform scale in [0, 1]; items past the far end shrink to zero.
    pub scale: f32,
}

#[derive(Clone, Debug)]
pub struct ScrollTracker {
    current: f32,
    target: f32,
    item_count: usize,
    ease: f32,
    multiplier: f32,
}

impl ScrollTracker {
    pub fn new(item_count: usize) -> Self {
        Self::with_tuning(item_count, SCROLL_LERP_EASE, SCROLL_Y_MULTIPLIER)
    }

    pub fn with_tuning(item_count: usize, ease: f32, multiplier: f32) -> Self {
        Self {
            current: 0.0,
            target: 0.0,
            item_count,
            ease,
            multiplier,
        }
    }

    #[inline]
    fn max_index(&self) -> f32 {
        self.item_count.saturating_sub(1) as f32
    }

    /// Apply a wheel/touch delta in pixels. Scrolling down (positive delta)
    /// moves back towards index 0.
    pub fn apply_scroll(&mut self, delta_y: f32) {
        let target = self.target - delta_y * self.multiplier;
        self.target = target.clamp(0.0, self.max_index());
    }

    pub fn update(&mut self, slow_down_factor: f32) {
        self.current = lerp(
            self.current,
            self.target,
            (self.ease * slow_down_factor).min(1.0),
        );
    }

    pub fn set_item_count(&mut self, item_count: usize) {
        self.item_count = item_count;
        self.target = self.target.clamp(0.0, self.max_index());
    }

    /// Spline placement of the item at `index` for the current scroll value.
    pub fn item_layout(&self, index: usize) -> SpiralSlot {
        let d_index = index as f32 - self.current;
        let d_progress = d_index * SPIRAL_ITEM_SPACING;
        let base = 1.0 + (0.5 - d_progress - SPIRAL_ZERO_PROGRESS_OFFSET) * SPIRAL_SCALE_FALLOFF;
        // powf of a negative base is NaN
        let scale = base.max(0.0).powf(SPIRAL_SCALE_EXPONENT).min(1.0);
        SpiralSlot {
            d_index,
            spline_progress: d_progress + SPIRAL_ZERO_PROGRESS_OFFSET,
            scale,
        }
    }

    pub fn layout(&self) -> impl Iterator<Item = SpiralSlot> + '_ {
        (0..self.item_count).map(|i| self.item_layout(i))
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn current(&self) -> f32 {
        self.current
    }

    pub fn target(&self) -> f32 {
        self.target
    }
}
