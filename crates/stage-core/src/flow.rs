//! Planes laid over a vertically scrolled document.
//!
//! Bounds are sampled once, when the plane is created; a scroll offset then
//! shifts every plane without re-reading layout.

use crate::geometry::{Rect, Viewport};
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlowPlane {
    bounds: Rect,
}

impl FlowPlane {
    pub fn new(bounds: Rect) -> Self {
        Self { bounds }
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Centered renderer position for a document scrolled by `offset_y` px.
    pub fn position(&self, viewport: Viewport, offset_y: f32) -> Vec2 {
        let b = &self.bounds;
        Vec2::new(
            b.left() - viewport.width * 0.5 + b.width * 0.5,
            -offset_y - b.top() + viewport.height * 0.5 - b.height * 0.5,
        )
    }
}

#[derive(Clone, Debug, Default)]
pub struct FlowLayout {
    planes: Vec<FlowPlane>,
    offset_y: f32,
}

impl FlowLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, bounds: Rect) {
        self.planes.push(FlowPlane::new(bounds));
    }

    pub fn set_offset(&mut self, offset_y: f32) {
        self.offset_y = offset_y;
    }

    pub fn offset(&self) -> f32 {
        self.offset_y
    }

    pub fn len(&self) -> usize {
        self.planes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.planes.is_empty()
    }

    pub fn positions(&self, viewport: Viewport) -> impl Iterator<Item = Vec2> + '_ {
        self.planes
            .iter()
            .map(move |p| p.position(viewport, self.offset_y))
    }

    pub fn clear(&mut self) {
        self.planes.clear();
    }
}
