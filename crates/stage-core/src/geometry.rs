//! Screen-space rectangles and the DOM → renderer coordinate mapping.
//!
//! DOM rectangles use a top-left origin with y growing downwards. The
//! renderer uses a centered origin with y growing upwards, one unit per CSS
//! pixel.

use glam::Vec2;

/// Axis-aligned rectangle in DOM (client) coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }
}

/// Renderer bounds; matches the canvas overlay, which covers the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Convert a DOM client point to centered renderer space.
    #[inline]
    pub fn dom_to_centered(&self, p: Vec2) -> Vec2 {
        Vec2::new(p.x - self.width * 0.5, -p.y + self.height * 0.5)
    }
}

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
