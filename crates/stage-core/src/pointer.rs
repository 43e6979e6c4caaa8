//! Smoothed pointer pursuit.
//!
//! The pointer target is chased with exponential smoothing. The distance
//! travelled in the last frame feeds a second smoothed value, the pursuit
//! strength, which drives the plane's distortion uniform.

use crate::geometry::lerp;
use glam::Vec2;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Horizontal {
    #[default]
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Vertical {
    #[default]
    Up,
    Down,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Direction {
    pub horizontal: Horizontal,
    pub vertical: Vertical,
}

/// A scalar chasing its target.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Smoothed {
    pub current: f32,
    pub target: f32,
}

impl Smoothed {
    pub const fn new(value: f32) -> Self {
        Self {
            current: value,
            target: value,
        }
    }

    #[inline]
    pub fn step(&mut self, rate: f32) {
        self.current = lerp(self.current, self.target, rate);
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub current: Vec2,
    pub target: Vec2,
    pub last: Vec2,
    pub direction: Direction,
    pub strength: Smoothed,
}

impl PointerState {
    /// Advance one frame of pursuit with the given smoothing `rate`.
    pub fn pursue(&mut self, rate: f32) {
        self.direction = Direction {
            horizontal: if self.current.x > self.last.x {
                Horizontal::Left
            } else {
                Horizontal::Right
            },
            vertical: if self.current.y > self.last.y {
                Vertical::Up
            } else {
                Vertical::Down
            },
        };

        // strength trails one frame behind the measured displacement
        self.strength.step(rate);
        self.strength.target = (self.current - self.last).length();

        self.last = self.current;
        self.current = self.current.lerp(self.target, rate);
    }

    /// Pin target and last sample to the current value so releasing the
    /// pointer does not produce a pursuit jump.
    pub fn freeze(&mut self) {
        self.target = self.current;
        self.last = self.current;
    }
}

/// Smoothing rate for the item at ordinal `key` (1-based) in its group.
#[inline]
pub fn staggered_rate(first: f32, quotient: f32, key: u32) -> f32 {
    first * quotient.powi(key as i32 - 1)
}
