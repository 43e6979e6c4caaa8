//! Drag-to-launch gesture: a rubber band from the press point to the pointer.

use crate::constants::CATAPULT_POWER_FACTOR;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Catapult {
    origin: Vec2,
    pointer: Vec2,
    touching: bool,
    power_factor: f32,
}

impl Default for Catapult {
    fn default() -> Self {
        Self::new(CATAPULT_POWER_FACTOR)
    }
}

impl Catapult {
    pub const fn new(power_factor: f32) -> Self {
        Self {
            origin: Vec2::ZERO,
            pointer: Vec2::ZERO,
            touching: false,
            power_factor,
        }
    }

    pub fn press(&mut self, p: Vec2) {
        self.touching = true;
        self.origin = p;
        self.pointer = p;
    }

    /// Pointer moves are tracked whether or not the band is held.
    pub fn move_to(&mut self, p: Vec2) {
        self.pointer = p;
    }

    /// Let go. Returns the launch power if the band was held.
    pub fn release(&mut self) -> Option<f32> {
        let power = self.power();
        self.touching = false;
        power
    }

    pub fn is_touching(&self) -> bool {
        self.touching
    }

    /// Band endpoints (press point, pointer) while held.
    pub fn band(&self) -> Option<(Vec2, Vec2)> {
        self.touching.then_some((self.origin, self.pointer))
    }

    pub fn power(&self) -> Option<f32> {
        self.touching
            .then(|| self.origin.distance(self.pointer) * self.power_factor)
    }
}
