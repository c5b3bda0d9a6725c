//! Circular entity used by the tether sketch
//!
//! Simpler than `Bubble`: speed is added straight to position, with no
//! boundary handling of its own.

use glam::Vec2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub position: Vec2,
    pub speed: Vec2,
    pub diameter: f32,
}

impl Ball {
    /// New ball at rest
    pub fn new(position: Vec2, diameter: f32) -> Self {
        Self {
            position,
            speed: Vec2::ZERO,
            diameter,
        }
    }

    /// Advance position by the current speed
    pub fn step(&mut self) {
        self.position += self.speed;
    }
}
