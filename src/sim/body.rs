//! Kinematic state shared by the shaped entities
//!
//! Entities hold a `Body` by value; shape and color live on the entity.

use glam::Vec2;

/// Mass plus position/velocity/acceleration, advanced by explicit Euler
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub mass: f32,
    pub position: Vec2,
    pub velocity: Vec2,
    pub acceleration: Vec2,
}

impl Body {
    /// New body at rest: velocity and acceleration start at zero
    pub fn new(mass: f32, position: Vec2) -> Self {
        Self {
            mass,
            position,
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
        }
    }

    /// One explicit Euler step over a unit timestep:
    /// `velocity += acceleration; position += velocity`
    pub fn step(&mut self) {
        self.velocity += self.acceleration;
        self.position += self.velocity;
    }
}
