//! Rectangular entity
//!
//! A `Body` with a rectangle and a fixed color; forcing (acceleration) is
//! decided by the owning sketch, not the block itself.

use glam::Vec2;
use rand::Rng;

use super::{Body, Bounds};
use crate::canvas::Rgb;
use crate::random_color;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Block {
    pub body: Body,
    pub width: f32,
    pub height: f32,
    pub color: Rgb,
}

impl Block {
    pub fn new(mass: f32, position: Vec2, width: f32, height: f32, color: Rgb) -> Self {
        Self {
            body: Body::new(mass, position),
            width,
            height,
            color,
        }
    }

    /// Unit-mass block at a uniformly random position with a random color
    pub fn random(rng: &mut impl Rng, bounds: Bounds, size: f32) -> Self {
        let position = Vec2::new(
            rng.random::<f32>() * bounds.width,
            rng.random::<f32>() * bounds.height,
        );
        let color = random_color(rng);
        Self::new(1.0, position, size, size, color)
    }
}
