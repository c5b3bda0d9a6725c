//! Drifting blocks
//!
//! Blocks wander under per-frame randomized acceleration and leave a
//! persistent pixel trail of every position they have occupied. Blocks
//! that leave the canvas are marked during the pass and compacted out
//! afterwards.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::Sketch;
use crate::canvas::{Canvas, Rgb};
use crate::random_sign;
use crate::settings::BlockSettings;
use crate::sim::{Block, Bounds};

pub struct Blocks {
    settings: BlockSettings,
    rng: Pcg32,
    bounds: Bounds,
    pub blocks: Vec<Block>,
    /// Every position a block has occupied, rendered as single pixels
    pub trail: Vec<Vec2>,
}

impl Blocks {
    pub fn new(settings: BlockSettings, seed: u64) -> Self {
        Self {
            settings,
            rng: Pcg32::seed_from_u64(seed),
            bounds: Bounds::new(0.0, 0.0),
            blocks: Vec::new(),
            trail: Vec::new(),
        }
    }
}

impl Sketch for Blocks {
    fn setup(&mut self, canvas: &mut dyn Canvas) {
        self.bounds = Bounds::new(canvas.width(), canvas.height());
        self.blocks = (0..self.settings.count)
            .map(|_| Block::random(&mut self.rng, self.bounds, self.settings.block_size))
            .collect();
        log::info!("blocks: spawned {}", self.blocks.len());
    }

    fn draw(&mut self, canvas: &mut dyn Canvas) {
        canvas.background(Rgb::BLACK);

        for point in &self.trail {
            canvas.set_pixel(point.x as i32, point.y as i32, Rgb::WHITE);
        }

        for block in &mut self.blocks {
            // Uniform magnitude with an independently chosen sign, per axis
            block.body.acceleration.x = self.rng.random::<f32>() * random_sign(&mut self.rng);
            block.body.acceleration.y = self.rng.random::<f32>() * random_sign(&mut self.rng);

            self.trail.push(block.body.position);

            canvas.fill(block.color);
            canvas.rect(block.body.position, block.width, block.height);

            block.body.step();
        }

        let bounds = self.bounds;
        let before = self.blocks.len();
        self.blocks.retain(|block| bounds.contains(block.body.position));
        let removed = before - self.blocks.len();
        if removed > 0 {
            log::debug!("blocks: removed {removed}, {} remain", self.blocks.len());
        }
    }
}
