//! Colliding bubbles
//!
//! Same bubble field as the bouncing sketch, plus a pairwise collision
//! pass over every frame before the bubbles move.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::Sketch;
use crate::canvas::{Canvas, Rgb};
use crate::settings::CollisionSettings;
use crate::sim::{Bounds, Bubble, resolve_collisions};

pub struct Collisions {
    settings: CollisionSettings,
    rng: Pcg32,
    bounds: Bounds,
    pub bubbles: Vec<Bubble>,
}

impl Collisions {
    pub fn new(settings: CollisionSettings, seed: u64) -> Self {
        Self {
            settings,
            rng: Pcg32::seed_from_u64(seed),
            bounds: Bounds::new(0.0, 0.0),
            bubbles: Vec::new(),
        }
    }
}

impl Sketch for Collisions {
    fn setup(&mut self, canvas: &mut dyn Canvas) {
        self.bounds = Bounds::new(canvas.width(), canvas.height());
        let d = self.settings.diameter;
        self.bubbles = (0..self.settings.count)
            .map(|_| Bubble::random(&mut self.rng, self.bounds, d, d, self.settings.speed_limit))
            .collect();
        log::info!("collisions: spawned {}", self.bubbles.len());
    }

    fn draw(&mut self, canvas: &mut dyn Canvas) {
        canvas.background(Rgb::BLACK);

        resolve_collisions(&mut self.bubbles);

        for bubble in &mut self.bubbles {
            bubble.step(self.bounds);
            bubble.refresh_color(self.bounds, self.settings.speed_limit);

            canvas.fill(bubble.color);
            canvas.ellipse(bubble.position, bubble.width, bubble.height);
        }
    }
}
