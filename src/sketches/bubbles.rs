//! Bouncing bubbles
//!
//! A field of fixed-size bubbles drifting inside the canvas, reflecting
//! off the edges, recolored every frame from position and speed.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::Sketch;
use crate::canvas::{Canvas, Rgb};
use crate::settings::BubbleSettings;
use crate::sim::{Bounds, Bubble};

pub struct Bubbles {
    settings: BubbleSettings,
    rng: Pcg32,
    bounds: Bounds,
    pub bubbles: Vec<Bubble>,
}

impl Bubbles {
    pub fn new(settings: BubbleSettings, seed: u64) -> Self {
        Self {
            settings,
            rng: Pcg32::seed_from_u64(seed),
            bounds: Bounds::new(0.0, 0.0),
            bubbles: Vec::new(),
        }
    }
}

impl Sketch for Bubbles {
    fn setup(&mut self, canvas: &mut dyn Canvas) {
        self.bounds = Bounds::new(canvas.width(), canvas.height());
        let d = self.settings.diameter;
        self.bubbles = (0..self.settings.count)
            .map(|_| Bubble::random(&mut self.rng, self.bounds, d, d, self.settings.speed_limit))
            .collect();
        log::info!("bubbles: spawned {}", self.bubbles.len());
    }

    fn draw(&mut self, canvas: &mut dyn Canvas) {
        canvas.background(Rgb::BLACK);

        for bubble in &mut self.bubbles {
            bubble.step(self.bounds);
            bubble.refresh_color(self.bounds, self.settings.speed_limit);

            canvas.fill(bubble.color);
            canvas.ellipse(bubble.position, bubble.width, bubble.height);
        }
    }
}
