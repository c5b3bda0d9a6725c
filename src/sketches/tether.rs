//! Tethered balls
//!
//! One center ball oscillates vertically; every satellite is joined to it
//! by a colored line and slides horizontally at the rate the connecting
//! line must rotate to follow the center. The raw rate is passed through
//! sign-preserving exponential decay to keep it bounded near the
//! asymptote where a satellite's y matches the center's.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::Sketch;
use crate::canvas::{Canvas, Rgb};
use crate::consts::TETHER_DAMPING_SCALE;
use crate::random_color;
use crate::settings::TetherSettings;
use crate::sim::{Ball, Bounds};

pub struct Tether {
    settings: TetherSettings,
    rng: Pcg32,
    bounds: Bounds,
    /// Index 0 is the center ball; the rest are satellites
    pub balls: Vec<Ball>,
    /// Per-ball line colors, fixed at construction
    pub line_colors: Vec<Rgb>,
}

impl Tether {
    pub fn new(settings: TetherSettings, seed: u64) -> Self {
        Self {
            settings,
            rng: Pcg32::seed_from_u64(seed),
            bounds: Bounds::new(0.0, 0.0),
            balls: Vec::new(),
            line_colors: Vec::new(),
        }
    }

    /// Horizontal increment for a satellite: the line's rotation rate,
    /// exponentially damped with the sign preserved
    ///
    /// At exactly zero the non-negative branch applies, so a level
    /// satellite still moves by +1. A satellite sharing the center's x
    /// divides by zero; the infinite rate decays to zero (NaN when level
    /// with the center too) and the satellite freezes. Not guarded.
    fn damped_del_x(center: &Ball, satellite: &Ball) -> f32 {
        let del_x = (center.speed.y * (satellite.position.y - center.position.y))
            / (satellite.position.x - center.position.x);
        let calc = (-(del_x / TETHER_DAMPING_SCALE).abs()).exp();
        if del_x < 0.0 { -calc } else { calc }
    }
}

impl Sketch for Tether {
    fn setup(&mut self, canvas: &mut dyn Canvas) {
        self.bounds = Bounds::new(canvas.width(), canvas.height());

        let center = Vec2::new(self.bounds.width / 2.0, self.bounds.height / 2.0);
        self.balls = Vec::with_capacity(self.settings.count + 1);
        self.balls
            .push(Ball::new(center, self.settings.center_diameter));

        for _ in 0..self.settings.count {
            let position = Vec2::new(
                self.rng.random::<f32>() * self.bounds.width,
                self.rng.random::<f32>() * self.bounds.height,
            );
            self.balls
                .push(Ball::new(position, self.settings.satellite_diameter));
        }

        self.line_colors = (0..self.balls.len())
            .map(|_| random_color(&mut self.rng))
            .collect();

        self.balls[0].speed.y = self.settings.center_speed;
        log::info!("tether: center plus {} satellites", self.settings.count);
    }

    fn draw(&mut self, canvas: &mut dyn Canvas) {
        canvas.background(Rgb::WHITE);

        let center = self.balls[0];

        for i in 1..self.balls.len() {
            canvas.stroke(self.line_colors[i]);
            canvas.stroke_weight(self.settings.line_weight);
            canvas.line(center.position, self.balls[i].position);
            canvas.no_stroke();

            canvas.fill(Rgb::BLACK);
            let ball = &mut self.balls[i];
            canvas.ellipse(ball.position, ball.diameter, ball.diameter);
            ball.step();

            let del_x = Self::damped_del_x(&center, ball);
            ball.position.x += del_x;
        }

        // Reverse the center's vertical speed at the top or bottom edge,
        // stepping once immediately so it re-enters the surface.
        if self.balls[0].position.y < 0.0 || self.balls[0].position.y > self.bounds.height {
            self.balls[0].speed.y = -self.balls[0].speed.y;
            let speed_y = self.balls[0].speed.y;
            self.balls[0].position.y += speed_y;
        }

        // The center draws last so it sits above every line.
        canvas.fill(Rgb::BLACK);
        let center = &mut self.balls[0];
        canvas.ellipse(center.position, center.diameter, center.diameter);
        center.step();
    }
}
