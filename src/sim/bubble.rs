//! Bouncing ellipse entity
//!
//! A bubble carries its own per-axis speed, reflects off the canvas edges,
//! and derives its color from where it is and how fast it moves.

use glam::Vec2;
use rand::Rng;

use super::Bounds;
use crate::canvas::Rgb;
use crate::consts::{BOUNCE_MARGIN, BOUNDARY_SAMPLES};
use crate::random_sign;

/// Assignment of the three derived color values to the RGB channels
///
/// `x`, `y` and `speed` always partition `{0, 1, 2}`; the permutation is
/// drawn once at construction so every bubble keeps its own palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelMap {
    pub x: usize,
    pub y: usize,
    pub speed: usize,
}

impl ChannelMap {
    /// Uniformly random permutation of the three channels
    pub fn random(rng: &mut impl Rng) -> Self {
        let mut slots = vec![0usize, 1, 2];
        let x = slots.remove(rng.random_range(0..slots.len()));
        let y = slots.remove(rng.random_range(0..slots.len()));
        let speed = slots[0];
        Self { x, y, speed }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bubble {
    pub position: Vec2,
    pub speed: Vec2,
    pub width: f32,
    pub height: f32,
    pub x_radius: f32,
    pub y_radius: f32,
    pub color: Rgb,
    pub channels: ChannelMap,
}

impl Bubble {
    /// Bubble of the given size at an exact position
    ///
    /// The position is pulled back so the bounding box starts inside the
    /// canvas; later motion is free to violate that.
    pub fn new(position: Vec2, width: f32, height: f32, bounds: Bounds) -> Self {
        let x_radius = (width / 2.0).floor();
        let y_radius = (height / 2.0).floor();
        let position = Vec2::new(
            position.x.max(x_radius).min(bounds.width - x_radius),
            position.y.max(y_radius).min(bounds.height - y_radius),
        );
        Self {
            position,
            speed: Vec2::ZERO,
            width,
            height,
            x_radius,
            y_radius,
            color: Rgb::BLACK,
            channels: ChannelMap { x: 0, y: 1, speed: 2 },
        }
    }

    /// Bubble of the given size with random position, speed and channel map
    ///
    /// Per-axis speed is `floor(U(0, speed_limit))` with a random sign.
    pub fn random(
        rng: &mut impl Rng,
        bounds: Bounds,
        width: f32,
        height: f32,
        speed_limit: f32,
    ) -> Self {
        let position = Vec2::new(
            rng.random::<f32>() * bounds.width,
            rng.random::<f32>() * bounds.height,
        );
        let mut bubble = Self::new(position, width, height, bounds);
        bubble.speed = Vec2::new(
            (rng.random::<f32>() * speed_limit).floor() * random_sign(rng),
            (rng.random::<f32>() * speed_limit).floor() * random_sign(rng),
        );
        bubble.channels = ChannelMap::random(rng);
        bubble
    }

    /// Fully randomized bubble, size included (up to 200 px per axis)
    pub fn random_size(rng: &mut impl Rng, bounds: Bounds, speed_limit: f32) -> Self {
        let width = rng.random::<f32>() * 200.0;
        let height = rng.random::<f32>() * 200.0;
        Self::random(rng, bounds, width, height, speed_limit)
    }

    /// Advance by one step and reflect off the canvas edges
    ///
    /// A speed component's sign flips whenever the shape's edge lands
    /// within `BOUNCE_MARGIN` of the matching boundary.
    pub fn step(&mut self, bounds: Bounds) {
        self.position.x += self.speed.x;
        if self.position.x - self.x_radius < BOUNCE_MARGIN
            || self.position.x + self.x_radius > bounds.width - BOUNCE_MARGIN
        {
            self.speed.x = -self.speed.x;
        }

        self.position.y += self.speed.y;
        if self.position.y - self.y_radius < BOUNCE_MARGIN
            || self.position.y + self.y_radius > bounds.height - BOUNCE_MARGIN
        {
            self.speed.y = -self.speed.y;
        }
    }

    /// Recompute the color from position and squared speed magnitude
    ///
    /// Three independent linear mappings, routed through the channel map.
    pub fn refresh_color(&mut self, bounds: Bounds, speed_limit: f32) {
        let speed_mag = self.speed.length_squared();

        let mut channels = [0.0f32; 3];
        channels[self.channels.speed] = 256.0 * speed_mag / (speed_limit * speed_limit * 2.0 + 1.0);
        channels[self.channels.x] = 256.0 * self.position.x / (bounds.width - self.x_radius + 1.0);
        channels[self.channels.y] = 256.0 * self.position.y / (bounds.height - self.y_radius + 1.0);

        self.color = Rgb::from_channels(channels);
    }

    /// Fixed set of points approximating the bubble's outline
    ///
    /// Offsets are cos²/sin² of the integer sample index, so they land in
    /// [0, 1] around the center rather than scaling with the radii.
    pub fn boundary_samples(&self) -> [Vec2; BOUNDARY_SAMPLES] {
        std::array::from_fn(|k| {
            let k = k as f32;
            Vec2::new(
                k.cos().powi(2) + self.position.x,
                k.sin().powi(2) + self.position.y,
            )
        })
    }

    /// Collision response: negate both speed components, then take one
    /// step with the new speed
    pub fn deflect(&mut self) {
        self.speed = -self.speed;
        self.position += self.speed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    const BOUNDS: Bounds = Bounds::new(800.0, 600.0);

    #[test]
    fn test_spawn_pulls_bounding_box_inside_canvas() {
        let bubble = Bubble::new(Vec2::new(-50.0, 700.0), 50.0, 50.0, BOUNDS);
        assert_eq!(bubble.position, Vec2::new(25.0, 575.0));
        assert_eq!(bubble.x_radius, 25.0);
    }

    #[test]
    fn test_step_reflects_near_right_edge() {
        let mut bubble = Bubble::new(Vec2::new(770.0, 300.0), 50.0, 50.0, BOUNDS);
        bubble.speed = Vec2::new(8.0, 0.0);

        // 770 + 8 + 25 = 803 > 798, so the x speed flips after the move
        bubble.step(BOUNDS);
        assert_eq!(bubble.position.x, 778.0);
        assert_eq!(bubble.speed.x, -8.0);
    }

    #[test]
    fn test_step_reflects_near_top_edge() {
        let mut bubble = Bubble::new(Vec2::new(400.0, 30.0), 50.0, 50.0, BOUNDS);
        bubble.speed = Vec2::new(0.0, -4.0);

        // 30 - 4 - 25 = 1 < 2, so the y speed flips after the move
        bubble.step(BOUNDS);
        assert_eq!(bubble.position.y, 26.0);
        assert_eq!(bubble.speed.y, 4.0);
    }

    #[test]
    fn test_step_keeps_speed_away_from_edges() {
        let mut bubble = Bubble::new(Vec2::new(400.0, 300.0), 50.0, 50.0, BOUNDS);
        bubble.speed = Vec2::new(3.0, -7.0);

        bubble.step(BOUNDS);
        assert_eq!(bubble.position, Vec2::new(403.0, 293.0));
        assert_eq!(bubble.speed, Vec2::new(3.0, -7.0));
    }

    #[test]
    fn test_boundary_samples_offsets_stay_unit() {
        let bubble = Bubble::new(Vec2::new(400.0, 300.0), 50.0, 50.0, BOUNDS);
        for point in bubble.boundary_samples() {
            let offset = point - bubble.position;
            assert!((0.0..=1.0).contains(&offset.x));
            assert!((0.0..=1.0).contains(&offset.y));
        }
    }

    #[test]
    fn test_color_routes_through_channel_map() {
        let mut bubble = Bubble::new(Vec2::new(400.0, 300.0), 50.0, 50.0, BOUNDS);
        bubble.speed = Vec2::ZERO;
        bubble.channels = ChannelMap { x: 2, y: 0, speed: 1 };

        bubble.refresh_color(BOUNDS, 10.0);

        assert_eq!(bubble.color.g, 0.0); // zero speed
        assert_eq!(bubble.color.b, 256.0 * 400.0 / (800.0 - 25.0 + 1.0));
        assert_eq!(bubble.color.r, 256.0 * 300.0 / (600.0 - 25.0 + 1.0));
    }

    #[test]
    fn test_deflect_negates_speed_and_steps() {
        let mut bubble = Bubble::new(Vec2::new(400.0, 300.0), 20.0, 20.0, BOUNDS);
        bubble.speed = Vec2::new(5.0, -3.0);

        bubble.deflect();

        assert_eq!(bubble.speed, Vec2::new(-5.0, 3.0));
        assert_eq!(bubble.position, Vec2::new(395.0, 303.0));
    }

    proptest! {
        // {x, y, speed} is always a permutation of {0, 1, 2}
        #[test]
        fn prop_channel_map_partitions_rgb(seed in any::<u64>()) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let map = ChannelMap::random(&mut rng);
            let mut indices = [map.x, map.y, map.speed];
            indices.sort_unstable();
            prop_assert_eq!(indices, [0, 1, 2]);
        }

        // Random spawns respect the bounding-box clamp and speed cap
        #[test]
        fn prop_random_spawn_in_bounds(seed in any::<u64>()) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let bubble = Bubble::random(&mut rng, BOUNDS, 50.0, 50.0, 10.0);
            prop_assert!(bubble.position.x >= bubble.x_radius);
            prop_assert!(bubble.position.x <= BOUNDS.width - bubble.x_radius);
            prop_assert!(bubble.position.y >= bubble.y_radius);
            prop_assert!(bubble.position.y <= BOUNDS.height - bubble.y_radius);
            prop_assert!(bubble.speed.x.abs() < 10.0);
            prop_assert!(bubble.speed.y.abs() < 10.0);
        }

        // A pre-move position inside the margin band flips the matching sign
        #[test]
        fn prop_margin_crossing_flips_sign(
            x in 30.0f32..770.0,
            sx in 1.0f32..9.0,
        ) {
            let mut bubble = Bubble::new(Vec2::new(x, 300.0), 50.0, 50.0, BOUNDS);
            bubble.speed = Vec2::new(sx.floor(), 0.0);
            let crossed = x + bubble.speed.x + bubble.x_radius > BOUNDS.width - BOUNCE_MARGIN
                || x + bubble.speed.x - bubble.x_radius < BOUNCE_MARGIN;

            let before = bubble.speed.x;
            bubble.step(BOUNDS);

            if crossed {
                prop_assert_eq!(bubble.speed.x, -before);
            } else {
                prop_assert_eq!(bubble.speed.x, before);
            }
        }
    }
}
