//! Canvas Toys - frame-driven 2D particle toy sketches
//!
//! Core modules:
//! - `sim`: Deterministic simulation (bodies, bubbles, collisions)
//! - `sketches`: One driver per sketch, advanced once per animation frame
//! - `canvas`: Drawing-primitive contract plus a recording implementation
//! - `settings`: Data-driven sketch tuning

pub mod canvas;
pub mod settings;
pub mod sim;
pub mod sketches;

pub use canvas::{Canvas, Rgb, TraceCanvas};
pub use settings::Settings;

use rand::Rng;

/// Sketch tuning constants
pub mod consts {
    /// Distance from a canvas edge at which a bubble's speed reflects
    pub const BOUNCE_MARGIN: f32 = 2.0;
    /// Number of points in an entity's boundary sample set
    pub const BOUNDARY_SAMPLES: usize = 10;
    /// Slack added to the radius-derived collision threshold
    pub const COLLISION_PAD: f32 = 2.0;
    /// Default cap on randomized per-axis speeds
    pub const DEFAULT_SPEED_LIMIT: f32 = 10.0;
    /// Length scale of the tether sketch's exponential damping
    pub const TETHER_DAMPING_SCALE: f32 = 100.0;
}

/// Uniform random sign: +1 or -1
#[inline]
pub fn random_sign(rng: &mut impl Rng) -> f32 {
    if rng.random_bool(0.5) { 1.0 } else { -1.0 }
}

/// Random color with each channel drawn uniformly from [0, 255)
pub fn random_color(rng: &mut impl Rng) -> Rgb {
    Rgb::new(
        rng.random::<f32>() * 255.0,
        rng.random::<f32>() * 255.0,
        rng.random::<f32>() * 255.0,
    )
}
