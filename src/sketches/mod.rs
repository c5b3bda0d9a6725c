//! Sketch drivers
//!
//! One module per sketch. Each sketch owns its entities and its seeded
//! RNG, reads the surface dimensions once during `setup`, and both
//! advances and renders its entities on every `draw`.

pub mod blocks;
pub mod bubbles;
pub mod collisions;
pub mod oscillator;
pub mod tether;

pub use blocks::Blocks;
pub use bubbles::Bubbles;
pub use collisions::Collisions;
pub use oscillator::Oscillator;
pub use tether::Tether;

use crate::canvas::Canvas;

/// The canvas runtime contract: `setup` runs exactly once, `draw` runs on
/// every animation frame
pub trait Sketch {
    fn setup(&mut self, canvas: &mut dyn Canvas);
    fn draw(&mut self, canvas: &mut dyn Canvas);
}

/// Headless frame driver: one `setup`, then `draw` once per frame
pub fn run_frames(sketch: &mut dyn Sketch, canvas: &mut dyn Canvas, frames: u64) {
    sketch.setup(canvas);
    for _ in 0..frames {
        canvas.begin_frame();
        sketch.draw(canvas);
    }
}
