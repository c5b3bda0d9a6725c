//! Oscillating blocks
//!
//! A vertical column of outlined blocks whose vertical acceleration
//! follows the cosine of the frame counter, so each block swings rather
//! than drifts.

use glam::Vec2;

use super::Sketch;
use crate::canvas::{Canvas, Rgb};
use crate::settings::OscillatorSettings;
use crate::sim::Block;

pub struct Oscillator {
    settings: OscillatorSettings,
    pub blocks: Vec<Block>,
}

impl Oscillator {
    pub fn new(settings: OscillatorSettings) -> Self {
        Self {
            settings,
            blocks: Vec::new(),
        }
    }
}

impl Sketch for Oscillator {
    fn setup(&mut self, _canvas: &mut dyn Canvas) {
        let size = self.settings.block_size;
        self.blocks = (0..self.settings.count)
            .map(|i| {
                let position = Vec2::new(100.0, 100.0 + self.settings.spacing * i as f32);
                Block::new(1.0, position, size, size, Rgb::WHITE)
            })
            .collect();
        log::info!("oscillator: spawned {}", self.blocks.len());
    }

    fn draw(&mut self, canvas: &mut dyn Canvas) {
        canvas.background(Rgb::BLACK);

        for block in &mut self.blocks {
            canvas.stroke(Rgb::WHITE);
            canvas.rect(block.body.position, block.width, block.height);

            block.body.acceleration.y = (canvas.frame_count() as f32).cos();
            block.body.step();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{DrawOp, TraceCanvas};
    use crate::sketches::run_frames;

    fn settings() -> OscillatorSettings {
        OscillatorSettings {
            count: 2,
            block_size: 10.0,
            spacing: 100.0,
        }
    }

    #[test]
    fn test_blocks_spawn_in_a_column() {
        let mut sketch = Oscillator::new(settings());
        let mut canvas = TraceCanvas::new(800.0, 600.0);
        sketch.setup(&mut canvas);

        assert_eq!(sketch.blocks[0].body.position, Vec2::new(100.0, 100.0));
        assert_eq!(sketch.blocks[1].body.position, Vec2::new(100.0, 200.0));
    }

    #[test]
    fn test_acceleration_tracks_frame_counter() {
        let mut sketch = Oscillator::new(settings());
        let mut canvas = TraceCanvas::new(800.0, 600.0);
        sketch.setup(&mut canvas);

        canvas.begin_frame();
        sketch.draw(&mut canvas);
        assert_eq!(sketch.blocks[0].body.acceleration.y, 1.0f32.cos());

        canvas.begin_frame();
        sketch.draw(&mut canvas);
        assert_eq!(sketch.blocks[0].body.acceleration.y, 2.0f32.cos());

        // No horizontal forcing: the column stays put in x.
        assert_eq!(sketch.blocks[0].body.position.x, 100.0);
    }

    #[test]
    fn test_blocks_draw_stroked() {
        let mut sketch = Oscillator::new(settings());
        let mut canvas = TraceCanvas::new(800.0, 600.0);

        run_frames(&mut sketch, &mut canvas, 1);

        let rects: Vec<_> = canvas
            .ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Rect { stroke, .. } => Some(*stroke),
                _ => None,
            })
            .collect();
        assert_eq!(rects, vec![Some(Rgb::WHITE), Some(Rgb::WHITE)]);
    }
}
