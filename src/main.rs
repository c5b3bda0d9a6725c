//! canvas-toys entry point
//!
//! Runs every sketch headless against a recording canvas and logs a
//! per-sketch summary. A real canvas runtime would drive the same
//! `Sketch` objects from its own animation callback.

use std::path::Path;

use canvas_toys::canvas::TraceCanvas;
use canvas_toys::settings::Settings;
use canvas_toys::sketches::{
    Blocks, Bubbles, Collisions, Oscillator, Sketch, Tether, run_frames,
};

/// Frames to drive each sketch in the headless demo
const DEMO_FRAMES: u64 = 300;

fn run_sketch(name: &str, sketch: &mut dyn Sketch, settings: &Settings) {
    let mut canvas = TraceCanvas::new(settings.width, settings.height);
    run_frames(sketch, &mut canvas, DEMO_FRAMES);
    log::info!(
        "{name}: {DEMO_FRAMES} frames, {} draw calls total",
        canvas.total_ops
    );
}

fn main() {
    env_logger::init();
    log::info!("canvas-toys starting");

    let settings = Settings::load(Path::new("settings.json"));

    run_sketch(
        "bubbles",
        &mut Bubbles::new(settings.bubbles, settings.seed),
        &settings,
    );
    run_sketch(
        "collisions",
        &mut Collisions::new(settings.collisions, settings.seed),
        &settings,
    );
    run_sketch(
        "blocks",
        &mut Blocks::new(settings.blocks, settings.seed),
        &settings,
    );
    run_sketch(
        "tether",
        &mut Tether::new(settings.tether, settings.seed),
        &settings,
    );
    run_sketch(
        "oscillator",
        &mut Oscillator::new(settings.oscillator),
        &settings,
    );

    log::info!("canvas-toys done");
}
