//! Naive pairwise collision pass over bubble boundary samples
//!
//! Every unordered pair is checked once per frame against the sample sets
//! captured at the start of the pass. The bounce is a plain 180° turn for
//! both bubbles; momentum is not conserved, and the proximity threshold
//! derives from one bubble's radius only.

use glam::Vec2;

use super::Bubble;
use crate::consts::{BOUNDARY_SAMPLES, COLLISION_PAD};

/// Whether any pair of corresponding sample points sits closer than
/// `threshold`
fn samples_touch(
    a: &[Vec2; BOUNDARY_SAMPLES],
    b: &[Vec2; BOUNDARY_SAMPLES],
    threshold: f32,
) -> bool {
    a.iter().zip(b.iter()).any(|(p, q)| p.distance(*q) < threshold)
}

/// Check all unordered bubble pairs and deflect both members of every
/// colliding pair
///
/// Sample sets are snapshotted before the pass, so a deflection earlier in
/// the frame does not affect later proximity checks. The threshold for the
/// pair `(i, j)` with `i > j` is `2 * x_radius(i) + COLLISION_PAD`.
pub fn resolve_collisions(bubbles: &mut [Bubble]) {
    let samples: Vec<[Vec2; BOUNDARY_SAMPLES]> =
        bubbles.iter().map(Bubble::boundary_samples).collect();

    for i in 1..bubbles.len() {
        let threshold = bubbles[i].x_radius * 2.0 + COLLISION_PAD;
        let (head, tail) = bubbles.split_at_mut(i);
        let current = &mut tail[0];

        for (j, other) in head.iter_mut().enumerate() {
            if samples_touch(&samples[i], &samples[j], threshold) {
                current.deflect();
                other.deflect();
            }
        }
    }
}
