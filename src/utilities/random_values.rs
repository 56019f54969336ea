// src/utilities/random_values.rs
//
// Starting arrays for the animation.

use rand::Rng;

/// `count` random floats in [0, 100).
pub fn generate_random_values<R: Rng>(count: usize, rng: &mut R) -> Vec<f32> {
    (0..count).map(|_| rng.gen_range(0.0..100.0)).collect()
}

/// Like [`generate_random_values`], but redraws any value already taken so
/// the result can be handed straight to an engine.
pub fn generate_unique_values<R: Rng>(count: usize, rng: &mut R) -> Vec<f32> {
    let mut values: Vec<f32> = Vec::with_capacity(count);
    while values.len() < count {
        let candidate: f32 = rng.gen_range(0.0..100.0);
        if !values.contains(&candidate) {
            values.push(candidate);
        }
    }
    values
}
