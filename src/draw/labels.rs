// src/draw/labels.rs
//
// The little numbers above and below the tracks.

use nannou::prelude::*;

use super::Canvas;
use crate::config::AnimationConfig;

/// Writes the floor of every value in slot order at height `y`.
pub fn write_numbers<C: Canvas + ?Sized>(
    canvas: &mut C,
    values: &[f32],
    y: f32,
    config: &AnimationConfig,
) {
    let style = config.labels.text_style();
    for (i, value) in values.iter().enumerate() {
        let x = (i as f32 + config.labels.x_offset) * config.track_spacing;
        let text = format!("{}", value.floor());
        canvas.fill_text(&text, vec2(x, y), &style);
    }
}
