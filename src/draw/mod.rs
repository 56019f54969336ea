// src/draw/mod.rs
// The drawing surface seam.
// Tracks and labels only ever talk to a Canvas; the nannou adapter and the
// recording canvas are the two implementations.

pub mod labels;
pub mod nannou_canvas;
pub mod recording;

pub use labels::write_numbers;
pub use nannou_canvas::NannouCanvas;
pub use recording::{DrawCall, RecordingCanvas};

use nannou::prelude::*;
use serde::Deserialize;

/// Color in CSS terms: hue in degrees, saturation and lightness in percent.
/// Hue is deliberately left unwrapped so out-of-range values stay visible.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct HslColor {
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
}

impl HslColor {
    pub const fn new(hue: f32, saturation: f32, lightness: f32) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    pub fn to_nannou(self) -> Hsl {
        // nannou takes hue in turns and saturation/lightness as fractions
        hsl(
            self.hue / 360.0,
            self.saturation / 100.0,
            self.lightness / 100.0,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineCap {
    Butt,
    #[default]
    Round,
    Square,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub weight: f32,
    pub cap: LineCap,
    pub color: HslColor,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub font_size: u32,
    pub color: HslColor,
}

/// Immediate-mode 2D drawing surface.
///
/// Coordinates are canvas space: origin at the top-left corner, y growing
/// downwards. Nothing drawn is ever erased.
pub trait Canvas {
    fn stroke_line(&mut self, from: Vec2, to: Vec2, stroke: &Stroke);
    fn fill_text(&mut self, text: &str, at: Vec2, style: &TextStyle);
}

impl<C: Canvas + ?Sized> Canvas for &mut C {
    fn stroke_line(&mut self, from: Vec2, to: Vec2, stroke: &Stroke) {
        (**self).stroke_line(from, to, stroke);
    }

    fn fill_text(&mut self, text: &str, at: Vec2, style: &TextStyle) {
        (**self).fill_text(text, at, style);
    }
}
