// src/draw/nannou_canvas.rs
//
// Canvas implementation on top of a nannou Draw.
// Canvas space has its origin in the top-left corner with y down; nannou's
// origin is the centre of the frame with y up.

use nannou::prelude::*;

use super::{Canvas, LineCap, Stroke, TextStyle};

pub struct NannouCanvas<'a> {
    draw: &'a Draw,
    width: f32,
    height: f32,
}

impl<'a> NannouCanvas<'a> {
    pub fn new(draw: &'a Draw, width: f32, height: f32) -> Self {
        Self {
            draw,
            width,
            height,
        }
    }

    fn to_nannou(&self, point: Vec2) -> Point2 {
        pt2(point.x - self.width / 2.0, self.height / 2.0 - point.y)
    }
}

impl Canvas for NannouCanvas<'_> {
    fn stroke_line(&mut self, from: Vec2, to: Vec2, stroke: &Stroke) {
        let line = self
            .draw
            .line()
            .start(self.to_nannou(from))
            .end(self.to_nannou(to))
            .weight(stroke.weight)
            .color(stroke.color.to_nannou());

        match stroke.cap {
            LineCap::Butt => line.caps_butt(),
            LineCap::Round => line.caps_round(),
            LineCap::Square => line.caps_square(),
        };
    }

    fn fill_text(&mut self, text: &str, at: Vec2, style: &TextStyle) {
        self.draw
            .text(text)
            .xy(self.to_nannou(at))
            .font_size(style.font_size)
            .color(style.color.to_nannou());
    }
}
