// src/draw/recording.rs
//
// A Canvas that only remembers what it was asked to draw.
// Used to tick the engine without a window.

use nannou::prelude::*;

use super::{Canvas, Stroke, TextStyle};

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Line {
        from: Vec2,
        to: Vec2,
        stroke: Stroke,
    },
    Text {
        text: String,
        at: Vec2,
        style: TextStyle,
    },
}

#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub calls: Vec<DrawCall>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }

    pub fn lines(&self) -> impl Iterator<Item = (Vec2, Vec2, &Stroke)> + '_ {
        self.calls.iter().filter_map(|call| match call {
            DrawCall::Line { from, to, stroke } => Some((*from, *to, stroke)),
            DrawCall::Text { .. } => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = (&str, Vec2)> + '_ {
        self.calls.iter().filter_map(|call| match call {
            DrawCall::Text { text, at, .. } => Some((text.as_str(), *at)),
            DrawCall::Line { .. } => None,
        })
    }

    pub fn line_count(&self) -> usize {
        self.lines().count()
    }
}

impl Canvas for RecordingCanvas {
    fn stroke_line(&mut self, from: Vec2, to: Vec2, stroke: &Stroke) {
        self.calls.push(DrawCall::Line {
            from,
            to,
            stroke: *stroke,
        });
    }

    fn fill_text(&mut self, text: &str, at: Vec2, style: &TextStyle) {
        self.calls.push(DrawCall::Text {
            text: text.to_string(),
            at,
            style: *style,
        });
    }
}
