// src/animation/track.rs
//
// One array slot's line on the canvas.
// A track never changes x; it only falls, either one small increment at a
// time while the engine is idle, or along a transition while it is not.

use nannou::prelude::*;

use super::transition::TransitionDescriptor;
use crate::config::StyleConfig;
use crate::draw::Canvas;

#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    x: f32,
    y: f32,
    value: f32,
    transition: Option<TransitionDescriptor>,
}

impl Track {
    pub fn new(x: f32, y: f32, value: f32) -> Self {
        Self {
            x,
            y,
            value,
            transition: None,
        }
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn transition(&self) -> Option<&TransitionDescriptor> {
        self.transition.as_ref()
    }

    pub fn is_transitioning(&self) -> bool {
        self.transition.is_some()
    }

    pub(crate) fn set_value(&mut self, value: f32) {
        self.value = value;
    }

    /// Plans a transition that keeps this track in place.
    pub fn begin_straight(&mut self, travel: f32) {
        self.transition = Some(TransitionDescriptor::Straight {
            start_y: self.y,
            travel,
        });
    }

    /// Plans a diagonal from `source_x` to `destination_x`, drawn in the color of `vacated_value`.
    pub fn begin_swap(&mut self, source_x: f32, destination_x: f32, vacated_value: f32, travel: f32) {
        self.transition = Some(TransitionDescriptor::Swap {
            source_x,
            destination_x,
            vacated_value,
            start_y: self.y,
            travel,
        });
    }

    /// Draws the transition from its start up to `progress`. At `progress >= 1.0`
    /// the end position is committed and the transition cleared.
    /// Does nothing when no transition is planned.
    pub fn advance<C: Canvas + ?Sized>(&mut self, canvas: &mut C, progress: f32, style: &StyleConfig) {
        let Some(transition) = &self.transition else {
            return;
        };

        let current_y = transition.y_at(progress);
        match *transition {
            TransitionDescriptor::Straight { start_y, .. } => {
                canvas.stroke_line(
                    vec2(self.x, start_y),
                    vec2(self.x, current_y),
                    &style.stroke_for(self.value),
                );
            }
            TransitionDescriptor::Swap {
                source_x,
                destination_x,
                vacated_value,
                start_y,
                ..
            } => {
                let current_x = source_x + (destination_x - source_x) * progress;
                canvas.stroke_line(
                    vec2(source_x, start_y),
                    vec2(current_x, current_y),
                    &style.stroke_for(vacated_value),
                );
            }
        }

        if progress >= 1.0 {
            self.y = transition.end_y();
            self.transition = None;
        }
    }

    /// Idle motion: one segment of length `delta` straight down, committed at once.
    pub fn draw_continuous<C: Canvas + ?Sized>(&mut self, canvas: &mut C, delta: f32, style: &StyleConfig) {
        let start = vec2(self.x, self.y);
        self.y += delta;
        canvas.stroke_line(start, vec2(self.x, self.y), &style.stroke_for(self.value));
    }
}
