// src/config/config_types.rs
//
// Config types for the app

use crate::draw::{HslColor, LineCap, Stroke, TextStyle};
use crate::error::RainbowError;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub background: HslColor,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 600,
            height: 900,
            background: HslColor::new(0.0, 0.0, 0.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlgorithmChoice {
    /// Halve the gap after every full pass.
    ShellHalving,
    /// Divide the gap by 1.2 after every round that swapped something.
    #[default]
    ShellShrinking,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub array_size: usize,
    pub algorithm: AlgorithmChoice,
    pub seed: Option<u64>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            array_size: 40,
            algorithm: AlgorithmChoice::default(),
            seed: None,
        }
    }
}

/************************* Animation Configs ********************/

/// Timing and geometry of the animation. Immutable once handed to an engine.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Horizontal distance between neighbouring tracks.
    pub track_spacing: f32,
    /// Vertical position every track starts at.
    pub initial_y: f32,
    /// Idle ticks per algorithm step.
    pub ticks_per_step: u32,
    /// Straight travel drawn on each idle tick.
    pub fall_per_tick: f32,
    /// Ticks a swap/straight transition lasts.
    pub swap_ticks: u32,
    /// Vertical travel over one transition.
    pub swap_travel: f32,
    pub style: StyleConfig,
    pub labels: LabelConfig,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        let ticks_per_step = 20;
        Self {
            track_spacing: 14.0,
            initial_y: 20.0,
            ticks_per_step,
            fall_per_tick: 0.5,
            swap_ticks: ticks_per_step * 3,
            swap_travel: 33.0,
            style: StyleConfig::default(),
            labels: LabelConfig::default(),
        }
    }
}

impl AnimationConfig {
    pub fn validate(&self) -> Result<(), RainbowError> {
        if self.ticks_per_step == 0 {
            return Err(RainbowError::Config(
                "animation.ticks_per_step must be at least 1".to_string(),
            ));
        }
        if self.swap_ticks == 0 {
            return Err(RainbowError::Config(
                "animation.swap_ticks must be at least 1".to_string(),
            ));
        }
        let numbers = [
            ("animation.track_spacing", self.track_spacing),
            ("animation.initial_y", self.initial_y),
            ("animation.fall_per_tick", self.fall_per_tick),
            ("animation.swap_travel", self.swap_travel),
            ("style.line_width", self.style.line_width),
            ("style.saturation", self.style.saturation),
            ("style.lightness", self.style.lightness),
            ("style.spectrum", self.style.spectrum),
        ];
        if let Some((name, _)) = numbers.iter().find(|(_, v)| !v.is_finite()) {
            return Err(RainbowError::Config(format!("{name} must be a finite number")));
        }
        Ok(())
    }

    /// x coordinate of the track at `index`. Offset by one so the first track sits inside the canvas.
    pub fn track_x(&self, index: usize) -> f32 {
        (index as f32 + 1.0) * self.track_spacing
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub line_width: f32,
    pub line_cap: LineCap,
    pub saturation: f32, // percent
    pub lightness: f32,  // percent
    /// Degrees of the color wheel spanned by values 0..=100.
    /// A full 360 brings both ends to about the same color.
    pub spectrum: f32,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            line_width: 5.0,
            line_cap: LineCap::Round,
            saturation: 45.0,
            lightness: 60.0,
            spectrum: 340.0,
        }
    }
}

impl StyleConfig {
    /// Hue in degrees for a value. Values outside 0..=100 land outside the spectrum, unclamped.
    pub fn hue_for(&self, value: f32) -> f32 {
        (value / 100.0) * self.spectrum
    }

    pub fn color_for(&self, value: f32) -> HslColor {
        HslColor::new(self.hue_for(value), self.saturation, self.lightness)
    }

    pub fn stroke_for(&self, value: f32) -> Stroke {
        Stroke {
            weight: self.line_width,
            cap: self.line_cap,
            color: self.color_for(value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LabelConfig {
    pub font_size: u32,
    pub color: HslColor,
    /// y of the labels written before the animation starts.
    pub header_y: f32,
    /// Distance between the track ends and the labels written on completion.
    pub footer_offset: f32,
    /// Label x as a fraction of track spacing, relative to the slot index.
    pub x_offset: f32,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            font_size: 10,
            color: HslColor::new(0.0, 0.0, 100.0),
            header_y: 15.0,
            footer_offset: 15.0,
            x_offset: 0.66,
        }
    }
}

impl LabelConfig {
    pub fn text_style(&self) -> TextStyle {
        TextStyle {
            font_size: self.font_size,
            color: self.color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hue_boundaries_follow_spectrum() {
        let style = StyleConfig::default();
        assert_eq!(style.hue_for(0.0), 0.0);
        assert_eq!(style.hue_for(100.0), style.spectrum);
        assert_eq!(style.hue_for(50.0), 170.0);
    }

    #[test]
    fn hue_is_not_clamped() {
        let style = StyleConfig::default();
        assert_eq!(style.hue_for(150.0), 510.0);
        assert_eq!(style.hue_for(-10.0), -34.0);
    }

    #[test]
    fn default_swap_ticks_are_three_steps() {
        let cfg = AnimationConfig::default();
        assert_eq!(cfg.swap_ticks, cfg.ticks_per_step * 3);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn zero_tick_counts_are_rejected() {
        let cfg = AnimationConfig {
            ticks_per_step: 0,
            ..AnimationConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(RainbowError::Config(_))));

        let cfg = AnimationConfig {
            swap_ticks: 0,
            ..AnimationConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(RainbowError::Config(_))));
    }

    #[test]
    fn non_finite_geometry_is_rejected() {
        let cfg = AnimationConfig {
            swap_travel: f32::NAN,
            ..AnimationConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(RainbowError::Config(_))));
    }

    #[test]
    fn track_x_starts_one_spacing_in() {
        let cfg = AnimationConfig::default();
        assert_eq!(cfg.track_x(0), 14.0);
        assert_eq!(cfg.track_x(2), 42.0);
    }
}
