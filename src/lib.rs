//! Rainbow: animates in-place array algorithms (sorts, mostly) as colored
//! tracks falling down a 2D canvas, with swaps drawn as diagonals.
//!
//! The [`animation::Engine`] is ticked once per frame by whatever drives it:
//! the nannou app in `main.rs`, or a plain loop in tests.

pub mod algorithms;
pub mod animation;
pub mod config;
pub mod draw;
pub mod error;
pub mod utilities;

pub use algorithms::{step_fn, StepAlgorithm, StepOutcome};
pub use animation::{Engine, RunState, TickOutcome, Track, TransitionDescriptor};
pub use config::{AnimationConfig, Config};
pub use draw::{Canvas, NannouCanvas, RecordingCanvas};
pub use error::RainbowError;
