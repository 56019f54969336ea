pub mod engine;
pub mod track;
pub mod transition;

pub use engine::{Engine, RunState, TickOutcome};
pub use track::Track;
pub use transition::TransitionDescriptor;
