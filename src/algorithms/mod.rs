// src/algorithms/mod.rs
//
// Step algorithms: the pluggable functions the engine animates.

pub mod shell_sort;

pub use shell_sort::{ShellSortHalving, ShellSortShrinking, ShellSortState};

use std::marker::PhantomData;

/// What one step of an algorithm produced.
#[derive(Debug, Clone, PartialEq)]
pub struct StepOutcome<S> {
    /// Array after the step. Must be as long as the input; may equal it.
    pub new_values: Vec<f32>,
    /// True once the algorithm has verified no further change is needed.
    pub is_complete: bool,
    /// Handed back on the next call.
    pub state: S,
}

/// One step of an in-place array algorithm.
///
/// The engine owns the continuity state but never looks inside it: it starts
/// from `State::default()` and passes whatever the previous step returned.
/// Implementations must cope with the default state on their first call.
pub trait StepAlgorithm {
    type State: Default;

    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    fn step(&self, current: &[f32], state: Self::State) -> StepOutcome<Self::State>;
}

impl<A: StepAlgorithm + ?Sized> StepAlgorithm for Box<A> {
    type State = A::State;

    fn name(&self) -> &str {
        (**self).name()
    }

    fn step(&self, current: &[f32], state: Self::State) -> StepOutcome<Self::State> {
        (**self).step(current, state)
    }
}

/// Adapts a plain function or closure into a [`StepAlgorithm`].
pub struct StepFn<F, S> {
    name: String,
    f: F,
    _state: PhantomData<fn() -> S>,
}

impl<F, S> StepAlgorithm for StepFn<F, S>
where
    F: Fn(&[f32], S) -> StepOutcome<S>,
    S: Default,
{
    type State = S;

    fn name(&self) -> &str {
        &self.name
    }

    fn step(&self, current: &[f32], state: S) -> StepOutcome<S> {
        (self.f)(current, state)
    }
}

pub fn step_fn<F, S>(name: &str, f: F) -> StepFn<F, S>
where
    F: Fn(&[f32], S) -> StepOutcome<S>,
    S: Default,
{
    StepFn {
        name: name.to_string(),
        f,
        _state: PhantomData,
    }
}
