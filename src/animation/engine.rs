// src/animation/engine.rs
//
// The animation engine.
// Each tick either lets the tracks fall a little, asks the step algorithm
// for the next array and plans a transition from the diff, or pushes an
// in-flight transition one frame further. Step counted, never timed.

use crate::algorithms::StepAlgorithm;
use crate::animation::Track;
use crate::config::AnimationConfig;
use crate::draw::{write_numbers, Canvas};
use crate::error::RainbowError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// Tracks fall; every `ticks_per_step` ticks the algorithm is stepped.
    Idle,
    /// Every track is following a transition.
    Transitioning,
    /// The algorithm reported completion. Terminal.
    Complete,
}

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Idle frame: every track fell by `fall_per_tick`.
    Fell,
    /// The algorithm was stepped but returned the same array.
    Unchanged,
    /// The algorithm was stepped and a transition started; `swaps` tracks changed value.
    TransitionStarted { swaps: usize },
    /// One frame of the running transition was drawn.
    Transitioned { finished: bool },
    /// The algorithm reported completion on this tick.
    Completed,
    /// Nothing to do, the run is over.
    Done,
}

pub struct Engine<A: StepAlgorithm> {
    config: AnimationConfig,
    values: Vec<f32>,
    tracks: Vec<Track>,
    algorithm: A,
    algorithm_state: A::State,
    run_state: RunState,
    idle_counter: u32,
    transition_counter: u32,
    advances: usize,
    ticks: u64,
}

impl<A: StepAlgorithm> Engine<A> {
    /// Builds one track per value. Values must be finite and pairwise distinct.
    pub fn new(values: &[f32], algorithm: A, config: AnimationConfig) -> Result<Self, RainbowError> {
        config.validate()?;
        validate_values(values)?;

        let tracks = values
            .iter()
            .enumerate()
            .map(|(i, &value)| Track::new(config.track_x(i), config.initial_y, value))
            .collect();

        log::info!(
            "Animating {} values with {}",
            values.len(),
            algorithm.name()
        );

        Ok(Self {
            values: values.to_vec(),
            tracks,
            algorithm,
            algorithm_state: A::State::default(),
            run_state: RunState::Idle,
            // starts at 1 so the first step doesn't land on the very first tick
            idle_counter: 1,
            transition_counter: 0,
            advances: 0,
            ticks: 0,
            config,
        })
    }

    /// Writes the initial values above the tracks.
    pub fn start<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        write_numbers(canvas, &self.values, self.config.labels.header_y, &self.config);
    }

    pub fn tick<C: Canvas + ?Sized>(&mut self, canvas: &mut C) -> Result<TickOutcome, RainbowError> {
        let outcome = match self.run_state {
            RunState::Complete => return Ok(TickOutcome::Done),
            RunState::Transitioning => self.continue_transition(canvas),
            RunState::Idle => {
                self.idle_counter += 1;
                if self.idle_counter % self.config.ticks_per_step != 0 {
                    self.fall(canvas);
                    TickOutcome::Fell
                } else {
                    self.perform_step(canvas)?
                }
            }
        };
        self.ticks += 1;
        Ok(outcome)
    }

    /// Ticks until the run completes. Returns the ticks spent, or `None` if
    /// `tick_limit` ran out first.
    pub fn run<C: Canvas + ?Sized>(
        &mut self,
        canvas: &mut C,
        tick_limit: u64,
    ) -> Result<Option<u64>, RainbowError> {
        let start = self.ticks;
        while self.run_state != RunState::Complete {
            if self.ticks - start >= tick_limit {
                return Ok(None);
            }
            self.tick(canvas)?;
        }
        Ok(Some(self.ticks - start))
    }

    fn fall<C: Canvas + ?Sized>(&mut self, canvas: &mut C) {
        let delta = self.config.fall_per_tick;
        for track in &mut self.tracks {
            track.draw_continuous(canvas, delta, &self.config.style);
        }
    }

    fn perform_step<C: Canvas + ?Sized>(&mut self, canvas: &mut C) -> Result<TickOutcome, RainbowError> {
        let state = std::mem::take(&mut self.algorithm_state);
        let outcome = self.algorithm.step(&self.values, state);
        self.algorithm_state = outcome.state;

        // checked before anything else about the engine changes
        if outcome.new_values.len() != self.tracks.len() {
            return Err(RainbowError::ContractViolation {
                expected: self.tracks.len(),
                actual: outcome.new_values.len(),
            });
        }

        self.advances += 1;
        self.idle_counter = 0;

        if outcome.is_complete {
            self.run_state = RunState::Complete;
            let footer_y = self.tracks[0].y() + self.config.labels.footer_offset;
            write_numbers(canvas, &self.values, footer_y, &self.config);
            log::info!(
                "Finished after {} algorithm steps ({} ticks)",
                self.advances,
                self.ticks + 1
            );
            return Ok(TickOutcome::Completed);
        }

        if outcome.new_values == self.values {
            log::debug!("step {} changed nothing", self.advances);
            return Ok(TickOutcome::Unchanged);
        }

        let swaps = self.plan_transition(&outcome.new_values);
        log::debug!("step {}: {swaps} tracks swapping", self.advances);
        self.values = outcome.new_values;
        self.run_state = RunState::Transitioning;
        self.transition_counter = 0;
        Ok(TickOutcome::TransitionStarted { swaps })
    }

    /// Gives every track its plan for the transition to `new_values`.
    /// Returns how many tracks swap.
    fn plan_transition(&mut self, new_values: &[f32]) -> usize {
        let travel = self.config.swap_travel;
        let mut swaps = 0;
        for (i, &new_value) in new_values.iter().enumerate() {
            if self.values[i] == new_value {
                self.tracks[i].begin_straight(travel);
                continue;
            }

            // values are unique, so the first match is the only one
            let source = self
                .values
                .iter()
                .position(|&v| v == new_value)
                .unwrap_or(i);
            let vacated_value = self.values[source];
            let track = &mut self.tracks[i];
            track.begin_swap(
                self.config.track_x(source),
                self.config.track_x(i),
                vacated_value,
                travel,
            );
            track.set_value(new_value);
            swaps += 1;
        }
        swaps
    }

    fn continue_transition<C: Canvas + ?Sized>(&mut self, canvas: &mut C) -> TickOutcome {
        self.transition_counter += 1;
        let progress = self.transition_counter as f32 / self.config.swap_ticks as f32;
        let finished = progress >= 1.0;

        for track in &mut self.tracks {
            track.advance(canvas, progress, &self.config.style);
        }

        if finished {
            self.run_state = RunState::Idle;
            self.transition_counter = 0;
        }
        TickOutcome::Transitioned { finished }
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn is_complete(&self) -> bool {
        self.run_state == RunState::Complete
    }

    /// The authoritative array.
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    /// How many times the algorithm has been stepped.
    pub fn advances(&self) -> usize {
        self.advances
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// The continuity state the next step will receive.
    pub fn algorithm_state(&self) -> &A::State {
        &self.algorithm_state
    }
}

fn validate_values(values: &[f32]) -> Result<(), RainbowError> {
    if values.is_empty() {
        return Err(RainbowError::EmptyInput);
    }
    for (i, &value) in values.iter().enumerate() {
        if !value.is_finite() {
            return Err(RainbowError::InvariantViolation {
                index: i,
                value,
                reason: "is not a finite number".to_string(),
            });
        }
        if let Some(first) = values[..i].iter().position(|&v| v == value) {
            return Err(RainbowError::InvariantViolation {
                index: i,
                value,
                reason: format!("duplicates index {first}"),
            });
        }
    }
    Ok(())
}
