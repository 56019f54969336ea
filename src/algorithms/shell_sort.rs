// src/algorithms/shell_sort.rs
//
// Two shell sort step functions. Both shrink the gap monotonically down to
// 1 and finish only when a full pass at gap 1 swaps nothing.

use super::{StepAlgorithm, StepOutcome};

/// Continuity state shared by both shell sorts. `gap` is unset until the first step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShellSortState {
    pub gap: Option<usize>,
}

impl ShellSortState {
    /// The gap for the next pass, initialising it to half the array length on first use.
    fn gap_for(&self, len: usize) -> usize {
        self.gap.unwrap_or(len / 2).max(1)
    }
}

/// Classic shell sort: each step is a gapped insertion sort, then the gap halves.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellSortHalving;

impl StepAlgorithm for ShellSortHalving {
    type State = ShellSortState;

    fn name(&self) -> &str {
        "shell sort (halving gap)"
    }

    fn step(&self, current: &[f32], state: ShellSortState) -> StepOutcome<ShellSortState> {
        let gap = state.gap_for(current.len());
        let mut new_values = current.to_vec();
        let swapped = gapped_insertion_sort(&mut new_values, gap);

        StepOutcome {
            new_values,
            is_complete: gap == 1 && !swapped,
            state: ShellSortState {
                gap: Some((gap / 2).max(1)),
            },
        }
    }
}

/// Comb-style shell sort: each step is one compare/swap round at the
/// current gap, after which the gap is divided by 1.2.
#[derive(Debug, Clone, Copy)]
pub struct ShellSortShrinking {
    pub shrink_factor: f64,
}

impl Default for ShellSortShrinking {
    fn default() -> Self {
        Self { shrink_factor: 1.2 }
    }
}

impl StepAlgorithm for ShellSortShrinking {
    type State = ShellSortState;

    fn name(&self) -> &str {
        "shell sort (gap / 1.2)"
    }

    fn step(&self, current: &[f32], state: ShellSortState) -> StepOutcome<ShellSortState> {
        let gap = state.gap_for(current.len());
        let mut new_values = current.to_vec();
        let swapped = gapped_round(&mut new_values, gap);

        let next_gap = ((gap as f64 / self.shrink_factor).floor() as usize).clamp(1, gap);
        StepOutcome {
            new_values,
            is_complete: gap == 1 && !swapped,
            state: ShellSortState {
                gap: Some(next_gap),
            },
        }
    }
}

/// One left-to-right compare/swap round of elements `gap` apart.
fn gapped_round(values: &mut [f32], gap: usize) -> bool {
    let mut swapped = false;
    for i in 0..values.len().saturating_sub(gap) {
        if values[i] > values[i + gap] {
            values.swap(i, i + gap);
            swapped = true;
        }
    }
    swapped
}

/// Insertion sort over every `gap`-strided subsequence.
fn gapped_insertion_sort(values: &mut [f32], gap: usize) -> bool {
    let mut swapped = false;
    for i in gap..values.len() {
        let mut j = i;
        while j >= gap && values[j - gap] > values[j] {
            values.swap(j - gap, j);
            swapped = true;
            j -= gap;
        }
    }
    swapped
}
