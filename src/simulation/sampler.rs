//! Output sampling schedule and position snapshots
//!
//! Decides which time steps are persisted to the output matrix and
//! performs the copy. Row 0 always holds the initial positions; the
//! boundary rule guarantees the final state is captured even when the
//! regular cadence misses the last step

use crate::matrix::Matrix;
use crate::simulation::states::SystemState;

/// Sampling cadence derived once before the stepping loop
///
/// `requested_outputs` must be at least 1 and `num_steps` at least 1,
/// both validated upstream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputSchedule {
    pub num_steps: usize,
    pub output_steps: usize, // steps between persisted snapshots
    pub num_outputs: usize,  // actual output rows after rounding
}

impl OutputSchedule {
    /// Derive the cadence from the step count and requested output count
    ///
    /// If fewer steps than requested outputs exist, the effective output
    /// count collapses to 1. Otherwise `output_steps` is the integer
    /// quotient and the output count is recomputed as
    /// `ceil(num_steps / output_steps)` so it reflects the true cadence
    pub fn derive(num_steps: usize, requested_outputs: usize) -> Self {
        let requested = if num_steps < requested_outputs {
            1
        } else {
            requested_outputs
        };
        let output_steps = num_steps / requested;
        let num_outputs = num_steps.div_ceil(output_steps);
        Self {
            num_steps,
            output_steps,
            num_outputs,
        }
    }

    /// Output row for step `t`, if `t` lands on the cadence
    pub fn row_for_step(&self, t: usize) -> Option<usize> {
        (t % self.output_steps == 0).then(|| t / self.output_steps)
    }

    /// Row for the forced final copy, if the last step fell off the cadence
    pub fn trailing_row(&self) -> Option<usize> {
        (self.num_steps % self.output_steps != 0).then(|| self.num_outputs - 1)
    }
}

/// Copy the live positions into output row `row`
///
/// Body `i`'s three components land at column offset `3 * i`
pub fn save_positions(output: &mut Matrix, sys: &SystemState, row: usize) {
    let row = output.row_mut(row);
    for (i, x) in sys.position.iter().enumerate() {
        row[3 * i..3 * i + 3].copy_from_slice(x.as_slice());
    }
}
