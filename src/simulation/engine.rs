//! Time-stepping driver for the n-body simulation
//!
//! Owns the sequential step loop and orchestrates force accumulation,
//! integration, and output sampling for each step. Steps are strictly
//! ordered: step `t + 1`'s forces depend on step `t`'s fully-integrated
//! positions, so parallelism only exists inside a step

use thiserror::Error;

use crate::configuration::config::ConfigError;
use crate::matrix::{Matrix, MatrixError};
use crate::simulation::forces::NewtonianGravity;
use crate::simulation::integrator;
use crate::simulation::params::Parameters;
use crate::simulation::sampler::{self, OutputSchedule};
use crate::simulation::states::{NVec3, SystemState};

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error(transparent)]
    Matrix(#[from] MatrixError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("cannot allocate force accumulators for {0} bodies")]
    ForceAlloc(usize),

    #[error("failed to build the worker thread pool")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Run the full simulation and return the output matrix
///
/// Builds state vectors from the n-by-7 input matrix, derives the output
/// schedule, allocates the `num_outputs`-by-`3n` output up front (an
/// allocation failure aborts before any stepping, with no partial
/// results), then steps the system `num_steps - 1` times. Row 0 of the
/// output is the t = 0 sample; the trailing boundary copy runs after the
/// loop when the cadence missed the final step
pub fn run_simulation(input: &Matrix, params: &Parameters) -> Result<Matrix, SimulationError> {
    let mut sys = SystemState::from_matrix(input)?;
    let n = sys.len();

    let schedule = OutputSchedule::derive(params.num_steps, params.num_outputs);
    let mut output = Matrix::zeros(schedule.num_outputs, 3 * n)?;

    let mut forces = Vec::new();
    forces
        .try_reserve_exact(n)
        .map_err(|_| SimulationError::ForceAlloc(n))?;
    forces.resize(n, NVec3::zeros());

    let gravity = NewtonianGravity {
        g: params.g,
        softening: params.softening,
    };

    sampler::save_positions(&mut output, &sys, 0);

    if params.num_threads > 1 {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(params.num_threads)
            .build()?;
        pool.install(|| {
            step_loop(
                &mut sys, &gravity, &schedule, &mut forces, &mut output, params, true,
            )
        });
    } else {
        step_loop(
            &mut sys, &gravity, &schedule, &mut forces, &mut output, params, false,
        );
    }

    if let Some(row) = schedule.trailing_row() {
        sampler::save_positions(&mut output, &sys, row);
    }

    Ok(output)
}

/// The strictly sequential loop over time steps
///
/// Each step: force phase, integrate phase, conditional sample copy.
/// The parallel phases join before the copy runs, so the copy never
/// races the next step's force reset
fn step_loop(
    sys: &mut SystemState,
    gravity: &NewtonianGravity,
    schedule: &OutputSchedule,
    forces: &mut [NVec3],
    output: &mut Matrix,
    params: &Parameters,
    parallel: bool,
) {
    for t in 1..schedule.num_steps {
        if parallel {
            gravity.accumulate_par(sys, forces);
            integrator::semi_implicit_euler_par(sys, forces, params.time_step);
        } else {
            gravity.accumulate(sys, forces);
            integrator::semi_implicit_euler(sys, forces, params.time_step);
        }

        if let Some(row) = schedule.row_for_step(t) {
            sampler::save_positions(output, sys, row);
        }
    }
}
