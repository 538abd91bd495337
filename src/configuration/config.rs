//! Run configuration and YAML scenario loading
//!
//! Two configuration surfaces live here:
//!
//! - [`RunConfig`] – the validated command-line invocation
//!   (`time_step total_time outputs_per_body input output [num_threads]`)
//!   plus the quantities derived from it. All validation the core relies
//!   on happens before the engine receives control.
//! - [`ScenarioConfig`] – a `serde`-deserializable body list used to
//!   generate input matrices from YAML.
//!
//! # YAML format
//! An example scenario matching these types:
//!
//! ```yaml
//! bodies:
//!   - m: 1.0e24
//!     x: [-5.0e5, 0.0, 0.0]
//!     v: [0.0, 5776.8, 0.0]
//!   - m: 1.0e24
//!     x: [5.0e5, 0.0, 0.0]
//!     v: [0.0, -5776.8, 0.0]
//! ```

use serde::Deserialize;
use thiserror::Error;

use crate::matrix::Matrix;
use crate::simulation::params::Parameters;
use crate::simulation::states::INPUT_COLS;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("time-step must be positive, got {0}")]
    TimeStep(f64),

    #[error("total-time must be positive, got {0}")]
    TotalTime(f64),

    #[error("total-time ({total_time}) must exceed time-step ({time_step})")]
    TotalTimeTooShort { time_step: f64, total_time: f64 },

    #[error("outputs-per-body must be positive")]
    NoOutputs,

    #[error("num-threads must be positive")]
    NoThreads,

    #[error("input matrix must have exactly {INPUT_COLS} columns, got {0}")]
    InputColumns(usize),

    #[error("input must describe at least one body")]
    NoBodies,

    #[error("body {0} must have 3 position and 3 velocity components")]
    BadBody(usize),
}

/// Validated command-line invocation
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub time_step: f64,        // seconds, > 0
    pub total_time: f64,       // seconds, > time_step
    pub outputs_per_body: usize,
    pub num_threads: Option<usize>, // None picks a default from the host
}

impl RunConfig {
    pub fn validated(
        time_step: f64,
        total_time: f64,
        outputs_per_body: usize,
        num_threads: Option<usize>,
    ) -> Result<Self, ConfigError> {
        if !(time_step > 0.0) {
            return Err(ConfigError::TimeStep(time_step));
        }
        if !(total_time > 0.0) {
            return Err(ConfigError::TotalTime(total_time));
        }
        if time_step > total_time {
            return Err(ConfigError::TotalTimeTooShort {
                time_step,
                total_time,
            });
        }
        if outputs_per_body == 0 {
            return Err(ConfigError::NoOutputs);
        }
        if num_threads == Some(0) {
            return Err(ConfigError::NoThreads);
        }
        Ok(Self {
            time_step,
            total_time,
            outputs_per_body,
            num_threads,
        })
    }

    /// Total steps to simulate, rounded to the nearest whole step
    pub fn num_steps(&self) -> usize {
        (self.total_time / self.time_step + 0.5) as usize
    }

    /// Worker thread count for a system of `num_bodies` bodies
    ///
    /// Defaults to half the available cores when unspecified, and never
    /// exceeds the body count
    pub fn resolve_threads(&self, num_bodies: usize) -> usize {
        let threads = self
            .num_threads
            .unwrap_or_else(|| (num_cpus::get() / 2).max(1));
        threads.min(num_bodies).max(1)
    }

    /// Runtime parameters for a system of `num_bodies` bodies
    pub fn parameters(&self, num_bodies: usize) -> Parameters {
        Parameters::standard(
            self.time_step,
            self.num_steps(),
            self.outputs_per_body,
            self.resolve_threads(num_bodies),
        )
    }
}

/// Initial state for a single body, as written in scenario YAML
#[derive(Deserialize, Debug)]
pub struct BodyConfig {
    pub m: f64,      // mass in kg
    pub x: Vec<f64>, // initial position in m
    pub v: Vec<f64>, // initial velocity in m/s
}

/// Top-level scenario loaded from YAML
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub bodies: Vec<BodyConfig>,
}

impl ScenarioConfig {
    /// Build an n-by-7 input matrix from the body list
    pub fn to_input_matrix(&self) -> Result<Matrix, ConfigError> {
        if self.bodies.is_empty() {
            return Err(ConfigError::NoBodies);
        }

        let mut data = Vec::with_capacity(self.bodies.len() * INPUT_COLS);
        for (i, body) in self.bodies.iter().enumerate() {
            if body.x.len() != 3 || body.v.len() != 3 {
                return Err(ConfigError::BadBody(i));
            }
            data.push(body.m);
            data.extend_from_slice(&body.x);
            data.extend_from_slice(&body.v);
        }

        Ok(Matrix::from_vec(self.bodies.len(), INPUT_COLS, data))
    }
}
