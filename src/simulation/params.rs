//! Numerical and physical parameters for a simulation run
//!
//! `Parameters` holds the runtime settings the engine consumes:
//! - fixed integration step and total step count,
//! - requested output count,
//! - worker thread count,
//! - softening and gravitational constant

/// Gravitational constant in N m^2 / kg^2 (equivalently m^3 / kg / s^2)
pub const G: f64 = 6.6743015e-11;

/// Softening added to squared separations to avoid divide-by-near-zero
pub const SOFTENING: f64 = 1e-9;

#[derive(Debug, Clone)]
pub struct Parameters {
    pub time_step: f64,      // seconds between steps
    pub num_steps: usize,    // total steps to simulate
    pub num_outputs: usize,  // requested position snapshots per body
    pub num_threads: usize,  // worker threads; 1 runs fully serial
    pub g: f64,              // gravitational constant
    pub softening: f64,      // added to squared separations
}

impl Parameters {
    /// Parameters with the SI gravitational constant and default softening
    pub fn standard(
        time_step: f64,
        num_steps: usize,
        num_outputs: usize,
        num_threads: usize,
    ) -> Self {
        Self {
            time_step,
            num_steps,
            num_outputs,
            num_threads,
            g: G,
            softening: SOFTENING,
        }
    }
}
