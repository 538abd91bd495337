pub mod benchmark;
pub mod configuration;
pub mod matrix;
pub mod simulation;

pub use matrix::npy::{read_npy, write_npy};
pub use matrix::{Matrix, MatrixError};

pub use simulation::engine::{run_simulation, SimulationError};
pub use simulation::forces::NewtonianGravity;
pub use simulation::integrator::{semi_implicit_euler, semi_implicit_euler_par};
pub use simulation::params::{Parameters, G, SOFTENING};
pub use simulation::sampler::OutputSchedule;
pub use simulation::states::{NVec3, SystemState};

pub use configuration::config::{BodyConfig, ConfigError, RunConfig, ScenarioConfig};

pub use benchmark::benchmark::{bench_forces, bench_step_curve};
