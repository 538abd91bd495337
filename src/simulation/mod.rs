pub mod engine;
pub mod forces;
pub mod integrator;
pub mod params;
pub mod sampler;
pub mod states;
