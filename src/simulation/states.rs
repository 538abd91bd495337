//! Core state vectors for the n-body simulation
//!
//! `SystemState` holds the per-body mass, position, and velocity buffers,
//! built once from the input matrix and mutated in place each step. Bodies
//! are identified only by their index

use nalgebra::Vector3;

use crate::configuration::config::ConfigError;
use crate::matrix::Matrix;

pub type NVec3 = Vector3<f64>;

/// Number of columns in an input matrix: mass, position, velocity
pub const INPUT_COLS: usize = 7;

/// Per-body state buffers, indexed by body id
#[derive(Debug, Clone)]
pub struct SystemState {
    pub mass: Vec<f64>,       // kg, immutable for the run
    pub position: Vec<NVec3>, // m
    pub velocity: Vec<NVec3>, // m/s
}

impl SystemState {
    /// Build state vectors from an n-by-7 input matrix with columns
    /// `[mass, px, py, pz, vx, vy, vz]`
    pub fn from_matrix(input: &Matrix) -> Result<Self, ConfigError> {
        if input.cols != INPUT_COLS {
            return Err(ConfigError::InputColumns(input.cols));
        }
        if input.rows == 0 {
            return Err(ConfigError::NoBodies);
        }

        let n = input.rows;
        let mut mass = Vec::with_capacity(n);
        let mut position = Vec::with_capacity(n);
        let mut velocity = Vec::with_capacity(n);
        for i in 0..n {
            let row = input.row(i);
            mass.push(row[0]);
            position.push(NVec3::new(row[1], row[2], row[3]));
            velocity.push(NVec3::new(row[4], row[5], row[6]));
        }

        Ok(Self {
            mass,
            position,
            velocity,
        })
    }

    /// Number of bodies
    pub fn len(&self) -> usize {
        self.mass.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mass.is_empty()
    }
}
