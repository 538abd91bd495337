//! Row-major numeric matrices and their persisted `.npy` form
//!
//! `Matrix` is the container the simulation consumes and produces:
//! the input file is an n-by-7 matrix of body state, the output file a
//! num_outputs-by-3n matrix of sampled positions

use thiserror::Error;

pub mod npy;

/// Errors from matrix allocation and `.npy` serialization
#[derive(Debug, Error)]
pub enum MatrixError {
    #[error("cannot allocate a {rows}x{cols} matrix")]
    Alloc { rows: usize, cols: usize },

    #[error("matrix dimensions {rows}x{cols} overflow")]
    TooLarge { rows: usize, cols: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("not an npy file (bad magic)")]
    BadMagic,

    #[error("unsupported npy format version {0}.{1}")]
    UnsupportedVersion(u8, u8),

    #[error("unsupported npy dtype {0:?}, expected '<f8'")]
    UnsupportedDtype(String),

    #[error("fortran-order npy arrays are not supported")]
    FortranOrder,

    #[error("expected a 2-d array, got shape {0:?}")]
    NotTwoDim(Vec<usize>),

    #[error("malformed npy header")]
    BadHeader,

    #[error("npy payload is truncated")]
    Truncated,
}

/// Dense row-major matrix of `f64` values
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<f64>,
}

impl Matrix {
    /// Allocate a zero-filled `rows`-by-`cols` matrix
    ///
    /// Allocation failure is reported as an error rather than aborting,
    /// so a too-large output request fails the run cleanly
    pub fn zeros(rows: usize, cols: usize) -> Result<Self, MatrixError> {
        let len = rows
            .checked_mul(cols)
            .ok_or(MatrixError::TooLarge { rows, cols })?;
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| MatrixError::Alloc { rows, cols })?;
        data.resize(len, 0.0);
        Ok(Self { rows, cols, data })
    }

    /// Wrap an existing row-major buffer
    ///
    /// Panics if `data.len() != rows * cols`
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Self {
        assert_eq!(data.len(), rows * cols, "buffer does not match shape");
        Self { rows, cols, data }
    }

    /// Borrow row `r`
    pub fn row(&self, r: usize) -> &[f64] {
        &self.data[r * self.cols..(r + 1) * self.cols]
    }

    /// Mutably borrow row `r`
    pub fn row_mut(&mut self, r: usize) -> &mut [f64] {
        &mut self.data[r * self.cols..(r + 1) * self.cols]
    }
}
