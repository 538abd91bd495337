//! Pairwise Newtonian gravity for the n-body engine
//!
//! Direct n^2 summation over unordered body pairs, exploiting Newton's
//! third law so each pair is visited exactly once. Serial and
//! rayon-parallel entry points share the same per-pair arithmetic

use rayon::prelude::*;

use crate::simulation::states::{NVec3, SystemState};

/// Newtonian gravity with softening
///
/// `g` and `softening` are immutable configuration for the run; the
/// engine never mutates them mid-simulation
pub struct NewtonianGravity {
    pub g: f64,
    pub softening: f64,
}

impl NewtonianGravity {
    /// Compute net forces on every body into `out`
    ///
    /// `out[i]` is overwritten with the vector sum of the gravitational
    /// pull on body `i` from every other body. Positions, velocities, and
    /// masses are never mutated. With a single body there are no pairs
    /// and every force is zero
    pub fn accumulate(&self, sys: &SystemState, out: &mut [NVec3]) {
        for f in out.iter_mut() {
            *f = NVec3::zeros();
        }
        for i in 0..sys.len() {
            self.row_forces(sys, out, i);
        }
    }

    /// Parallel variant of [`accumulate`](Self::accumulate)
    ///
    /// The triangular pair space is load-imbalanced (inner trip count
    /// shrinks with the outer index), so outer indices are distributed by
    /// rayon's work stealing. Body `j`'s accumulator is written by
    /// whichever worker owns outer index `i`; to keep that conflict-free
    /// each fold split owns a private accumulator vector and the splits
    /// are merged by element-wise addition at the join
    pub fn accumulate_par(&self, sys: &SystemState, out: &mut [NVec3]) {
        let n = sys.len();
        let total = (0..n)
            .into_par_iter()
            .fold(
                || vec![NVec3::zeros(); n],
                |mut local, i| {
                    self.row_forces(sys, &mut local, i);
                    local
                },
            )
            .reduce(
                || vec![NVec3::zeros(); n],
                |mut acc, local| {
                    for (a, l) in acc.iter_mut().zip(local) {
                        *a += l;
                    }
                    acc
                },
            );
        out.copy_from_slice(&total);
    }

    /// Contributions from every pair `(i, j)` with `j > i`
    ///
    /// The softened squared separation is `d2 = |r|^2 + softening`, the
    /// force magnitude `g * m_i * m_j / d2`, and the per-axis factor is
    /// the force divided by the true distance `sqrt(d2)` and multiplied
    /// by the raw displacement. The factor sequence is kept as-is for
    /// reproducible numerics; do not refold it into a unit vector
    fn row_forces(&self, sys: &SystemState, out: &mut [NVec3], i: usize) {
        let xi = sys.position[i];
        let mi = sys.mass[i];
        for j in (i + 1)..sys.len() {
            let r = sys.position[j] - xi;
            let d2 = r.dot(&r) + self.softening;
            let force = self.g * mi * sys.mass[j] / d2;
            let scale = force / d2.sqrt();

            // Equal and opposite: i is pulled along +r, j along -r
            out[i] += scale * r;
            out[j] -= scale * r;
        }
    }
}
