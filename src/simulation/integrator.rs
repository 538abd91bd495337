//! Fixed-step semi-implicit (symplectic) Euler integration
//!
//! Velocity is updated first from the freshly accumulated force, then
//! position is advanced with the *updated* velocity. That ordering is the
//! symplectic variant, kept for long-run energy stability over naive
//! explicit Euler. Each body updates independently, so the serial and
//! parallel variants produce identical results

use rayon::prelude::*;

use crate::simulation::states::{NVec3, SystemState};

/// Advance every body by one step of length `dt`
///
/// Per axis: `v += (F / m) * dt`, then `x += v * dt` with the new `v`.
/// Zero mass is undefined for the physics and is not guarded here
pub fn semi_implicit_euler(sys: &mut SystemState, forces: &[NVec3], dt: f64) {
    for (((x, v), f), m) in sys
        .position
        .iter_mut()
        .zip(sys.velocity.iter_mut())
        .zip(forces.iter())
        .zip(sys.mass.iter())
    {
        *v += (*f / *m) * dt;
        *x += *v * dt;
    }
}

/// Parallel variant of [`semi_implicit_euler`]; trivially partitioned by
/// body index, no inter-body dependency
pub fn semi_implicit_euler_par(sys: &mut SystemState, forces: &[NVec3], dt: f64) {
    sys.position
        .par_iter_mut()
        .zip(sys.velocity.par_iter_mut())
        .zip(forces.par_iter())
        .zip(sys.mass.par_iter())
        .for_each(|(((x, v), f), m)| {
            *v += (*f / *m) * dt;
            *x += *v * dt;
        });
}
