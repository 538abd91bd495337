use std::time::Instant;

use crate::simulation::forces::NewtonianGravity;
use crate::simulation::integrator;
use crate::simulation::params::{G, SOFTENING};
use crate::simulation::states::{NVec3, SystemState};

/// Deterministic test system of `n` bodies, no rand needed
fn make_state(n: usize) -> SystemState {
    let mut mass = Vec::with_capacity(n);
    let mut position = Vec::with_capacity(n);
    let mut velocity = Vec::with_capacity(n);

    for i in 0..n {
        let i_f = i as f64;
        mass.push(1.0e20);
        position.push(NVec3::new(
            (i_f * 0.37).sin() * 5.0e6,
            (i_f * 0.13).cos() * 5.0e6,
            (i_f * 0.07).sin() * 5.0e6,
        ));
        velocity.push(NVec3::zeros());
    }

    SystemState {
        mass,
        position,
        velocity,
    }
}

fn gravity() -> NewtonianGravity {
    NewtonianGravity {
        g: G,
        softening: SOFTENING,
    }
}

/// Time one force accumulation, serial vs parallel, for a range of n
pub fn bench_forces() {
    let ns = [200, 400, 800, 1600, 3200, 6400];

    for n in ns {
        let sys = make_state(n);
        let gravity = gravity();
        let mut out = vec![NVec3::zeros(); n];

        // Warm up
        gravity.accumulate(&sys, &mut out);
        gravity.accumulate_par(&sys, &mut out);

        let t0 = Instant::now();
        gravity.accumulate(&sys, &mut out);
        let dt_serial = t0.elapsed().as_secs_f64();

        let t1 = Instant::now();
        gravity.accumulate_par(&sys, &mut out);
        let dt_par = t1.elapsed().as_secs_f64();

        println!(
            "N = {n:5}, serial = {:8.6} s, parallel = {:8.6} s",
            dt_serial, dt_par
        );
    }
}

/// Time full steps (forces + integration) for a range of n
/// Paste output directly into a spreadsheet to graph
pub fn bench_step_curve() {
    println!("N,serial_ms,parallel_ms");

    let dt = 1.0;

    for n in (200..=6400).step_by(200) {
        // Small n: average over a few steps to smooth noise
        let steps = if n <= 800 { 5 } else { 1 };

        let gravity = gravity();

        let mut sys_serial = make_state(n);
        let mut forces = vec![NVec3::zeros(); n];

        let t0 = Instant::now();
        for _ in 0..steps {
            gravity.accumulate(&sys_serial, &mut forces);
            integrator::semi_implicit_euler(&mut sys_serial, &forces, dt);
        }
        let ms_serial = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        let mut sys_par = make_state(n);

        let t1 = Instant::now();
        for _ in 0..steps {
            gravity.accumulate_par(&sys_par, &mut forces);
            integrator::semi_implicit_euler_par(&mut sys_par, &forces, dt);
        }
        let ms_par = t1.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{},{:.6},{:.6}", n, ms_serial, ms_par);
    }
}
