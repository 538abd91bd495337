use nbsim::{read_npy, run_simulation, write_npy, RunConfig};

use anyhow::{Context, Result};
use clap::Parser;

use std::path::PathBuf;
use std::time::Instant;

/// Simulate the gravitational n-body problem in 3D
#[derive(Parser, Debug)]
#[command(name = "nbsim")]
struct Args {
    /// Amount of time between steps (seconds)
    time_step: f64,

    /// Total amount of time to simulate (seconds)
    total_time: f64,

    /// Number of positions to output per body
    outputs_per_body: usize,

    /// Initial state of the system: n-by-7 .npy matrix with columns
    /// mass, x, y, z, vx, vy, vz
    input: PathBuf,

    /// Destination .npy matrix, num_outputs-by-3n rows of sampled positions
    output: PathBuf,

    /// Worker threads (default: half the available cores, at most n)
    num_threads: Option<usize>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let cfg = RunConfig::validated(
        args.time_step,
        args.total_time,
        args.outputs_per_body,
        args.num_threads,
    )?;

    let input = read_npy(&args.input)
        .with_context(|| format!("error reading {}", args.input.display()))?;
    let params = cfg.parameters(input.rows);

    // Time the simulation itself, not the file I/O around it
    let start = Instant::now();
    let output = run_simulation(&input, &params)?;
    println!("{:.6} secs", start.elapsed().as_secs_f64());

    write_npy(&args.output, &output)
        .with_context(|| format!("error writing {}", args.output.display()))?;

    //bench_forces();
    //bench_step_curve();

    Ok(())
}
