use nbsim::{write_npy, ScenarioConfig};

use anyhow::{Context, Result};
use clap::Parser;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

/// Generate an n-body input matrix from a YAML scenario
#[derive(Parser, Debug)]
#[command(name = "mkinput")]
struct Args {
    /// YAML scenario listing bodies (m, x, v)
    scenario: PathBuf,

    /// Destination n-by-7 .npy input matrix
    output: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let file = File::open(&args.scenario)
        .with_context(|| format!("error opening {}", args.scenario.display()))?;
    let scenario: ScenarioConfig = serde_yaml::from_reader(BufReader::new(file))
        .with_context(|| format!("error parsing {}", args.scenario.display()))?;

    let matrix = scenario.to_input_matrix()?;
    write_npy(&args.output, &matrix)
        .with_context(|| format!("error writing {}", args.output.display()))?;

    println!("wrote {} bodies to {}", matrix.rows, args.output.display());
    Ok(())
}
