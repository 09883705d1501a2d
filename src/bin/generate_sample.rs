use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use student_dashboard::cli::DEFAULT_DATA_FILE;
use student_dashboard::data::sample::{generate, SAMPLE_SEED, SAMPLE_SIZE};

/// Write the seeded synthetic student dataset to a CSV file
#[derive(Parser, Debug)]
#[command(name = "generate_sample")]
struct Args {
    /// Output CSV path
    #[arg(short, long, default_value = DEFAULT_DATA_FILE)]
    output: PathBuf,

    /// Number of students
    #[arg(short, long, default_value_t = SAMPLE_SIZE)]
    rows: usize,

    /// Random seed
    #[arg(short, long, default_value_t = SAMPLE_SEED)]
    seed: u64,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let dataset = generate(args.rows, args.seed);

    let mut wtr = csv::Writer::from_path(&args.output)
        .with_context(|| format!("Failed to create output file: {}", args.output.display()))?;
    for record in &dataset.records {
        wtr.serialize(record).context("writing student row")?;
    }
    wtr.flush().context("flushing CSV")?;

    println!(
        "Wrote {} students (seed {}) to {}",
        dataset.len(),
        args.seed,
        args.output.display()
    );
    Ok(())
}
