//! Command-line entry point for the greedy fleet dispatch simulator.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::exit;

use clap::{Parser, Subcommand};
use dispatch_core::generator::{generate_instance, GeneratorParams};
use dispatch_core::instance::write_instance;

mod export;
mod metrics;
mod run;
mod sweep;

#[derive(Parser)]
#[command(
    name = "dispatch",
    about = "Greedy fleet dispatch over ride instances",
    long_about = "Loads a ride instance, assigns rides to vehicles with a greedy\n\
                  sampled nearest-feasible heuristic, and writes the per-vehicle plan."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one simulation and write the per-vehicle plan
    Run {
        /// Instance file to load
        input: PathBuf,
        /// Feasible candidates examined per assignment
        #[arg(long, default_value_t = 1000)]
        sampling_width: usize,
        /// Plan output path; stdout when omitted
        #[arg(long)]
        output: Option<PathBuf>,
        /// Also export run metrics as JSON
        #[arg(long)]
        metrics: Option<PathBuf>,
        /// Suppress the progress bar
        #[arg(long)]
        quiet: bool,
    },
    /// Run one simulation per sampling width and export the comparison
    Sweep {
        /// Instance file to load
        input: PathBuf,
        /// Sampling widths to compare
        #[arg(long, value_delimiter = ',', default_value = "1,10,100,1000")]
        widths: Vec<usize>,
        /// Worker threads; rayon's default when omitted
        #[arg(long)]
        threads: Option<usize>,
        /// CSV output path
        #[arg(long, default_value = "sweep.csv")]
        output: PathBuf,
        /// Also export the results as JSON
        #[arg(long)]
        json: Option<PathBuf>,
    },
    /// Generate a random instance file
    Generate {
        /// Output instance path
        #[arg(long, default_value = "generated.in")]
        output: PathBuf,
        /// Generator parameters as JSON; defaults when omitted
        #[arg(long)]
        params: Option<PathBuf>,
        /// Seed override
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Run {
            input,
            sampling_width,
            output,
            metrics,
            quiet,
        } => run::run_command(
            &input,
            sampling_width,
            output.as_deref(),
            metrics.as_deref(),
            quiet,
        ),
        Commands::Sweep {
            input,
            widths,
            threads,
            output,
            json,
        } => sweep::sweep_command(&input, &widths, threads, &output, json.as_deref()),
        Commands::Generate {
            output,
            params,
            seed,
        } => generate_command(&output, params.as_deref(), seed),
    };
    if let Err(err) = result {
        eprintln!("error: {err}");
        exit(1);
    }
}

fn generate_command(
    output: &Path,
    params: Option<&Path>,
    seed: Option<u64>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut params: GeneratorParams = match params {
        Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
        None => GeneratorParams::default(),
    };
    if let Some(seed) = seed {
        params.seed = seed;
    }
    let instance = generate_instance(&params);

    let file = File::create(output)?;
    let mut writer = BufWriter::new(file);
    write_instance(&mut writer, &instance)?;
    writer.flush()?;

    println!(
        "generated {} rides for {} vehicles into {}",
        instance.rides.len(),
        instance.vehicle_count,
        output.display()
    );
    Ok(())
}
