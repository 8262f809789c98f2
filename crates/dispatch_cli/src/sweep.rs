//! Parameter sweeps: one simulation per sampling width, in parallel.
//!
//! Each width runs an independent single-threaded simulation; rayon only
//! parallelizes across widths, so results are identical to sequential runs.

use std::path::Path;

use dispatch_core::instance::{load_instance, Instance};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

use crate::export::{write_metrics_json, write_sweep_csv};
use crate::metrics::{extract_metrics, RunMetrics};
use crate::run::simulate;

/// Runs one simulation per sampling width on a rayon pool. Results come
/// back in the input order.
pub fn run_sweep(
    instance: &Instance,
    widths: &[usize],
    threads: Option<usize>,
    show_progress: bool,
) -> Result<Vec<RunMetrics>, Box<dyn std::error::Error>> {
    let bar = if show_progress && !widths.is_empty() {
        let bar = ProgressBar::new(widths.len() as u64);
        bar.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})",
                )
                .unwrap()
                .progress_chars("#>-"),
        );
        Some(bar)
    } else {
        None
    };

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(threads) = threads {
        builder = builder.num_threads(threads);
    }
    let pool = builder.build()?;

    let bar_clone = bar.clone();
    let results = pool.install(|| {
        widths
            .par_iter()
            .map(|&width| {
                let world = simulate(instance, width, None);
                let metrics = extract_metrics(&world, instance, width);
                if let Some(ref progress_bar) = bar_clone {
                    progress_bar.inc(1);
                }
                metrics
            })
            .collect()
    });

    if let Some(ref progress_bar) = bar {
        progress_bar.finish_with_message("Completed");
    }

    Ok(results)
}

pub fn sweep_command(
    input: &Path,
    widths: &[usize],
    threads: Option<usize>,
    output: &Path,
    json: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let instance = load_instance(input)?;
    let results = run_sweep(&instance, widths, threads, true)?;

    write_sweep_csv(output, &results)?;
    if let Some(path) = json {
        write_metrics_json(path, &results)?;
    }

    for metrics in &results {
        println!(
            "width {:>6}: served {}/{}, score {}",
            metrics.sampling_width,
            metrics.rides_served,
            metrics.rides_total,
            metrics.estimated_score
        );
    }
    Ok(())
}
