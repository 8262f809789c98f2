//! Single-run execution: simulate, write the plan, report metrics.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use bevy_ecs::prelude::World;
use dispatch_core::instance::{load_instance, Instance};
use dispatch_core::plan::{extract_plan, write_plan};
use dispatch_core::runner::{run_to_completion, run_to_completion_with_hook, simulation_schedule};
use dispatch_core::scenario::{build_simulation, DispatchConfig};
use indicatif::{ProgressBar, ProgressStyle};

use crate::export::write_metrics_json;
use crate::metrics::{extract_metrics, RunMetrics};

/// Simulates `instance` with the given sampling width and returns the final
/// world. Shared by the run command and the sweep workers.
pub fn simulate(
    instance: &Instance,
    sampling_width: usize,
    progress: Option<&ProgressBar>,
) -> World {
    let mut world = World::new();
    let config = DispatchConfig::default().with_sampling_width(sampling_width);
    build_simulation(&mut world, instance, &config);
    let mut schedule = simulation_schedule();
    match progress {
        Some(bar) => {
            run_to_completion_with_hook(&mut world, &mut schedule, |_, _| bar.inc(1));
        }
        None => {
            run_to_completion(&mut world, &mut schedule);
        }
    }
    world
}

pub fn run_command(
    input: &Path,
    sampling_width: usize,
    output: Option<&Path>,
    metrics_path: Option<&Path>,
    quiet: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let instance = load_instance(input)?;
    println!(
        "map {}x{}, {} vehicles, {} rides, bonus {}, {} steps",
        instance.rows,
        instance.cols,
        instance.vehicle_count,
        instance.rides.len(),
        instance.bonus,
        instance.max_steps
    );

    let bar = if quiet {
        None
    } else {
        Some(step_progress_bar(instance.max_steps))
    };
    let world = simulate(&instance, sampling_width, bar.as_ref());
    if let Some(bar) = bar {
        bar.finish_and_clear();
    }

    let plans = extract_plan(&world);
    match output {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            write_plan(&mut writer, &plans)?;
            writer.flush()?;
        }
        None => {
            let stdout = std::io::stdout();
            let mut writer = stdout.lock();
            write_plan(&mut writer, &plans)?;
        }
    }

    let metrics = extract_metrics(&world, &instance, sampling_width);
    print_summary(&metrics);
    if let Some(path) = metrics_path {
        write_metrics_json(path, std::slice::from_ref(&metrics))?;
    }
    Ok(())
}

fn print_summary(metrics: &RunMetrics) {
    println!(
        "served {}/{} rides ({} on time), ride distance {}, approach distance {}",
        metrics.rides_served,
        metrics.rides_total,
        metrics.on_time_pickups,
        metrics.total_ride_distance,
        metrics.total_approach_distance
    );
    println!("estimated score {}", metrics.estimated_score);
}

fn step_progress_bar(steps: u64) -> ProgressBar {
    let bar = ProgressBar::new(steps);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
            .unwrap()
            .progress_chars("#>-"),
    );
    bar
}
