//! Result export: run metrics to JSON and CSV.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::metrics::RunMetrics;

/// Export run metrics to JSON (an array of records).
pub fn write_metrics_json(
    path: impl AsRef<Path>,
    metrics: &[RunMetrics],
) -> Result<(), Box<dyn std::error::Error>> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(BufWriter::new(file), metrics)?;
    Ok(())
}

/// Export run metrics to CSV, one row per run.
pub fn write_sweep_csv(
    path: impl AsRef<Path>,
    metrics: &[RunMetrics],
) -> Result<(), Box<dyn std::error::Error>> {
    let mut writer = csv::Writer::from_path(path)?;
    for record in metrics {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}
