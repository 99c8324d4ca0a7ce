// src/io/reporting.rs

use crate::simulation::engine::DayRecord;
use std::error::Error;
use std::path::Path;

/// Writes the simulated trajectory to a CSV file, one row per day.
///
/// # Arguments
/// * `file_path` - The path to save the file (e.g., "trajectory.csv").
/// * `records` - The per-day records of a finished run, in absolute counts.
pub fn write_trajectory_log(file_path: &str, records: &[DayRecord]) -> Result<(), Box<dyn Error>> {
    let path = Path::new(file_path);

    let mut wtr = csv::Writer::from_path(path)?;

    for record in records {
        wtr.serialize(record)?;
    }

    // Flush the buffer to ensure all data is written
    wtr.flush()?;

    println!(
        "Successfully exported {} rows to '{}'",
        records.len(),
        file_path
    );
    Ok(())
}
