//! Flat tabular export and run manifest
//!
//! CSV: one row per sample date, one column per entity, values rounded to
//! one decimal. Rounding happens only here; the in-memory dataset keeps
//! full precision. The JSON manifest records what produced the files so a
//! run can be reproduced (same config + seed → bit-identical output).

use crate::dataset::Dataset;
use crate::Result;
use chrono::NaiveDate;
use serde::Serialize;
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Reproducibility record written alongside the CSV.
#[derive(Debug, Serialize)]
pub struct RunManifest<'a> {
    /// First sample date
    pub start: NaiveDate,
    /// Last sample date
    pub end: NaiveDate,
    /// Sampling interval in days
    pub interval_days: i64,
    /// Base seed the per-entity streams derive from
    pub base_seed: u64,
    /// Entity column names in order
    pub entities: Vec<&'a str>,
    /// Number of rows
    pub num_rows: usize,
}

impl<'a> RunManifest<'a> {
    /// Describe a finished dataset.
    #[must_use]
    pub fn describe(dataset: &'a Dataset, base_seed: u64) -> Self {
        let axis = dataset.axis();
        Self {
            start: axis.first(),
            end: axis.last(),
            interval_days: axis.interval_days(),
            base_seed,
            entities: dataset.columns().iter().map(|(n, _)| n.as_str()).collect(),
            num_rows: dataset.num_rows(),
        }
    }
}

/// Write the dataset as CSV.
///
/// # Errors
///
/// [`crate::Error::OutputWrite`] on any filesystem failure.
pub fn write_csv(dataset: &Dataset, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        create_dir_all(parent)?;
    }
    let mut out = BufWriter::new(File::create(path)?);

    write!(out, "date")?;
    for (entity, _) in dataset.columns() {
        write!(out, ",{entity}")?;
    }
    writeln!(out)?;

    for (row, date) in dataset.axis().iter().enumerate() {
        write!(out, "{}", date.format("%Y-%m-%d"))?;
        for (_, trajectory) in dataset.columns() {
            write!(out, ",{:.1}", trajectory.values()[row])?;
        }
        writeln!(out)?;
    }

    out.flush()?;
    Ok(())
}

/// Write the JSON run manifest.
///
/// # Errors
///
/// [`crate::Error::OutputWrite`] on any filesystem failure.
pub fn write_manifest(manifest: &RunManifest<'_>, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        create_dir_all(parent)?;
    }
    let file = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(file, manifest)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
    Ok(())
}
