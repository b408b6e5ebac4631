// src/data/mod.rs
use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::Path;

pub mod record;

pub use record::{LaunchRecord, Outcome};

// Immutable once loaded; shared read-only for the lifetime of the process.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<LaunchRecord>,
}

impl Dataset {
    pub fn from_records(records: Vec<LaunchRecord>) -> Self {
        Self { records }
    }

    pub fn from_csv_path(path: &Path) -> Result<Self> {
        let file = fs::File::open(path)
            .with_context(|| format!("Failed to open launch data file: {}", path.display()))?;
        Self::from_reader(file)
            .with_context(|| format!("Failed to read launch data from {}", path.display()))
    }

    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut records = Vec::new();

        for row in csv_reader.deserialize() {
            let record: LaunchRecord = row.context("Malformed launch record")?;
            records.push(record);
        }

        Ok(Self::from_records(records))
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    // Distinct launch sites in first-observed order.
    pub fn sites(&self) -> Vec<String> {
        let mut sites: Vec<String> = Vec::new();
        for record in &self.records {
            if !sites.iter().any(|s| s == &record.site) {
                sites.push(record.site.clone());
            }
        }
        sites
    }

    // Observed (min, max) payload mass; (0, 0) for an empty dataset.
    pub fn payload_bounds(&self) -> (f64, f64) {
        if self.records.is_empty() {
            return (0.0, 0.0);
        }

        let min = self.records.iter()
            .map(|r| r.payload_mass_kg)
            .fold(f64::INFINITY, f64::min);
        let max = self.records.iter()
            .map(|r| r.payload_mass_kg)
            .fold(f64::NEG_INFINITY, f64::max);

        (min, max)
    }
}
