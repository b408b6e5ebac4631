// src/analysis/filter.rs
use crate::data::LaunchRecord;

// Explicit variant instead of a sentinel string for the all-sites case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteSelection {
    AllSites,
    Site(String),
}

impl SiteSelection {
    pub fn label(&self) -> &str {
        match self {
            SiteSelection::AllSites => "All Sites",
            SiteSelection::Site(site) => site,
        }
    }

    pub fn matches(&self, site: &str) -> bool {
        match self {
            SiteSelection::AllSites => true,
            SiteSelection::Site(selected) => selected == site,
        }
    }
}

// Current control values; rebuilt by the UI on every interaction.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    pub site: SiteSelection,
    // Closed interval [low, high] in kg. low > high is a valid, empty query.
    pub payload_range: (f64, f64),
}

impl FilterState {
    pub fn new(payload_range: (f64, f64)) -> Self {
        Self {
            site: SiteSelection::AllSites,
            payload_range,
        }
    }
}

pub fn filter_by_site(records: &[LaunchRecord], selection: &SiteSelection) -> Vec<LaunchRecord> {
    records.iter()
        .filter(|record| selection.matches(&record.site))
        .cloned()
        .collect()
}

pub fn filter_by_payload(records: &[LaunchRecord], low: f64, high: f64) -> Vec<LaunchRecord> {
    records.iter()
        .filter(|record| record.payload_mass_kg >= low && record.payload_mass_kg <= high)
        .cloned()
        .collect()
}
