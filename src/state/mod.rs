// src/state/mod.rs
use crate::analysis::FilterState;
use crate::bindings::{ControlId, Dispatcher, Display};
use crate::data::Dataset;

// Payload range control bounds, in kg.
pub const PAYLOAD_SLIDER_MIN: f64 = 0.0;
pub const PAYLOAD_SLIDER_MAX: f64 = 10_000.0;
pub const PAYLOAD_SLIDER_STEP: f64 = 1_000.0;

// Core application state
pub struct AppState {
    // Read-only after load; replaced wholesale from the File menu.
    pub dataset: Dataset,

    // Current control values
    pub filters: FilterState,

    // Reactive bindings and the charts they maintain
    pub dispatcher: Dispatcher,
    pub display: Display,

    pub error_message: Option<String>,
}

impl AppState {
    pub fn new(dataset: Dataset) -> Self {
        let filters = FilterState::new(dataset.payload_bounds());
        let dispatcher = Dispatcher::standard();
        let mut display = Display::default();
        dispatcher.refresh_all(&dataset, &filters, &mut display);

        Self {
            dataset,
            filters,
            dispatcher,
            display,
            error_message: None,
        }
    }

    pub fn on_control_changed(&mut self, control: ControlId) {
        self.dispatcher.dispatch(control, &self.dataset, &self.filters, &mut self.display);
    }

    // Swap in a new dataset and reset the controls to its observed bounds.
    pub fn replace_dataset(&mut self, dataset: Dataset) {
        self.filters = FilterState::new(dataset.payload_bounds());
        self.dataset = dataset;
        self.dispatcher = Dispatcher::standard();
        self.dispatcher.refresh_all(&self.dataset, &self.filters, &mut self.display);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::SiteSelection;
    use crate::data::{LaunchRecord, Outcome};

    fn sample_dataset() -> Dataset {
        Dataset::from_records(vec![
            LaunchRecord::new("SiteA", 500.0, Outcome::Success, "v1.0"),
            LaunchRecord::new("SiteB", 3000.0, Outcome::Success, "v1.1"),
        ])
    }

    #[test]
    fn new_state_defaults_to_all_sites_and_observed_bounds() {
        let state = AppState::new(sample_dataset());
        assert_eq!(state.filters.site, SiteSelection::AllSites);
        assert_eq!(state.filters.payload_range, (500.0, 3000.0));
        assert_eq!(state.display.proportion.slices.len(), 2);
        assert_eq!(state.display.scatter.points.len(), 2);
    }

    #[test]
    fn replace_dataset_resets_filters_and_charts() {
        let mut state = AppState::new(sample_dataset());
        state.filters.site = SiteSelection::Site("SiteA".to_string());
        state.on_control_changed(ControlId::SiteSelector);

        state.replace_dataset(Dataset::from_records(vec![
            LaunchRecord::new("SiteC", 7000.0, Outcome::Failure, "B5"),
        ]));

        assert_eq!(state.filters.site, SiteSelection::AllSites);
        assert_eq!(state.filters.payload_range, (7000.0, 7000.0));
        assert_eq!(state.display.scatter.points.len(), 1);
        assert!(state.display.proportion.slices.is_empty());
    }
}
