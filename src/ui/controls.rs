// src/ui/controls.rs
use eframe::egui;

use crate::analysis::{FilterState, SiteSelection};
use crate::bindings::ControlId;
use crate::data::Dataset;
use crate::state::{PAYLOAD_SLIDER_MAX, PAYLOAD_SLIDER_MIN, PAYLOAD_SLIDER_STEP};

// Draws both filter controls and reports which ones changed this frame.
pub fn show_controls(ui: &mut egui::Ui, dataset: &Dataset, filters: &mut FilterState) -> Vec<ControlId> {
    let mut changed = Vec::new();

    let previous_site = filters.site.clone();
    egui::ComboBox::from_label("Launch Site")
        .selected_text(filters.site.label().to_string())
        .show_ui(ui, |ui| {
            ui.selectable_value(&mut filters.site, SiteSelection::AllSites, "All Sites");
            for site in dataset.sites() {
                ui.selectable_value(
                    &mut filters.site,
                    SiteSelection::Site(site.clone()),
                    site.as_str(),
                );
            }
        });
    if filters.site != previous_site {
        changed.push(ControlId::SiteSelector);
    }

    ui.add_space(8.0);
    ui.label("Payload range (kg):");

    let (mut low, mut high) = filters.payload_range;
    let low_changed = ui.add(
        egui::Slider::new(&mut low, PAYLOAD_SLIDER_MIN..=PAYLOAD_SLIDER_MAX)
            .step_by(PAYLOAD_SLIDER_STEP)
            .text("min"),
    ).changed();
    let high_changed = ui.add(
        egui::Slider::new(&mut high, PAYLOAD_SLIDER_MIN..=PAYLOAD_SLIDER_MAX)
            .step_by(PAYLOAD_SLIDER_STEP)
            .text("max"),
    ).changed();

    // A crossed min/max pair is a valid query that matches nothing.
    if low_changed || high_changed {
        filters.payload_range = (low, high);
        changed.push(ControlId::PayloadSlider);
    }

    changed
}
