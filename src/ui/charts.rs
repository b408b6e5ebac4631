// src/ui/charts.rs
use eframe::egui;

use crate::analysis::{ProportionView, ScatterView};

const SERIES_COLORS: [egui::Color32; 6] = [
    egui::Color32::from_rgb(100, 150, 255),
    egui::Color32::from_rgb(100, 200, 100),
    egui::Color32::from_rgb(255, 160, 80),
    egui::Color32::from_rgb(200, 100, 100),
    egui::Color32::from_rgb(170, 120, 220),
    egui::Color32::from_rgb(120, 200, 200),
];

fn series_color(index: usize) -> egui::Color32 {
    SERIES_COLORS[index % SERIES_COLORS.len()]
}

pub fn show_proportion_chart(ui: &mut egui::Ui, view: &ProportionView) {
    ui.group(|ui| {
        ui.vertical(|ui| {
            ui.heading(&view.title);

            let plot = egui_plot::Plot::new("proportion_chart")
                .height(220.0)
                .allow_zoom(false)
                .allow_drag(false)
                .show_background(false)
                .show_axes([false, true])
                .include_y(0.0)
                .legend(egui_plot::Legend::default());

            plot.show(ui, |plot_ui| {
                // One single-bar series per slice so the legend carries the labels
                for (i, slice) in view.slices.iter().enumerate() {
                    let bar = egui_plot::Bar::new(i as f64, slice.count as f64)
                        .width(0.6)
                        .fill(series_color(i));
                    plot_ui.bar_chart(
                        egui_plot::BarChart::new(vec![bar]).name(&slice.label),
                    );
                }
            });

            let total = view.total();
            ui.horizontal_wrapped(|ui| {
                for slice in &view.slices {
                    let percent = if total > 0 {
                        slice.count as f64 / total as f64 * 100.0
                    } else {
                        0.0
                    };
                    ui.label(format!("{}: {} ({:.1}%)", slice.label, slice.count, percent));
                }
                if view.slices.is_empty() {
                    ui.label("No qualifying launches");
                }
            });
        });
    });
}

pub fn show_scatter_chart(ui: &mut egui::Ui, view: &ScatterView) {
    ui.group(|ui| {
        ui.vertical(|ui| {
            ui.heading(&view.title);

            let plot = egui_plot::Plot::new("payload_scatter")
                .height(260.0)
                .allow_zoom(false)
                .allow_drag(false)
                .show_background(false)
                .include_x(0.0)
                .include_y(-0.25)
                .include_y(1.25)
                .legend(egui_plot::Legend::default());

            plot.show(ui, |plot_ui| {
                for (i, (category, points)) in points_by_category(view).into_iter().enumerate() {
                    plot_ui.points(
                        egui_plot::Points::new(egui_plot::PlotPoints::from(points))
                            .name(category)
                            .color(series_color(i))
                            .radius(3.0)
                            .filled(true),
                    );
                }
            });

            ui.label("Outcome: 1 = success, 0 = failure");
        });
    });
}

// Group points by booster category, first-observed order, one legend series each.
fn points_by_category(view: &ScatterView) -> Vec<(String, Vec<[f64; 2]>)> {
    let mut series: Vec<(String, Vec<[f64; 2]>)> = Vec::new();
    for point in &view.points {
        let coords = [point.payload_kg, point.outcome.as_y()];
        match series.iter_mut().find(|(category, _)| category == &point.booster_category) {
            Some((_, points)) => points.push(coords),
            None => series.push((point.booster_category.clone(), vec![coords])),
        }
    }
    series
}
