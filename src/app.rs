// src/app.rs
use eframe::egui;
use rfd::FileDialog;

use crate::data::Dataset;
use crate::state::AppState;

pub struct DashboardApp {
    state: AppState,
}

impl DashboardApp {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            state: AppState::new(dataset),
        }
    }

    fn show_menu(&mut self, ui: &mut egui::Ui) {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Open CSV...").clicked() {
                    self.open_csv();
                    ui.close_menu();
                }
                if ui.button("Quit").clicked() {
                    ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                    ui.close_menu();
                }
            });
        });
    }

    fn open_csv(&mut self) {
        let file_dialog = FileDialog::new()
            .add_filter("CSV files", &["csv"])
            .set_title("Open Launch Records");

        if let Some(path) = file_dialog.pick_file() {
            match Dataset::from_csv_path(&path) {
                Ok(dataset) => {
                    self.state.replace_dataset(dataset);
                    self.state.error_message = None;
                }
                // Keep the current dataset on a failed reload
                Err(e) => {
                    self.state.error_message = Some(format!("Error loading launch data: {:#}", e));
                }
            }
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            self.show_menu(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.heading("Launch Records Dashboard");
                ui.add_space(8.0);

                let changed = crate::ui::controls::show_controls(
                    ui,
                    &self.state.dataset,
                    &mut self.state.filters,
                );
                for control in changed {
                    self.state.on_control_changed(control);
                }

                ui.add_space(12.0);
                crate::ui::charts::show_proportion_chart(ui, &self.state.display.proportion);
                ui.add_space(12.0);
                crate::ui::charts::show_scatter_chart(ui, &self.state.display.scatter);
            });
        });

        // Show error modal if needed
        let error_msg = self.state.error_message.clone();
        if let Some(error) = error_msg {
            egui::Window::new("Error")
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.label(&error);
                    if ui.button("OK").clicked() {
                        self.state.error_message = None;
                    }
                });
        }
    }
}
