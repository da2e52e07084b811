use super::dialogs;
use crate::export::ExportTarget;
use crate::state::{AppState, Command, SeriesKind};

/// Render the top menu bar
pub fn render_menu_bar(state: &mut AppState, ui: &mut egui::Ui, commands: &mut Vec<Command>) {
    egui::MenuBar::new().ui(ui, |ui| {
        ui.menu_button("File", |ui| {
            if ui.button("Open CSV…").clicked() {
                if let Some(path) = dialogs::pick_csv() {
                    commands.push(Command::LoadCsv(path));
                }
                ui.close();
            }
            ui.separator();
            let has_data = state.has_data();
            if ui.add_enabled(has_data, egui::Button::new("Export PNG…")).clicked() {
                if let Some(path) = dialogs::pick_export_path() {
                    super::request_export(ui.ctx(), state, ExportTarget::File(path));
                }
                ui.close();
            }
            if ui.add_enabled(has_data, egui::Button::new("Copy Plot Image")).clicked() {
                super::request_export(ui.ctx(), state, ExportTarget::Clipboard);
                ui.close();
            }
            ui.separator();
            if ui.button("Exit").clicked() {
                ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
            }
        });

        ui.menu_button("View", |ui| {
            let view = &state.view;
            for kind in SeriesKind::ALL {
                let mut visible = view.is_visible(kind);
                if ui.checkbox(&mut visible, kind.name()).changed() {
                    commands.push(Command::SetSeriesVisible(kind, visible));
                }
            }
            let mut labels = view.show_time_labels;
            if ui.checkbox(&mut labels, "Time labels").changed() {
                commands.push(Command::SetShowTimeLabels(labels));
            }
            let mut grid = view.show_grid;
            if ui.checkbox(&mut grid, "Grid (G)").changed() {
                commands.push(Command::SetShowGrid(grid));
            }
            let mut legend = view.show_legend;
            if ui.checkbox(&mut legend, "Legend (L)").changed() {
                commands.push(Command::SetShowLegend(legend));
            }
            ui.separator();
            if ui.button("Reset View (R)").clicked() {
                commands.push(Command::ResetView);
                ui.close();
            }
            if ui.button("Toggle Theme (T)").clicked() {
                commands.push(Command::SetDarkMode(!view.dark_mode));
                ui.close();
            }
            ui.separator();
            if ui.button("Data Table").clicked() {
                state.ui.show_data_table = !state.ui.show_data_table;
                ui.close();
            }
        });

        ui.menu_button("Help", |ui| {
            if ui.button("Keyboard Shortcuts (H)").clicked() {
                state.ui.show_help = true;
                ui.close();
            }
        });
    });
}
