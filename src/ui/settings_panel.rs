use egui::{RichText, Ui};

use super::dialogs;
use crate::constants::plot::MAX_TIME_LABEL_STRIDE;
use crate::data::Field;
use crate::export::ExportTarget;
use crate::state::{AppState, Command, SeriesKind};
use crate::widgets::{submitted, RangeInput};

/// Checkbox bound to a command instead of a field
fn toggle(ui: &mut Ui, value: bool, text: &str, make: impl FnOnce(bool) -> Command) -> Option<Command> {
    let mut checked = value;
    ui.checkbox(&mut checked, text).changed().then(|| make(checked))
}

fn section(ui: &mut Ui, title: &str) {
    ui.add_space(6.0);
    ui.label(RichText::new(title).strong().size(15.0));
    ui.add_space(2.0);
}

/// Render the settings side panel
pub fn render_settings_panel(state: &mut AppState, ui: &mut Ui, commands: &mut Vec<Command>) {
    profiling::scope!("render_settings_panel");

    egui::ScrollArea::vertical().show(ui, |ui| {
        file_section(state, ui, commands);
        ui.separator();
        visibility_section(state, ui, commands);
        ui.separator();
        axes_section(state, ui, commands);
        ui.separator();
        lines_section(state, ui, commands);
        ui.separator();
        export_section(state, ui);
    });
}

fn file_section(state: &mut AppState, ui: &mut Ui, commands: &mut Vec<Command>) {
    section(ui, "Data");
    if ui.button("📂 Open CSV…").clicked() {
        if let Some(path) = dialogs::pick_csv() {
            commands.push(Command::LoadCsv(path));
        }
    }

    match (state.current_file(), &state.dataset) {
        (Some(file), Some(dataset)) => {
            let name = file
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| file.display().to_string());
            ui.label(format!("📄 {name}")).on_hover_text(file.display().to_string());
            ui.small(format!(
                "{} rows · time: {} · x1: {} · y1: {} · x2: {} · y2: {}",
                dataset.len(),
                dataset.source_header(Field::Time),
                dataset.source_header(Field::X1),
                dataset.source_header(Field::Y1),
                dataset.source_header(Field::X2),
                dataset.source_header(Field::Y2),
            ));
        }
        _ => {
            ui.label(RichText::new("No file loaded").weak());
        }
    }
}

fn visibility_section(state: &mut AppState, ui: &mut Ui, commands: &mut Vec<Command>) {
    section(ui, "Show");
    let view = &state.view;

    for kind in SeriesKind::ALL {
        commands.extend(toggle(ui, view.is_visible(kind), kind.name(), |v| {
            Command::SetSeriesVisible(kind, v)
        }));
    }

    ui.horizontal(|ui| {
        commands.extend(toggle(ui, view.show_time_labels, "Time labels", Command::SetShowTimeLabels));
        let mut stride = view.time_label_stride;
        let changed = ui
            .add_enabled(
                view.show_time_labels,
                egui::DragValue::new(&mut stride)
                    .range(1..=MAX_TIME_LABEL_STRIDE)
                    .prefix("every "),
            )
            .on_hover_text("Label every n-th row")
            .changed();
        if changed {
            commands.push(Command::SetTimeLabelStride(stride));
        }
    });

    ui.horizontal(|ui| {
        commands.extend(toggle(ui, view.show_grid, "Grid", Command::SetShowGrid));
        commands.extend(toggle(ui, view.show_legend, "Legend", Command::SetShowLegend));
        commands.extend(toggle(ui, view.dark_mode, "Dark mode", Command::SetDarkMode));
    });
}

fn axes_section(state: &mut AppState, ui: &mut Ui, commands: &mut Vec<Command>) {
    section(ui, "Axes");
    let has_data = state.has_data();
    let enabled = state.view.use_manual_axes;

    ui.add_enabled_ui(has_data, |ui| {
        commands.extend(toggle(ui, enabled, "Manual axes", Command::SetManualAxesEnabled));

        let entries = &mut state.ui.axis_entries;
        let x = RangeInput::new("X", &mut entries.x_min, &mut entries.x_max)
            .enabled(enabled)
            .show(ui);
        let y = RangeInput::new("Y", &mut entries.y_min, &mut entries.y_max)
            .enabled(enabled)
            .show(ui);

        ui.horizontal(|ui| {
            let apply = ui.add_enabled(enabled, egui::Button::new("Apply axes")).clicked();
            if apply || (enabled && (submitted(&x) || submitted(&y))) {
                commands.push(Command::ApplyManualAxes(state.ui.axis_entries.clone()));
            }
            if ui.button("Reset view").on_hover_text("Back to data extents (R)").clicked() {
                commands.push(Command::ResetView);
            }
        });
    });
}

fn lines_section(state: &mut AppState, ui: &mut Ui, commands: &mut Vec<Command>) {
    section(ui, "Boundary lines");
    let has_data = state.has_data();
    let enabled = state.lines.use_custom;

    ui.add_enabled_ui(has_data, |ui| {
        commands.extend(toggle(ui, enabled, "Custom endpoints", Command::SetCustomLinesEnabled));

        let mut submit = false;
        egui::Grid::new("endpoint_entries").num_columns(1).show(ui, |ui| {
            for field in Field::NUMERIC {
                let [min, max] = state.ui.endpoint_entries.pair_mut(field);
                let response = RangeInput::new(field.name(), min, max)
                    .enabled(enabled)
                    .hint("data", "data")
                    .show(ui)
                    .on_hover_text(field.label());
                submit |= submitted(&response);
                ui.end_row();
            }
        });
        ui.small("Blank entries keep the data value.");

        ui.horizontal(|ui| {
            let apply = ui.add_enabled(enabled, egui::Button::new("Apply lines")).clicked();
            if apply || (enabled && submit) {
                commands.push(Command::ApplyLineEndpoints(state.ui.endpoint_entries.clone()));
            }
            if ui.button("Reset to data").clicked() {
                commands.push(Command::ResetLinesToData);
            }
        });
    });
}

fn export_section(state: &mut AppState, ui: &mut Ui) {
    section(ui, "Export");
    ui.add_enabled_ui(state.has_data(), |ui| {
        ui.horizontal(|ui| {
            if ui.button("💾 Export PNG…").clicked() {
                if let Some(path) = dialogs::pick_export_path() {
                    super::request_export(ui.ctx(), state, ExportTarget::File(path));
                }
            }
            if ui.button("📋 Copy image").clicked() {
                super::request_export(ui.ctx(), state, ExportTarget::Clipboard);
            }
        });
    });
}
