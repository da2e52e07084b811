use egui_extras::{Column, TableBuilder};

use crate::constants::layout::{DATA_TABLE_SIZE, TABLE_HEADER_HEIGHT, TABLE_ROW_HEIGHT};
use crate::data::{Dataset, Field};
use crate::geometry::format_tick;
use crate::state::AppState;

/// Render the data table window with virtual scrolling
pub fn render_data_table(state: &mut AppState, ctx: &egui::Context) {
    profiling::scope!("render_data_table");

    let Some(dataset) = state.dataset.as_ref() else {
        state.ui.show_data_table = false;
        return;
    };

    let mut open = state.ui.show_data_table;
    egui::Window::new("Data")
        .open(&mut open)
        .default_size(DATA_TABLE_SIZE)
        .show(ctx, |ui| {
            ui.label(format!(
                "{} rows ({} skipped)",
                dataset.len(),
                dataset.dropped_rows()
            ));
            ui.separator();
            table(ui, dataset);
        });
    state.ui.show_data_table = open;
}

fn table(ui: &mut egui::Ui, dataset: &Dataset) {
    TableBuilder::new(ui)
        .striped(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::initial(45.0).resizable(false))
        .columns(Column::initial(90.0).resizable(true).clip(true), Field::ALL.len())
        .header(TABLE_HEADER_HEIGHT, |mut header| {
            header.col(|ui| {
                ui.strong("#");
            });
            for field in Field::ALL {
                header.col(|ui| {
                    ui.strong(field.name())
                        .on_hover_text(format!("{} (from \"{}\")", field.label(), dataset.source_header(field)));
                });
            }
        })
        .body(|body| {
            body.rows(TABLE_ROW_HEIGHT, dataset.len(), |mut row| {
                let idx = row.index();
                row.col(|ui| {
                    ui.label(format!("{}", idx + 1));
                });
                row.col(|ui| {
                    ui.label(dataset.time().get(idx).map(String::as_str).unwrap_or_default());
                });
                for field in Field::NUMERIC {
                    row.col(|ui| {
                        if let Some(v) = dataset.values(field).get(idx) {
                            ui.label(format_tick(*v));
                        }
                    });
                }
            });
        });
}
