mod data_table;
mod dialogs;
mod help_dialog;
mod menu;
mod notice_dialog;
mod plot;
mod settings_panel;

pub use data_table::render_data_table;
pub use help_dialog::render_help_dialog;
pub use menu::render_menu_bar;
pub use notice_dialog::render_notice_dialog;
pub use plot::render_plot;
pub use settings_panel::render_settings_panel;

use crate::export::ExportTarget;
use crate::state::AppState;

/// Queue a plot capture; the screenshot arrives on a later frame
pub fn request_export(ctx: &egui::Context, state: &mut AppState, target: ExportTarget) {
    tracing::debug!(?target, "screenshot requested");
    state.ui.pending_export = Some(target);
    ctx.send_viewport_cmd(egui::ViewportCommand::Screenshot(egui::UserData::default()));
}
