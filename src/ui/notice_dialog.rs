use crate::state::{AppState, Severity};

/// Show the pending notice as a modal; nothing underneath reacts until it is dismissed
pub fn render_notice_dialog(state: &mut AppState, ctx: &egui::Context) {
    let Some(notice) = state.ui.notice.as_ref() else {
        return;
    };

    let (icon, color) = match notice.severity {
        Severity::Warning => ("⚠", ctx.style().visuals.warn_fg_color),
        Severity::Error => ("❌", ctx.style().visuals.error_fg_color),
    };

    let mut confirmed = false;
    let response = egui::Modal::new("notice_modal".into()).show(ctx, |ui| {
        ui.set_max_width(420.0);
        ui.heading(format!("{icon} {}", notice.title));
        ui.separator();
        ui.colored_label(color, &notice.message);
        ui.add_space(8.0);
        ui.vertical_centered(|ui| {
            confirmed = ui.button("OK").clicked();
        });
    });

    if confirmed || response.should_close() || ctx.input(|i| i.key_pressed(egui::Key::Enter)) {
        state.ui.dismiss_notice();
    }
}
