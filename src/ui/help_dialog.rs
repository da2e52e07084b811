use crate::state::AppState;

pub fn render_help_dialog(state: &mut AppState, ctx: &egui::Context) {
    if state.ui.show_help {
        egui::Window::new("⌨ Keyboard Shortcuts")
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.heading("Keys");
                ui.label("R - Reset view to data extents");
                ui.label("G - Toggle grid");
                ui.label("L - Toggle legend");
                ui.label("T - Toggle dark/light theme");
                ui.label("H / F1 - Toggle help");
                ui.label("ESC - Close help");

                ui.separator();
                ui.heading("Mouse");
                ui.label("Drag - Pan view");
                ui.label("Scroll / Ctrl + Scroll - Pan / zoom");
                ui.label("Double-click - Reset view");
                ui.label("Drop a CSV on the window - Open it");

                ui.separator();
                ui.heading("Boundary lines");
                ui.label("Solid: x1 min → x2 min and y1 min → y2 min");
                ui.label("Dashed: x1 max → x2 max and y1 max → y2 max");

                ui.separator();
                if ui.button("Close").clicked() {
                    state.ui.show_help = false;
                }
            });
    }
}
