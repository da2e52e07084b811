use std::path::PathBuf;
use std::sync::Arc;

use eframe::App;

use crate::constants::layout::SETTINGS_PANEL_WIDTH;
use crate::export::{self, CapturedImage};
use crate::state::{AppState, Command};
use crate::ui;

pub struct InversePlotter {
    pub state: AppState,

    /// Screen rectangle of the title and plot from the last frame
    plot_rect: Option<egui::Rect>,
}

impl InversePlotter {
    pub fn new(initial_file: Option<PathBuf>) -> Self {
        let mut app = Self {
            state: AppState::new(),
            plot_rect: None,
        };
        if let Some(path) = initial_file {
            app.state.dispatch(Command::LoadCsv(path));
        }
        app
    }

    /// Commands from keyboard shortcuts
    fn shortcut_commands(&mut self, ctx: &egui::Context, commands: &mut Vec<Command>) {
        // Single-key shortcuts must not fire while typing or behind the notice modal
        if self.state.ui.has_notice() || ctx.memory(|m| m.focused().is_some()) {
            return;
        }
        let view = &self.state.view;
        ctx.input(|i| {
            if i.key_pressed(egui::Key::R) {
                commands.push(Command::ResetView);
            }
            if i.key_pressed(egui::Key::G) {
                commands.push(Command::SetShowGrid(!view.show_grid));
            }
            if i.key_pressed(egui::Key::L) {
                commands.push(Command::SetShowLegend(!view.show_legend));
            }
            if i.key_pressed(egui::Key::T) {
                commands.push(Command::SetDarkMode(!view.dark_mode));
            }
        });
        ctx.input(|i| {
            if i.key_pressed(egui::Key::H) || i.key_pressed(egui::Key::F1) {
                self.state.ui.show_help = !self.state.ui.show_help;
            }
            if i.key_pressed(egui::Key::Escape) {
                self.state.ui.show_help = false;
            }
        });
    }

    /// Load the first CSV dropped onto the window
    fn dropped_file_commands(&self, ctx: &egui::Context, commands: &mut Vec<Command>) {
        if self.state.ui.has_notice() {
            return;
        }
        let dropped: Option<PathBuf> = ctx.input(|i| {
            i.raw
                .dropped_files
                .iter()
                .filter_map(|f| f.path.clone())
                .next()
        });
        if let Some(path) = dropped {
            tracing::info!(path = %path.display(), "file dropped");
            commands.push(Command::LoadCsv(path));
        }
    }

    /// Finish an export once the screenshot event arrives
    fn handle_screenshot(&mut self, ctx: &egui::Context) {
        if self.state.ui.pending_export.is_none() {
            return;
        }
        let screenshot: Option<Arc<egui::ColorImage>> = ctx.input(|i| {
            i.raw.events.iter().find_map(|event| match event {
                egui::Event::Screenshot { image, .. } => Some(image.clone()),
                _ => None,
            })
        });
        let (Some(image), Some(target)) = (screenshot, self.state.ui.pending_export.take()) else {
            return;
        };

        let captured = CapturedImage::crop(&image, self.plot_rect, ctx.pixels_per_point());
        match export::deliver(&target, &captured) {
            Ok(status) => self.state.ui.set_status(status),
            Err(err) => {
                tracing::error!("export failed: {}", err);
                self.state.ui.report(&err);
            }
        }
    }

    fn render_status_bar(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if let Some(name) = self.state.current_file().and_then(|f| f.file_name()) {
                ui.label(format!("📁 {}", name.to_string_lossy()));
                ui.separator();
            }
            ui.label(format!("Rows: {}", self.state.row_count()));
            if let Some(bounds) = self.state.bounds {
                ui.separator();
                ui.label(format!(
                    "World: [{}, {}]",
                    crate::geometry::format_tick(bounds.world.min),
                    crate::geometry::format_tick(bounds.world.max)
                ));
            }
            if self.state.view.active_manual_axes().is_some() {
                ui.separator();
                ui.label("Manual axes");
            }
            if !self.state.ui.status.is_empty() {
                ui.separator();
                ui.label(&self.state.ui.status);
            }
        });
    }
}

impl App for InversePlotter {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        profiling::finish_frame!();

        // Set theme
        if self.state.view.dark_mode {
            ctx.set_visuals(egui::Visuals::dark());
        } else {
            ctx.set_visuals(egui::Visuals::light());
        }

        self.handle_screenshot(ctx);

        let mut commands = Vec::new();
        self.shortcut_commands(ctx, &mut commands);
        self.dropped_file_commands(ctx, &mut commands);

        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            ui::render_menu_bar(&mut self.state, ui, &mut commands);
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            self.render_status_bar(ui);
        });

        egui::SidePanel::right("settings_panel")
            .default_width(SETTINGS_PANEL_WIDTH)
            .resizable(true)
            .show(ctx, |ui| {
                ui::render_settings_panel(&mut self.state, ui, &mut commands);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.plot_rect = ui::render_plot(&mut self.state, ui, &mut commands);
        });

        ui::render_data_table(&mut self.state, ctx);
        ui::render_help_dialog(&mut self.state, ctx);
        ui::render_notice_dialog(&mut self.state, ctx);

        if !commands.is_empty() {
            for command in commands {
                self.state.dispatch(command);
            }
            ctx.request_repaint();
        }
    }
}
