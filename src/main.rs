#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

// Application shell
mod app;

// Application constants
mod constants;

// CSV loading and bounds
mod data;

// Error handling
mod error;

// Plot image export
mod export;

// Toolkit-independent frame geometry
mod geometry;

// Application state and commands
mod state;

// Panels, dialogs and the plot adapter
mod ui;

// Reusable widgets
mod widgets;

use app::InversePlotter;
use constants::app::{DEFAULT_LOG_FILTER, WINDOW_TITLE};
use constants::layout::{MIN_WINDOW_SIZE, WINDOW_SIZE};

#[cfg(feature = "profile-with-puffin")]
fn start_puffin_server() {
    puffin::set_scopes_on(true);
    match puffin_http::Server::new(&format!("127.0.0.1:{}", puffin_http::DEFAULT_PORT)) {
        Ok(server) => {
            tracing::info!("puffin server listening on port {}", puffin_http::DEFAULT_PORT);
            // Keep serving for the lifetime of the process
            std::mem::forget(server);
        }
        Err(err) => tracing::warn!("could not start puffin server: {}", err),
    }
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)))
        .init();

    #[cfg(feature = "profile-with-puffin")]
    start_puffin_server();

    let initial_file = std::env::args_os().nth(1).map(PathBuf::from);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size(WINDOW_SIZE)
            .with_min_inner_size(MIN_WINDOW_SIZE)
            .with_drag_and_drop(true),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(InversePlotter::new(initial_file)))),
    )
}
