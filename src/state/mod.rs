//! Application state management
//!
//! All session state lives in one explicit `AppState` value that is passed to
//! every update and render call. Mutations go through `AppState::apply`.

mod command;
mod forms;
mod lines;
mod ui;
mod view;

pub use command::Command;
pub use forms::{AxisEntries, Bound, EndpointEntries};
pub use lines::LineEndpoints;
pub use ui::{Notice, Severity};
pub use view::SeriesKind;

use crate::data::{Bounds, Dataset};
use lines::LineState;
use ui::UiState;
use std::path::Path;
use view::ViewState;

/// Main application state container
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Currently loaded dataset
    pub dataset: Option<Dataset>,

    /// Bounds of `dataset`, replaced together with it
    pub bounds: Option<Bounds>,

    /// View and visualization state
    pub view: ViewState,

    /// Boundary line endpoint overrides
    pub lines: LineState,

    /// UI interaction state
    pub ui: UiState,
}

impl AppState {
    /// Create a new application state with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if data is loaded
    pub fn has_data(&self) -> bool {
        self.dataset.is_some() && self.bounds.is_some()
    }

    /// Get the number of rows in the current dataset
    pub fn row_count(&self) -> usize {
        self.dataset.as_ref().map(Dataset::len).unwrap_or(0)
    }

    /// Path of the loaded CSV
    pub fn current_file(&self) -> Option<&Path> {
        self.dataset.as_ref().and_then(Dataset::file_path)
    }

    /// Prefill both entry groups
    pub fn refresh_entries(&mut self) {
        self.refresh_axis_entries();
        self.refresh_endpoint_entries();
    }

    /// Prefill the axis boxes from the current view
    pub fn refresh_axis_entries(&mut self) {
        self.ui.axis_entries = match self.bounds {
            Some(bounds) => {
                let (x, y) = self.view.view_extents(bounds.world);
                AxisEntries::from_extents(x, y)
            }
            None => AxisEntries::default(),
        };
    }

    /// Prefill the endpoint boxes from the current line state
    pub fn refresh_endpoint_entries(&mut self) {
        self.ui.endpoint_entries = match self.bounds {
            Some(bounds) => EndpointEntries::from_endpoints(&self.lines.endpoints(&bounds)),
            None => EndpointEntries::default(),
        };
    }
}
