//! UI interaction state

use super::forms::{AxisEntries, EndpointEntries};
use crate::error::PlotError;
use crate::export::ExportTarget;

/// How loudly a notice is presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

/// A modal message waiting for the user to dismiss it
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub title: String,
    pub message: String,
    pub severity: Severity,
}

impl Notice {
    /// Input errors are warnings, everything else is an error
    pub fn from_error(err: &PlotError) -> Self {
        Self {
            title: err.title().to_string(),
            message: err.user_message(),
            severity: if err.is_input_error() {
                Severity::Warning
            } else {
                Severity::Error
            },
        }
    }
}

/// UI state manages dialogs, entry buffers and pending exports
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Dialog currently shown, if any
    pub notice: Option<Notice>,

    /// Show help window
    pub show_help: bool,

    /// Data table window visibility
    pub show_data_table: bool,

    /// Manual axis entry boxes
    pub axis_entries: AxisEntries,

    /// Boundary line endpoint entry boxes
    pub endpoint_entries: EndpointEntries,

    /// Screenshot requested, waiting for the next frame
    pub pending_export: Option<ExportTarget>,

    /// Last status line message
    pub status: String,
}

impl UiState {
    /// Show an error in the modal dialog
    pub fn report(&mut self, err: &PlotError) {
        self.notice = Some(Notice::from_error(err));
    }

    /// Clear the current notice
    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Check if there's a notice to display
    pub fn has_notice(&self) -> bool {
        self.notice.is_some()
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = message.into();
    }
}
