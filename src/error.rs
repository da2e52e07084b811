//! Error types for the plotter
//!
//! Errors fall into two buckets: load errors (the file could not be turned into
//! a dataset) and input errors (a typed value was rejected before it touched
//! the view state). Export failures are reported through the same dialog.

use std::path::PathBuf;

use thiserror::Error;

use crate::data::Field;

/// Main error type for plotter operations
#[derive(Error, Debug)]
pub enum PlotError {
    /// File I/O error
    #[error("Failed to access file: {0}")]
    FileIo(#[from] std::io::Error),

    /// The chosen CSV does not exist
    #[error("CSV not found at: {}", .path.display())]
    FileNotFound { path: PathBuf },

    /// Polars data processing error
    #[error("Data processing error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// One or more canonical fields could not be matched to a header
    #[error(
        "CSV must contain columns for {}. Found columns: {found:?}",
        Field::list(.missing)
    )]
    MissingFields { missing: Vec<Field>, found: Vec<String> },

    /// No row survived numeric coercion
    #[error("Dataset is empty or has no valid rows")]
    EmptyDataset,

    /// A typed number could not be parsed
    #[error("{field}: '{text}' is not a number")]
    InvalidNumber { field: String, text: String },

    /// A manual axis range is inverted or empty
    #[error("{axis} min must be < {axis} max.")]
    InvalidRange { axis: &'static str },

    /// Data validation error
    #[error("Data validation failed: {0}")]
    Validation(String),

    /// PNG encoding error
    #[error("PNG encoding failed: {0}")]
    Png(#[from] png::EncodingError),

    /// Clipboard access error
    #[error("Clipboard error: {0}")]
    Clipboard(String),
}

/// Result type alias for plotter operations
pub type Result<T> = std::result::Result<T, PlotError>;

/// UI-friendly error message formatting
impl PlotError {
    /// Get a user-friendly error message suitable for displaying in UI
    pub fn user_message(&self) -> String {
        match self {
            PlotError::FileIo(e) => format!("File error: {}", e),
            PlotError::Polars(e) => format!("Could not read CSV: {}", e),
            PlotError::Validation(msg) => msg.clone(),
            other => other.to_string(),
        }
    }

    /// Get a short title for the error dialog
    pub fn title(&self) -> &'static str {
        match self {
            PlotError::FileIo(_)
            | PlotError::FileNotFound { .. }
            | PlotError::Polars(_)
            | PlotError::MissingFields { .. }
            | PlotError::EmptyDataset => "Load error",
            PlotError::InvalidRange { .. } => "Invalid axes",
            PlotError::InvalidNumber { .. } | PlotError::Validation(_) => "Invalid input",
            PlotError::Png(_) | PlotError::Clipboard(_) => "Export error",
        }
    }

    /// Input errors are warnings: the typed value was rejected and nothing changed
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            PlotError::InvalidNumber { .. }
                | PlotError::InvalidRange { .. }
                | PlotError::Validation(_)
        )
    }
}
