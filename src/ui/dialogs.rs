//! Native file dialogs

use std::path::PathBuf;

use crate::constants::export::EXTENSION;
use crate::export::{default_file_name, png_path};

/// Ask for a CSV to open
pub fn pick_csv() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title("Open CSV")
        .add_filter("CSV files", &["csv", "txt"])
        .add_filter("All files", &["*"])
        .pick_file()
}

/// Ask where to save the plot image; the extension is forced to `.png`
pub fn pick_export_path() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title("Export PNG")
        .set_file_name(default_file_name())
        .add_filter("PNG Image", &[EXTENSION])
        .save_file()
        .map(png_path)
}
