//! Application-wide constants and default values
//!
//! This module centralizes all magic numbers and default values used throughout
//! the application, making them easier to maintain and configure.

/// World-range derivation
pub mod bounds {
    /// Padding added on each side of the world range, as a fraction of the span
    pub const PAD_RATIO: f64 = 0.06;

    /// Smallest span used for padding, so constant data still gets a visible range
    pub const MIN_SPAN: f64 = 1.0;
}

/// Plotting and visualization defaults
pub mod plot {
    use egui::Color32;

    /// Scatter marker radius in points
    pub const POINT_RADIUS: f32 = 4.0;

    /// Boundary line stroke width
    pub const BOUNDARY_WIDTH: f32 = 2.0;

    /// Dash length for the max boundary lines
    pub const BOUNDARY_DASH_LENGTH: f32 = 10.0;

    /// Boundary line color
    pub const BOUNDARY_COLOR: Color32 = Color32::from_rgb(214, 39, 40);

    /// Temp/Wind series color
    pub const PRIMARY_SERIES_COLOR: Color32 = Color32::from_rgb(31, 119, 180);

    /// RH/Fuel series color
    pub const SECONDARY_SERIES_COLOR: Color32 = Color32::from_rgb(255, 127, 14);

    /// Time label text size
    pub const TIME_LABEL_SIZE: f32 = 10.0;

    /// Distance in points between a time label and its marker, per axis
    pub const TIME_LABEL_OFFSET: f32 = 6.0;

    /// Default stride for time labels (1 = every row)
    pub const DEFAULT_TIME_LABEL_STRIDE: usize = 1;

    /// Upper bound offered by the stride slider
    pub const MAX_TIME_LABEL_STRIDE: usize = 100;

    /// Plot title
    pub const TITLE: &str = "Inverse Min/Max Boundaries (zoom/pan safe)";

    /// Placeholder shown while nothing is loaded
    pub const PLACEHOLDER: &str = "Choose a CSV to begin (File > Open CSV or the settings panel)";
}

/// Axis titles for the two coupled coordinate systems
pub mod axes {
    pub const BOTTOM: &str = "Temperature";
    pub const LEFT: &str = "Wind Speed";
    pub const TOP: &str = "Relative Humidity";
    pub const RIGHT: &str = "Fuel Moisture";
}

/// UI layout defaults
pub mod layout {
    /// Right panel (settings) default width
    pub const SETTINGS_PANEL_WIDTH: f32 = 320.0;

    /// Width of numeric entry boxes in the settings panel
    pub const ENTRY_WIDTH: f32 = 72.0;

    /// Data table window default size
    pub const DATA_TABLE_SIZE: [f32; 2] = [520.0, 420.0];

    /// Table header row height
    pub const TABLE_HEADER_HEIGHT: f32 = 20.0;

    /// Table body row height
    pub const TABLE_ROW_HEIGHT: f32 = 18.0;

    /// Initial window size
    pub const WINDOW_SIZE: [f32; 2] = [1100.0, 800.0];

    /// Minimum window size
    pub const MIN_WINDOW_SIZE: [f32; 2] = [800.0, 600.0];
}

/// Image export defaults
pub mod export {
    /// Default file name offered by the save dialog (timestamp is appended)
    pub const FILE_STEM: &str = "inverse_axis";

    /// Extension enforced on exported images
    pub const EXTENSION: &str = "png";

    /// Resolution recorded in exported PNGs
    pub const DPI: u32 = 300;

    /// `DPI` in pixels per metre for the pHYs chunk
    pub const PIXELS_PER_METER: u32 = 11_811;
}

/// Application identity
pub mod app {
    pub const WINDOW_TITLE: &str = "Inverse Axis Plotter";

    /// Default log filter when RUST_LOG is unset
    pub const DEFAULT_LOG_FILTER: &str = "info";
}
