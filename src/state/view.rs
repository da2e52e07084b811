//! View and visualization state

use crate::constants::plot::{DEFAULT_TIME_LABEL_STRIDE, MAX_TIME_LABEL_STRIDE};
use crate::data::{Extent, Field};
use crate::error::{PlotError, Result};

/// The two scatter series drawn over the shared world range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeriesKind {
    /// Temperature against wind speed, `(x1, y1)`
    TempWind,
    /// Relative humidity against fuel moisture, `(x2, y2)`
    RhFuel,
}

impl SeriesKind {
    pub const ALL: [SeriesKind; 2] = [SeriesKind::TempWind, SeriesKind::RhFuel];

    /// Legend entry
    pub fn name(self) -> &'static str {
        match self {
            SeriesKind::TempWind => "Temp/Wind (x1, y1)",
            SeriesKind::RhFuel => "RH/Fuel (x2, y2)",
        }
    }

    /// Fields plotted on the x and y axes
    pub fn fields(self) -> (Field, Field) {
        match self {
            SeriesKind::TempWind => (Field::X1, Field::Y1),
            SeriesKind::RhFuel => (Field::X2, Field::Y2),
        }
    }

    /// Starting phase in the time label offset rotation
    pub fn label_phase(self) -> usize {
        match self {
            SeriesKind::TempWind => 0,
            SeriesKind::RhFuel => 1,
        }
    }
}

/// A user supplied view rectangle, always with `min < max` on both axes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ManualAxes {
    pub x: Extent,
    pub y: Extent,
}

impl ManualAxes {
    /// Validate and build a view rectangle
    pub fn new(x: Extent, y: Extent) -> Result<Self> {
        validate_axis("X", x)?;
        validate_axis("Y", y)?;
        Ok(Self { x, y })
    }
}

fn validate_axis(axis: &'static str, extent: Extent) -> Result<()> {
    if !extent.is_finite() {
        return Err(PlotError::Validation(format!(
            "{axis} limits must be finite numbers."
        )));
    }
    if extent.min >= extent.max {
        return Err(PlotError::InvalidRange { axis });
    }
    Ok(())
}

/// View state manages all visualization and display options
#[derive(Debug, Clone)]
pub struct ViewState {
    // Series & overlays
    /// Temperature/wind scatter visibility
    pub show_temp_wind: bool,

    /// Humidity/fuel scatter visibility
    pub show_rh_fuel: bool,

    /// Per-point time labels
    pub show_time_labels: bool,

    /// Label every n-th row
    pub time_label_stride: usize,

    // Display options
    /// Dark mode theme toggle
    pub dark_mode: bool,

    /// Grid visibility
    pub show_grid: bool,

    /// Legend visibility
    pub show_legend: bool,

    // Axes
    /// Use `manual_axes` instead of the world range
    pub use_manual_axes: bool,

    /// Last applied manual view rectangle
    pub manual_axes: Option<ManualAxes>,

    /// Push the current view extents into the plot on the next frame
    pub sync_bounds: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            show_temp_wind: true,
            show_rh_fuel: true,
            show_time_labels: false,
            time_label_stride: DEFAULT_TIME_LABEL_STRIDE,

            dark_mode: true,
            show_grid: false,
            show_legend: true,

            use_manual_axes: false,
            manual_axes: None,
            sync_bounds: true,
        }
    }
}

impl ViewState {
    /// Create a new ViewState with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self, series: SeriesKind) -> bool {
        match series {
            SeriesKind::TempWind => self.show_temp_wind,
            SeriesKind::RhFuel => self.show_rh_fuel,
        }
    }

    pub fn set_visible(&mut self, series: SeriesKind, visible: bool) {
        match series {
            SeriesKind::TempWind => self.show_temp_wind = visible,
            SeriesKind::RhFuel => self.show_rh_fuel = visible,
        }
    }

    /// Set the time label stride, rejecting zero and absurd values
    pub fn set_time_label_stride(&mut self, stride: usize) -> Result<()> {
        if !(1..=MAX_TIME_LABEL_STRIDE).contains(&stride) {
            return Err(PlotError::Validation(format!(
                "Time label step must be between 1 and {MAX_TIME_LABEL_STRIDE}."
            )));
        }
        self.time_label_stride = stride;
        Ok(())
    }

    /// The manual rectangle when the override is switched on
    pub fn active_manual_axes(&self) -> Option<ManualAxes> {
        self.use_manual_axes.then_some(self.manual_axes).flatten()
    }

    /// View extents for a given world range: the manual override if active,
    /// otherwise the world range on both axes
    pub fn view_extents(&self, world: Extent) -> (Extent, Extent) {
        match self.active_manual_axes() {
            Some(axes) => (axes.x, axes.y),
            None => (world, world),
        }
    }

    /// Drop the manual override and return to data extents
    pub fn reset_axes(&mut self) {
        self.use_manual_axes = false;
        self.manual_axes = None;
        self.reset_plot_bounds();
    }

    /// Reset plot bounds on next frame
    pub fn reset_plot_bounds(&mut self) {
        self.sync_bounds = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_axes_validation() {
        let ok = ManualAxes::new(Extent::new(0.0, 10.0), Extent::new(-5.0, 5.0));
        assert!(ok.is_ok());

        let err = ManualAxes::new(Extent::new(10.0, 0.0), Extent::new(0.0, 1.0)).unwrap_err();
        assert_eq!(err.to_string(), "X min must be < X max.");

        let err = ManualAxes::new(Extent::new(0.0, 1.0), Extent::new(3.0, 3.0)).unwrap_err();
        assert_eq!(err.to_string(), "Y min must be < Y max.");

        let err = ManualAxes::new(Extent::new(f64::NAN, 1.0), Extent::new(0.0, 1.0)).unwrap_err();
        assert!(err.is_input_error());
    }

    #[test]
    fn test_view_extents_follow_override_flag() {
        let world = Extent::new(0.5, 84.5);
        let mut view = ViewState::new();
        assert_eq!(view.view_extents(world), (world, world));

        let axes = ManualAxes::new(Extent::new(10.0, 20.0), Extent::new(30.0, 40.0)).unwrap();
        view.manual_axes = Some(axes);
        // Stored but not enabled
        assert_eq!(view.view_extents(world), (world, world));

        view.use_manual_axes = true;
        assert_eq!(view.view_extents(world), (axes.x, axes.y));

        view.reset_axes();
        assert_eq!(view.view_extents(world), (world, world));
        assert!(view.sync_bounds);
    }

    #[test]
    fn test_stride_rejects_zero() {
        let mut view = ViewState::new();
        assert!(view.set_time_label_stride(0).is_err());
        assert_eq!(view.time_label_stride, DEFAULT_TIME_LABEL_STRIDE);
        view.set_time_label_stride(5).unwrap();
        assert_eq!(view.time_label_stride, 5);
    }

    #[test]
    fn test_series_visibility() {
        let mut view = ViewState::new();
        view.set_visible(SeriesKind::RhFuel, false);
        assert!(view.is_visible(SeriesKind::TempWind));
        assert!(!view.is_visible(SeriesKind::RhFuel));
    }
}
