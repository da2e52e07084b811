//! Explicit state mutations
//!
//! Every change the UI makes to `AppState` is a `Command`. Handlers validate
//! before mutating, so a rejected command leaves the state exactly as it was.

use std::path::PathBuf;

use super::forms::{AxisEntries, EndpointEntries};
use super::view::{ManualAxes, SeriesKind};
use super::AppState;
use crate::data::{Bounds, Dataset, Extent};
use crate::error::{PlotError, Result};

/// A single user intent
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Load a CSV, replacing the dataset and resetting overrides
    LoadCsv(PathBuf),
    SetSeriesVisible(SeriesKind, bool),
    SetShowTimeLabels(bool),
    SetTimeLabelStride(usize),
    SetShowGrid(bool),
    SetShowLegend(bool),
    SetDarkMode(bool),
    /// Switch the manual axis override on or off
    SetManualAxesEnabled(bool),
    /// Parse and apply the manual axis entry boxes
    ApplyManualAxes(AxisEntries),
    /// Adopt the rectangle the user panned or zoomed to
    CommitView { x: Extent, y: Extent },
    /// Drop the manual override and show the world range
    ResetView,
    SetCustomLinesEnabled(bool),
    /// Parse and apply the endpoint entry boxes
    ApplyLineEndpoints(EndpointEntries),
    /// Use the data min/max for the boundary lines again
    ResetLinesToData,
}

impl AppState {
    /// Apply a command. On error nothing has been changed.
    pub fn apply(&mut self, command: Command) -> Result<()> {
        tracing::debug!(?command, "apply");

        match command {
            Command::LoadCsv(path) => self.load_csv(path)?,
            Command::SetSeriesVisible(series, visible) => self.view.set_visible(series, visible),
            Command::SetShowTimeLabels(show) => self.view.show_time_labels = show,
            Command::SetTimeLabelStride(stride) => self.view.set_time_label_stride(stride)?,
            Command::SetShowGrid(show) => self.view.show_grid = show,
            Command::SetShowLegend(show) => self.view.show_legend = show,
            Command::SetDarkMode(dark) => self.view.dark_mode = dark,
            Command::SetManualAxesEnabled(enabled) => self.set_manual_axes_enabled(enabled),
            Command::ApplyManualAxes(entries) => {
                let axes = entries.parse()?;
                self.view.manual_axes = Some(axes);
                self.view.use_manual_axes = true;
                self.view.reset_plot_bounds();
                self.ui.axis_entries = AxisEntries::from_extents(axes.x, axes.y);
                tracing::info!(x = ?axes.x, y = ?axes.y, "manual axes applied");
            }
            Command::CommitView { x, y } => self.commit_view(x, y),
            Command::ResetView => {
                self.view.reset_axes();
                self.refresh_axis_entries();
            }
            Command::SetCustomLinesEnabled(enabled) => {
                if enabled && self.lines.custom.is_none() {
                    // Adopt what is in the boxes; bad text keeps the switch off
                    let endpoints = self.parse_endpoints(&self.ui.endpoint_entries)?;
                    self.lines.custom = Some(endpoints);
                }
                self.lines.use_custom = enabled;
            }
            Command::ApplyLineEndpoints(entries) => {
                let endpoints = self.parse_endpoints(&entries)?;
                self.lines.custom = Some(endpoints);
                self.lines.use_custom = true;
                self.ui.endpoint_entries = EndpointEntries::from_endpoints(&endpoints);
                tracing::info!("custom boundary endpoints applied");
            }
            Command::ResetLinesToData => {
                self.lines.reset();
                self.refresh_endpoint_entries();
            }
        }
        Ok(())
    }

    /// Apply a command and surface any failure in the notice dialog
    pub fn dispatch(&mut self, command: Command) {
        if let Err(err) = self.apply(command) {
            if err.is_input_error() {
                tracing::warn!("rejected input: {}", err);
            } else {
                tracing::error!("command failed: {}", err);
            }
            self.ui.report(&err);
        }
    }

    fn load_csv(&mut self, path: PathBuf) -> Result<()> {
        let dataset = Dataset::load(&path)?;
        let bounds = Bounds::from_dataset(&dataset).ok_or(PlotError::EmptyDataset)?;

        self.ui.set_status(format!(
            "Loaded {} rows from {}{}",
            dataset.len(),
            path.display(),
            match dataset.dropped_rows() {
                0 => String::new(),
                n => format!(" ({n} invalid rows skipped)"),
            }
        ));
        self.dataset = Some(dataset);
        self.bounds = Some(bounds);
        self.view.reset_axes();
        self.lines.reset();
        self.refresh_entries();
        Ok(())
    }

    fn set_manual_axes_enabled(&mut self, enabled: bool) {
        self.view.use_manual_axes = enabled;
        if enabled && self.view.manual_axes.is_none() {
            // Start from whatever is on screen so enabling alone changes nothing
            self.view.manual_axes = self
                .ui
                .axis_entries
                .parse()
                .ok()
                .or_else(|| self.bounds.and_then(|b| ManualAxes::new(b.world, b.world).ok()));
        }
        self.view.reset_plot_bounds();
        self.refresh_axis_entries();
    }

    fn commit_view(&mut self, x: Extent, y: Extent) {
        match ManualAxes::new(x, y) {
            Ok(axes) if self.view.active_manual_axes() != Some(axes) => {
                self.view.manual_axes = Some(axes);
                self.view.use_manual_axes = true;
                self.ui.axis_entries = AxisEntries::from_extents(axes.x, axes.y);
            }
            Ok(_) => {}
            Err(err) => tracing::debug!("ignoring degenerate view: {}", err),
        }
    }

    fn parse_endpoints(&self, entries: &EndpointEntries) -> Result<super::LineEndpoints> {
        let bounds = self
            .bounds
            .ok_or_else(|| PlotError::Validation("Load a CSV before editing boundary lines.".into()))?;
        entries.parse(&bounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Bound, Notice, Severity};
    use crate::data::Field;
    use std::io::Write;

    fn write_csv(lines: &[&str]) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        for line in lines {
            writeln!(file, "{}", line).unwrap();
        }
        file.flush().unwrap();
        file
    }

    fn scenario_csv() -> tempfile::NamedTempFile {
        write_csv(&[
            "time,temperature,windspeed,relativehumidity,fuelmoisture",
            "0,60,5,40,10",
            "1,80,12,30,8",
        ])
    }

    fn loaded() -> (AppState, tempfile::NamedTempFile) {
        let file = scenario_csv();
        let mut state = AppState::new();
        state.apply(Command::LoadCsv(file.path().to_path_buf())).unwrap();
        (state, file)
    }

    fn entries(x_min: &str, x_max: &str, y_min: &str, y_max: &str) -> AxisEntries {
        AxisEntries {
            x_min: x_min.into(),
            x_max: x_max.into(),
            y_min: y_min.into(),
            y_max: y_max.into(),
        }
    }

    #[test]
    fn test_load_populates_bounds_and_entries() {
        let (state, file) = loaded();
        assert!(state.has_data());
        assert_eq!(state.row_count(), 2);
        assert_eq!(state.current_file(), Some(file.path()));
        let bounds = state.bounds.unwrap();
        assert!((bounds.world.min - 0.5).abs() < 1e-9);
        assert_eq!(state.ui.axis_entries.x_min, "0.5");
        assert_eq!(state.ui.axis_entries.y_max, "84.5");
        assert_eq!(state.ui.endpoint_entries.entry(Field::Y1, Bound::Max), "12");
    }

    #[test]
    fn test_failed_load_keeps_previous_state() {
        let (mut state, file) = loaded();
        let bad = write_csv(&["Time,Temperature,Wind Speed,Fuel Moisture", "1,60,5,10"]);

        let before = state.dataset.clone();
        let err = state.apply(Command::LoadCsv(bad.path().to_path_buf())).unwrap_err();
        assert!(matches!(err, PlotError::MissingFields { .. }));
        assert_eq!(state.dataset, before);
        assert_eq!(state.current_file(), Some(file.path()));
    }

    #[test]
    fn test_dispatch_reports_load_error() {
        let mut state = AppState::new();
        state.dispatch(Command::LoadCsv(PathBuf::from("/no/such/file.csv")));
        let notice: Notice = state.ui.notice.clone().unwrap();
        assert_eq!(notice.severity, Severity::Error);
        assert_eq!(notice.title, "Load error");
        assert!(!state.has_data());
    }

    #[test]
    fn test_manual_axes_round_trip() {
        let (mut state, _file) = loaded();
        state.apply(Command::ApplyManualAxes(entries("10", "20", "-1", "4.5"))).unwrap();

        let axes = state.view.active_manual_axes().unwrap();
        assert_eq!(axes.x, Extent::new(10.0, 20.0));
        assert_eq!(axes.y, Extent::new(-1.0, 4.5));
        assert_eq!(state.ui.axis_entries, entries("10", "20", "-1", "4.5"));
        assert!(state.view.sync_bounds);
    }

    #[test]
    fn test_rejected_manual_axes_leave_state_unchanged() {
        let (mut state, _file) = loaded();
        state.apply(Command::ApplyManualAxes(entries("10", "20", "0", "5"))).unwrap();
        let before = state.view.clone();

        let err = state
            .apply(Command::ApplyManualAxes(entries("30", "20", "0", "5")))
            .unwrap_err();
        assert!(err.is_input_error());
        assert_eq!(state.view.manual_axes, before.manual_axes);
        assert_eq!(state.view.use_manual_axes, before.use_manual_axes);

        assert!(state.apply(Command::ApplyManualAxes(entries("1", "2", "x", "5"))).is_err());
        assert_eq!(state.view.manual_axes, before.manual_axes);
    }

    #[test]
    fn test_load_resets_overrides() {
        let (mut state, file) = loaded();
        state.apply(Command::ApplyManualAxes(entries("10", "20", "0", "5"))).unwrap();
        let mut endpoints = state.ui.endpoint_entries.clone();
        *endpoints.entry_mut(Field::X1, Bound::Min) = "1".into();
        state.apply(Command::ApplyLineEndpoints(endpoints)).unwrap();

        state.apply(Command::LoadCsv(file.path().to_path_buf())).unwrap();
        assert!(state.view.active_manual_axes().is_none());
        assert!(!state.lines.use_custom);
        assert!(state.lines.custom.is_none());
    }

    #[test]
    fn test_commit_view_enables_override() {
        let (mut state, _file) = loaded();
        state.view.sync_bounds = false;
        state
            .apply(Command::CommitView {
                x: Extent::new(20.0, 40.0),
                y: Extent::new(0.0, 20.0),
            })
            .unwrap();
        assert!(state.view.use_manual_axes);
        assert_eq!(state.ui.axis_entries.x_max, "40");
        // The plot already shows this rectangle
        assert!(!state.view.sync_bounds);

        state.apply(Command::ResetView).unwrap();
        assert!(state.view.active_manual_axes().is_none());
        assert_eq!(state.ui.axis_entries.x_min, "0.5");
    }

    #[test]
    fn test_enabling_manual_axes_keeps_view() {
        let (mut state, _file) = loaded();
        state.apply(Command::SetManualAxesEnabled(true)).unwrap();
        let world = state.bounds.unwrap().world;
        assert_eq!(state.view.view_extents(world), (world, world));
    }

    #[test]
    fn test_line_endpoints_need_data() {
        let mut state = AppState::new();
        let err = state
            .apply(Command::ApplyLineEndpoints(EndpointEntries::default()))
            .unwrap_err();
        assert!(err.is_input_error());
        assert!(state.lines.custom.is_none());
    }

    #[test]
    fn test_malformed_endpoint_rejected() {
        let (mut state, _file) = loaded();
        let mut endpoints = state.ui.endpoint_entries.clone();
        *endpoints.entry_mut(Field::Y2, Bound::Min) = "eight".into();
        assert!(state.apply(Command::ApplyLineEndpoints(endpoints)).is_err());
        assert!(!state.lines.use_custom);
    }

    #[test]
    fn test_enabling_custom_lines_with_bad_entry_is_rejected() {
        let (mut state, _file) = loaded();
        *state.ui.endpoint_entries.entry_mut(Field::X1, Bound::Min) = "abc".into();

        let err = state.apply(Command::SetCustomLinesEnabled(true)).unwrap_err();
        assert!(err.is_input_error());
        assert!(!state.lines.use_custom);
        assert!(state.lines.custom.is_none());

        state.dispatch(Command::SetCustomLinesEnabled(true));
        let notice = state.ui.notice.clone().unwrap();
        assert_eq!(notice.severity, Severity::Warning);
        assert!(!state.lines.use_custom);
    }

    #[test]
    fn test_enabling_custom_lines_adopts_entries() {
        let (mut state, _file) = loaded();
        *state.ui.endpoint_entries.entry_mut(Field::X1, Bound::Min) = "55".into();
        state.apply(Command::SetCustomLinesEnabled(true)).unwrap();
        assert!(state.lines.use_custom);
        assert_eq!(state.lines.custom.map(|c| c.x1), Some(Extent::new(55.0, 80.0)));

        state.apply(Command::SetCustomLinesEnabled(false)).unwrap();
        assert!(!state.lines.use_custom);
        assert!(state.lines.custom.is_some());
    }

    #[test]
    fn test_resets_only_refresh_their_own_entries() {
        let (mut state, _file) = loaded();
        *state.ui.endpoint_entries.entry_mut(Field::Y2, Bound::Max) = "9.5".into();
        state.ui.axis_entries.x_min = "3".into();

        state.apply(Command::ResetView).unwrap();
        assert_eq!(state.ui.axis_entries.x_min, "0.5");
        assert_eq!(state.ui.endpoint_entries.entry(Field::Y2, Bound::Max), "9.5");

        state.ui.axis_entries.x_min = "3".into();
        state.apply(Command::ResetLinesToData).unwrap();
        assert_eq!(state.ui.endpoint_entries.entry(Field::Y2, Bound::Max), "10");
        assert_eq!(state.ui.axis_entries.x_min, "3");
    }

    #[test]
    fn test_toggles() {
        let mut state = AppState::new();
        state.apply(Command::SetSeriesVisible(SeriesKind::TempWind, false)).unwrap();
        state.apply(Command::SetShowGrid(true)).unwrap();
        state.apply(Command::SetShowLegend(false)).unwrap();
        state.apply(Command::SetShowTimeLabels(true)).unwrap();
        assert!(!state.view.is_visible(SeriesKind::TempWind));
        assert!(state.view.is_visible(SeriesKind::RhFuel));
        assert!(state.view.show_grid);
        assert!(!state.view.show_legend);
        assert!(state.view.show_time_labels);
        assert!(state.apply(Command::SetTimeLabelStride(0)).is_err());
    }
}
