//! Toolkit-independent description of one plot frame
//!
//! `PlotFrame::build` is a pure function of `AppState`; the egui adapter in
//! `ui::plot` only translates the result into draw calls.

mod labels;
mod lines;
mod ticks;

pub use labels::{time_labels, LabelOffset, TimeLabel};
pub use lines::{boundary_lines, BoundaryKind, BoundaryLine};
pub use ticks::format_tick;

use crate::constants::plot::TITLE;
use crate::data::Extent;
use crate::state::{AppState, SeriesKind};

/// Points of one visible scatter series
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterSeries {
    pub kind: SeriesKind,
    pub points: Vec<[f64; 2]>,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq)]
pub struct PlotFrame {
    /// Visible x range
    pub x_view: Extent,
    /// Visible y range
    pub y_view: Extent,
    /// Shared padded data range
    pub world: Extent,
    pub series: Vec<ScatterSeries>,
    pub lines: [BoundaryLine; 4],
    pub labels: Vec<TimeLabel>,
    pub show_grid: bool,
    pub show_legend: bool,
    pub title: &'static str,
}

impl PlotFrame {
    /// Build the frame for the current state, `None` when there is nothing to plot
    pub fn build(state: &AppState) -> Option<Self> {
        profiling::scope!("PlotFrame::build");

        let dataset = state.dataset.as_ref()?;
        let bounds = state.bounds?;
        if !bounds.world.is_finite() {
            return None;
        }

        let view = &state.view;
        let (x_view, y_view) = view.view_extents(bounds.world);
        let lines = boundary_lines(&state.lines.endpoints(&bounds), bounds.world);

        let mut series = Vec::new();
        let mut labels = Vec::new();
        for kind in SeriesKind::ALL {
            if !view.is_visible(kind) {
                continue;
            }
            let (x, y) = kind.fields();
            let points = dataset.points(x, y);
            if view.show_time_labels {
                labels.extend(time_labels(
                    dataset.time(),
                    &points,
                    view.time_label_stride,
                    kind.label_phase(),
                ));
            }
            series.push(ScatterSeries { kind, points });
        }

        Some(Self {
            x_view,
            y_view,
            world: bounds.world,
            series,
            lines,
            labels,
            show_grid: view.show_grid,
            show_legend: view.show_legend,
            title: TITLE,
        })
    }

    /// Width over height of the plot box that keeps one data unit square
    pub fn aspect(&self) -> f32 {
        let ratio = self.x_view.span() / self.y_view.span();
        if ratio.is_finite() && ratio > 0.0 {
            ratio as f32
        } else {
            1.0
        }
    }

    pub fn series(&self, kind: SeriesKind) -> Option<&ScatterSeries> {
        self.series.iter().find(|s| s.kind == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Bounds, Dataset};
    use crate::state::{AxisEntries, Command};

    fn state() -> AppState {
        let dataset = Dataset::from_rows([
            ("08:00", 60.0, 5.0, 40.0, 10.0),
            ("09:00", 80.0, 12.0, 30.0, 8.0),
        ])
        .unwrap();
        let mut state = AppState::new();
        state.bounds = Bounds::from_dataset(&dataset);
        state.dataset = Some(dataset);
        state.refresh_entries();
        state
    }

    #[test]
    fn test_no_data_no_frame() {
        assert!(PlotFrame::build(&AppState::new()).is_none());
    }

    #[test]
    fn test_default_frame_is_square_world() {
        let frame = PlotFrame::build(&state()).unwrap();
        assert_eq!(frame.x_view, frame.world);
        assert_eq!(frame.y_view, frame.world);
        assert!((frame.aspect() - 1.0).abs() < 1e-6);
        assert_eq!(frame.series.len(), 2);
        assert!(frame.labels.is_empty());
        assert_eq!(frame.series(SeriesKind::RhFuel).unwrap().points, vec![[40.0, 10.0], [30.0, 8.0]]);
    }

    #[test]
    fn test_hiding_series_keeps_lines_and_other_series() {
        let mut state = state();
        let before = PlotFrame::build(&state).unwrap();

        state.apply(Command::SetSeriesVisible(SeriesKind::RhFuel, false)).unwrap();
        let after = PlotFrame::build(&state).unwrap();

        assert_eq!(after.lines, before.lines);
        assert!(after.series(SeriesKind::RhFuel).is_none());
        assert_eq!(after.series(SeriesKind::TempWind), before.series(SeriesKind::TempWind));
    }

    #[test]
    fn test_lines_ignore_manual_zoom() {
        let mut state = state();
        let before = PlotFrame::build(&state).unwrap();

        let entries = AxisEntries {
            x_min: "55".into(),
            x_max: "85".into(),
            y_min: "0".into(),
            y_max: "15".into(),
        };
        state.apply(Command::ApplyManualAxes(entries)).unwrap();
        let zoomed = PlotFrame::build(&state).unwrap();

        assert_eq!(zoomed.x_view, Extent::new(55.0, 85.0));
        assert_eq!(zoomed.y_view, Extent::new(0.0, 15.0));
        assert!((zoomed.aspect() - 2.0).abs() < 1e-6);
        assert_eq!(zoomed.lines, before.lines);
        assert_eq!(zoomed.world, before.world);
    }

    #[test]
    fn test_time_labels_follow_visibility() {
        let mut state = state();
        state.apply(Command::SetShowTimeLabels(true)).unwrap();
        let frame = PlotFrame::build(&state).unwrap();
        assert_eq!(frame.labels.len(), 4);
        // RH/Fuel starts one step later in the rotation
        assert_eq!(frame.labels[0].offset, LabelOffset::UpRight);
        assert_eq!(frame.labels[2].offset, LabelOffset::DownRight);
        assert_eq!(frame.labels[2].text, "08:00");

        state.apply(Command::SetSeriesVisible(SeriesKind::TempWind, false)).unwrap();
        let frame = PlotFrame::build(&state).unwrap();
        assert_eq!(frame.labels.len(), 2);
        assert_eq!(frame.labels[0].position, [40.0, 10.0]);
    }
}
