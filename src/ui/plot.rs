use egui::{Align2, Rect, RichText, Ui};
use egui_plot::{
    AxisHints, GridMark, HPlacement, Legend, Line, LineStyle, Plot, PlotBounds, PlotPoint, PlotUi,
    Points, Text, VPlacement,
};
use std::ops::RangeInclusive;

use crate::constants::axes;
use crate::constants::plot::{
    BOUNDARY_COLOR, BOUNDARY_DASH_LENGTH, BOUNDARY_WIDTH, PLACEHOLDER, POINT_RADIUS,
    PRIMARY_SERIES_COLOR, SECONDARY_SERIES_COLOR, TIME_LABEL_OFFSET, TIME_LABEL_SIZE,
};
use crate::data::Extent;
use crate::geometry::{format_tick, LabelOffset, PlotFrame};
use crate::state::{AppState, Command, SeriesKind};

fn series_color(kind: SeriesKind) -> egui::Color32 {
    match kind {
        SeriesKind::TempWind => PRIMARY_SERIES_COLOR,
        SeriesKind::RhFuel => SECONDARY_SERIES_COLOR,
    }
}

fn tick_label(mark: GridMark, _range: &RangeInclusive<f64>) -> String {
    format_tick(mark.value)
}

/// Text anchor that pushes a label away from its marker
fn label_anchor(offset: LabelOffset) -> Align2 {
    match offset {
        LabelOffset::UpRight => Align2::LEFT_BOTTOM,
        LabelOffset::DownRight => Align2::LEFT_TOP,
        LabelOffset::UpLeft => Align2::RIGHT_BOTTOM,
        LabelOffset::DownLeft => Align2::RIGHT_TOP,
    }
}

/// Largest box with the given width/height ratio that fits in `available`
fn fit_aspect(available: egui::Vec2, aspect: f32) -> egui::Vec2 {
    let width = available.x.min(available.y * aspect).max(1.0);
    egui::vec2(width, (width / aspect).max(1.0))
}

/// Render the plot area. Returns the screen rectangle covered by the title and
/// plot, which is what an image export captures.
pub fn render_plot(state: &mut AppState, ui: &mut Ui, commands: &mut Vec<Command>) -> Option<Rect> {
    profiling::scope!("render_plot");

    let Some(frame) = PlotFrame::build(state) else {
        ui.centered_and_justified(|ui| {
            ui.label(RichText::new(PLACEHOLDER).heading().weak());
        });
        return None;
    };

    let sync_bounds = std::mem::take(&mut state.view.sync_bounds);

    let inner = ui.vertical_centered(|ui| {
        ui.label(RichText::new(frame.title).heading());

        let size = fit_aspect(ui.available_size(), frame.aspect());
        let mut plot = Plot::new("inverse_axis_plot")
            .width(size.x)
            .height(size.y)
            .show_grid(frame.show_grid)
            .allow_double_click_reset(false)
            .custom_x_axes(vec![
                AxisHints::new_x().label(axes::BOTTOM).formatter(tick_label),
                AxisHints::new_x()
                    .label(axes::TOP)
                    .formatter(tick_label)
                    .placement(VPlacement::Top),
            ])
            .custom_y_axes(vec![
                AxisHints::new_y().label(axes::LEFT).formatter(tick_label),
                AxisHints::new_y()
                    .label(axes::RIGHT)
                    .formatter(tick_label)
                    .placement(HPlacement::Right),
            ]);

        if frame.show_legend {
            plot = plot.legend(Legend::default().position(egui_plot::Corner::RightTop));
        }

        let text_color = ui.visuals().text_color();
        let response = plot.show(ui, |plot_ui| {
            if sync_bounds {
                plot_ui.set_plot_bounds(PlotBounds::from_min_max(
                    [frame.x_view.min, frame.y_view.min],
                    [frame.x_view.max, frame.y_view.max],
                ));
            }
            draw_frame(plot_ui, &frame, text_color);
        });

        let bounds = response.transform.bounds();
        let view_changed = response.response.drag_stopped()
            || (response.response.hovered() && ui.input(|i| i.smooth_scroll_delta != egui::Vec2::ZERO));

        if response.response.double_clicked() {
            commands.push(Command::ResetView);
        } else if view_changed && !sync_bounds {
            commands.push(Command::CommitView {
                x: Extent::new(bounds.min()[0], bounds.max()[0]),
                y: Extent::new(bounds.min()[1], bounds.max()[1]),
            });
        }
    });

    Some(inner.response.rect)
}

fn draw_frame(plot_ui: &mut PlotUi, frame: &PlotFrame, text_color: egui::Color32) {
    for line in &frame.lines {
        let style = if line.kind.is_max() {
            LineStyle::Dashed {
                length: BOUNDARY_DASH_LENGTH,
            }
        } else {
            LineStyle::Solid
        };
        plot_ui.line(
            Line::new(line.kind.legend(), vec![line.start, line.end])
                .color(BOUNDARY_COLOR)
                .width(BOUNDARY_WIDTH)
                .style(style),
        );
    }

    for series in &frame.series {
        plot_ui.points(
            Points::new(series.kind.name(), series.points.clone())
                .radius(POINT_RADIUS)
                .color(series_color(series.kind)),
        );
    }

    if frame.labels.is_empty() {
        return;
    }

    // Screen-space offset converted to data units for the current zoom
    let [dx, dy] = plot_ui.transform().dvalue_dpos();
    for label in &frame.labels {
        let [ux, uy] = label.offset.direction();
        let position = PlotPoint::new(
            label.position[0] + f64::from(ux * TIME_LABEL_OFFSET) * dx.abs(),
            label.position[1] + f64::from(uy * TIME_LABEL_OFFSET) * dy.abs(),
        );
        plot_ui.text(
            Text::new(
                "",
                position,
                RichText::new(&label.text).size(TIME_LABEL_SIZE).color(text_color),
            )
            .anchor(label_anchor(label.offset)),
        );
    }
}
