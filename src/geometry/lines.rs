//! The four boundary lines, anchored in data space

use crate::data::Extent;
use crate::state::LineEndpoints;

/// Identifies one of the boundary lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryKind {
    /// `(x1_min, lo)` to `(x2_min, hi)`
    XMin,
    /// `(x1_max, lo)` to `(x2_max, hi)`
    XMax,
    /// `(lo, y1_min)` to `(hi, y2_min)`
    YMin,
    /// `(lo, y1_max)` to `(hi, y2_max)`
    YMax,
}

impl BoundaryKind {
    pub const ALL: [BoundaryKind; 4] = [
        BoundaryKind::XMin,
        BoundaryKind::XMax,
        BoundaryKind::YMin,
        BoundaryKind::YMax,
    ];

    /// Max lines are dashed, min lines solid
    pub fn is_max(self) -> bool {
        matches!(self, BoundaryKind::XMax | BoundaryKind::YMax)
    }

    /// Legend group the line belongs to
    pub fn legend(self) -> &'static str {
        if self.is_max() {
            "Max boundaries"
        } else {
            "Min boundaries"
        }
    }
}

/// A boundary segment in data coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryLine {
    pub kind: BoundaryKind,
    pub start: [f64; 2],
    pub end: [f64; 2],
}

/// Build the four lines.
///
/// The orthogonal coordinate always runs across `world`, so the lines do not
/// move or stretch when the view is zoomed or panned; the plot only clips them.
pub fn boundary_lines(endpoints: &LineEndpoints, world: Extent) -> [BoundaryLine; 4] {
    let (lo, hi) = (world.min, world.max);
    BoundaryKind::ALL.map(|kind| {
        let (start, end) = match kind {
            BoundaryKind::XMin => ([endpoints.x1.min, lo], [endpoints.x2.min, hi]),
            BoundaryKind::XMax => ([endpoints.x1.max, lo], [endpoints.x2.max, hi]),
            BoundaryKind::YMin => ([lo, endpoints.y1.min], [hi, endpoints.y2.min]),
            BoundaryKind::YMax => ([lo, endpoints.y1.max], [hi, endpoints.y2.max]),
        };
        BoundaryLine { kind, start, end }
    })
}
