//! Boundary line endpoint overrides

use crate::data::{Bounds, Extent, Field};

/// Min/max anchor values for the four boundary lines, one extent per numeric field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineEndpoints {
    pub x1: Extent,
    pub y1: Extent,
    pub x2: Extent,
    pub y2: Extent,
}

impl LineEndpoints {
    /// Anchors taken straight from the data
    pub fn from_bounds(bounds: &Bounds) -> Self {
        Self {
            x1: bounds.x1,
            y1: bounds.y1,
            x2: bounds.x2,
            y2: bounds.y2,
        }
    }

    /// Anchor extent of a numeric field (`Field::Time` has none)
    pub fn field(&self, field: Field) -> Option<Extent> {
        match field {
            Field::X1 => Some(self.x1),
            Field::Y1 => Some(self.y1),
            Field::X2 => Some(self.x2),
            Field::Y2 => Some(self.y2),
            Field::Time => None,
        }
    }

    pub(crate) fn field_mut(&mut self, field: Field) -> Option<&mut Extent> {
        match field {
            Field::X1 => Some(&mut self.x1),
            Field::Y1 => Some(&mut self.y1),
            Field::X2 => Some(&mut self.x2),
            Field::Y2 => Some(&mut self.y2),
            Field::Time => None,
        }
    }
}

/// Custom boundary line endpoints and whether they are in effect
#[derive(Debug, Clone, Default)]
pub struct LineState {
    /// Draw from `custom` instead of the data extents
    pub use_custom: bool,

    /// Last applied endpoint values
    pub custom: Option<LineEndpoints>,
}

impl LineState {
    /// Endpoints to draw for the given data bounds
    pub fn endpoints(&self, bounds: &Bounds) -> LineEndpoints {
        match (self.use_custom, self.custom) {
            (true, Some(custom)) => custom,
            _ => LineEndpoints::from_bounds(bounds),
        }
    }

    /// Go back to the data min/max
    pub fn reset(&mut self) {
        self.use_custom = false;
        self.custom = None;
    }
}
