//! Text buffers behind the settings panel entries
//!
//! Entries are parsed only when the user presses an apply button, so a half
//! typed value never reaches the view state.

use super::lines::LineEndpoints;
use super::view::ManualAxes;
use crate::data::{Bounds, Extent, Field};
use crate::error::{PlotError, Result};
use crate::geometry::format_tick;

/// Manual axis entry boxes
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AxisEntries {
    pub x_min: String,
    pub x_max: String,
    pub y_min: String,
    pub y_max: String,
}

impl AxisEntries {
    /// Prefill from a view rectangle
    pub fn from_extents(x: Extent, y: Extent) -> Self {
        Self {
            x_min: format_tick(x.min),
            x_max: format_tick(x.max),
            y_min: format_tick(y.min),
            y_max: format_tick(y.max),
        }
    }

    /// Parse all four boxes; every box is required
    pub fn parse(&self) -> Result<ManualAxes> {
        let x = Extent::new(
            parse_required("X min", &self.x_min)?,
            parse_required("X max", &self.x_max)?,
        );
        let y = Extent::new(
            parse_required("Y min", &self.y_min)?,
            parse_required("Y max", &self.y_max)?,
        );
        ManualAxes::new(x, y)
    }
}

/// Which end of a field's extent an entry edits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Min,
    Max,
}

/// Boundary line endpoint entry boxes, one min/max pair per numeric field
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EndpointEntries {
    entries: [[String; 2]; 4],
}

impl EndpointEntries {
    /// Prefill from endpoint values
    pub fn from_endpoints(endpoints: &LineEndpoints) -> Self {
        let mut entries = Self::default();
        for field in Field::NUMERIC {
            if let Some(extent) = endpoints.field(field) {
                *entries.entry_mut(field, Bound::Min) = format_tick(extent.min);
                *entries.entry_mut(field, Bound::Max) = format_tick(extent.max);
            }
        }
        entries
    }

    pub fn entry(&self, field: Field, bound: Bound) -> &str {
        &self.entries[slot(field)][bound as usize]
    }

    pub fn entry_mut(&mut self, field: Field, bound: Bound) -> &mut String {
        &mut self.entries[slot(field)][bound as usize]
    }

    /// Both boxes of a field, `[min, max]`
    pub fn pair_mut(&mut self, field: Field) -> [&mut String; 2] {
        let [min, max] = &mut self.entries[slot(field)];
        [min, max]
    }

    /// Parse the boxes; a blank box keeps the data value from `bounds`
    pub fn parse(&self, bounds: &Bounds) -> Result<LineEndpoints> {
        let mut endpoints = LineEndpoints::from_bounds(bounds);
        for field in Field::NUMERIC {
            let Some(extent) = endpoints.field_mut(field) else {
                continue;
            };
            if let Some(v) = parse_optional(&entry_label(field, Bound::Min), self.entry(field, Bound::Min))? {
                extent.min = v;
            }
            if let Some(v) = parse_optional(&entry_label(field, Bound::Max), self.entry(field, Bound::Max))? {
                extent.max = v;
            }
        }
        Ok(endpoints)
    }
}

fn slot(field: Field) -> usize {
    match field {
        Field::X1 | Field::Time => 0,
        Field::Y1 => 1,
        Field::X2 => 2,
        Field::Y2 => 3,
    }
}

/// Label used in validation messages, e.g. `"x1 min"`
fn entry_label(field: Field, bound: Bound) -> String {
    match bound {
        Bound::Min => format!("{} min", field.name()),
        Bound::Max => format!("{} max", field.name()),
    }
}

fn parse_required(label: &str, text: &str) -> Result<f64> {
    parse_optional(label, text)?.ok_or_else(|| PlotError::InvalidNumber {
        field: label.to_string(),
        text: text.to_string(),
    })
}

fn parse_optional(label: &str, text: &str) -> Result<Option<f64>> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(Some(v)),
        _ => Err(PlotError::InvalidNumber {
            field: label.to_string(),
            text: text.to_string(),
        }),
    }
}
