//! Canonical fields and fuzzy header matching

use std::fmt;

/// One of the five roles a CSV column can play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Row label
    Time,
    /// Temperature (bottom axis)
    X1,
    /// Wind speed (left axis)
    Y1,
    /// Relative humidity (top axis)
    X2,
    /// Fuel moisture (right axis)
    Y2,
}

impl Field {
    /// All fields in canonical column order
    pub const ALL: [Field; 5] = [Field::Time, Field::X1, Field::Y1, Field::X2, Field::Y2];

    /// The numeric fields
    pub const NUMERIC: [Field; 4] = [Field::X1, Field::Y1, Field::X2, Field::Y2];

    /// Canonical column name
    pub fn name(self) -> &'static str {
        match self {
            Field::Time => "time",
            Field::X1 => "x1",
            Field::Y1 => "y1",
            Field::X2 => "x2",
            Field::Y2 => "y2",
        }
    }

    /// Human readable quantity
    pub fn label(self) -> &'static str {
        match self {
            Field::Time => "Time",
            Field::X1 => "Temperature",
            Field::Y1 => "Wind Speed",
            Field::X2 => "Relative Humidity",
            Field::Y2 => "Fuel Moisture",
        }
    }

    /// Normalized header names accepted for this field, most specific first
    fn candidates(self) -> &'static [&'static str] {
        match self {
            Field::Time => &["time", "timestamp", "datetime", "date"],
            Field::X1 => &["temperature", "temp", "x1"],
            Field::Y1 => &["windspeed", "wind", "y1"],
            Field::X2 => &["relativehumidity", "humidity", "rh", "x2"],
            Field::Y2 => &["fuelmoisture", "moisture", "fuel", "y2"],
        }
    }

    /// Format a field list the way load errors print it: `[x1, y2]`
    pub fn list(fields: &[Field]) -> String {
        let names: Vec<&str> = fields.iter().map(|f| f.name()).collect();
        format!("[{}]", names.join(", "))
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lowercase and drop everything that is not a letter or digit.
///
/// `"Temp (F)"` becomes `"tempf"`, `"RH%"` becomes `"rh"`.
pub fn normalize_header(header: &str) -> String {
    header
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(|c| c.to_lowercase())
        .collect()
}

/// Source header index chosen for each canonical field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderMapping {
    indices: [usize; 5],
}

impl HeaderMapping {
    /// Index of the source column mapped to `field`
    pub fn index(&self, field: Field) -> usize {
        self.indices[Self::slot(field)]
    }

    fn slot(field: Field) -> usize {
        match field {
            Field::Time => 0,
            Field::X1 => 1,
            Field::Y1 => 2,
            Field::X2 => 3,
            Field::Y2 => 4,
        }
    }
}

/// Match headers to the canonical fields.
///
/// An exact pass over normalized names runs first for every field, then a
/// prefix pass picks up decorated headers such as `"Temp (F)"`. Each header is
/// claimed by at most one field. Returns the unmatched fields on failure.
pub fn match_headers(headers: &[String]) -> Result<HeaderMapping, Vec<Field>> {
    let normalized: Vec<String> = headers.iter().map(|h| normalize_header(h)).collect();
    let mut claimed = vec![false; headers.len()];
    let mut found: [Option<usize>; 5] = [None; 5];

    let passes: [fn(&str, &str) -> bool; 2] = [
        |header, candidate| header == candidate,
        |header, candidate| header.starts_with(candidate),
    ];

    for matches in passes {
        for field in Field::ALL {
            let slot = HeaderMapping::slot(field);
            if found[slot].is_some() {
                continue;
            }
            let hit = field.candidates().iter().find_map(|candidate| {
                normalized.iter().enumerate().position(|(idx, header)| {
                    !claimed[idx] && !header.is_empty() && matches(header.as_str(), candidate)
                })
            });
            if let Some(idx) = hit {
                claimed[idx] = true;
                found[slot] = Some(idx);
            }
        }
    }

    let mut indices = [0usize; 5];
    let mut missing = Vec::new();
    for field in Field::ALL {
        let slot = HeaderMapping::slot(field);
        match found[slot] {
            Some(idx) => indices[slot] = idx,
            None => missing.push(field),
        }
    }
    if !missing.is_empty() {
        return Err(missing);
    }
    Ok(HeaderMapping { indices })
}
