use polars::prelude::*;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use super::fields::{match_headers, Field, HeaderMapping};
use crate::error::{PlotError, Result};

/// Separators tried when sniffing the header line
const CANDIDATE_SEPARATORS: [u8; 3] = [b',', b';', b'\t'];

/// A cleaned table of observations restricted to the five canonical fields.
///
/// Every retained row has finite values for all four numeric fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    time: Vec<String>,
    x1: Vec<f64>,
    y1: Vec<f64>,
    x2: Vec<f64>,
    y2: Vec<f64>,
    /// Source header mapped to each field, in `Field::ALL` order
    source_headers: Vec<String>,
    /// Rows discarded because a numeric value failed to parse
    dropped_rows: usize,
    file_path: Option<PathBuf>,
}

impl Dataset {
    /// Load and clean a CSV file
    pub fn load(path: &Path) -> Result<Self> {
        profiling::scope!("Dataset::load");

        if !path.exists() {
            return Err(PlotError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let separator = sniff_separator(path)?;

        // Every column is read as text; numeric coercion happens per row below
        let df = LazyCsvReader::new(path)
            .with_has_header(true)
            .with_separator(separator)
            .with_infer_schema_length(Some(0))
            .finish()?
            .collect()?;

        let headers: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect();

        let mapping = match_headers(&headers).map_err(|missing| PlotError::MissingFields {
            missing,
            found: headers.clone(),
        })?;

        let mut dataset = Self::from_frame(&df, &headers, &mapping)?;
        dataset.file_path = Some(path.to_path_buf());

        tracing::info!(
            path = %path.display(),
            rows = dataset.len(),
            dropped = dataset.dropped_rows,
            "loaded dataset"
        );
        Ok(dataset)
    }

    /// Build from an already-read frame whose headers were matched
    fn from_frame(df: &DataFrame, headers: &[String], mapping: &HeaderMapping) -> Result<Self> {
        let text_column = |field: Field| -> Result<Vec<Option<String>>> {
            let name = &headers[mapping.index(field)];
            column_as_text(df, name)
        };

        let time = text_column(Field::Time)?;
        let numeric: Vec<Vec<Option<String>>> = Field::NUMERIC
            .iter()
            .map(|f| text_column(*f))
            .collect::<Result<_>>()?;

        let source_headers = Field::ALL
            .iter()
            .map(|f| headers[mapping.index(*f)].clone())
            .collect();

        let mut rows = RowBuilder::default();
        for row in 0..df.height() {
            let values: Option<Vec<f64>> = numeric
                .iter()
                .map(|col| col[row].as_deref().and_then(parse_number))
                .collect();
            match values {
                Some(v) => rows.push(time[row].clone().unwrap_or_default(), [v[0], v[1], v[2], v[3]]),
                None => rows.dropped += 1,
            }
        }

        if rows.dropped > 0 {
            tracing::warn!(dropped = rows.dropped, "discarded rows with non-numeric values");
        }

        Self::from_builder(rows, source_headers)
    }

    /// Build from in-memory rows `(time, x1, y1, x2, y2)`
    #[cfg(test)]
    pub fn from_rows<I, S>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, f64, f64, f64, f64)>,
        S: Into<String>,
    {
        let mut builder = RowBuilder::default();
        for (time, x1, y1, x2, y2) in rows {
            let values = [x1, y1, x2, y2];
            if values.iter().all(|v| v.is_finite()) {
                builder.push(time.into(), values);
            } else {
                builder.dropped += 1;
            }
        }
        let headers = Field::ALL.iter().map(|f| f.name().to_string()).collect();
        Self::from_builder(builder, headers)
    }

    fn from_builder(rows: RowBuilder, source_headers: Vec<String>) -> Result<Self> {
        if rows.time.is_empty() {
            return Err(PlotError::EmptyDataset);
        }
        Ok(Self {
            time: rows.time,
            x1: rows.x1,
            y1: rows.y1,
            x2: rows.x2,
            y2: rows.y2,
            source_headers,
            dropped_rows: rows.dropped,
            file_path: None,
        })
    }

    /// Number of retained rows
    pub fn len(&self) -> usize {
        self.time.len()
    }

    /// Time labels in row order
    pub fn time(&self) -> &[String] {
        &self.time
    }

    /// Values of a numeric field in row order (empty for `Field::Time`)
    pub fn values(&self, field: Field) -> &[f64] {
        match field {
            Field::X1 => &self.x1,
            Field::Y1 => &self.y1,
            Field::X2 => &self.x2,
            Field::Y2 => &self.y2,
            Field::Time => &[],
        }
    }

    /// `[x, y]` pairs for two numeric fields
    pub fn points(&self, x: Field, y: Field) -> Vec<[f64; 2]> {
        self.values(x)
            .iter()
            .zip(self.values(y))
            .map(|(&x, &y)| [x, y])
            .collect()
    }

    /// Source header that was mapped to `field`
    pub fn source_header(&self, field: Field) -> &str {
        let slot = Field::ALL.iter().position(|f| *f == field).unwrap_or(0);
        self.source_headers.get(slot).map(String::as_str).unwrap_or_else(|| field.name())
    }

    /// Rows discarded during coercion
    pub fn dropped_rows(&self) -> usize {
        self.dropped_rows
    }

    /// Get the file path
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }
}

#[derive(Default)]
struct RowBuilder {
    time: Vec<String>,
    x1: Vec<f64>,
    y1: Vec<f64>,
    x2: Vec<f64>,
    y2: Vec<f64>,
    dropped: usize,
}

impl RowBuilder {
    fn push(&mut self, time: String, [x1, y1, x2, y2]: [f64; 4]) {
        self.time.push(time);
        self.x1.push(x1);
        self.y1.push(y1);
        self.x2.push(x2);
        self.y2.push(y2);
    }
}

/// Parse a numeric cell; blanks, text and non-finite values are rejected
fn parse_number(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Pick the separator that occurs most often in the header line
fn sniff_separator(path: &Path) -> Result<u8> {
    let file = std::fs::File::open(path)?;
    let mut header = String::new();
    BufReader::new(file).read_line(&mut header)?;

    let best = CANDIDATE_SEPARATORS
        .iter()
        .map(|&sep| (sep, header.bytes().filter(|b| *b == sep).count()))
        .max_by_key(|&(_, count)| count)
        .filter(|&(_, count)| count > 0)
        .map(|(sep, _)| sep)
        .unwrap_or(b',');
    tracing::debug!(separator = ?(best as char), "sniffed separator");
    Ok(best)
}

/// Get a column's cells as optional strings, whatever dtype polars inferred
fn column_as_text(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>> {
    let series = df.column(name)?.as_materialized_series().clone();

    if let Ok(ca) = series.str() {
        return Ok(ca.into_iter().map(|opt| opt.map(str::to_string)).collect());
    }

    // Fallback: cast through polars' string conversion
    let str_series = series.cast(&DataType::String)?;
    let ca = str_series.str()?;
    Ok(ca.into_iter().map(|opt| opt.map(str::to_string)).collect())
}
