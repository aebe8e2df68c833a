//! CSV point-list reader.
//!
//! Each data row becomes one point. There is no fixed schema, so the
//! latitude/longitude columns are detected:
//!
//! 1. If the first non-blank line (lower-cased) contains `lat` or `lon`, it
//!    is a header. The latitude column is the first header cell containing
//!    `lat`, the longitude column the first containing `lon`.
//! 2. Otherwise every line is data. In the first row, the first numeric cell
//!    is latitude and the next numeric cell is longitude.
//!
//! Every other cell of a row, in order, is joined with `", "` into the point
//! description. Rows whose coordinates do not parse are dropped silently.
//! Cells are split on bare commas: quoting is not interpreted. CSV input
//! never yields paths.

use std::fs;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, warn};

use super::coord::LonLat;
use super::fields::parse_float_prefix;
use super::model::{Document, Point};
use crate::error::PantrackError;

/// Separator between the non-coordinate cells in a point description.
pub const CELL_SEPARATOR: &str = ", ";

/// Resolved coordinate columns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CoordColumns {
    pub lat: usize,
    pub lon: usize,
}

/// Reads a CSV file into a canonical document.
pub fn read_csv(path: &Path) -> Result<Document, PantrackError> {
    let bytes = fs::read(path).map_err(PantrackError::Io)?;
    from_csv_slice(&bytes)
}

/// Parses CSV from a string.
///
/// # Errors
/// - [`PantrackError::ColumnDetection`] if no usable latitude/longitude
///   columns can be found (this includes input with no rows at all)
pub fn from_csv_str(text: &str) -> Result<Document, PantrackError> {
    let rows = read_rows(text)?;
    let Some(first) = rows.first() else {
        return Err(PantrackError::ColumnDetection);
    };

    let has_header = {
        let line = first.iter().collect::<Vec<_>>().join(",").to_lowercase();
        line.contains("lat") || line.contains("lon")
    };

    let (columns, data) = if has_header {
        (detect_from_header(first), &rows[1..])
    } else {
        (detect_from_values(first), &rows[..])
    };
    let columns = columns.ok_or(PantrackError::ColumnDetection)?;
    debug!(has_header, lat = columns.lat, lon = columns.lon, "detected CSV columns");

    let mut doc = Document::new();
    let mut dropped = 0usize;
    for row in data {
        match row_to_point(row, columns) {
            Some(point) => {
                doc.add_point(point);
            }
            None => dropped += 1,
        }
    }

    if dropped > 0 {
        warn!(dropped, "dropped CSV rows without readable coordinates");
    }
    debug!(points = doc.points.len(), "parsed CSV document");
    Ok(doc)
}

/// Parses CSV from bytes, replacing invalid UTF-8 sequences.
pub fn from_csv_slice(bytes: &[u8]) -> Result<Document, PantrackError> {
    from_csv_str(&String::from_utf8_lossy(bytes))
}

/// Finds the coordinate columns from a header row.
pub fn detect_from_header(header: &StringRecord) -> Option<CoordColumns> {
    let names: Vec<String> = header.iter().map(|h| h.trim().to_lowercase()).collect();
    let lat = names.iter().position(|h| h.contains("lat"))?;
    let lon = names.iter().position(|h| h.contains("lon"))?;
    Some(CoordColumns { lat, lon })
}

/// Finds the coordinate columns from the first data row: the first two
/// cells holding a finite number, latitude first.
pub fn detect_from_values(row: &StringRecord) -> Option<CoordColumns> {
    let mut numeric = row
        .iter()
        .enumerate()
        .filter(|(_, cell)| parse_float_prefix(cell).is_finite())
        .map(|(idx, _)| idx);
    let lat = numeric.next()?;
    let lon = numeric.next()?;
    Some(CoordColumns { lat, lon })
}

fn row_to_point(row: &StringRecord, columns: CoordColumns) -> Option<Point> {
    let lat = row.get(columns.lat).map_or(f64::NAN, parse_float_prefix);
    let lon = row.get(columns.lon).map_or(f64::NAN, parse_float_prefix);
    if lat.is_nan() || lon.is_nan() {
        return None;
    }

    let desc = row
        .iter()
        .enumerate()
        .filter(|(idx, _)| *idx != columns.lat && *idx != columns.lon)
        .map(|(_, cell)| cell)
        .collect::<Vec<_>>()
        .join(CELL_SEPARATOR);
    Some(Point::new(LonLat::new(lon, lat), desc))
}

/// Splits `text` into comma-separated rows, dropping blank lines.
fn read_rows(text: &str) -> Result<Vec<StringRecord>, PantrackError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|source| PantrackError::CsvRead { source })?;
        if record.iter().all(|cell| cell.trim().is_empty()) && record.len() <= 1 {
            continue;
        }
        rows.push(record);
    }
    Ok(rows)
}
