//! KML reader.
//!
//! Every `<Placemark>` is read independently and may contribute:
//! - a path from its first `LineString > coordinates`, plus a companion point
//!   at the midpoint labeled with the placemark name
//! - a point from its first `Point > coordinates`, labeled with the name and
//!   the tag-stripped description
//!
//! Both branches can fire for the same placemark. Coordinate tuples are
//! `lon,lat[,alt]`; altitude is ignored and unreadable fields become NaN.
//! Styles, timestamps and other geometry types are not read.

use std::fs;
use std::path::Path;

use roxmltree::Node;
use tracing::debug;

use super::coord::LonLat;
use super::fields::{join_desc, parse_number, strip_markup_tags};
use super::model::{Document, Point, Polyline};
use super::xml::{
    descendants_named, first_descendant_child, first_text_named, parse_document, text_content,
};
use crate::error::PantrackError;

const FORMAT_NAME: &str = "KML";

/// Reads a KML file into a canonical document.
pub fn read_kml(path: &Path) -> Result<Document, PantrackError> {
    let bytes = fs::read(path).map_err(PantrackError::Io)?;
    from_kml_slice(&bytes)
}

/// Parses KML from a string.
pub fn from_kml_str(text: &str) -> Result<Document, PantrackError> {
    let xml = parse_document(text, FORMAT_NAME)?;

    let mut doc = Document::new();
    for placemark in descendants_named(xml.root(), "Placemark") {
        read_placemark(placemark, &mut doc);
    }

    debug!(
        points = doc.points.len(),
        paths = doc.paths.len(),
        "parsed KML document"
    );
    Ok(doc)
}

/// Parses KML from bytes, replacing invalid UTF-8 sequences.
pub fn from_kml_slice(bytes: &[u8]) -> Result<Document, PantrackError> {
    from_kml_str(&String::from_utf8_lossy(bytes))
}

fn read_placemark(placemark: Node<'_, '_>, doc: &mut Document) {
    let name = first_text_named(placemark, "name").map(|n| n.trim().to_string());
    let description = first_text_named(placemark, "description")
        .map(|d| strip_markup_tags(d.trim()))
        .unwrap_or_default();

    if let Some(line) = first_descendant_child(placemark, "LineString", "coordinates") {
        let path: Polyline = text_content(line)
            .split_whitespace()
            .map(parse_tuple)
            .collect();
        doc.add_named_path(path, name.as_deref());
    }

    if let Some(point) = first_descendant_child(placemark, "Point", "coordinates") {
        let coords = parse_tuple(text_content(point).trim());
        let desc = join_desc([name.as_deref(), Some(description.as_str())]);
        doc.add_point(Point::new(coords, desc));
    }
}

/// Parses one `lon,lat[,alt]` tuple, keeping only the first two fields.
fn parse_tuple(tuple: &str) -> LonLat {
    let mut fields = tuple.split(',');
    let lon = fields.next().map_or(f64::NAN, parse_number);
    let lat = fields.next().map_or(f64::NAN, parse_number);
    LonLat::new(lon, lat)
}
