//! GPX reader.
//!
//! Produces, in this order:
//! - one path per `<trk>` with at least one `<trkpt>`, plus a companion point
//!   at the path's midpoint when the track has a `<name>`
//! - the same for every `<rte>` / `<rtept>`; tracks and routes never merge
//! - one point per `<wpt>`, described by name, comment and description
//!
//! `lat`/`lon` attributes are read leniently. A missing or malformed value
//! becomes NaN and is kept in the output as is.

use std::fs;
use std::path::Path;

use roxmltree::Node;
use tracing::debug;

use super::coord::LonLat;
use super::fields::{join_desc, parse_float_prefix};
use super::model::{Document, Point, Polyline};
use super::xml::{descendants_named, first_text_named, parse_document};
use crate::error::PantrackError;

const FORMAT_NAME: &str = "GPX";

/// Reads a GPX file into a canonical document.
pub fn read_gpx(path: &Path) -> Result<Document, PantrackError> {
    let bytes = fs::read(path).map_err(PantrackError::Io)?;
    from_gpx_slice(&bytes)
}

/// Parses GPX from a string.
pub fn from_gpx_str(text: &str) -> Result<Document, PantrackError> {
    let xml = parse_document(text, FORMAT_NAME)?;
    let root = xml.root();

    let mut doc = Document::new();
    for (line_tag, vertex_tag) in [("trk", "trkpt"), ("rte", "rtept")] {
        for line in descendants_named(root, line_tag) {
            let path: Polyline = descendants_named(line, vertex_tag).map(read_lonlat).collect();
            let name = first_text_named(line, "name");
            doc.add_named_path(path, name.as_deref());
        }
    }

    for wpt in descendants_named(root, "wpt") {
        let name = first_text_named(wpt, "name");
        let cmt = first_text_named(wpt, "cmt");
        let desc = first_text_named(wpt, "desc");
        let text = join_desc([name.as_deref(), cmt.as_deref(), desc.as_deref()]);
        doc.add_point(Point::new(read_lonlat(wpt), text));
    }

    debug!(
        points = doc.points.len(),
        paths = doc.paths.len(),
        "parsed GPX document"
    );
    Ok(doc)
}

/// Parses GPX from bytes, replacing invalid UTF-8 sequences.
pub fn from_gpx_slice(bytes: &[u8]) -> Result<Document, PantrackError> {
    from_gpx_str(&String::from_utf8_lossy(bytes))
}

fn read_lonlat(node: Node<'_, '_>) -> LonLat {
    let attr = |name: &str| node.attribute(name).map_or(f64::NAN, parse_float_prefix);
    LonLat::new(attr("lon"), attr("lat"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_gpx() -> &'static str {
        r#"<?xml version="1.0" encoding="UTF-8"?>
<gpx version="1.1" creator="test" xmlns="http://www.topografix.com/GPX/1/1">
  <wpt lat="59.93" lon="30.31">
    <name>Cafe</name>
    <cmt>Good coffee</cmt>
    <desc>Open till 9</desc>
  </wpt>
  <wpt lat="59.94" lon="30.32">
    <desc>Only a description</desc>
  </wpt>
  <trk>
    <name>Trail</name>
    <trkseg>
      <trkpt lat="1.0" lon="10.0"/>
      <trkpt lat="2.0" lon="20.0"/>
      <trkpt lat="3.0" lon="30.0"/>
    </trkseg>
  </trk>
  <rte>
    <rtept lat="5.0" lon="50.0"/>
    <rtept lat="7.0" lon="70.0"/>
  </rte>
</gpx>"#
    }

    fn sorted_descs(doc: &Document) -> Vec<&str> {
        let mut descs: Vec<&str> = doc.point_values().map(|p| p.desc.as_str()).collect();
        descs.sort();
        descs
    }

    #[test]
    fn test_gpx_basic_counts() {
        let doc = from_gpx_str(sample_gpx()).expect("parse failed");

        // track + route
        assert_eq!(doc.paths.len(), 2);
        // 2 waypoints + track companion (route is unnamed)
        assert_eq!(doc.points.len(), 3);
    }

    #[test]
    fn test_waypoint_descriptions() {
        let doc = from_gpx_str(sample_gpx()).expect("parse failed");
        assert_eq!(
            sorted_descs(&doc),
            vec!["Cafe\nGood coffee\nOpen till 9", "Only a description", "Trail"]
        );
    }

    #[test]
    fn test_track_companion_point_at_midpoint() {
        let doc = from_gpx_str(sample_gpx()).expect("parse failed");
        let companion = doc
            .point_values()
            .find(|p| p.desc == "Trail")
            .expect("companion point");
        assert_eq!(companion.coords, LonLat::new(20.0, 2.0));
    }

    #[test]
    fn test_paths_keep_lon_lat_order() {
        let doc = from_gpx_str(sample_gpx()).expect("parse failed");
        let track = doc
            .path_values()
            .find(|p| p.len() == 3)
            .expect("track path");
        assert_eq!(
            track.coords(),
            &[
                LonLat::new(10.0, 1.0),
                LonLat::new(20.0, 2.0),
                LonLat::new(30.0, 3.0)
            ]
        );
    }

    #[test]
    fn test_empty_track_is_skipped() {
        let gpx = r#"<gpx><trk><name>Empty</name><trkseg/></trk></gpx>"#;
        let doc = from_gpx_str(gpx).expect("parse failed");
        assert!(doc.is_empty());
    }

    #[test]
    fn test_malformed_coordinates_become_nan() {
        let gpx = r#"<gpx><trk><trkseg><trkpt lat="abc" lon="1.5"/><trkpt lon="2.5"/></trkseg></trk></gpx>"#;
        let doc = from_gpx_str(gpx).expect("parse failed");

        let path = doc.path_values().next().expect("path");
        assert_eq!(path.len(), 2);
        assert_eq!(path.coords()[0].lon, 1.5);
        assert!(path.coords()[0].lat.is_nan());
        assert!(path.coords()[1].lat.is_nan());
    }

    #[test]
    fn test_infinity_attribute_is_read() {
        let doc = from_gpx_str(r#"<gpx><wpt lat="Infinity" lon="1"/></gpx>"#).expect("parse failed");
        let point = doc.point_values().next().expect("point");
        assert_eq!(point.coords, LonLat::new(1.0, f64::INFINITY));
    }

    #[test]
    fn test_waypoint_without_text_has_empty_desc() {
        let doc = from_gpx_str(r#"<gpx><wpt lat="1" lon="2"/></gpx>"#).expect("parse failed");
        let point = doc.point_values().next().expect("point");
        assert_eq!(point.coords, LonLat::new(2.0, 1.0));
        assert_eq!(point.desc, "");
    }

    #[test]
    fn test_not_xml_is_an_error() {
        let result = from_gpx_str("this is not xml");
        assert!(matches!(result, Err(PantrackError::XmlParse { .. })));
    }
}
