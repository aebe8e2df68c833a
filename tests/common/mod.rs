#![allow(dead_code)]

use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};

use pantrack::ir::{Document, LonLat};
use zip::write::SimpleFileOptions;

pub fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn read_fixture(name: &str) -> String {
    std::fs::read_to_string(fixture(name)).expect("read fixture")
}

/// Builds an in-memory zip archive from `(entry name, contents)` pairs.
pub fn zip_bytes(entries: &[(&str, &[u8])]) -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    for (name, body) in entries {
        writer
            .start_file(*name, SimpleFileOptions::default())
            .expect("start zip entry");
        writer.write_all(body).expect("write zip entry");
    }
    writer.finish().expect("finish zip").into_inner()
}

/// Point descriptions and coordinates, sorted by description.
pub fn sorted_points(doc: &Document) -> Vec<(String, LonLat)> {
    let mut points: Vec<_> = doc
        .point_values()
        .map(|p| (p.desc.clone(), p.coords))
        .collect();
    points.sort_by(|a, b| a.0.cmp(&b.0));
    points
}

/// Path vertex lists, sorted by their first vertex.
pub fn sorted_paths(doc: &Document) -> Vec<Vec<LonLat>> {
    let mut paths: Vec<Vec<LonLat>> = doc.path_values().map(|p| p.coords().to_vec()).collect();
    paths.sort_by(|a, b| {
        let key = |p: &Vec<LonLat>| p.first().map(|c| (c.lon, c.lat));
        key(a)
            .partial_cmp(&key(b))
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    paths
}

pub fn assert_close(actual: LonLat, expected: LonLat) {
    assert!(
        (actual.lon - expected.lon).abs() < 1e-9 && (actual.lat - expected.lat).abs() < 1e-9,
        "expected {expected:?}, got {actual:?}"
    );
}
