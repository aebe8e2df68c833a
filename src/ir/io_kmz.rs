//! KMZ reader: a zip archive wrapping a KML document.
//!
//! The first archive entry whose name ends in `.kml` (case-insensitive, in
//! archive listing order) is extracted and handed to the KML reader as is.
//! Other entries (icons, overlays) are ignored.

use std::fs;
use std::io::{Cursor, Read, Seek};
use std::path::Path;

use tracing::debug;

use super::io_kml::from_kml_str;
use super::model::Document;
use crate::error::PantrackError;

/// Entry-name suffix of the KML document inside a KMZ archive.
pub const KML_ENTRY_SUFFIX: &str = ".kml";

/// Reads a KMZ file into a canonical document.
pub fn read_kmz(path: &Path) -> Result<Document, PantrackError> {
    let bytes = fs::read(path).map_err(PantrackError::Io)?;
    from_kmz_slice(&bytes)
}

/// Parses a KMZ archive held in memory.
///
/// # Errors
/// - [`PantrackError::ArchiveRead`] if the buffer is not a readable zip archive
/// - [`PantrackError::MissingEntry`] if the archive holds no `.kml` entry
/// - any error of [`from_kml_str`] for the extracted document
pub fn from_kmz_slice(bytes: &[u8]) -> Result<Document, PantrackError> {
    let kml = extract_entry_text(Cursor::new(bytes), KML_ENTRY_SUFFIX)?;
    from_kml_str(&kml)
}

/// Extracts the text of the first file entry whose name ends with `suffix`
/// (ASCII case-insensitive).
///
/// The entry is decoded as UTF-8 with invalid sequences replaced.
pub fn extract_entry_text<R: Read + Seek>(reader: R, suffix: &str) -> Result<String, PantrackError> {
    let mut archive =
        zip::ZipArchive::new(reader).map_err(|source| PantrackError::ArchiveRead { source })?;

    let suffix_lower = suffix.to_ascii_lowercase();
    for index in 0..archive.len() {
        let mut entry = archive
            .by_index(index)
            .map_err(|source| PantrackError::ArchiveRead { source })?;

        if entry.is_dir() || !entry.name().to_ascii_lowercase().ends_with(&suffix_lower) {
            continue;
        }

        debug!(entry = entry.name(), index, "extracting archive entry");
        let mut raw = Vec::new();
        entry.read_to_end(&mut raw).map_err(PantrackError::Io)?;
        return Ok(String::from_utf8_lossy(&raw).into_owned());
    }

    Err(PantrackError::MissingEntry {
        suffix: suffix.to_string(),
    })
}
