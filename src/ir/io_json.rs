//! JSON serialization for the canonical document.
//!
//! This is the hand-off format for whatever stores the document afterwards:
//! pretty-printed, points and paths keyed by identifier, coordinates as
//! `[lon, lat]` arrays and unreadable coordinates as `null`.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use super::model::Document;
use crate::error::PantrackError;

/// File name used when a document is stored into a folder.
pub const FOLDER_DOCUMENT_NAME: &str = "index.json";

/// Reads a document from a JSON file.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
pub fn read_document_json(path: &Path) -> Result<Document, PantrackError> {
    let file = File::open(path).map_err(PantrackError::Io)?;
    let reader = BufReader::new(file);

    serde_json::from_reader(reader).map_err(|source| PantrackError::JsonParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes a document to a JSON file, pretty-printed.
///
/// # Errors
/// Returns an error if the file cannot be written.
pub fn write_document_json(path: &Path, document: &Document) -> Result<(), PantrackError> {
    let file = File::create(path).map_err(PantrackError::Io)?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, document).map_err(|source| {
        PantrackError::JsonWrite {
            path: path.to_path_buf(),
            source,
        }
    })?;
    writer.flush().map_err(PantrackError::Io)
}

/// Stores a document as `<root>/<folder>/index.json`, creating the folder
/// and overwriting any previous document. Returns the written path.
pub fn write_document_folder(
    root: &Path,
    folder: &str,
    document: &Document,
) -> Result<PathBuf, PantrackError> {
    let dir = root.join(folder);
    fs::create_dir_all(&dir).map_err(PantrackError::Io)?;

    let path = dir.join(FOLDER_DOCUMENT_NAME);
    write_document_json(&path, document)?;
    info!(path = %path.display(), "stored document");
    Ok(path)
}

/// Reads a document from a JSON string.
pub fn from_json_str(json: &str) -> Result<Document, serde_json::Error> {
    serde_json::from_str(json)
}

/// Writes a document to a pretty-printed JSON string.
pub fn to_json_string(document: &Document) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(document)
}
