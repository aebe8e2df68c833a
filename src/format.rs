//! Input format selection.
//!
//! The format of an input is decided by its file extension only; contents
//! are never sniffed. The set of supported formats is closed and listed in
//! [`Format::ALL`].

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use tracing::debug;

use crate::error::PantrackError;
use crate::ir::{io_csv, io_gpx, io_kml, io_kmz, Document};

/// A supported input format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Format {
    /// GPS Exchange Format (tracks, routes, waypoints).
    Gpx,
    /// Keyhole Markup Language (placemarks).
    Kml,
    /// Zip archive wrapping a KML document.
    Kmz,
    /// Comma-separated point list.
    Csv,
}

impl Format {
    /// Every supported format.
    pub const ALL: [Format; 4] = [Format::Gpx, Format::Kml, Format::Kmz, Format::Csv];

    /// The canonical (lower-case) file extension of this format.
    pub fn extension(self) -> &'static str {
        match self {
            Format::Gpx => "gpx",
            Format::Kml => "kml",
            Format::Kmz => "kmz",
            Format::Csv => "csv",
        }
    }

    /// Looks a format up by extension, case-insensitively.
    pub fn from_extension(ext: &str) -> Result<Self, PantrackError> {
        let ext = ext.to_lowercase();
        Format::ALL
            .into_iter()
            .find(|f| f.extension() == ext)
            .ok_or(PantrackError::UnsupportedFormat(ext))
    }

    /// Looks a format up by the extension of a file name.
    ///
    /// The extension is everything after the last `.`; a name without a dot
    /// is taken as an extension in its own right.
    pub fn from_file_name(file_name: &str) -> Result<Self, PantrackError> {
        let ext = file_name.rsplit('.').next().unwrap_or(file_name);
        Self::from_extension(ext)
    }

    /// Whether the format is read from raw bytes rather than text.
    pub fn is_binary(self) -> bool {
        matches!(self, Format::Kmz)
    }

    /// Parses `content` as this format.
    ///
    /// Text formats decode `content` as UTF-8, replacing invalid sequences;
    /// KMZ reads it as an archive. Reader errors are returned unchanged.
    pub fn parse(self, content: &[u8]) -> Result<Document, PantrackError> {
        debug!(format = %self, bytes = content.len(), "dispatching input");
        match self {
            Format::Gpx => io_gpx::from_gpx_slice(content),
            Format::Kml => io_kml::from_kml_slice(content),
            Format::Kmz => io_kmz::from_kmz_slice(content),
            Format::Csv => io_csv::from_csv_slice(content),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for Format {
    type Err = PantrackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_extension(s)
    }
}

/// Parses `content` using the format implied by `file_name`.
///
/// # Errors
/// [`PantrackError::UnsupportedFormat`] for an unknown extension, otherwise
/// whatever the selected reader returns.
pub fn parse_named(file_name: &str, content: &[u8]) -> Result<Document, PantrackError> {
    Format::from_file_name(file_name)?.parse(content)
}

/// Reads and parses a file, choosing the format from its name unless
/// `format` is given.
pub fn read_document(path: &Path, format: Option<Format>) -> Result<Document, PantrackError> {
    let format = match format {
        Some(format) => format,
        None => {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy())
                .unwrap_or_default();
            Format::from_file_name(&name)?
        }
    };

    let content = fs::read(path).map_err(PantrackError::Io)?;
    format.parse(&content)
}
