//! Canonical document representation for pantrack.
//!
//! Every supported input format (GPX, KML, KMZ, CSV) is read into the same
//! [`Document`]: labeled points and ordered paths keyed by generated
//! identifiers. The document is the only thing handed on to storage.
//!
//! # Design Principles
//!
//! 1. **One coordinate order**: coordinates are always [`LonLat`], whatever
//!    the source format's native order.
//!
//! 2. **Permissive construction**: unreadable GPX/KML coordinates are kept
//!    as NaN rather than rejected, so validation can report them.
//!
//! 3. **Fresh per parse**: identifiers are generated on every parse call and
//!    are not part of a document's meaning.
//!
//! # Example
//!
//! ```
//! use pantrack::ir::{Document, LonLat, Point, Polyline};
//!
//! let mut doc = Document::new();
//! doc.add_point(Point::new(LonLat::new(30.31, 59.93), "Cafe"));
//! doc.add_named_path(
//!     Polyline::new(vec![LonLat::new(1.0, 2.0), LonLat::new(3.0, 4.0)]),
//!     Some("Walk"),
//! );
//! assert_eq!(doc.paths.len(), 1);
//! assert_eq!(doc.points.len(), 2);
//! ```

mod coord;
pub mod fields;
mod geometry;
mod ids;
pub mod io_csv;
pub mod io_gpx;
pub mod io_json;
pub mod io_kml;
pub mod io_kmz;
mod model;
mod xml;

// Re-export core types for convenient access
pub use coord::LonLat;
pub use geometry::middle_point;
pub use ids::{FeatureId, FEATURE_ID_LEN};
pub use model::{Document, Point, Polyline};
