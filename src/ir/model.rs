//! Core document model for the pantrack canonical representation.
//!
//! Every format reader produces a [`Document`]; the JSON writer and the
//! validator consume one. A document is built fresh by a single parse call
//! and handed to the caller; nothing in the crate mutates it afterwards.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::coord::LonLat;
use super::geometry::middle_point;
use super::ids::FeatureId;

/// A canonical document of labeled points and paths.
///
/// Points and paths are keyed by independently generated identifiers. The
/// two maps do not share a key space.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Labeled points keyed by identifier.
    #[serde(default)]
    pub points: BTreeMap<FeatureId, Point>,

    /// Paths keyed by identifier.
    #[serde(default)]
    pub paths: BTreeMap<FeatureId, Polyline>,
}

impl Document {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a point under a freshly generated identifier.
    pub fn add_point(&mut self, point: Point) -> FeatureId {
        let id = FeatureId::generate();
        self.points.insert(id.clone(), point);
        id
    }

    /// Inserts a path under a freshly generated identifier.
    pub fn add_path(&mut self, path: Polyline) -> FeatureId {
        let id = FeatureId::generate();
        self.paths.insert(id.clone(), path);
        id
    }

    /// Inserts a path and, when `name` is non-empty, a companion point at the
    /// path's representative midpoint labeled with that name.
    ///
    /// Empty paths are ignored entirely. The companion point's identifier is
    /// unrelated to the path's.
    pub fn add_named_path(&mut self, path: Polyline, name: Option<&str>) {
        let Some(anchor) = middle_point(path.coords()) else {
            return;
        };

        self.add_path(path);
        if let Some(name) = name.filter(|n| !n.is_empty()) {
            self.add_point(Point::new(anchor, name));
        }
    }

    /// Returns true if the document has neither points nor paths.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty() && self.paths.is_empty()
    }

    /// Point values in key order.
    pub fn point_values(&self) -> impl Iterator<Item = &Point> {
        self.points.values()
    }

    /// Path values in key order.
    pub fn path_values(&self) -> impl Iterator<Item = &Polyline> {
        self.paths.values()
    }
}

/// A single labeled coordinate.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Position as `[lon, lat]`.
    pub coords: LonLat,

    /// Human-readable label; see [`join_desc`](super::fields::join_desc).
    pub desc: String,
}

impl Point {
    /// Creates a new point.
    pub fn new(coords: LonLat, desc: impl Into<String>) -> Self {
        Self {
            coords,
            desc: desc.into(),
        }
    }
}

/// An ordered sequence of coordinates: a track or a route.
///
/// Order is the traversal order read from the source and is never changed.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Polyline(Vec<LonLat>);

impl Polyline {
    /// Creates a path from an ordered list of coordinates.
    pub fn new(coords: Vec<LonLat>) -> Self {
        Self(coords)
    }

    /// Returns the vertices in traversal order.
    #[inline]
    pub fn coords(&self) -> &[LonLat] {
        &self.0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<LonLat> for Polyline {
    fn from_iter<I: IntoIterator<Item = LonLat>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
