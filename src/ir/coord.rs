//! Longitude/latitude coordinate pairs.

use serde::{Deserialize, Serialize};

/// A coordinate pair in `(longitude, latitude)` order.
///
/// Every reader produces coordinates in this order regardless of how the
/// source format stores them, and nothing downstream ever swaps them.
/// Values pass through as given: no reprojection and no range checks. A
/// value that failed to parse is carried as NaN.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LonLat {
    pub lon: f64,
    pub lat: f64,
}

impl LonLat {
    /// Creates a new coordinate from longitude and latitude.
    #[inline]
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Returns true if both components are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.lon.is_finite() && self.lat.is_finite()
    }

    /// Per-axis arithmetic mean of two coordinates.
    #[inline]
    pub fn mean(a: LonLat, b: LonLat) -> Self {
        Self::new((a.lon + b.lon) / 2.0, (a.lat + b.lat) / 2.0)
    }
}

impl From<(f64, f64)> for LonLat {
    fn from((lon, lat): (f64, f64)) -> Self {
        Self::new(lon, lat)
    }
}

// Serialized as a two-element array `[lon, lat]`. serde_json writes NaN as
// `null`, so `null` reads back as NaN.
impl Serialize for LonLat {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        [self.lon, self.lat].serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for LonLat {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let [lon, lat] = <[Option<f64>; 2]>::deserialize(deserializer)?;
        Ok(LonLat::new(
            lon.unwrap_or(f64::NAN),
            lat.unwrap_or(f64::NAN),
        ))
    }
}
