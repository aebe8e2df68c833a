//! Representative coordinates for labeling paths.

use super::coord::LonLat;

/// Picks the coordinate used to anchor a path's label.
///
/// - one vertex: that vertex
/// - two vertices: their per-axis mean (no great-circle correction)
/// - three or more: the existing vertex at index `(n - 1) / 2`
///
/// Longer paths are anchored on a real vertex rather than an average.
/// Returns `None` for an empty slice.
pub fn middle_point(coords: &[LonLat]) -> Option<LonLat> {
    match coords {
        [] => None,
        [only] => Some(*only),
        [a, b] => Some(LonLat::mean(*a, *b)),
        _ => Some(coords[(coords.len() - 1) / 2]),
    }
}
