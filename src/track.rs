//! Track definition - the closed polygon that gets revealed
//!
//! A track is an ordered list of vertices. Edges connect each vertex to the
//! next one, and the last vertex back to the first.

use glam::Vec2;
use thiserror::Error;

/// Vertices of the built-in demonstration track, in drawing order
pub const TRACK_POINTS: [(f32, f32); 9] = [
    (242.0, 75.0),
    (364.0, 90.0),
    (458.0, 164.0),
    (450.0, 250.0),
    (335.0, 288.0),
    (241.0, 282.0),
    (104.0, 264.0),
    (93.0, 154.0),
    (141.0, 97.0),
];

/// Reasons a point sequence cannot be used as a track
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrackError {
    #[error("track must contain at least one point")]
    Empty,
    #[error("track point {index} has a non-finite coordinate")]
    NonFinite { index: usize },
}

/// Immutable, validated vertex list of a closed polygon
#[derive(Debug, Clone, PartialEq)]
pub struct TrackPoints {
    points: Vec<Vec2>,
}

impl TrackPoints {
    /// Validate and wrap a point sequence
    pub fn new(points: Vec<Vec2>) -> Result<Self, TrackError> {
        if points.is_empty() {
            return Err(TrackError::Empty);
        }
        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            return Err(TrackError::NonFinite { index });
        }
        Ok(Self { points })
    }

    /// Validate a list of `(x, y)` pairs
    pub fn from_pairs(pairs: &[(f32, f32)]) -> Result<Self, TrackError> {
        Self::new(pairs.iter().map(|&(x, y)| Vec2::new(x, y)).collect())
    }

    /// The nine-point demonstration track.
    ///
    /// Built without validation; `TRACK_POINTS` is known to be well formed.
    pub fn demo() -> Self {
        Self {
            points: TRACK_POINTS
                .iter()
                .map(|&(x, y)| Vec2::new(x, y))
                .collect(),
        }
    }

    /// Number of vertices (always at least one)
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Closed-loop edges: `(p[i], p[i + 1])` for each vertex, wrapping to `p[0]`
    pub fn edges(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| (self.points[i], self.points[(i + 1) % n]))
    }
}

impl Default for TrackPoints {
    fn default() -> Self {
        Self::demo()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_track_has_nine_points() {
        let track = TrackPoints::demo();
        assert_eq!(track.len(), 9);
        assert!(!track.is_empty());
        assert_eq!(track.points()[0], Vec2::new(242.0, 75.0));
        assert_eq!(track.points()[8], Vec2::new(141.0, 97.0));
    }

    #[test]
    fn test_demo_points_pass_validation() {
        let track = TrackPoints::from_pairs(&TRACK_POINTS).unwrap();
        assert_eq!(track, TrackPoints::demo());
    }

    #[test]
    fn test_empty_track_rejected() {
        assert_eq!(TrackPoints::new(Vec::new()), Err(TrackError::Empty));
    }

    #[test]
    fn test_non_finite_point_rejected() {
        let points = vec![Vec2::new(1.0, 2.0), Vec2::new(f32::NAN, 0.0)];
        assert_eq!(
            TrackPoints::new(points),
            Err(TrackError::NonFinite { index: 1 })
        );
    }

    #[test]
    fn test_edges_close_the_loop() {
        let track = TrackPoints::demo();
        let edges: Vec<_> = track.edges().collect();
        assert_eq!(edges.len(), 9);
        assert_eq!(edges[0], (track.points()[0], track.points()[1]));
        // Last edge returns to the start
        assert_eq!(edges[8], (track.points()[8], track.points()[0]));
    }

    #[test]
    fn test_single_point_has_degenerate_edge() {
        let p = Vec2::new(10.0, 10.0);
        let track = TrackPoints::new(vec![p]).unwrap();
        let edges: Vec<_> = track.edges().collect();
        assert_eq!(edges, vec![(p, p)]);
    }
}
