//! Visibility reduction.
//!
//! Thins a point sequence down to the subset that affects the visible
//! silhouette: vertices where the vertical direction changes sign, and
//! any point adjacent to the visible window. Collinear runs and fully
//! offscreen interior points are dropped.

use crate::{DataPoint, ViewConfig};

/// Reduce an ordered point sequence for the given view.
///
/// The first and last point always survive; interior point `i` is kept
/// when the vertical direction changes sign across it, or when any of
/// `prev`, `now`, `next` lies inside the visible window (inclusive).
/// Sequences shorter than two points pass through unchanged. The
/// output preserves order and never exceeds the input length.
pub fn reduce_points(points: &[DataPoint], view: &ViewConfig) -> Vec<DataPoint> {
    if points.len() < 2 {
        return points.to_vec();
    }

    let mut reduced = Vec::with_capacity(points.len());
    reduced.push(points[0]);
    for i in 1..points.len() - 1 {
        let prev = points[i - 1];
        let now = points[i];
        let next = points[i + 1];

        let turns = (next.y - now.y) * (now.y - prev.y) <= 0.0;
        if turns || view.is_visible(prev) || view.is_visible(now) || view.is_visible(next) {
            reduced.push(now);
        }
    }
    reduced.push(points[points.len() - 1]);
    reduced
}
