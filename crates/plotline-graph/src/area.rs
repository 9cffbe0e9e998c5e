//! Area tessellation.
//!
//! Fills the band between a polyline and a baseline with one quad per
//! segment: the two segment points plus their baseline projections.

use crate::mesh::{MeshBuilder, Quad};
use crate::style::{AreaStyle, Orientation};
use glam::Vec2;

/// Builds area meshes for a fixed style and baseline.
///
/// The orientation selects which coordinate the baseline replaces:
/// Vertical projects onto a horizontal baseline (y is replaced),
/// Horizontal onto a vertical one (x is replaced). The reverse flag
/// swaps which pair of corners carries UV-top vs UV-bottom, mirroring
/// the winding for texture/gradient orientation.
#[derive(Debug, Clone, Copy)]
pub struct AreaMeshBuilder {
    style: AreaStyle,
    baseline: Vec2,
}

impl AreaMeshBuilder {
    /// Create a builder for the given style and baseline position.
    ///
    /// The baseline is usually obtained from
    /// [`ViewConfig::area_baseline`](crate::ViewConfig::area_baseline).
    pub fn new(style: AreaStyle, baseline: Vec2) -> Self {
        Self { style, baseline }
    }

    /// The style this builder emits for.
    pub fn style(&self) -> &AreaStyle {
        &self.style
    }

    /// Project a point onto the baseline.
    fn drop_to_baseline(&self, p: Vec2) -> Vec2 {
        match self.style.orientation {
            Orientation::Vertical => Vec2::new(p.x, self.baseline.y),
            Orientation::Horizontal => Vec2::new(self.baseline.x, p.y),
        }
    }
}

impl MeshBuilder for AreaMeshBuilder {
    fn build(&self, points: &[Vec2]) -> Vec<Quad> {
        if points.len() < 2 {
            return Vec::new();
        }

        let color = self.style.color;
        let mut quads = Vec::with_capacity(points.len() - 1);
        for pair in points.windows(2) {
            let (p1, p2) = (pair[0], pair[1]);
            let (b1, b2) = (self.drop_to_baseline(p1), self.drop_to_baseline(p2));

            let corners = match (self.style.orientation, self.style.reverse) {
                (Orientation::Vertical, false) => [b1, b2, p2, p1],
                (Orientation::Vertical, true) => [p1, p2, b2, b1],
                (Orientation::Horizontal, false) => [b1, p1, p2, b2],
                (Orientation::Horizontal, true) => [p1, b1, b2, p2],
            };
            quads.push(Quad::from_corners(corners, color));
        }

        tracing::trace!(
            points = points.len(),
            quads = quads.len(),
            "built area mesh"
        );
        quads
    }
}
