//! Stroke tessellation.
//!
//! Converts a screen-space polyline into quads depicting a stroke of
//! constant width: one body quad per segment, a join patch at each
//! interior vertex for Round and Bevel joins, and cap patches
//! at the two ends.
//!
//! Body quad edges are offset along per-vertex miter normals scaled by
//! `width / cos(theta)`, where `theta` is the angle between the
//! segment's own normal and the miter normal; this makes adjacent
//! segments meet without gaps. The scale is clamped near 90° so
//! antiparallel segments produce a flat end instead of a spike.

use crate::mesh::{MeshBuilder, Quad};
use crate::style::{LineCap, LineJoin, StrokeStyle};
use glam::Vec2;
use std::f32::consts::FRAC_PI_4;

/// Below this cosine magnitude the miter scale is clamped to 1.
const MITER_EPSILON: f32 = 1e-4;

/// Builds stroke meshes for a fixed style.
///
/// A pure, stateless batch transform: all branching is on the style
/// enums and local per-vertex geometry.
#[derive(Debug, Clone, Copy)]
pub struct StrokeMeshBuilder {
    style: StrokeStyle,
}

impl StrokeMeshBuilder {
    /// Create a builder for the given style.
    pub fn new(style: StrokeStyle) -> Self {
        Self { style }
    }

    /// The style this builder emits for.
    pub fn style(&self) -> &StrokeStyle {
        &self.style
    }

    fn body_quad(&self, points: &[Vec2], i: usize) -> Quad {
        let style = &self.style;
        let p1 = points[i];
        let p2 = points[i + 1];
        let dir = (p2 - p1).normalize_or_zero();
        let seg_normal = dir.perp();

        let n1 = vertex_normal(points, i);
        let n2 = vertex_normal(points, i + 1);
        let w1 = style.width * miter_scale(seg_normal, n1);
        let w2 = style.width * miter_scale(seg_normal, n2);

        // For Round/Bevel the convex-side corner at an interior vertex
        // stops at the segment's own normal; the join patch fills the
        // remaining wedge. Miter extends both corners to the bisector.
        let corner = |p: Vec2, idx: usize, n: Vec2, w: f32, side: f32| -> Vec2 {
            let interior = idx > 0 && idx < points.len() - 1;
            if style.join != LineJoin::Miter && interior && convex_side(points, idx) == side {
                p + seg_normal * style.width * side
            } else {
                p + n * w * side
            }
        };

        Quad::from_corners(
            [
                corner(p1, i, n1, w1, -1.0),
                corner(p2, i + 1, n2, w2, -1.0),
                corner(p2, i + 1, n2, w2, 1.0),
                corner(p1, i, n1, w1, 1.0),
            ],
            style.color,
        )
    }

    /// Join patch at interior vertex `v`, or `None` for Miter joins
    /// (the mitered body edges already meet).
    fn join_quad(&self, points: &[Vec2], v: usize) -> Option<Quad> {
        let style = &self.style;
        let p = points[v];
        let dir_in = (p - points[v - 1]).normalize_or_zero();
        let dir_out = (points[v + 1] - p).normalize_or_zero();
        let n_in = dir_in.perp();
        let n_out = dir_out.perp();
        let miter = (n_in + n_out).normalize_or_zero();
        let s = convex_side(points, v);

        let w = style.width;
        let edge_in = p + n_in * w * s;
        let edge_out = p + n_out * w * s;

        match style.join {
            LineJoin::Miter => None,
            LineJoin::Round => {
                // Fan through the bisector rim: a one-quad arc
                // approximation with its inner corner collapsed onto
                // the vertex.
                let rim = p + miter * w * s;
                Some(Quad::from_corners([p, edge_in, rim, edge_out], style.color))
            }
            LineJoin::Bevel => {
                // Straight cut between the two segment edges.
                Some(Quad::from_corners([p, edge_in, edge_out, p], style.color))
            }
        }
    }

    /// Cap patches for one end. `p` is the endpoint, `outward` points
    /// away from the polyline, `normal` is the end segment's normal.
    fn cap_quads(&self, p: Vec2, outward: Vec2, normal: Vec2, out: &mut Vec<Quad>) {
        let style = &self.style;
        let w = style.width;
        match style.cap {
            LineCap::Butt => {}
            LineCap::Round => {
                // Two quads approximating a semicircle, with corner
                // points rotated 45° off the outward direction.
                let up = Vec2::from_angle(-FRAC_PI_4).rotate(outward);
                let down = Vec2::from_angle(FRAC_PI_4).rotate(outward);
                out.push(Quad::from_corners(
                    [p + down * w, p - normal * w, p, p + outward * w],
                    style.color,
                ));
                out.push(Quad::from_corners(
                    [p + outward * w, p, p + normal * w, p + up * w],
                    style.color,
                ));
            }
            LineCap::Square => {
                // One quad extending the stroke by `width` beyond the
                // endpoint.
                out.push(Quad::from_corners(
                    [
                        p + (outward - normal) * w,
                        p - normal * w,
                        p + normal * w,
                        p + (outward + normal) * w,
                    ],
                    style.color,
                ));
            }
        }
    }
}

impl MeshBuilder for StrokeMeshBuilder {
    fn build(&self, points: &[Vec2]) -> Vec<Quad> {
        if points.len() < 2 {
            return Vec::new();
        }

        let mut quads = Vec::with_capacity(points.len() * 2);

        let first_dir = (points[1] - points[0]).normalize_or_zero();
        self.cap_quads(points[0], -first_dir, first_dir.perp(), &mut quads);

        for i in 0..points.len() - 1 {
            quads.push(self.body_quad(points, i));
            let vertex = i + 1;
            if vertex < points.len() - 1
                && let Some(join) = self.join_quad(points, vertex)
            {
                quads.push(join);
            }
        }

        let last = points.len() - 1;
        let last_dir = (points[last] - points[last - 1]).normalize_or_zero();
        self.cap_quads(points[last], last_dir, last_dir.perp(), &mut quads);

        tracing::trace!(
            points = points.len(),
            quads = quads.len(),
            "built stroke mesh"
        );
        quads
    }
}

/// Miter normal at a vertex: the normalized sum of the unit directions
/// of the adjacent segments, rotated 90°. Falls back to the single
/// segment's normal at the polyline ends.
fn vertex_normal(points: &[Vec2], v: usize) -> Vec2 {
    let mut dir = Vec2::ZERO;
    if v > 0 {
        dir += (points[v] - points[v - 1]).normalize_or_zero();
    }
    if v + 1 < points.len() {
        dir += (points[v + 1] - points[v]).normalize_or_zero();
    }
    dir.normalize_or_zero().perp()
}

/// `1 / cos(theta)` between a segment normal and the miter normal,
/// clamped to 1 when the angle approaches 90° (antiparallel segments)
/// so the offset cannot blow up.
fn miter_scale(seg_normal: Vec2, miter_normal: Vec2) -> f32 {
    let cos = seg_normal.dot(miter_normal);
    if cos.abs() < MITER_EPSILON {
        tracing::trace!("clamping degenerate miter");
        1.0
    } else {
        1.0 / cos
    }
}

/// Which side of the stroke is convex ("outer") at interior vertex
/// `v`: `1.0` for the `+normal` side, `-1.0` for the `-normal` side.
///
/// Decided by comparing the magnitudes of the two bisector-offset
/// candidates; the larger one identifies the side that needs a patch.
fn convex_side(points: &[Vec2], v: usize) -> f32 {
    let dir_in = (points[v] - points[v - 1]).normalize_or_zero();
    let dir_out = (points[v + 1] - points[v]).normalize_or_zero();
    let miter = (dir_in.perp() + dir_out.perp()).normalize_or_zero();

    let outward = dir_in - miter;
    let inward = dir_in + miter;
    if outward.length_squared() >= inward.length_squared() {
        -1.0
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plotline_core::Color;

    fn stroke(width: f32) -> StrokeStyle {
        StrokeStyle::new(width, Color::RED).unwrap()
    }

    fn right_angle() -> Vec<Vec2> {
        vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(100.0, 0.0),
            Vec2::new(100.0, 100.0),
        ]
    }

    #[test]
    fn test_empty_and_singleton_input() {
        let builder = StrokeMeshBuilder::new(stroke(1.0));
        assert!(builder.build(&[]).is_empty());
        assert!(builder.build(&[Vec2::new(5.0, 5.0)]).is_empty());
    }

    #[test]
    fn test_butt_miter_quad_count() {
        let builder = StrokeMeshBuilder::new(stroke(1.0));
        for n in 2..6 {
            let points: Vec<Vec2> = (0..n).map(|i| Vec2::new(i as f32 * 10.0, i as f32)).collect();
            assert_eq!(builder.build(&points).len(), n - 1);
        }
    }

    #[test]
    fn test_right_angle_butt_miter() {
        let builder = StrokeMeshBuilder::new(stroke(1.0));
        let quads = builder.build(&right_angle());
        // Two body quads, no join patch, no caps.
        assert_eq!(quads.len(), 2);
    }

    #[test]
    fn test_right_angle_round_round() {
        let style = stroke(1.0)
            .with_join(LineJoin::Round)
            .with_cap(LineCap::Round);
        let quads = StrokeMeshBuilder::new(style).build(&right_angle());
        // 2 body + 2 start cap + 1 join + 2 end cap.
        assert_eq!(quads.len(), 7);
    }

    #[test]
    fn test_bevel_join_count() {
        let style = stroke(2.0).with_join(LineJoin::Bevel);
        let quads = StrokeMeshBuilder::new(style).build(&right_angle());
        // 2 body + 1 join.
        assert_eq!(quads.len(), 3);
    }

    #[test]
    fn test_square_cap_extends_by_width() {
        let style = stroke(3.0).with_cap(LineCap::Square);
        let points = vec![Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0)];
        let quads = StrokeMeshBuilder::new(style).build(&points);
        assert_eq!(quads.len(), 3);

        let min_x = quads
            .iter()
            .flat_map(|q| q.positions())
            .map(|p| p.x)
            .fold(f32::INFINITY, f32::min);
        let max_x = quads
            .iter()
            .flat_map(|q| q.positions())
            .map(|p| p.x)
            .fold(f32::NEG_INFINITY, f32::max);
        assert!((min_x + 3.0).abs() < 1e-5);
        assert!((max_x - 13.0).abs() < 1e-5);
    }

    #[test]
    fn test_caps_never_panic_on_single_segment() {
        let points = vec![Vec2::new(1.0, 2.0), Vec2::new(4.0, 6.0)];
        for cap in [LineCap::Butt, LineCap::Round, LineCap::Square] {
            for join in [LineJoin::Miter, LineJoin::Round, LineJoin::Bevel] {
                let style = stroke(1.5).with_cap(cap).with_join(join);
                let quads = StrokeMeshBuilder::new(style).build(&points);
                assert!(!quads.is_empty());
                for quad in &quads {
                    for pos in quad.positions() {
                        assert!(pos.is_finite());
                    }
                }
            }
        }
    }

    #[test]
    fn test_miter_widens_the_corner() {
        let builder = StrokeMeshBuilder::new(stroke(1.0));
        let quads = builder.build(&right_angle());
        // At the right-angle vertex the mitered edge is offset by
        // width / cos(45°) = sqrt(2) along the bisector.
        let expected = Vec2::new(100.0, 0.0) + Vec2::new(-1.0, 1.0).normalize() * 2f32.sqrt();
        let found = quads
            .iter()
            .flat_map(|q| q.positions())
            .any(|p| (p - expected).length() < 1e-4);
        assert!(found);
    }

    #[test]
    fn test_antiparallel_segments_stay_finite() {
        // Doubling straight back makes the miter denominator vanish;
        // the clamp must keep the mesh finite.
        let points = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(50.0, 0.0),
            Vec2::new(0.0, 0.0),
        ];
        for join in [LineJoin::Miter, LineJoin::Round, LineJoin::Bevel] {
            let style = stroke(2.0).with_join(join);
            let quads = StrokeMeshBuilder::new(style).build(&points);
            for quad in &quads {
                for pos in quad.positions() {
                    assert!(pos.is_finite());
                }
            }
        }
    }

    #[test]
    fn test_duplicate_points_stay_finite() {
        let points = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 10.0),
        ];
        let style = stroke(1.0).with_cap(LineCap::Round);
        let quads = StrokeMeshBuilder::new(style).build(&points);
        for quad in &quads {
            for pos in quad.positions() {
                assert!(pos.is_finite());
            }
        }
    }
}
