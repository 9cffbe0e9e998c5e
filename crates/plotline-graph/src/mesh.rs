//! Quad mesh output types.
//!
//! Both builders emit quads: four vertices wound in texture-space
//! order, each carrying position, UV and color. A quad triangulates
//! as (0,1,2) and (0,2,3) on the consumer side.

use glam::Vec2;
use plotline_core::Color;

/// UV corners in emission order: (0,0), (1,0), (1,1), (0,1).
///
/// Every quad uses this assignment regardless of its world-space
/// winding; area fills rely on it for gradient orientation.
pub const QUAD_UVS: [[f32; 2]; 4] = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];

/// A single mesh vertex.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct QuadVertex {
    /// Position in screen space
    pub position: [f32; 2],
    /// Texture coordinate
    pub uv: [f32; 2],
    /// RGBA color
    pub color: [f32; 4],
}

impl QuadVertex {
    /// Create a new vertex.
    pub fn new(position: Vec2, uv: [f32; 2], color: Color) -> Self {
        Self {
            position: [position.x, position.y],
            uv,
            color: color.to_array(),
        }
    }
}

/// A four-vertex screen-space rectangle, the atomic output unit of
/// both mesh builders.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Quad {
    /// Vertices in UV order (0,0), (1,0), (1,1), (0,1).
    pub vertices: [QuadVertex; 4],
}

impl Quad {
    /// Build a quad from four corner positions, assigning the fixed
    /// UV winding and a uniform color.
    pub fn from_corners(corners: [Vec2; 4], color: Color) -> Self {
        Self {
            vertices: [
                QuadVertex::new(corners[0], QUAD_UVS[0], color),
                QuadVertex::new(corners[1], QUAD_UVS[1], color),
                QuadVertex::new(corners[2], QUAD_UVS[2], color),
                QuadVertex::new(corners[3], QUAD_UVS[3], color),
            ],
        }
    }

    /// Corner positions as vectors, in UV order.
    pub fn positions(&self) -> [Vec2; 4] {
        self.vertices
            .map(|v| Vec2::new(v.position[0], v.position[1]))
    }
}

/// The seam between geometry configuration and mesh generation.
///
/// Both the stroke and the area builder implement this; the drawer
/// selects one by configuration rather than subtyping.
pub trait MeshBuilder {
    /// Convert an ordered screen-space polyline into quads.
    ///
    /// Sequences of fewer than two points yield an empty collection.
    fn build(&self, points: &[Vec2]) -> Vec<Quad>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_size() {
        assert_eq!(std::mem::size_of::<QuadVertex>(), 32);
    }

    #[test]
    fn test_quad_size() {
        assert_eq!(std::mem::size_of::<Quad>(), 128);
    }

    #[test]
    fn test_uv_winding() {
        let quad = Quad::from_corners(
            [
                Vec2::new(0.0, 0.0),
                Vec2::new(1.0, 0.0),
                Vec2::new(1.0, 1.0),
                Vec2::new(0.0, 1.0),
            ],
            Color::WHITE,
        );
        assert_eq!(quad.vertices[0].uv, [0.0, 0.0]);
        assert_eq!(quad.vertices[1].uv, [1.0, 0.0]);
        assert_eq!(quad.vertices[2].uv, [1.0, 1.0]);
        assert_eq!(quad.vertices[3].uv, [0.0, 1.0]);
    }
}
