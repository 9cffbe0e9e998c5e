//! Series data types.

use glam::Vec2;

/// A single data point in data space.
///
/// The sequence a drawer holds is ordered by insertion; duplicate
/// points and non-monotonic x values are permitted.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DataPoint {
    pub x: f32,
    pub y: f32,
}

impl DataPoint {
    /// Create a new data point.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// The point as a raw vector.
    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

impl From<Vec2> for DataPoint {
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<DataPoint> for Vec2 {
    fn from(p: DataPoint) -> Self {
        Vec2::new(p.x, p.y)
    }
}

impl From<(f32, f32)> for DataPoint {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}
