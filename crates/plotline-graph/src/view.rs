//! Data-space to screen-space projection.

use crate::{AreaStyle, DataPoint, GraphError};
use glam::Vec2;
use plotline_core::Rect;

/// View configuration: axis maxima, scroll start, drawing rectangle
/// and pivot.
///
/// A data point `p` maps to
/// `((p.x - start.x) * rect.width / max_x,
///   (p.y - start.y) * rect.height / max_y) - pivot_offset`
/// where `pivot_offset = rect.size * pivot`.
///
/// The visible window in data space is `[start, start + (max_x, max_y)]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewConfig {
    max_x: f32,
    max_y: f32,
    /// Data-space position mapped to the rectangle's origin.
    pub start: Vec2,
    /// The drawing rectangle.
    pub rect: Rect,
    /// Normalized pivot inside the rectangle, `(0,0)`..`(1,1)`.
    pub pivot: Vec2,
}

impl ViewConfig {
    /// Create a view over `[0, max_x] x [0, max_y]` with a zero pivot.
    ///
    /// Returns [`GraphError::InvalidAxisRange`] when either maximum is
    /// zero or not finite.
    pub fn new(max_x: f32, max_y: f32, rect: Rect) -> Result<Self, GraphError> {
        validate_axis_range(max_x, max_y)?;
        Ok(Self {
            max_x,
            max_y,
            start: Vec2::ZERO,
            rect,
            pivot: Vec2::ZERO,
        })
    }

    /// Set the pivot.
    pub fn with_pivot(mut self, pivot: Vec2) -> Self {
        self.pivot = pivot;
        self
    }

    /// Set the start position.
    pub fn with_start(mut self, start: Vec2) -> Self {
        self.start = start;
        self
    }

    /// X axis maximum.
    pub fn max_x(&self) -> f32 {
        self.max_x
    }

    /// Y axis maximum.
    pub fn max_y(&self) -> f32 {
        self.max_y
    }

    /// Replace the axis maxima.
    pub fn set_axis_range(&mut self, max_x: f32, max_y: f32) -> Result<(), GraphError> {
        validate_axis_range(max_x, max_y)?;
        self.max_x = max_x;
        self.max_y = max_y;
        Ok(())
    }

    /// The pivot offset subtracted from every projected point.
    pub fn pivot_offset(&self) -> Vec2 {
        self.rect.size() * self.pivot
    }

    /// Project a data point into screen space.
    pub fn project(&self, point: DataPoint) -> Vec2 {
        Vec2::new(
            (point.x - self.start.x) * self.rect.width / self.max_x,
            (point.y - self.start.y) * self.rect.height / self.max_y,
        ) - self.pivot_offset()
    }

    /// Whether a data point lies inside the visible window
    /// (inclusive bounds).
    pub fn is_visible(&self, point: DataPoint) -> bool {
        point.x >= self.start.x
            && point.y >= self.start.y
            && point.x <= self.start.x + self.max_x
            && point.y <= self.start.y + self.max_y
    }

    /// The screen-space baseline an area fill extends toward.
    ///
    /// Mirrored across the rectangle when the style is reversed. The
    /// builder consumes only one component, selected by orientation.
    pub fn area_baseline(&self, style: &AreaStyle) -> Vec2 {
        if style.reverse {
            self.rect.size() - self.pivot_offset()
        } else {
            -self.pivot_offset()
        }
    }
}

fn validate_axis_range(max_x: f32, max_y: f32) -> Result<(), GraphError> {
    if !max_x.is_finite() || !max_y.is_finite() || max_x == 0.0 || max_y == 0.0 {
        return Err(GraphError::InvalidAxisRange { max_x, max_y });
    }
    Ok(())
}
