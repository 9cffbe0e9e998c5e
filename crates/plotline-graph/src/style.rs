//! Stroke and area styling.

use crate::GraphError;
use plotline_core::Color;

/// Line cap style for the two open ends of a stroked polyline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineCap {
    /// Flat cap ending at the endpoint.
    #[default]
    Butt,
    /// Round cap extending beyond the endpoint.
    Round,
    /// Square cap extending beyond the endpoint by the stroke width.
    Square,
}

/// Line join style for interior vertices of a stroked polyline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineJoin {
    /// Miter join (sharp extended corner).
    #[default]
    Miter,
    /// Round join (arc-approximating patch).
    Round,
    /// Bevel join (flat cut corner).
    Bevel,
}

/// Fill orientation for area meshes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// Fill toward a horizontal baseline; the baseline replaces Y.
    #[default]
    Vertical,
    /// Fill toward a vertical baseline; the baseline replaces X.
    Horizontal,
}

/// Styling for a stroked line series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    /// Stroke half-band offset distance in screen units. Always
    /// positive; see [`StrokeStyle::new`].
    pub width: f32,
    /// Join style at interior vertices.
    pub join: LineJoin,
    /// Cap style at the two polyline ends.
    pub cap: LineCap,
    /// Stroke color.
    pub color: Color,
}

impl StrokeStyle {
    /// Create a stroke style with the default Miter/Butt treatment.
    ///
    /// Returns [`GraphError::InvalidStrokeWidth`] for non-positive or
    /// non-finite widths.
    pub fn new(width: f32, color: Color) -> Result<Self, GraphError> {
        if !width.is_finite() || width <= 0.0 {
            return Err(GraphError::InvalidStrokeWidth { width });
        }
        Ok(Self {
            width,
            join: LineJoin::Miter,
            cap: LineCap::Butt,
            color,
        })
    }

    /// Set the join style.
    pub fn with_join(mut self, join: LineJoin) -> Self {
        self.join = join;
        self
    }

    /// Set the cap style.
    pub fn with_cap(mut self, cap: LineCap) -> Self {
        self.cap = cap;
        self
    }
}

/// Styling for a filled area series.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AreaStyle {
    /// Which axis the fill band extends along.
    pub orientation: Orientation,
    /// Mirror the fill direction across the drawing rectangle. Also
    /// swaps which pair of corners carries UV-top vs UV-bottom.
    pub reverse: bool,
    /// Fill color.
    pub color: Color,
}

impl AreaStyle {
    /// Create an area style.
    pub fn new(orientation: Orientation, color: Color) -> Self {
        Self {
            orientation,
            reverse: false,
            color,
        }
    }

    /// Set the reverse flag.
    pub fn with_reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }
}
