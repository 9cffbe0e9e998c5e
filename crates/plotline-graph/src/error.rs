//! Error types for graph configuration.

use std::fmt;

/// Errors that can occur when configuring a graph.
///
/// Geometry degeneracies (zero-length segments, near-180° joins) are
/// not errors: the builders clamp them to stable fallback shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum GraphError {
    /// An axis maximum was zero or not finite, which would make the
    /// data-to-screen projection divide by zero.
    InvalidAxisRange {
        /// Requested X axis maximum.
        max_x: f32,
        /// Requested Y axis maximum.
        max_y: f32,
    },

    /// A stroke width was non-positive or not finite.
    InvalidStrokeWidth {
        /// The rejected width.
        width: f32,
    },

    /// The worker pool could not be constructed.
    WorkerPool {
        /// Description of the build failure.
        message: String,
    },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::InvalidAxisRange { max_x, max_y } => {
                write!(f, "Invalid axis range: max_x={}, max_y={}", max_x, max_y)
            }
            GraphError::InvalidStrokeWidth { width } => {
                write!(f, "Invalid stroke width: {}", width)
            }
            GraphError::WorkerPool { message } => {
                write!(f, "Worker pool construction failed: {}", message)
            }
        }
    }
}

impl std::error::Error for GraphError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = GraphError::InvalidAxisRange {
            max_x: 0.0,
            max_y: 100.0,
        };
        assert!(err.to_string().contains("max_x=0"));
    }
}
