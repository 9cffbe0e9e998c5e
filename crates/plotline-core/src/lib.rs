//! Plotline Core
//!
//! This crate contains the shared foundation for the plotline chart
//! mesh engine: vector math, rectangle geometry, colors and logging.

pub mod color;
pub mod geometry;
pub mod logging;
pub mod math;

pub use color::Color;
pub use geometry::Rect;
