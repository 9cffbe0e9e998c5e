//! Plotline Graph - chart series to quad-mesh geometry
//!
//! This crate provides:
//! - Coordinate projection from data space into a drawing rectangle
//! - Visibility reduction (silhouette-preserving point thinning)
//! - Stroke tessellation (width, miter/round/bevel joins, butt/round/square caps)
//! - Area tessellation (filled band between a series and a baseline)
//! - Off-thread mesh rebuilds with a double-buffered, generation-tokened hand-off
//!
//! # Example
//!
//! ```
//! use plotline_core::{Color, Rect};
//! use plotline_graph::*;
//!
//! let pool = WorkerPool::new(2).unwrap();
//! let view = ViewConfig::new(100.0, 100.0, Rect::from_size(400.0, 300.0)).unwrap();
//! let style = StrokeStyle::new(2.0, Color::RED).unwrap();
//! let mut drawer = GraphDrawer::new(pool, view, SeriesGeometry::Stroke(style));
//!
//! drawer.set_points(vec![
//!     DataPoint::new(0.0, 0.0),
//!     DataPoint::new(50.0, 80.0),
//!     DataPoint::new(100.0, 20.0),
//! ]);
//!
//! // Once per render tick:
//! let quads = drawer.mesh_snapshot();
//! # let _ = quads;
//! ```

mod area;
mod buffer;
mod data;
mod drawer;
mod error;
mod filter;
mod mesh;
mod stroke;
mod style;
mod view;
mod worker;

pub use area::AreaMeshBuilder;
pub use buffer::MeshBuffer;
pub use data::DataPoint;
pub use drawer::{GraphDrawer, SeriesGeometry};
pub use error::GraphError;
pub use filter::reduce_points;
pub use mesh::{MeshBuilder, Quad, QuadVertex};
pub use stroke::StrokeMeshBuilder;
pub use style::{AreaStyle, LineCap, LineJoin, Orientation, StrokeStyle};
pub use view::ViewConfig;
pub use worker::{RebuildScheduler, WorkerPool};
