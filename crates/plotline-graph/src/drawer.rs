//! The graph drawer: owning component and external interface.
//!
//! A [`GraphDrawer`] owns a point series, a view configuration and a
//! geometry configuration. Every mutation schedules exactly one
//! off-thread rebuild that re-filters, re-projects and re-tessellates
//! the series, then publishes the mesh for the render tick to
//! snapshot.

use crate::mesh::MeshBuilder;
use crate::{
    AreaMeshBuilder, AreaStyle, DataPoint, GraphError, MeshBuffer, Quad, RebuildScheduler,
    StrokeMeshBuilder, StrokeStyle, ViewConfig, WorkerPool, reduce_points,
};
use glam::Vec2;
use plotline_core::Rect;
use std::sync::{Arc, Mutex};

/// Which mesh a series produces.
///
/// A closed set of variants dispatched through the [`MeshBuilder`]
/// seam; the drawer selects the builder by configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SeriesGeometry {
    /// Stroked line chart.
    Stroke(StrokeStyle),
    /// Filled area chart.
    Area(AreaStyle),
}

impl SeriesGeometry {
    fn build_mesh(&self, points: &[Vec2], view: &ViewConfig) -> Vec<Quad> {
        match self {
            SeriesGeometry::Stroke(style) => StrokeMeshBuilder::new(*style).build(points),
            SeriesGeometry::Area(style) => {
                AreaMeshBuilder::new(*style, view.area_baseline(style)).build(points)
            }
        }
    }
}

/// Renders one numeric series as chart mesh geometry.
pub struct GraphDrawer {
    points: Arc<Mutex<Vec<DataPoint>>>,
    view: ViewConfig,
    geometry: SeriesGeometry,
    scheduler: RebuildScheduler,
}

impl GraphDrawer {
    /// Create a drawer rebuilding on the given pool.
    pub fn new(pool: WorkerPool, view: ViewConfig, geometry: SeriesGeometry) -> Self {
        Self {
            points: Arc::new(Mutex::new(Vec::new())),
            view,
            geometry,
            scheduler: RebuildScheduler::new(pool, Arc::new(MeshBuffer::new())),
        }
    }

    /// Replace the full series.
    pub fn set_points(&mut self, points: Vec<DataPoint>) {
        *self.lock_points() = points;
        self.schedule_rebuild();
    }

    /// Append one point.
    pub fn add_point(&mut self, point: DataPoint) {
        self.lock_points().push(point);
        self.schedule_rebuild();
    }

    /// Snapshot copy of the current series.
    pub fn points(&self) -> Vec<DataPoint> {
        self.lock_points().clone()
    }

    /// Current view configuration.
    pub fn view(&self) -> &ViewConfig {
        &self.view
    }

    /// Current geometry configuration.
    pub fn geometry(&self) -> &SeriesGeometry {
        &self.geometry
    }

    /// Replace the axis maxima.
    pub fn set_axis_range(&mut self, max_x: f32, max_y: f32) -> Result<(), GraphError> {
        self.view.set_axis_range(max_x, max_y)?;
        self.schedule_rebuild();
        Ok(())
    }

    /// Move the visible window's data-space origin.
    pub fn set_start_position(&mut self, start: Vec2) {
        self.view.start = start;
        self.schedule_rebuild();
    }

    /// Switch the series to a stroked line with the given style.
    pub fn set_stroke_style(&mut self, style: StrokeStyle) {
        self.geometry = SeriesGeometry::Stroke(style);
        self.schedule_rebuild();
    }

    /// Switch the series to a filled area with the given style.
    pub fn set_area_style(&mut self, style: AreaStyle) {
        self.geometry = SeriesGeometry::Area(style);
        self.schedule_rebuild();
    }

    /// Notify the drawer that its drawing rectangle changed.
    ///
    /// Remaps coordinates and rebuilds; a no-op when the rect is
    /// unchanged.
    pub fn rect_resized(&mut self, rect: Rect) {
        if self.view.rect == rect {
            return;
        }
        self.view.rect = rect;
        self.schedule_rebuild();
    }

    /// Re-filter and rebuild without any data change (wholesale
    /// revalidation after external edits to the configuration).
    pub fn invalidate(&mut self) {
        self.schedule_rebuild();
    }

    /// The last fully-built mesh, for the render tick.
    ///
    /// Safe to call concurrently with an in-flight rebuild; never
    /// returns a partially rebuilt collection.
    pub fn mesh_snapshot(&self) -> Arc<[Quad]> {
        self.scheduler.buffer().snapshot()
    }

    fn lock_points(&self) -> std::sync::MutexGuard<'_, Vec<DataPoint>> {
        self.points.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Enqueue one rebuild reading the series at job run time.
    fn schedule_rebuild(&self) {
        let points = Arc::clone(&self.points);
        let view = self.view;
        let geometry = self.geometry;
        self.scheduler.schedule(move || {
            let raw = points
                .lock()
                .unwrap_or_else(|e| e.into_inner())
                .clone();
            let reduced = reduce_points(&raw, &view);
            let screen: Vec<Vec2> = reduced.iter().map(|&p| view.project(p)).collect();
            geometry.build_mesh(&screen, &view)
        });
    }
}

impl std::fmt::Debug for GraphDrawer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphDrawer")
            .field("points", &self.lock_points().len())
            .field("view", &self.view)
            .field("geometry", &self.geometry)
            .finish()
    }
}
