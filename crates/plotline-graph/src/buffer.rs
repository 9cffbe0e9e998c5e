//! Double-buffered mesh hand-off.
//!
//! Rebuild jobs publish finished quad collections here; the render
//! thread snapshots the last fully-published generation. Replacement
//! is atomic as a unit, so a reader can never observe a mix of two
//! generations, and stamped with a generation token so a stale job
//! that finishes late cannot overwrite a newer result.

use crate::Quad;
use std::sync::{Arc, Mutex};

#[derive(Debug, Default)]
struct Buffered {
    quads: Arc<[Quad]>,
    generation: u64,
}

/// Thread-safe, generation-tokened mesh buffer.
#[derive(Debug, Default)]
pub struct MeshBuffer {
    inner: Mutex<Buffered>,
}

impl MeshBuffer {
    /// Create an empty buffer at generation zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the buffered mesh if `generation` is newer than the
    /// stored one. Returns whether the quads were accepted.
    pub fn publish(&self, generation: u64, quads: Vec<Quad>) -> bool {
        let mut inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        if generation <= inner.generation {
            tracing::trace!(
                generation,
                current = inner.generation,
                "discarding stale mesh rebuild"
            );
            return false;
        }
        inner.quads = quads.into();
        inner.generation = generation;
        true
    }

    /// The last fully-published quad collection.
    ///
    /// Cheap (an `Arc` clone) and safe to call concurrently with an
    /// in-flight publish.
    pub fn snapshot(&self) -> Arc<[Quad]> {
        let inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        Arc::clone(&inner.quads)
    }

    /// The generation of the buffered mesh.
    pub fn generation(&self) -> u64 {
        let inner = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        inner.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::Quad;
    use glam::Vec2;
    use plotline_core::Color;

    fn marker_quads(value: f32, count: usize) -> Vec<Quad> {
        let corners = [Vec2::ZERO, Vec2::X, Vec2::ONE, Vec2::Y];
        vec![Quad::from_corners(corners, Color::rgba(value, 0.0, 0.0, 1.0)); count]
    }

    #[test]
    fn test_starts_empty() {
        let buffer = MeshBuffer::new();
        assert!(buffer.snapshot().is_empty());
        assert_eq!(buffer.generation(), 0);
    }

    #[test]
    fn test_publish_and_snapshot() {
        let buffer = MeshBuffer::new();
        assert!(buffer.publish(1, marker_quads(0.5, 3)));
        let snap = buffer.snapshot();
        assert_eq!(snap.len(), 3);
        assert_eq!(snap[0].vertices[0].color[0], 0.5);
        assert_eq!(buffer.generation(), 1);
    }

    #[test]
    fn test_stale_generation_discarded() {
        let buffer = MeshBuffer::new();
        assert!(buffer.publish(2, marker_quads(0.2, 2)));
        // An older job finishing late must not win.
        assert!(!buffer.publish(1, marker_quads(0.1, 9)));
        assert_eq!(buffer.snapshot().len(), 2);
        assert_eq!(buffer.generation(), 2);
        // Equal generations are also rejected.
        assert!(!buffer.publish(2, marker_quads(0.3, 1)));
    }

    #[test]
    fn test_snapshot_survives_later_publish() {
        let buffer = MeshBuffer::new();
        buffer.publish(1, marker_quads(0.1, 4));
        let old = buffer.snapshot();
        buffer.publish(2, marker_quads(0.9, 8));
        // The handed-out snapshot is immutable.
        assert_eq!(old.len(), 4);
        assert_eq!(buffer.snapshot().len(), 8);
    }
}
