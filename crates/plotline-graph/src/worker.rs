//! Off-thread mesh rebuilds.
//!
//! A [`WorkerPool`] is an explicitly constructed handle to a shared
//! rayon thread pool; drawers receive one at construction instead of
//! reaching for process-wide global state. The pool shuts down when
//! the last handle is dropped.
//!
//! A [`RebuildScheduler`] stamps every scheduled rebuild with a
//! monotonically increasing generation and publishes the finished
//! mesh through a [`MeshBuffer`]; a job that is superseded while it
//! runs has its result discarded. Jobs never block on one another and
//! always run to completion; there is no cancellation.

use crate::{GraphError, MeshBuffer, Quad};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Shared handle to a rebuild worker pool.
#[derive(Clone)]
pub struct WorkerPool {
    pool: Arc<rayon::ThreadPool>,
}

impl WorkerPool {
    /// Build a pool with the given number of threads (0 lets rayon
    /// pick one per logical CPU).
    pub fn new(threads: usize) -> Result<Self, GraphError> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("plotline-rebuild-{i}"))
            .build()
            .map_err(|e| GraphError::WorkerPool {
                message: e.to_string(),
            })?;
        Ok(Self {
            pool: Arc::new(pool),
        })
    }

    /// Number of threads in the pool.
    pub fn threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    fn spawn(&self, job: impl FnOnce() + Send + 'static) {
        self.pool.spawn(job);
    }
}

impl std::fmt::Debug for WorkerPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkerPool")
            .field("threads", &self.threads())
            .finish()
    }
}

/// Schedules generation-stamped rebuild jobs onto a worker pool.
#[derive(Debug)]
pub struct RebuildScheduler {
    pool: WorkerPool,
    buffer: Arc<MeshBuffer>,
    next_generation: AtomicU64,
}

impl RebuildScheduler {
    /// Create a scheduler publishing into the given buffer.
    pub fn new(pool: WorkerPool, buffer: Arc<MeshBuffer>) -> Self {
        Self {
            pool,
            buffer,
            next_generation: AtomicU64::new(0),
        }
    }

    /// The buffer rebuilds publish into.
    pub fn buffer(&self) -> &Arc<MeshBuffer> {
        &self.buffer
    }

    /// Enqueue one rebuild. The job runs on the pool without blocking
    /// the caller; its result is published only if no newer rebuild
    /// was requested in the meantime.
    pub fn schedule(&self, job: impl FnOnce() -> Vec<Quad> + Send + 'static) {
        let generation = self.next_generation.fetch_add(1, Ordering::Relaxed) + 1;
        let buffer = Arc::clone(&self.buffer);
        self.pool.spawn(move || {
            let quads = job();
            if buffer.publish(generation, quads) {
                tracing::debug!(generation, "mesh rebuild published");
            }
        });
    }

    /// Number of rebuilds scheduled so far; the next one carries this
    /// plus one as its generation.
    pub fn scheduled_generations(&self) -> u64 {
        self.next_generation.load(Ordering::Relaxed)
    }
}
