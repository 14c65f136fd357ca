//! Worker-count heuristic and the resizable Rayon pool it drives.

use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::debug;

use crate::SimResult;

/// One worker per this many vehicles (rounded up).
pub const VEHICLES_PER_WORKER: usize = 8;

/// One worker per this many signals (rounded up).
pub const SIGNALS_PER_WORKER: usize = 4;

/// Lower bound on the worker count.
pub const MIN_WORKERS: usize = 2;

/// Target parallelism for a population of `vehicles` and `signals`:
/// `ceil(vehicles / 8) + ceil(signals / 4)`, at least 2.
///
/// A scheduling hint only; results are identical for any worker count.
#[inline]
pub fn worker_count(vehicles: usize, signals: usize) -> usize {
    let w = vehicles.div_ceil(VEHICLES_PER_WORKER) + signals.div_ceil(SIGNALS_PER_WORKER);
    w.max(MIN_WORKERS)
}

/// A Rayon pool sized by [`worker_count`].
///
/// Rebuilding a pool spawns fresh OS threads, so [`resize`](Self::resize)
/// only rebuilds when the requested size actually changes.  With a fixed
/// population that happens at most once per run.
pub struct WorkerPool {
    threads: usize,
    pool:    ThreadPool,
}

impl WorkerPool {
    pub fn new(threads: usize) -> SimResult<Self> {
        Ok(Self {
            threads,
            pool: build_pool(threads)?,
        })
    }

    /// Current pool size.
    #[inline]
    pub fn threads(&self) -> usize {
        self.threads
    }

    /// Make the pool `threads` wide.  Returns `true` if it was rebuilt.
    pub fn resize(&mut self, threads: usize) -> SimResult<bool> {
        if threads == self.threads {
            return Ok(false);
        }
        debug!(from = self.threads, to = threads, "resizing worker pool");
        self.pool = build_pool(threads)?;
        self.threads = threads;
        Ok(true)
    }

    /// Run `op` inside the pool.  Every `par_iter` and `rayon::join` in `op`
    /// uses this pool's workers; returns once `op` and all its work finish.
    #[inline]
    pub fn install<OP, R>(&self, op: OP) -> R
    where
        OP: FnOnce() -> R + Send,
        R: Send,
    {
        self.pool.install(op)
    }
}

fn build_pool(threads: usize) -> SimResult<ThreadPool> {
    let pool = ThreadPoolBuilder::new()
        .num_threads(threads)
        .thread_name(|i| format!("ringroad-worker-{i}"))
        .build()?;
    Ok(pool)
}
