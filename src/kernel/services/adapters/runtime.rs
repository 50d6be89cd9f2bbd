//! Worker pools for view construction.

use std::io;

use crate::kernel::services::ports::{AsyncExecutor, BlockingJob};

pub struct AsyncRuntime {
    runtime: tokio::runtime::Runtime,
}

impl AsyncRuntime {
    pub fn new(worker_threads: usize) -> io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(worker_threads.max(1))
            .thread_name("cwlogs-worker")
            .enable_all()
            .build()
            .or_else(|e| {
                tracing::error!(
                    error = %e,
                    "Failed to create multi-thread tokio runtime, falling back to current-thread"
                );
                tokio::runtime::Builder::new_current_thread()
                    .enable_all()
                    .build()
            })?;
        Ok(Self { runtime })
    }
}

impl AsyncExecutor for AsyncRuntime {
    fn spawn_blocking(&self, job: BlockingJob) {
        // Detached: completion is reported by the job itself.
        drop(self.runtime.spawn_blocking(job));
    }
}

/// Runs every job on the calling thread before returning.
#[derive(Debug, Default, Clone, Copy)]
pub struct InlineExecutor;

impl AsyncExecutor for InlineExecutor {
    fn spawn_blocking(&self, job: BlockingJob) {
        job();
    }
}
