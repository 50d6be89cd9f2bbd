pub type BlockingJob = Box<dyn FnOnce() + Send + 'static>;

/// Worker pool used for view construction.
pub trait AsyncExecutor: Send + Sync {
    fn spawn_blocking(&self, job: BlockingJob);
}
