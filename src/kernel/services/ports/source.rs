use super::error::SourceError;
use crate::kernel::records::{LogEventRecord, LogStreamRecord};
use crate::kernel::resource::StreamRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventQuery {
    pub from_head: bool,
    pub start_time: Option<i64>,
    pub time_scale: Option<i64>,
    /// Maximum number of events returned.
    pub limit: usize,
}

impl EventQuery {
    pub fn for_request(request: &StreamRequest, limit: usize) -> Self {
        Self {
            from_head: request.from_head,
            start_time: request.start_time,
            time_scale: request.time_scale,
            limit,
        }
    }

    /// Inclusive `[start - scale, start + scale]` window, when both are set.
    pub fn time_window(&self) -> Option<(i64, i64)> {
        let start = self.start_time?;
        let scale = self.time_scale?.abs();
        Some((start.saturating_sub(scale), start.saturating_add(scale)))
    }
}

/// Where log records come from. Implementations may block.
pub trait LogSource: Send + Sync {
    fn list_streams(&self, group: &str) -> Result<Vec<LogStreamRecord>, SourceError>;

    /// Events ascending by timestamp.
    fn events(
        &self,
        group: &str,
        stream: &str,
        query: &EventQuery,
    ) -> Result<Vec<LogEventRecord>, SourceError>;
}
