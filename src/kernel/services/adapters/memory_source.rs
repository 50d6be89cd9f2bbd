use std::collections::BTreeMap;

use crate::kernel::records::{LogEventRecord, LogStreamRecord};
use crate::kernel::services::ports::{EventQuery, LogSource, SourceError};

/// Fixed log data held in memory. Used by the demo binary and tests.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLogSource {
    groups: BTreeMap<String, BTreeMap<String, Vec<LogEventRecord>>>,
}

impl InMemoryLogSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.groups.entry(group.into()).or_default();
        self
    }

    /// Adds (or replaces) a stream; events are kept ordered by timestamp.
    pub fn with_stream(
        mut self,
        group: impl Into<String>,
        stream: impl Into<String>,
        mut events: Vec<LogEventRecord>,
    ) -> Self {
        events.sort_by_key(|e| e.timestamp);
        self.groups
            .entry(group.into())
            .or_default()
            .insert(stream.into(), events);
        self
    }

    fn stream(&self, group: &str, stream: &str) -> Result<&[LogEventRecord], SourceError> {
        let streams = self
            .groups
            .get(group)
            .ok_or_else(|| SourceError::GroupNotFound(group.to_string()))?;
        streams
            .get(stream)
            .map(Vec::as_slice)
            .ok_or_else(|| SourceError::StreamNotFound {
                group: group.to_string(),
                stream: stream.to_string(),
            })
    }
}

impl LogSource for InMemoryLogSource {
    fn list_streams(&self, group: &str) -> Result<Vec<LogStreamRecord>, SourceError> {
        let streams = self
            .groups
            .get(group)
            .ok_or_else(|| SourceError::GroupNotFound(group.to_string()))?;
        Ok(streams
            .iter()
            .map(|(name, events)| {
                LogStreamRecord::new(name.clone(), events.iter().filter_map(|e| e.timestamp).max())
            })
            .collect())
    }

    fn events(
        &self,
        group: &str,
        stream: &str,
        query: &EventQuery,
    ) -> Result<Vec<LogEventRecord>, SourceError> {
        let events = self.stream(group, stream)?;
        let window = query.time_window();
        let matching: Vec<&LogEventRecord> = events
            .iter()
            .filter(|e| match (window, e.timestamp) {
                (None, _) => true,
                (Some((lo, hi)), Some(ts)) => lo <= ts && ts <= hi,
                (Some(_), None) => false,
            })
            .collect();

        let limit = query.limit.min(matching.len());
        let page = if query.from_head {
            &matching[..limit]
        } else {
            &matching[matching.len() - limit..]
        };
        Ok(page.iter().map(|e| (*e).clone()).collect())
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/memory_source.rs"]
mod tests;
