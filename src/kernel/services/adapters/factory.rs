use std::sync::Arc;

use crate::kernel::resource::{ResourceKey, StreamRequest};
use crate::kernel::services::ports::{
    DateTimeFormatter, EventQuery, LogSource, LogView, LogViewFactory, MessageBundle,
    ProjectContext, TableSettings, ViewContent, ViewError, ViewResource,
};
use crate::kernel::table::{LogGroupTable, LogStreamTable, StreamTableOptions};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableOptions {
    pub page_size: usize,
    pub stream: StreamTableOptions,
}

impl TableOptions {
    pub fn from_settings(settings: &TableSettings) -> Self {
        Self {
            page_size: settings.page_size,
            stream: StreamTableOptions {
                wrap_messages: settings.wrap_messages,
                line_height: settings.line_height,
            },
        }
    }
}

impl Default for TableOptions {
    fn default() -> Self {
        Self::from_settings(&TableSettings::default())
    }
}

/// Builds table views from a [`LogSource`].
pub struct TableViewFactory<S> {
    source: S,
    formatter: Arc<dyn DateTimeFormatter>,
    messages: Arc<dyn MessageBundle>,
    options: TableOptions,
}

impl<S: LogSource> TableViewFactory<S> {
    pub fn new(
        source: S,
        formatter: Arc<dyn DateTimeFormatter>,
        messages: Arc<dyn MessageBundle>,
        options: TableOptions,
    ) -> Self {
        Self {
            source,
            formatter,
            messages,
            options,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}

impl<S: LogSource> LogViewFactory for TableViewFactory<S> {
    fn log_group(&self, project: &ProjectContext, group: &str) -> Result<LogView, ViewError> {
        let streams = self.source.list_streams(group)?;
        tracing::debug!(
            project = %project.name,
            group,
            streams = streams.len(),
            "building log group view"
        );
        let table = LogGroupTable::new(
            streams,
            Arc::clone(&self.formatter),
            self.messages.as_ref(),
        );
        Ok(LogView::new(
            group,
            ViewContent::Group(table),
            ViewResource::new(ResourceKey::group(group)),
        ))
    }

    fn log_stream(
        &self,
        project: &ProjectContext,
        request: &StreamRequest,
    ) -> Result<LogView, ViewError> {
        let query = EventQuery::for_request(request, self.options.page_size);
        let events = self
            .source
            .events(&request.group, &request.stream, &query)?;
        tracing::debug!(
            project = %project.name,
            group = %request.group,
            stream = %request.stream,
            from_head = request.from_head,
            events = events.len(),
            "building log stream view"
        );
        let table = LogStreamTable::new(
            events,
            Arc::clone(&self.formatter),
            self.messages.as_ref(),
            self.options.stream,
        );
        Ok(LogView::new(
            request.stream.clone(),
            ViewContent::Stream(table),
            ViewResource::new(request.key()),
        ))
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/factory.rs"]
mod tests;
