use super::error::ViewError;
use super::view::LogView;
use crate::kernel::resource::{StreamRequest, ViewRequest};

/// The owning context of a log window (one registry per project).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectContext {
    pub name: String,
}

impl ProjectContext {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Builds log views. Called on a worker thread; may block on data fetches.
pub trait LogViewFactory: Send + Sync {
    fn log_group(&self, project: &ProjectContext, group: &str) -> Result<LogView, ViewError>;

    fn log_stream(
        &self,
        project: &ProjectContext,
        request: &StreamRequest,
    ) -> Result<LogView, ViewError>;

    fn build(&self, project: &ProjectContext, request: &ViewRequest) -> Result<LogView, ViewError> {
        match request {
            ViewRequest::Group { group } => self.log_group(project, group),
            ViewRequest::Stream(req) => self.log_stream(project, req),
        }
    }
}
