use crate::kernel::resource::ResourceKey;
use crate::kernel::table::{LogGroupTable, LogStreamTable};

/// Renderable body of a log tab.
pub enum ViewContent {
    Group(LogGroupTable),
    Stream(LogStreamTable),
}

impl ViewContent {
    pub fn row_count(&self) -> usize {
        match self {
            ViewContent::Group(table) => table.model().row_count(),
            ViewContent::Stream(table) => table.model().row_count(),
        }
    }
}

/// Resources that live exactly as long as the tab that shows them.
///
/// Released once on drop: when the tab is replaced, closed by the user, or its
/// registration fails.
pub struct ViewResource {
    key: ResourceKey,
    on_release: Option<Box<dyn FnOnce() + Send>>,
}

impl ViewResource {
    pub fn new(key: ResourceKey) -> Self {
        Self {
            key,
            on_release: None,
        }
    }

    pub fn with_release<F>(key: ResourceKey, f: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        Self {
            key,
            on_release: Some(Box::new(f)),
        }
    }

    pub fn key(&self) -> &ResourceKey {
        &self.key
    }
}

impl Drop for ViewResource {
    fn drop(&mut self) {
        if let Some(release) = self.on_release.take() {
            release();
        }
        tracing::trace!(id = %self.key, "view resources released");
    }
}

/// A constructed, not yet registered, log view.
pub struct LogView {
    pub title: String,
    pub content: ViewContent,
    pub resource: ViewResource,
}

impl LogView {
    pub fn new(title: impl Into<String>, content: ViewContent, resource: ViewResource) -> Self {
        Self {
            title: title.into(),
            content,
            resource,
        }
    }
}
