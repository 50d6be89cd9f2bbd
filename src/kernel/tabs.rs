//! Per-project registry of open log tabs: at most one live view per resource.
//!
//! Entries are keyed by [`ResourceKey`], not by the tab id string: a group
//! named `a/b` and stream `b` of group `a` share an id but are different tabs.

use std::collections::HashMap;

use super::resource::ResourceKey;
use super::services::ports::{ViewHandle, ViewResource};

/// A registered tab together with the resources it keeps alive.
pub struct OpenView {
    id: String,
    key: ResourceKey,
    seq: u64,
    handle: Box<dyn ViewHandle>,
    resource: ViewResource,
}

impl OpenView {
    pub fn new(
        key: ResourceKey,
        seq: u64,
        handle: Box<dyn ViewHandle>,
        resource: ViewResource,
    ) -> Self {
        Self {
            id: key.id(),
            key,
            seq,
            handle,
            resource,
        }
    }

    pub fn key(&self) -> &ResourceKey {
        &self.key
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Registration order; later opens get larger values.
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn show(&self) {
        self.handle.show();
    }

    pub fn is_disposed(&self) -> bool {
        self.handle.is_disposed()
    }

    /// Closes the tab in the host and releases its resources.
    pub fn dispose(self) {
        let Self {
            handle, resource, ..
        } = self;
        handle.dispose();
        drop(resource);
    }

    /// Releases resources of a tab the host has already closed.
    pub fn release(self) {
        drop(self);
    }
}

#[derive(Default)]
pub struct TabRegistry {
    views: HashMap<ResourceKey, OpenView>,
}

impl TabRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Live view for `key`. An entry whose tab the host already closed is
    /// dropped here and reported as absent.
    pub fn find(&mut self, key: &ResourceKey) -> Option<&OpenView> {
        if self.views.get(key).is_some_and(OpenView::is_disposed) {
            if let Some(stale) = self.views.remove(key) {
                tracing::debug!(id = %key, seq = stale.seq(), "dropping stale tab entry");
                stale.release();
            }
            return None;
        }
        self.views.get(key)
    }

    /// Entry for `key`, live or not.
    pub fn get(&self, key: &ResourceKey) -> Option<&OpenView> {
        self.views.get(key)
    }

    pub fn contains(&self, key: &ResourceKey) -> bool {
        self.views.contains_key(key)
    }

    /// Registers `view` and hands back whatever was registered for its key.
    #[must_use = "a replaced view must be disposed"]
    pub fn insert(&mut self, view: OpenView) -> Option<OpenView> {
        self.views.insert(view.key.clone(), view)
    }

    pub fn remove(&mut self, key: &ResourceKey) -> Option<OpenView> {
        self.views.remove(key)
    }

    pub fn drain(&mut self) -> Vec<OpenView> {
        self.views.drain().map(|(_, view)| view).collect()
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    /// Tab ids of every entry, sorted. Ids of a group and a stream may repeat.
    pub fn ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.views.values().map(|v| v.id.clone()).collect();
        ids.sort();
        ids
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/tabs.rs"]
mod tests;
