//! In-process tab host: keeps tabs in a list, tracks the active one.
//!
//! Bound to the UI thread (`Rc`), like any real window host.

use std::cell::RefCell;
use std::rc::Rc;

use crate::kernel::resource::ResourceKey;
use crate::kernel::services::ports::{
    HostError, TabClosedNotifier, TabHost, TabSpec, ViewContent, ViewHandle,
};

struct HostTab {
    serial: u64,
    id: String,
    title: String,
    content: ViewContent,
    on_closed: TabClosedNotifier,
}

#[derive(Default)]
struct HostState {
    tabs: Vec<HostTab>,
    active: Option<u64>,
    next_serial: u64,
    added: usize,
    shown: usize,
    disposed: usize,
    reject_next: Option<String>,
}

impl HostState {
    fn position(&self, serial: u64) -> Option<usize> {
        self.tabs.iter().position(|t| t.serial == serial)
    }

    fn remove(&mut self, idx: usize) -> HostTab {
        let tab = self.tabs.remove(idx);
        if self.active == Some(tab.serial) {
            self.active = self.tabs.last().map(|t| t.serial);
        }
        tab
    }
}

/// Mutable view of one hosted tab.
pub struct HostedTab<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub content: &'a mut ViewContent,
}

#[derive(Clone, Default)]
pub struct MemoryTabHost {
    state: Rc<RefCell<HostState>>,
}

impl MemoryTabHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tab_count(&self) -> usize {
        self.state.borrow().tabs.len()
    }

    /// Tab ids in tab-strip order.
    pub fn ids(&self) -> Vec<String> {
        self.state.borrow().tabs.iter().map(|t| t.id.clone()).collect()
    }

    pub fn titles(&self) -> Vec<String> {
        self.state
            .borrow()
            .tabs
            .iter()
            .map(|t| t.title.clone())
            .collect()
    }

    /// Number of live tabs carrying `id`.
    pub fn count_id(&self, id: &str) -> usize {
        self.state.borrow().tabs.iter().filter(|t| t.id == id).count()
    }

    pub fn active_id(&self) -> Option<String> {
        let state = self.state.borrow();
        let serial = state.active?;
        state
            .tabs
            .iter()
            .find(|t| t.serial == serial)
            .map(|t| t.id.clone())
    }

    /// Resource shown by the active tab.
    pub fn active_key(&self) -> Option<ResourceKey> {
        let state = self.state.borrow();
        let serial = state.active?;
        state
            .tabs
            .iter()
            .find(|t| t.serial == serial)
            .map(|t| t.on_closed.key().clone())
    }

    pub fn active_index(&self) -> Option<usize> {
        let state = self.state.borrow();
        state.position(state.active?)
    }

    /// Tabs ever added.
    pub fn added_count(&self) -> usize {
        self.state.borrow().added
    }

    /// `show()` calls on existing tabs.
    pub fn shown_count(&self) -> usize {
        self.state.borrow().shown
    }

    /// Tabs closed through their handle.
    pub fn disposed_count(&self) -> usize {
        self.state.borrow().disposed
    }

    /// Makes the next `add_tab` fail with `HostError::Rejected`.
    pub fn reject_next_add(&self, reason: impl Into<String>) {
        self.state.borrow_mut().reject_next = Some(reason.into());
    }

    pub fn activate_next(&self) {
        let mut state = self.state.borrow_mut();
        if state.tabs.is_empty() {
            return;
        }
        let next = match state.active.and_then(|s| state.position(s)) {
            Some(idx) => (idx + 1) % state.tabs.len(),
            None => 0,
        };
        let serial = state.tabs[next].serial;
        state.active = Some(serial);
    }

    pub fn with_active_mut<R>(&self, f: impl FnOnce(HostedTab<'_>) -> R) -> Option<R> {
        let mut state = self.state.borrow_mut();
        let serial = state.active?;
        let idx = state.position(serial)?;
        let tab = &mut state.tabs[idx];
        Some(f(HostedTab {
            id: &tab.id,
            title: &tab.title,
            content: &mut tab.content,
        }))
    }

    pub fn with_tab_mut<R>(&self, id: &str, f: impl FnOnce(HostedTab<'_>) -> R) -> Option<R> {
        let mut state = self.state.borrow_mut();
        let tab = state.tabs.iter_mut().find(|t| t.id == id)?;
        Some(f(HostedTab {
            id: &tab.id,
            title: &tab.title,
            content: &mut tab.content,
        }))
    }

    /// The user closed the tab showing `key`: drop it and tell its owner.
    pub fn close_tab(&self, key: &ResourceKey) -> bool {
        let removed = {
            let mut state = self.state.borrow_mut();
            match state.tabs.iter().position(|t| t.on_closed.key() == key) {
                Some(idx) => Some(state.remove(idx)),
                None => None,
            }
        };
        match removed {
            Some(tab) => {
                tab.on_closed.notify();
                true
            }
            None => false,
        }
    }
}

impl TabHost for MemoryTabHost {
    fn add_tab(&mut self, spec: TabSpec) -> Result<Box<dyn ViewHandle>, HostError> {
        let mut state = self.state.borrow_mut();
        if let Some(reason) = state.reject_next.take() {
            return Err(HostError::Rejected(reason));
        }

        let serial = state.next_serial;
        state.next_serial += 1;
        state.added += 1;
        state.tabs.push(HostTab {
            serial,
            id: spec.id.clone(),
            title: spec.title,
            content: spec.content,
            on_closed: spec.on_closed,
        });
        if spec.activate || state.active.is_none() {
            state.active = Some(serial);
        }

        Ok(Box::new(MemoryViewHandle {
            state: Rc::clone(&self.state),
            serial,
            id: spec.id,
        }))
    }
}

struct MemoryViewHandle {
    state: Rc<RefCell<HostState>>,
    serial: u64,
    id: String,
}

impl ViewHandle for MemoryViewHandle {
    fn id(&self) -> &str {
        &self.id
    }

    fn show(&self) {
        let mut state = self.state.borrow_mut();
        if state.position(self.serial).is_some() {
            state.active = Some(self.serial);
            state.shown += 1;
        }
    }

    fn dispose(self: Box<Self>) {
        let mut state = self.state.borrow_mut();
        if let Some(idx) = state.position(self.serial) {
            state.remove(idx);
            state.disposed += 1;
        }
    }

    fn is_disposed(&self) -> bool {
        self.state.borrow().position(self.serial).is_none()
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/memory_host.rs"]
mod tests;
