//! Window/tab host contract. Everything here runs on the UI context.

use super::error::HostError;
use super::view::ViewContent;
use crate::kernel::resource::ResourceKey;
use crate::kernel::services::bus::{UiBusSender, UiMessage};

/// A tab as handed to the host.
pub struct TabSpec {
    pub id: String,
    pub title: String,
    pub content: ViewContent,
    pub activate: bool,
    /// Must be fired by the host when the user closes the tab.
    pub on_closed: TabClosedNotifier,
}

/// Host-owned handle of a live tab.
pub trait ViewHandle {
    fn id(&self) -> &str;

    /// Bring the tab to front without reloading it.
    fn show(&self);

    /// Close the tab. The handle is consumed, so a tab is disposed at most once.
    fn dispose(self: Box<Self>);

    /// True once the host has closed the tab on its own.
    fn is_disposed(&self) -> bool;
}

pub trait TabHost {
    fn add_tab(&mut self, spec: TabSpec) -> Result<Box<dyn ViewHandle>, HostError>;
}

/// Posts a closure notification back to the log window that registered the tab.
///
/// `seq` pins the notification to one registration, so closing an old tab can
/// never unregister its replacement under the same id.
#[derive(Clone)]
pub struct TabClosedNotifier {
    bus: UiBusSender,
    key: ResourceKey,
    seq: u64,
}

impl TabClosedNotifier {
    pub(crate) fn new(bus: UiBusSender, key: ResourceKey, seq: u64) -> Self {
        Self { bus, key, seq }
    }

    /// The resource shown by the tab this notifier belongs to.
    pub fn key(&self) -> &ResourceKey {
        &self.key
    }

    pub fn notify(&self) {
        let msg = UiMessage::TabClosed {
            key: self.key.clone(),
            seq: self.seq,
        };
        if self.bus.send(msg).is_err() {
            tracing::debug!(id = %self.key, "log window gone before tab close was reported");
        }
    }
}
