use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::time::Duration;

use super::ports::{LogView, ViewError};
use crate::kernel::resource::{ResourceKey, StreamRequest};

/// Work for the UI context. Requests come from any thread; build completions
/// come from workers; closure reports come from the tab host.
pub enum UiMessage {
    OpenGroup {
        group: String,
    },
    OpenStream(StreamRequest),
    Close {
        key: ResourceKey,
    },
    CloseAll,
    ViewBuilt {
        key: ResourceKey,
        seq: u64,
        result: Result<LogView, ViewError>,
    },
    TabClosed {
        key: ResourceKey,
        seq: u64,
    },
}

#[derive(Clone)]
pub struct UiBusSender {
    tx: Sender<UiMessage>,
}

pub struct UiBusReceiver {
    rx: Receiver<UiMessage>,
}

pub fn ui_bus() -> (UiBusSender, UiBusReceiver) {
    let (tx, rx) = mpsc::channel();
    (UiBusSender { tx }, UiBusReceiver { rx })
}

impl UiBusSender {
    pub fn send(&self, msg: UiMessage) -> Result<(), mpsc::SendError<UiMessage>> {
        self.tx.send(msg)
    }
}

impl UiBusReceiver {
    pub fn try_recv(&mut self) -> Result<UiMessage, TryRecvError> {
        self.rx.try_recv()
    }

    pub fn recv_timeout(&mut self, timeout: Duration) -> Result<UiMessage, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}
