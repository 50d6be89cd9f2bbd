//! Opens log group / log stream tabs.
//!
//! [`LogWindow`] is the cheap, `Send` front: every `open_*` call only posts a
//! request and returns. [`LogWindowUi`] lives on the UI context and owns the
//! tab registry; it is the only place that looks up, registers, shows or
//! disposes tabs. Views are constructed on the worker pool and come back to
//! the UI context as `UiMessage::ViewBuilt`.
//!
//! Per resource key:
//! - group: reopening shows the existing tab; no rebuild.
//! - stream: reopening builds a new view, disposes the old tab, then
//!   registers the new one.

use std::collections::HashSet;
use std::sync::mpsc::{RecvTimeoutError, TryRecvError};
use std::sync::Arc;
use std::time::{Duration, Instant};

use super::resource::{ResourceKey, StreamRequest, ViewRequest};
use super::services::bus::{ui_bus, UiBusReceiver, UiBusSender, UiMessage};
use super::services::ports::{
    AsyncExecutor, LogView, LogViewFactory, ProjectContext, TabClosedNotifier, TabHost, TabSpec,
    ViewError,
};
use super::tabs::{OpenView, TabRegistry};

/// Handle for opening log tabs from any thread.
#[derive(Clone)]
pub struct LogWindow {
    project: ProjectContext,
    bus: UiBusSender,
}

impl LogWindow {
    pub fn project(&self) -> &ProjectContext {
        &self.project
    }

    pub fn open_log_group(&self, group: impl Into<String>) {
        self.post(UiMessage::OpenGroup {
            group: group.into(),
        });
    }

    pub fn open_log_stream(
        &self,
        group: impl Into<String>,
        stream: impl Into<String>,
        from_head: bool,
        start_time: Option<i64>,
        time_scale: Option<i64>,
    ) {
        self.open_stream(StreamRequest {
            group: group.into(),
            stream: stream.into(),
            from_head,
            start_time,
            time_scale,
        });
    }

    pub fn open_stream(&self, request: StreamRequest) {
        self.post(UiMessage::OpenStream(request));
    }

    pub fn close(&self, key: &ResourceKey) {
        self.post(UiMessage::Close { key: key.clone() });
    }

    pub fn close_all(&self) {
        self.post(UiMessage::CloseAll);
    }

    fn post(&self, msg: UiMessage) {
        if self.bus.send(msg).is_err() {
            tracing::warn!(project = %self.project.name, "log window is closed; request dropped");
        }
    }
}

/// UI-context half of a log window. Not `Send` when the host is not.
pub struct LogWindowUi {
    project: ProjectContext,
    registry: TabRegistry,
    host: Box<dyn TabHost>,
    factory: Arc<dyn LogViewFactory>,
    executor: Arc<dyn AsyncExecutor>,
    bus: UiBusSender,
    rx: UiBusReceiver,
    /// Groups with a build in flight.
    pending_groups: HashSet<ResourceKey>,
    in_flight: usize,
    next_seq: u64,
}

/// Creates a log window for `project`.
pub fn log_window(
    project: ProjectContext,
    host: Box<dyn TabHost>,
    factory: Arc<dyn LogViewFactory>,
    executor: Arc<dyn AsyncExecutor>,
) -> (LogWindow, LogWindowUi) {
    let (bus, rx) = ui_bus();
    let window = LogWindow {
        project: project.clone(),
        bus: bus.clone(),
    };
    let ui = LogWindowUi {
        project,
        registry: TabRegistry::new(),
        host,
        factory,
        executor,
        bus,
        rx,
        pending_groups: HashSet::new(),
        in_flight: 0,
        next_seq: 0,
    };
    (window, ui)
}

impl LogWindowUi {
    pub fn window(&self) -> LogWindow {
        LogWindow {
            project: self.project.clone(),
            bus: self.bus.clone(),
        }
    }

    pub fn registry(&self) -> &TabRegistry {
        &self.registry
    }

    pub fn is_open(&self, key: &ResourceKey) -> bool {
        self.registry
            .get(key)
            .is_some_and(|view| !view.is_disposed())
    }

    pub fn open_ids(&self) -> Vec<String> {
        self.registry.ids()
    }

    /// Builds started but not yet delivered.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Handles every queued message without blocking. Returns how many.
    pub fn pump(&mut self) -> usize {
        let mut handled = 0;
        loop {
            match self.rx.try_recv() {
                Ok(msg) => {
                    self.handle(msg);
                    handled += 1;
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        handled
    }

    /// Handles messages until the queue is empty and no build is in flight.
    /// Returns false if `timeout` elapsed first.
    pub fn run_until_idle(&mut self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        loop {
            self.pump();
            if self.in_flight == 0 {
                return true;
            }
            let Some(left) = deadline.checked_duration_since(Instant::now()) else {
                return false;
            };
            match self.rx.recv_timeout(left) {
                Ok(msg) => self.handle(msg),
                Err(RecvTimeoutError::Timeout) => return false,
                Err(RecvTimeoutError::Disconnected) => return self.in_flight == 0,
            }
        }
    }

    fn handle(&mut self, msg: UiMessage) {
        match msg {
            UiMessage::OpenGroup { group } => self.request_group(group),
            UiMessage::OpenStream(request) => {
                let seq = self.next_seq();
                self.spawn_build(ViewRequest::Stream(request), seq);
            }
            UiMessage::Close { key } => self.close_key(&key),
            UiMessage::CloseAll => self.close_all(),
            UiMessage::ViewBuilt { key, seq, result } => self.install(key, seq, result),
            UiMessage::TabClosed { key, seq } => self.tab_closed(&key, seq),
        }
    }

    fn request_group(&mut self, group: String) {
        let key = ResourceKey::group(group.clone());
        if let Some(view) = self.registry.find(&key) {
            tracing::debug!(id = %key, "log group already open, showing it");
            view.show();
            return;
        }
        if !self.pending_groups.insert(key.clone()) {
            tracing::debug!(id = %key, "log group already being opened");
            return;
        }
        let seq = self.next_seq();
        self.spawn_build(ViewRequest::Group { group }, seq);
    }

    fn spawn_build(&mut self, request: ViewRequest, seq: u64) {
        let key = request.key();
        tracing::debug!(id = %key, seq, "building log view");
        self.in_flight += 1;

        let factory = Arc::clone(&self.factory);
        let project = self.project.clone();
        let completion = Completion::new(self.bus.clone(), key, seq);
        self.executor.spawn_blocking(Box::new(move || {
            let result = factory.build(&project, &request);
            completion.finish(result);
        }));
    }

    fn install(&mut self, key: ResourceKey, seq: u64, result: Result<LogView, ViewError>) {
        self.in_flight = self.in_flight.saturating_sub(1);
        if key.is_group() {
            self.pending_groups.remove(&key);
        }

        if let Err(e) = result.and_then(|view| self.register(key.clone(), seq, view)) {
            tracing::warn!(id = %key, error = %e, "failed to open log view");
        }
    }

    fn register(&mut self, key: ResourceKey, seq: u64, view: LogView) -> Result<(), ViewError> {
        if key.is_group() {
            if let Some(existing) = self.registry.find(&key) {
                tracing::debug!(id = %key, "log group opened meanwhile; dropping duplicate view");
                existing.show();
                return Ok(());
            }
        } else {
            if self
                .registry
                .find(&key)
                .is_some_and(|existing| existing.seq() > seq)
            {
                tracing::debug!(id = %key, seq, "newer log stream view already open; dropping this one");
                return Ok(());
            }
            if let Some(old) = self.registry.remove(&key) {
                tracing::debug!(id = %key, old_seq = old.seq(), "replacing log stream view");
                old.dispose();
            }
        }

        let LogView {
            title,
            content,
            resource,
        } = view;
        let spec = TabSpec {
            id: key.id(),
            title,
            content,
            activate: true,
            on_closed: TabClosedNotifier::new(self.bus.clone(), key.clone(), seq),
        };
        // On rejection `resource` drops here and is released.
        let handle = self.host.add_tab(spec)?;
        tracing::info!(project = %self.project.name, id = %key, "opened log tab");
        if let Some(displaced) = self
            .registry
            .insert(OpenView::new(key, seq, handle, resource))
        {
            displaced.dispose();
        }
        Ok(())
    }

    fn tab_closed(&mut self, key: &ResourceKey, seq: u64) {
        if self.registry.get(key).is_some_and(|view| view.seq() == seq) {
            if let Some(view) = self.registry.remove(key) {
                tracing::debug!(id = %key, seq, "log tab closed by user");
                view.release();
            }
        }
    }

    fn close_key(&mut self, key: &ResourceKey) {
        if let Some(view) = self.registry.remove(key) {
            view.dispose();
        }
    }

    fn close_all(&mut self) {
        let views = self.registry.drain();
        tracing::debug!(project = %self.project.name, count = views.len(), "closing all log tabs");
        for view in views {
            view.dispose();
        }
    }

    fn next_seq(&mut self) -> u64 {
        self.next_seq += 1;
        self.next_seq
    }
}

/// Reports a build back to the UI context exactly once, including when the
/// build panics on the worker.
struct Completion {
    bus: UiBusSender,
    target: Option<(ResourceKey, u64)>,
}

impl Completion {
    fn new(bus: UiBusSender, key: ResourceKey, seq: u64) -> Self {
        Self {
            bus,
            target: Some((key, seq)),
        }
    }

    fn finish(mut self, result: Result<LogView, ViewError>) {
        self.send(result);
    }

    fn send(&mut self, result: Result<LogView, ViewError>) {
        let Some((key, seq)) = self.target.take() else {
            return;
        };
        if self
            .bus
            .send(UiMessage::ViewBuilt { key, seq, result })
            .is_err()
        {
            tracing::debug!("log window closed before view was delivered");
        }
    }
}

impl Drop for Completion {
    fn drop(&mut self) {
        if self.target.is_some() {
            self.send(Err(ViewError::Worker("view construction panicked".to_string())));
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/window.rs"]
mod tests;
