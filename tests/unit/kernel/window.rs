use super::*;
use crate::kernel::records::{LogEventRecord, LogStreamRecord};
use crate::kernel::services::adapters::{ChronoFormatter, InlineExecutor, MemoryTabHost, Messages};
use crate::kernel::services::ports::{SourceError, ViewContent, ViewResource};
use crate::kernel::table::{LogGroupTable, LogStreamTable, StreamTableOptions};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

#[derive(Default)]
struct CountingFactory {
    group_builds: AtomicUsize,
    stream_builds: AtomicUsize,
    released: Arc<AtomicUsize>,
    fail: AtomicBool,
    panic: AtomicBool,
    requests: Mutex<Vec<StreamRequest>>,
}

impl CountingFactory {
    fn resource(&self, key: ResourceKey) -> ViewResource {
        let released = Arc::clone(&self.released);
        ViewResource::with_release(key, move || {
            released.fetch_add(1, Ordering::SeqCst);
        })
    }

    fn check_failure(&self) -> Result<(), ViewError> {
        if self.panic.load(Ordering::SeqCst) {
            panic!("factory exploded");
        }
        if self.fail.load(Ordering::SeqCst) {
            return Err(ViewError::Source(SourceError::Unavailable(
                "throttled".to_string(),
            )));
        }
        Ok(())
    }

    fn group_builds(&self) -> usize {
        self.group_builds.load(Ordering::SeqCst)
    }

    fn stream_builds(&self) -> usize {
        self.stream_builds.load(Ordering::SeqCst)
    }

    fn released(&self) -> usize {
        self.released.load(Ordering::SeqCst)
    }
}

impl LogViewFactory for CountingFactory {
    fn log_group(&self, _project: &ProjectContext, group: &str) -> Result<LogView, ViewError> {
        self.check_failure()?;
        self.group_builds.fetch_add(1, Ordering::SeqCst);
        let table = LogGroupTable::new(
            vec![LogStreamRecord::new("2024-01-01", Some(1))],
            Arc::new(ChronoFormatter::utc()),
            &Messages::new(),
        );
        Ok(LogView::new(
            group,
            ViewContent::Group(table),
            self.resource(ResourceKey::group(group)),
        ))
    }

    fn log_stream(
        &self,
        _project: &ProjectContext,
        request: &StreamRequest,
    ) -> Result<LogView, ViewError> {
        self.check_failure()?;
        self.stream_builds.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request.clone());
        }
        let marker = if request.from_head { "head" } else { "tail" };
        let table = LogStreamTable::new(
            vec![LogEventRecord::new(marker, Some(1))],
            Arc::new(ChronoFormatter::utc()),
            &Messages::new(),
            StreamTableOptions::default(),
        );
        Ok(LogView::new(
            request.stream.clone(),
            ViewContent::Stream(table),
            self.resource(request.key()),
        ))
    }
}

struct Harness {
    window: LogWindow,
    ui: LogWindowUi,
    host: MemoryTabHost,
    factory: Arc<CountingFactory>,
}

fn harness() -> Harness {
    let host = MemoryTabHost::new();
    let factory = Arc::new(CountingFactory::default());
    let (window, ui) = log_window(
        ProjectContext::new("test"),
        Box::new(host.clone()),
        factory.clone(),
        Arc::new(InlineExecutor),
    );
    Harness {
        window,
        ui,
        host,
        factory,
    }
}

fn stream_marker(host: &MemoryTabHost, id: &str) -> Option<String> {
    host.with_tab_mut(id, |tab| match tab.content {
        ViewContent::Stream(table) => Some(table.model().value_at(0, 1)),
        ViewContent::Group(_) => None,
    })
    .flatten()
}

#[test]
fn open_returns_before_anything_happens() {
    let mut h = harness();
    h.window.open_log_group("my-app-logs");
    assert_eq!(h.host.tab_count(), 0);
    assert_eq!(h.factory.group_builds(), 0);

    h.ui.pump();
    assert_eq!(h.host.tab_count(), 1);
}

#[test]
fn reopening_a_group_shows_the_existing_tab() {
    let mut h = harness();
    h.window.open_log_group("my-app-logs");
    h.ui.pump();
    assert_eq!(h.host.ids(), vec!["my-app-logs"]);
    assert_eq!(h.host.active_id().as_deref(), Some("my-app-logs"));

    h.window.open_log_group("other");
    h.ui.pump();
    assert_eq!(h.host.active_id().as_deref(), Some("other"));

    h.window.open_log_group("my-app-logs");
    h.ui.pump();
    assert_eq!(h.factory.group_builds(), 2);
    assert_eq!(h.host.count_id("my-app-logs"), 1);
    assert_eq!(h.host.shown_count(), 1);
    assert_eq!(h.host.active_id().as_deref(), Some("my-app-logs"));
    assert_eq!(h.ui.registry().len(), 2);
}

#[test]
fn duplicate_group_requests_in_one_batch_build_once() {
    let host = MemoryTabHost::new();
    let factory = Arc::new(CountingFactory::default());
    let executor = Arc::new(DeferredExecutor::default());
    let (window, mut ui) = log_window(
        ProjectContext::new("test"),
        Box::new(host.clone()),
        factory.clone(),
        executor.clone(),
    );
    // Builds are held back, so the second request sees the first as pending.
    window.open_log_group("g");
    window.open_log_group("g");
    ui.pump();
    assert_eq!(ui.in_flight(), 1);

    assert_eq!(executor.run_all(), 1);
    ui.pump();
    assert_eq!(ui.in_flight(), 0);
    assert_eq!(factory.group_builds(), 1);
    assert_eq!(host.count_id("g"), 1);
    assert_eq!(host.shown_count(), 0);
}

#[derive(Default)]
struct DeferredExecutor {
    jobs: Mutex<Vec<crate::kernel::services::ports::BlockingJob>>,
}

impl DeferredExecutor {
    /// Runs every held job; returns how many ran.
    fn run_all(&self) -> usize {
        let jobs = std::mem::take(&mut *self.jobs.lock().unwrap());
        let count = jobs.len();
        for job in jobs {
            job();
        }
        count
    }
}

impl AsyncExecutor for DeferredExecutor {
    fn spawn_blocking(&self, job: crate::kernel::services::ports::BlockingJob) {
        if let Ok(mut jobs) = self.jobs.lock() {
            jobs.push(job);
        }
    }
}

#[test]
fn reopening_a_stream_disposes_then_recreates() {
    let mut h = harness();
    h.window
        .open_log_stream("my-app-logs", "2024-01-01", true, None, None);
    h.ui.pump();
    assert_eq!(h.host.ids(), vec!["my-app-logs/2024-01-01"]);
    assert_eq!(
        stream_marker(&h.host, "my-app-logs/2024-01-01").as_deref(),
        Some("head")
    );

    h.window
        .open_log_stream("my-app-logs", "2024-01-01", false, Some(5_000), Some(60_000));
    h.ui.pump();

    assert_eq!(h.factory.stream_builds(), 2);
    assert_eq!(h.host.added_count(), 2);
    assert_eq!(h.host.disposed_count(), 1);
    assert_eq!(h.host.count_id("my-app-logs/2024-01-01"), 1);
    assert_eq!(h.factory.released(), 1);
    assert_eq!(
        stream_marker(&h.host, "my-app-logs/2024-01-01").as_deref(),
        Some("tail")
    );

    let requests = h.factory.requests.lock().unwrap();
    assert_eq!(requests[1].start_time, Some(5_000));
    assert_eq!(requests[1].time_scale, Some(60_000));
}

#[test]
fn failed_build_leaves_no_entry_and_can_be_retried() {
    let mut h = harness();
    h.factory.fail.store(true, Ordering::SeqCst);
    h.window.open_log_group("g");
    h.ui.pump();
    assert!(h.ui.registry().is_empty());
    assert_eq!(h.host.tab_count(), 0);
    assert_eq!(h.ui.in_flight(), 0);

    h.factory.fail.store(false, Ordering::SeqCst);
    h.window.open_log_group("g");
    h.ui.pump();
    assert!(h.ui.is_open(&ResourceKey::group("g")));
    assert_eq!(h.host.tab_count(), 1);
}

#[test]
fn panicking_build_is_reported_as_failure() {
    let mut h = harness();
    h.factory.panic.store(true, Ordering::SeqCst);
    h.window.open_log_stream("g", "s", true, None, None);
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| h.ui.pump()));
    // The inline executor runs the job on this thread, so the panic escapes here.
    assert!(result.is_err());

    h.factory.panic.store(false, Ordering::SeqCst);
    h.ui.pump();
    assert_eq!(h.ui.in_flight(), 0);
    assert!(h.ui.registry().is_empty());
}

#[test]
fn host_rejection_releases_the_view() {
    let mut h = harness();
    h.host.reject_next_add("no room");
    h.window.open_log_stream("g", "s", true, None, None);
    h.ui.pump();
    assert!(h.ui.registry().is_empty());
    assert_eq!(h.factory.released(), 1);
}

#[test]
fn user_closing_a_tab_unregisters_it() {
    let mut h = harness();
    h.window.open_log_group("g");
    h.ui.pump();
    assert!(h.host.close_tab(&ResourceKey::group("g")));
    h.ui.pump();

    assert!(h.ui.registry().is_empty());
    assert_eq!(h.factory.released(), 1);

    h.window.open_log_group("g");
    h.ui.pump();
    assert_eq!(h.factory.group_builds(), 2);
    assert_eq!(h.host.tab_count(), 1);
}

#[test]
fn stale_entry_is_treated_as_absent() {
    let mut h = harness();
    h.window.open_log_group("g");
    h.ui.pump();

    // The reopen request is queued ahead of the host's closure report.
    h.window.open_log_group("g");
    h.host.close_tab(&ResourceKey::group("g"));
    h.ui.pump();

    assert_eq!(h.factory.group_builds(), 2);
    assert_eq!(h.host.count_id("g"), 1);
    assert!(h.ui.is_open(&ResourceKey::group("g")));
    assert_eq!(h.factory.released(), 1);
}

#[test]
fn closure_of_a_replaced_tab_does_not_unregister_its_successor() {
    let mut h = harness();
    h.window.open_log_stream("g", "s", true, None, None);
    h.ui.pump();
    let first_seq = h.ui.registry().get(&ResourceKey::stream("g", "s")).map(|v| v.seq());

    h.window.open_log_stream("g", "s", false, None, None);
    h.ui.pump();
    let second_seq = h.ui.registry().get(&ResourceKey::stream("g", "s")).map(|v| v.seq());
    assert_ne!(first_seq, second_seq);

    if let Some(seq) = first_seq {
        h.ui.bus
            .send(UiMessage::TabClosed {
                key: ResourceKey::stream("g", "s"),
                seq,
            })
            .unwrap();
    }
    h.ui.pump();
    assert!(h.ui.is_open(&ResourceKey::stream("g", "s")));
}

#[test]
fn older_stream_build_does_not_replace_newer_one() {
    let mut h = harness();
    h.window.open_log_stream("g", "s", false, None, None);
    h.ui.pump();
    let current = h.ui.registry().get(&ResourceKey::stream("g", "s")).map(|v| v.seq()).unwrap();

    let stale = h
        .factory
        .log_stream(&ProjectContext::new("test"), &StreamRequest::new("g", "s"))
        .unwrap();
    h.ui.in_flight += 1;
    h.ui.bus
        .send(UiMessage::ViewBuilt {
            key: ResourceKey::stream("g", "s"),
            seq: current - 1,
            result: Ok(stale),
        })
        .unwrap();
    h.ui.pump();

    assert_eq!(h.ui.registry().get(&ResourceKey::stream("g", "s")).map(|v| v.seq()), Some(current));
    assert_eq!(stream_marker(&h.host, "g/s").as_deref(), Some("tail"));
    assert_eq!(h.host.count_id("g/s"), 1);
}

#[test]
fn close_and_close_all_dispose_tabs() {
    let mut h = harness();
    h.window.open_log_group("a");
    h.window.open_log_group("b");
    h.window.open_log_stream("a", "s", true, None, None);
    h.ui.pump();
    assert_eq!(h.ui.open_ids(), vec!["a", "a/s", "b"]);

    h.window.close(&ResourceKey::group("b"));
    h.ui.pump();
    assert_eq!(h.ui.open_ids(), vec!["a", "a/s"]);
    assert_eq!(h.host.ids(), vec!["a", "a/s"]);

    h.window.close_all();
    h.ui.pump();
    assert!(h.ui.registry().is_empty());
    assert_eq!(h.host.tab_count(), 0);
    assert_eq!(h.factory.released(), 3);
}

#[test]
fn window_handle_from_ui_posts_to_the_same_queue() {
    let mut h = harness();
    h.ui.window().open_log_group("g");
    assert_eq!(h.ui.window().project().name, "test");
    h.ui.pump();
    assert_eq!(h.host.ids(), vec!["g"]);
}

#[test]
fn run_until_idle_with_inline_executor_finishes_immediately() {
    let mut h = harness();
    h.window.open_log_stream("g", "s", true, None, None);
    assert!(h.ui.run_until_idle(Duration::from_millis(10)));
    assert_eq!(h.host.tab_count(), 1);
}

#[test]
fn group_and_stream_with_the_same_tab_id_coexist() {
    let mut h = harness();
    let group = ResourceKey::group("/aws/lambda/x");
    let stream = ResourceKey::stream("/aws/lambda", "x");

    h.window.open_log_group("/aws/lambda/x");
    h.window.open_log_stream("/aws/lambda", "x", true, None, None);
    h.ui.pump();

    assert_eq!(h.host.count_id("/aws/lambda/x"), 2);
    assert_eq!(h.host.disposed_count(), 0);
    assert!(h.ui.is_open(&group));
    assert!(h.ui.is_open(&stream));
    assert_eq!(h.ui.registry().get(&group).map(|v| v.key()), Some(&group));

    // Reopening the group shows its own tab, not the stream's.
    h.window.open_log_group("/aws/lambda/x");
    h.ui.pump();
    assert_eq!(h.factory.group_builds(), 1);
    assert_eq!(h.host.shown_count(), 1);
    assert_eq!(h.host.active_key(), Some(group.clone()));

    // Closing the stream tab leaves the group registered.
    assert!(h.host.close_tab(&stream));
    h.ui.pump();
    assert!(!h.ui.is_open(&stream));
    assert!(h.ui.is_open(&group));
    assert_eq!(h.host.count_id("/aws/lambda/x"), 1);
}
