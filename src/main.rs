//! Terminal demo: log group and log stream tabs over in-memory data.
//!
//! Keys: `q` quit, `Tab` next tab, `g` reopen the group, `1`-`9` open a
//! stream, `r` reopen the active stream from the other end, `c` close the
//! active tab, `+`/`-` narrow or widen the message column.

use std::io;
use std::sync::mpsc::Receiver;
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::{Frame, Terminal};

use cwlogs::kernel::services::adapters::{
    ensure_settings_file, load_settings, AsyncRuntime, ChronoFormatter, InMemoryLogSource,
    MemoryTabHost, Messages, TableOptions, TableViewFactory,
};
use cwlogs::kernel::services::ports::format::MSG_TOOL_WINDOW;
use cwlogs::kernel::services::ports::{MessageBundle, ProjectContext};
use cwlogs::kernel::{log_window, LogEventRecord, LogWindow, LogWindowUi, StreamRequest};
use cwlogs::tui::{restore_on_panic, TerminalGuard};
use cwlogs::views::{LogTableWidget, TabBar};

mod logging;

const DEFAULT_GROUP: &str = "my-app-logs";
const DEMO_STREAMS: &[&str] = &["web-1", "web-2", "worker"];
const POLL_INTERVAL: Duration = Duration::from_millis(100);

struct App {
    title: String,
    group: String,
    window: LogWindow,
    ui: LogWindowUi,
    host: MemoryTabHost,
    status_rx: Option<Receiver<String>>,
    status: String,
    shrink: u16,
    tail_first: bool,
}

impl App {
    fn drain_status(&mut self) {
        let Some(rx) = &self.status_rx else {
            return;
        };
        while let Ok(line) = rx.try_recv() {
            self.status = line;
        }
    }

    fn active_stream(&self) -> Option<StreamRequest> {
        let key = self.host.active_key()?;
        let stream = key.stream_name()?;
        Some(StreamRequest::new(key.group_name(), stream))
    }

    /// Returns false when the app should exit.
    fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return false,
            KeyCode::Tab => self.host.activate_next(),
            KeyCode::Char('g') => self.window.open_log_group(self.group.clone()),
            KeyCode::Char(c @ '1'..='9') => {
                let idx = c as usize - '1' as usize;
                if let Some(stream) = DEMO_STREAMS.get(idx) {
                    self.window
                        .open_stream(StreamRequest::new(self.group.clone(), *stream));
                }
            }
            KeyCode::Char('r') => {
                if let Some(request) = self.active_stream() {
                    self.tail_first = !self.tail_first;
                    self.window
                        .open_stream(request.from_head(!self.tail_first));
                }
            }
            KeyCode::Char('c') => {
                if let Some(key) = self.host.active_key() {
                    self.window.close(&key);
                }
            }
            KeyCode::Char('+') => self.shrink = self.shrink.saturating_add(1),
            KeyCode::Char('-') => self.shrink = self.shrink.saturating_sub(1),
            _ => {}
        }
        true
    }

    fn draw(&self, frame: &mut Frame) {
        let outer = Block::default().borders(Borders::TOP).title(self.title.as_str());
        let inner = outer.inner(frame.area());
        frame.render_widget(outer, frame.area());

        let areas = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(inner);

        let titles = self.host.titles();
        frame.render_widget(TabBar::new(&titles, self.host.active_index()), areas[0]);

        let drawn = self.host.with_active_mut(|tab| {
            frame.render_widget(
                LogTableWidget::new(tab.title, tab.content).shrink(self.shrink),
                areas[1],
            );
        });
        if drawn.is_none() {
            draw_placeholder(frame, areas[1], self.ui.in_flight() > 0);
        }

        let status = Paragraph::new(Line::from(self.status.as_str()))
            .style(Style::default().add_modifier(Modifier::DIM));
        frame.render_widget(status, areas[2]);
    }
}

fn draw_placeholder(frame: &mut Frame, area: Rect, loading: bool) {
    let text = if loading {
        "Loading..."
    } else {
        "No log tabs open. Press g to open the log group."
    };
    frame.render_widget(Paragraph::new(text), area);
}

fn demo_source(group: &str, now: i64) -> InMemoryLogSource {
    let minute = 60_000;
    let long = "GET /api/v1/orders?status=pending&limit=50 200 142ms \
                user-agent=Mozilla/5.0 (X11; Linux x86_64) request-id=9f2c1a7e";
    InMemoryLogSource::new()
        .with_stream(
            group,
            "web-1",
            (0..40)
                .map(|i| {
                    let message = if i % 5 == 0 {
                        long.to_string()
                    } else {
                        format!("handled request #{i}")
                    };
                    LogEventRecord::new(message, Some(now - (40 - i) * minute))
                })
                .collect(),
        )
        .with_stream(
            group,
            "web-2",
            vec![
                LogEventRecord::new("server started on :8080", Some(now - 90 * minute)),
                LogEventRecord::new("health check ok", Some(now - 30 * minute)),
            ],
        )
        .with_stream(
            group,
            "worker",
            vec![
                LogEventRecord::new("job queue drained", Some(now - 5 * minute)),
                LogEventRecord::new("heartbeat without timestamp", None),
            ],
        )
        .with_stream(group, "empty", Vec::new())
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        app.ui.pump();
        app.drain_status();
        terminal.draw(|frame| app.draw(frame))?;

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press && !app.handle_key(key.code) {
                return Ok(());
            }
        }
    }
}

fn main() -> io::Result<()> {
    let mut logging = logging::init();
    let status_rx = logging.as_mut().and_then(|guard| guard.take_status_rx());

    if let Err(e) = ensure_settings_file() {
        tracing::warn!(error = %e, "could not create settings file");
    }
    let settings = load_settings().unwrap_or_default();
    let group = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_GROUP.to_string());

    let runtime = Arc::new(AsyncRuntime::new(settings.runtime.worker_threads)?);
    let now = chrono::Utc::now().timestamp_millis();
    let messages = Arc::new(Messages::with_overrides(settings.messages.clone()));
    let title = messages.message(MSG_TOOL_WINDOW);
    let factory = Arc::new(TableViewFactory::new(
        demo_source(&group, now),
        Arc::new(ChronoFormatter::new(settings.format.clone())),
        messages,
        TableOptions::from_settings(&settings.table),
    ));
    let host = MemoryTabHost::new();
    let (window, ui) = log_window(
        ProjectContext::new("demo"),
        Box::new(host.clone()),
        factory,
        runtime.clone(),
    );

    window.open_log_group(group.clone());
    window.open_stream(StreamRequest::new(group.clone(), DEMO_STREAMS[0]).from_head(false));

    let guard = TerminalGuard::new()?;
    restore_on_panic(guard.restorer());
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let mut app = App {
        title,
        group,
        window,
        ui,
        host,
        status_rx,
        status: String::new(),
        shrink: 0,
        tail_first: true,
    };
    let result = run(&mut terminal, &mut app);

    app.window.close_all();
    app.ui.pump();
    drop(guard);
    result
}
