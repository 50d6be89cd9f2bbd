use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, Sender};

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

const LOG_FILE: &str = "cwlogs.log";

pub struct LoggingGuard {
    _guard: WorkerGuard,
    log_dir: PathBuf,
    status_rx: Option<Receiver<String>>,
}

impl LoggingGuard {
    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }

    /// Formatted log lines for the status bar. Can be taken once.
    pub fn take_status_rx(&mut self) -> Option<Receiver<String>> {
        self.status_rx.take()
    }
}

/// Buffers one event and forwards its lines when the event is done.
struct StatusWriter {
    pending: Vec<u8>,
    tx: Sender<String>,
}

impl Write for StatusWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.pending.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for StatusWriter {
    fn drop(&mut self) {
        let text = String::from_utf8_lossy(&self.pending);
        for line in text.lines().filter(|l| !l.trim().is_empty()) {
            let _ = self.tx.send(line.to_string());
        }
    }
}

#[derive(Clone)]
struct SplitMakeWriter {
    file: NonBlocking,
    status: Sender<String>,
}

struct SplitWriter {
    file: NonBlocking,
    status: StatusWriter,
}

impl<'a> MakeWriter<'a> for SplitMakeWriter {
    type Writer = SplitWriter;

    fn make_writer(&'a self) -> Self::Writer {
        SplitWriter {
            file: self.file.make_writer(),
            status: StatusWriter {
                pending: Vec::with_capacity(128),
                tx: self.status.clone(),
            },
        }
    }
}

impl Write for SplitWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.file.write(buf)?;
        let _ = self.status.write_all(&buf[..n]);
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

fn log_dir() -> Option<PathBuf> {
    cwlogs::kernel::services::adapters::ensure_log_dir()
        .or_else(|_| -> io::Result<PathBuf> {
            let dir = std::env::temp_dir().join("cwlogs").join("logs");
            std::fs::create_dir_all(&dir)?;
            Ok(dir)
        })
        .ok()
}

pub fn init() -> Option<LoggingGuard> {
    let log_dir = log_dir()?;

    let appender = tracing_appender::rolling::daily(&log_dir, LOG_FILE);
    let (file, guard) = tracing_appender::non_blocking(appender);
    let (status_tx, status_rx) = mpsc::channel::<String>();
    let writer = SplitMakeWriter {
        file,
        status: status_tx,
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cwlogs=info"));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(writer)
            .with_ansi(false)
            .with_target(true)
            .with_file(true)
            .with_line_number(true),
    );

    if subscriber.try_init().is_err() {
        return None;
    }

    std::panic::set_hook(Box::new(|panic_info| {
        tracing::error!(panic = %panic_info, "panic");
    }));

    tracing::info!(log_dir = %log_dir.display(), "tracing initialized");

    Some(LoggingGuard {
        _guard: guard,
        log_dir,
        status_rx: Some(status_rx),
    })
}
