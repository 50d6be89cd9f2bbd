//! Service ports: traits + data contracts.

pub mod error;
pub mod factory;
pub mod format;
pub mod host;
pub mod runtime;
pub mod settings;
pub mod source;
pub mod view;

pub use error::{HostError, SourceError, ViewError};
pub use factory::{LogViewFactory, ProjectContext};
pub use format::{DateTimeFormatter, MessageBundle};
pub use host::{TabClosedNotifier, TabHost, TabSpec, ViewHandle};
pub use runtime::{AsyncExecutor, BlockingJob};
pub use settings::{FormatSettings, RuntimeSettings, Settings, TableSettings};
pub use source::{EventQuery, LogSource};
pub use view::{LogView, ViewContent, ViewResource};
