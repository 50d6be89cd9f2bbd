//! Service adapters: runtime, filesystem and in-memory implementations.

pub mod factory;
pub mod format;
pub mod i18n;
pub mod memory_host;
pub mod memory_source;
pub mod runtime;
pub mod settings;

pub use factory::{TableOptions, TableViewFactory};
pub use format::ChronoFormatter;
pub use i18n::Messages;
pub use memory_host::{HostedTab, MemoryTabHost};
pub use memory_source::InMemoryLogSource;
pub use runtime::{AsyncRuntime, InlineExecutor};
pub use settings::{
    ensure_log_dir, ensure_settings_file, get_log_dir, get_settings_path, load_settings,
    load_settings_from,
};
