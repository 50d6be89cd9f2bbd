//! Headless log window core.

pub mod records;
pub mod resource;
pub mod services;
pub mod table;
pub mod tabs;
pub mod window;

pub use records::{LogEventRecord, LogStreamRecord};
pub use resource::{ResourceKey, StreamRequest, ViewRequest};
pub use tabs::{OpenView, TabRegistry};
pub use window::{log_window, LogWindow, LogWindowUi};
