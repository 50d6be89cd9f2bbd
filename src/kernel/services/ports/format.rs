/// Epoch millis to display text. `None` means the instant cannot be rendered;
/// callers show an empty cell.
pub trait DateTimeFormatter: Send + Sync {
    fn format_date(&self, millis: i64) -> Option<String>;
    fn format_time(&self, millis: i64) -> Option<String>;
    fn format_date_time(&self, millis: i64) -> Option<String>;
}

/// Localized display strings by key. Unknown keys come back unchanged.
pub trait MessageBundle: Send + Sync {
    fn message(&self, key: &str) -> String;
}

pub const MSG_TOOL_WINDOW: &str = "cloudwatch.logs.toolwindow";
pub const MSG_LOG_STREAMS: &str = "cloudwatch.logs.log_streams";
pub const MSG_LAST_EVENT_TIME: &str = "cloudwatch.logs.last_event_time";
pub const MSG_TIME: &str = "general.time";
pub const MSG_MESSAGE: &str = "cloudwatch.logs.message";
