//! Log records as fetched from the log service. Immutable once fetched.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogStreamRecord {
    pub name: String,
    /// Epoch millis of the newest event in the stream.
    pub last_event_timestamp: Option<i64>,
}

impl LogStreamRecord {
    pub fn new(name: impl Into<String>, last_event_timestamp: Option<i64>) -> Self {
        Self {
            name: name.into(),
            last_event_timestamp,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEventRecord {
    pub message: String,
    /// Epoch millis.
    pub timestamp: Option<i64>,
}

impl LogEventRecord {
    pub fn new(message: impl Into<String>, timestamp: Option<i64>) -> Self {
        Self {
            message: message.into(),
            timestamp,
        }
    }
}
