use std::collections::{BTreeMap, HashMap};

use crate::kernel::services::ports::format::{
    MessageBundle, MSG_LAST_EVENT_TIME, MSG_LOG_STREAMS, MSG_MESSAGE, MSG_TIME, MSG_TOOL_WINDOW,
};

const DEFAULT_MESSAGES: &[(&str, &str)] = &[
    (MSG_TOOL_WINDOW, "CloudWatch Logs"),
    (MSG_LOG_STREAMS, "Log Streams"),
    (MSG_LAST_EVENT_TIME, "Last Event Time"),
    (MSG_TIME, "Time"),
    (MSG_MESSAGE, "Message"),
];

/// English bundle with optional per-key overrides.
#[derive(Debug, Clone)]
pub struct Messages {
    entries: HashMap<String, String>,
}

impl Messages {
    pub fn new() -> Self {
        Self {
            entries: DEFAULT_MESSAGES
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    pub fn with_overrides(overrides: BTreeMap<String, String>) -> Self {
        let mut messages = Self::new();
        messages.entries.extend(overrides);
        messages
    }
}

impl Default for Messages {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageBundle for Messages {
    fn message(&self, key: &str) -> String {
        self.entries
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}
