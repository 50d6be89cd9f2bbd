use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub format: FormatSettings,
    #[serde(default)]
    pub table: TableSettings,
    #[serde(default)]
    pub runtime: RuntimeSettings,
    /// Localization overrides, message key -> text.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub messages: BTreeMap<String, String>,
}

/// chrono `strftime` patterns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatSettings {
    pub date: String,
    pub time: String,
    pub date_time: String,
    /// Render in UTC instead of the local zone.
    pub utc: bool,
    /// POSIX locale name such as `de_DE`. Day and month names and the
    /// `%x`/`%X`/`%c` patterns follow it; unset means C-locale output.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

impl Default for FormatSettings {
    fn default() -> Self {
        Self {
            date: "%Y-%m-%d".to_string(),
            time: "%H:%M:%S".to_string(),
            date_time: "%Y-%m-%d %H:%M:%S".to_string(),
            utc: false,
            locale: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableSettings {
    /// Events fetched per stream view.
    pub page_size: usize,
    /// Cells per wrapped message line.
    pub line_height: u16,
    pub wrap_messages: bool,
}

impl Default for TableSettings {
    fn default() -> Self {
        Self {
            page_size: 500,
            line_height: 1,
            wrap_messages: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeSettings {
    pub worker_threads: usize,
}

impl Default for RuntimeSettings {
    fn default() -> Self {
        Self { worker_threads: 2 }
    }
}
