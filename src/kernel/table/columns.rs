//! Column kinds of the log tables.
//!
//! Columns are stateless `Copy` values; the same column can back any number
//! of tables. Every column is read-only.

use crate::kernel::records::{LogEventRecord, LogStreamRecord};
use crate::kernel::services::ports::format::{
    DateTimeFormatter, MSG_LAST_EVENT_TIME, MSG_LOG_STREAMS, MSG_MESSAGE, MSG_TIME,
};

/// How a column's cells are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellRenderer {
    /// Single line, clipped at the column edge.
    Plain,
    /// Word-wrapped; the row grows to fit (see `WrappingCellRenderer`).
    Wrapping,
}

/// Value a row is sorted by.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortValue {
    Text(String),
    /// Missing timestamps order before every present one.
    Time(Option<i64>),
}

pub trait ColumnInfo: Copy {
    type Record;

    /// Localization key of the header.
    fn header_key(self) -> &'static str;

    fn value_of(self, item: &Self::Record, formatter: &dyn DateTimeFormatter) -> String;

    fn sort_value(self, item: &Self::Record) -> SortValue;

    fn renderer(self) -> CellRenderer {
        CellRenderer::Plain
    }

    fn is_cell_editable(self, _item: &Self::Record) -> bool {
        false
    }
}

/// Columns of the stream list shown for a log group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamColumn {
    Name,
    LastEventTime,
}

impl ColumnInfo for StreamColumn {
    type Record = LogStreamRecord;

    fn header_key(self) -> &'static str {
        match self {
            StreamColumn::Name => MSG_LOG_STREAMS,
            StreamColumn::LastEventTime => MSG_LAST_EVENT_TIME,
        }
    }

    fn value_of(self, item: &LogStreamRecord, formatter: &dyn DateTimeFormatter) -> String {
        match self {
            StreamColumn::Name => item.name.clone(),
            StreamColumn::LastEventTime => item
                .last_event_timestamp
                .and_then(|ts| formatter.format_date_time(ts))
                .unwrap_or_default(),
        }
    }

    fn sort_value(self, item: &LogStreamRecord) -> SortValue {
        match self {
            StreamColumn::Name => SortValue::Text(item.name.clone()),
            StreamColumn::LastEventTime => SortValue::Time(item.last_event_timestamp),
        }
    }
}

/// Columns of the event list shown for a log stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventColumn {
    Time,
    Message,
    WrappingMessage,
}

impl ColumnInfo for EventColumn {
    type Record = LogEventRecord;

    fn header_key(self) -> &'static str {
        match self {
            EventColumn::Time => MSG_TIME,
            EventColumn::Message | EventColumn::WrappingMessage => MSG_MESSAGE,
        }
    }

    fn value_of(self, item: &LogEventRecord, formatter: &dyn DateTimeFormatter) -> String {
        match self {
            EventColumn::Time => item
                .timestamp
                .and_then(|ts| {
                    let date = formatter.format_date(ts)?;
                    let time = formatter.format_time(ts)?;
                    Some(format!("{} {}", date, time))
                })
                .unwrap_or_default(),
            EventColumn::Message | EventColumn::WrappingMessage => item.message.clone(),
        }
    }

    fn sort_value(self, item: &LogEventRecord) -> SortValue {
        match self {
            EventColumn::Time => SortValue::Time(item.timestamp),
            EventColumn::Message | EventColumn::WrappingMessage => {
                SortValue::Text(item.message.clone())
            }
        }
    }

    fn renderer(self) -> CellRenderer {
        match self {
            EventColumn::WrappingMessage => CellRenderer::Wrapping,
            EventColumn::Time | EventColumn::Message => CellRenderer::Plain,
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/table/columns.rs"]
mod tests;
