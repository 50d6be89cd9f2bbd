//! Table model for log views: columns, fixed sort order, wrapped rendering.

pub mod columns;
pub mod model;
pub mod sorter;
pub mod wrap;

use std::sync::Arc;

pub use columns::{CellRenderer, ColumnInfo, EventColumn, SortValue, StreamColumn};
pub use model::ListTableModel;
pub use sorter::{SortKey, SortOrder, TableRowSorter};
pub use wrap::{TableLayout, TableSurface, WrappingCellRenderer, WrappingTextArea};

use crate::core::text_window::truncate_to_width;
use crate::kernel::records::{LogEventRecord, LogStreamRecord};
use crate::kernel::services::ports::{DateTimeFormatter, MessageBundle};

/// Stream list of a log group.
///
/// Always ordered by last event time, newest first; header clicks cannot
/// change the order.
pub struct LogGroupTable {
    model: ListTableModel<StreamColumn>,
    sorter: TableRowSorter,
}

impl LogGroupTable {
    pub const NAME_COLUMN: usize = 0;
    pub const DATE_COLUMN: usize = 1;

    pub fn new(
        streams: Vec<LogStreamRecord>,
        formatter: Arc<dyn DateTimeFormatter>,
        messages: &dyn MessageBundle,
    ) -> Self {
        let model = ListTableModel::new(
            vec![StreamColumn::Name, StreamColumn::LastEventTime],
            streams,
            formatter,
            messages,
        );
        let mut sorter = TableRowSorter::new(model.column_count());
        sorter.set_sort_keys(vec![SortKey {
            column: Self::DATE_COLUMN,
            order: SortOrder::Descending,
        }]);
        sorter.set_sortable(Self::NAME_COLUMN, false);
        sorter.set_sortable(Self::DATE_COLUMN, false);
        Self { model, sorter }
    }

    pub fn model(&self) -> &ListTableModel<StreamColumn> {
        &self.model
    }

    pub fn sorter(&self) -> &TableRowSorter {
        &self.sorter
    }

    pub fn sorter_mut(&mut self) -> &mut TableRowSorter {
        &mut self.sorter
    }

    /// Streams in display order.
    pub fn sorted_streams(&self) -> Vec<&LogStreamRecord> {
        self.sorter
            .view_to_model(&self.model)
            .into_iter()
            .filter_map(|row| self.model.item(row))
            .collect()
    }

    /// Cell text in display order.
    pub fn rows(&self) -> Vec<Vec<String>> {
        self.sorter
            .view_to_model(&self.model)
            .into_iter()
            .map(|row| {
                (0..self.model.column_count())
                    .map(|col| self.model.value_at(row, col))
                    .collect()
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamTableOptions {
    pub wrap_messages: bool,
    pub line_height: u16,
}

impl Default for StreamTableOptions {
    fn default() -> Self {
        Self {
            wrap_messages: true,
            line_height: 1,
        }
    }
}

/// One laid-out row: the lines of every cell plus the row height.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedRow {
    pub cells: Vec<Vec<String>>,
    pub height: u16,
}

/// Event list of a log stream, in fetch order.
pub struct LogStreamTable {
    model: ListTableModel<EventColumn>,
    layout: TableLayout,
    renderer: WrappingCellRenderer,
}

impl LogStreamTable {
    pub const TIME_COLUMN: usize = 0;
    pub const MESSAGE_COLUMN: usize = 1;

    pub fn new(
        events: Vec<LogEventRecord>,
        formatter: Arc<dyn DateTimeFormatter>,
        messages: &dyn MessageBundle,
        options: StreamTableOptions,
    ) -> Self {
        let message = if options.wrap_messages {
            EventColumn::WrappingMessage
        } else {
            EventColumn::Message
        };
        let model = ListTableModel::new(
            vec![EventColumn::Time, message],
            events,
            formatter,
            messages,
        );
        let layout = TableLayout::new(model.column_count(), options.line_height);
        Self {
            model,
            layout,
            renderer: WrappingCellRenderer::new(options.line_height),
        }
    }

    pub fn model(&self) -> &ListTableModel<EventColumn> {
        &self.model
    }

    pub fn layout(&self) -> &TableLayout {
        &self.layout
    }

    pub fn row_height(&self, row: usize) -> u16 {
        self.layout.row_height(row)
    }

    /// Lays out every row for the given column widths, updating row heights.
    pub fn layout_rows(&mut self, widths: &[u16]) -> Vec<RenderedRow> {
        for (col, width) in widths.iter().enumerate() {
            self.layout.set_column_width(col, *width);
        }

        let columns = self.model.column_count();
        let mut rows = Vec::with_capacity(self.model.row_count());
        for row in 0..self.model.row_count() {
            let mut cells = Vec::with_capacity(columns);
            for col in 0..columns {
                let value = self.model.value_at(row, col);
                let lines = match self.model.renderer(col) {
                    CellRenderer::Wrapping => self
                        .renderer
                        .render(&mut self.layout, &value, row, col)
                        .lines()
                        .to_vec(),
                    CellRenderer::Plain => {
                        vec![clip_single_line(&value, self.layout.column_width(col))]
                    }
                };
                cells.push(lines);
            }
            rows.push(RenderedRow {
                cells,
                height: self.layout.row_height(row),
            });
        }
        rows
    }
}

fn clip_single_line(value: &str, width: u16) -> String {
    let flat = value.trim_end().replace(['\r', '\n'], " ");
    let end = truncate_to_width(&flat, width as usize);
    flat[..end].to_string()
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/table/mod.rs"]
mod tests;
