use std::sync::Arc;

use super::columns::{CellRenderer, ColumnInfo, SortValue};
use crate::kernel::services::ports::{DateTimeFormatter, MessageBundle};

/// Rows of `C::Record` projected through a fixed set of columns.
pub struct ListTableModel<C: ColumnInfo> {
    columns: Vec<C>,
    headers: Vec<String>,
    items: Vec<C::Record>,
    formatter: Arc<dyn DateTimeFormatter>,
}

impl<C: ColumnInfo> ListTableModel<C> {
    pub fn new(
        columns: Vec<C>,
        items: Vec<C::Record>,
        formatter: Arc<dyn DateTimeFormatter>,
        messages: &dyn MessageBundle,
    ) -> Self {
        let headers = columns
            .iter()
            .map(|c| messages.message(c.header_key()))
            .collect();
        Self {
            columns,
            headers,
            items,
            formatter,
        }
    }

    pub fn row_count(&self) -> usize {
        self.items.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn column(&self, column: usize) -> Option<C> {
        self.columns.get(column).copied()
    }

    pub fn header(&self, column: usize) -> Option<&str> {
        self.headers.get(column).map(String::as_str)
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn items(&self) -> &[C::Record] {
        &self.items
    }

    pub fn item(&self, row: usize) -> Option<&C::Record> {
        self.items.get(row)
    }

    /// Display text of a cell; empty for out-of-range coordinates.
    pub fn value_at(&self, row: usize, column: usize) -> String {
        match (self.items.get(row), self.columns.get(column)) {
            (Some(item), Some(col)) => col.value_of(item, self.formatter.as_ref()),
            _ => String::new(),
        }
    }

    pub fn sort_value_at(&self, row: usize, column: usize) -> Option<SortValue> {
        let item = self.items.get(row)?;
        let col = self.columns.get(column)?;
        Some(col.sort_value(item))
    }

    pub fn is_cell_editable(&self, row: usize, column: usize) -> bool {
        match (self.items.get(row), self.columns.get(column)) {
            (Some(item), Some(col)) => col.is_cell_editable(item),
            _ => false,
        }
    }

    pub fn renderer(&self, column: usize) -> CellRenderer {
        self.columns
            .get(column)
            .map(|c| c.renderer())
            .unwrap_or(CellRenderer::Plain)
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/table/model.rs"]
mod tests;
