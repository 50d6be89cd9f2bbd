use std::cmp::Ordering;

use super::columns::ColumnInfo;
use super::model::ListTableModel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    fn apply(self, ord: Ordering) -> Ordering {
        match self {
            SortOrder::Ascending => ord,
            SortOrder::Descending => ord.reverse(),
        }
    }

    fn toggled(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    pub column: usize,
    pub order: SortOrder,
}

/// Maps model rows to display rows.
///
/// Sorting is stable: rows that compare equal keep their model order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRowSorter {
    sort_keys: Vec<SortKey>,
    sortable: Vec<bool>,
}

impl TableRowSorter {
    pub fn new(column_count: usize) -> Self {
        Self {
            sort_keys: Vec::new(),
            sortable: vec![true; column_count],
        }
    }

    pub fn sort_keys(&self) -> &[SortKey] {
        &self.sort_keys
    }

    /// Programmatic; ignores the sortable flags.
    pub fn set_sort_keys(&mut self, keys: Vec<SortKey>) {
        self.sort_keys = keys;
    }

    pub fn set_sortable(&mut self, column: usize, sortable: bool) {
        if let Some(flag) = self.sortable.get_mut(column) {
            *flag = sortable;
        }
    }

    pub fn is_sortable(&self, column: usize) -> bool {
        self.sortable.get(column).copied().unwrap_or(false)
    }

    /// Header click. Returns false when the column refuses user sorting.
    pub fn toggle_sort(&mut self, column: usize) -> bool {
        if !self.is_sortable(column) {
            return false;
        }
        let order = match self.sort_keys.first() {
            Some(key) if key.column == column => key.order.toggled(),
            _ => SortOrder::Ascending,
        };
        self.sort_keys = vec![SortKey { column, order }];
        true
    }

    /// Model row index for every display row.
    pub fn view_to_model<C: ColumnInfo>(&self, model: &ListTableModel<C>) -> Vec<usize> {
        let mut rows: Vec<usize> = (0..model.row_count()).collect();
        if self.sort_keys.is_empty() {
            return rows;
        }
        rows.sort_by(|&a, &b| self.compare(model, a, b));
        rows
    }

    fn compare<C: ColumnInfo>(&self, model: &ListTableModel<C>, a: usize, b: usize) -> Ordering {
        for key in &self.sort_keys {
            let ord = model
                .sort_value_at(a, key.column)
                .cmp(&model.sort_value_at(b, key.column));
            let ord = key.order.apply(ord);
            if ord != Ordering::Equal {
                return ord;
            }
        }
        Ordering::Equal
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/table/sorter.rs"]
mod tests;
