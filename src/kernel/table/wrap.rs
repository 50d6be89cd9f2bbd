//! Word-wrapping message cells with rows that grow to fit.

use crate::core::text_window::wrap_to_width;

/// The geometry of a rendered table, as seen by a cell renderer.
pub trait TableSurface {
    fn column_width(&self, column: usize) -> u16;
    fn row_height(&self, row: usize) -> u16;
    fn set_row_height(&mut self, row: usize, height: u16);
}

/// Column widths and per-row heights of one table instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableLayout {
    column_widths: Vec<u16>,
    row_heights: Vec<u16>,
    default_row_height: u16,
}

impl TableLayout {
    pub fn new(column_count: usize, default_row_height: u16) -> Self {
        Self {
            column_widths: vec![0; column_count],
            row_heights: Vec::new(),
            default_row_height: default_row_height.max(1),
        }
    }

    pub fn set_column_width(&mut self, column: usize, width: u16) {
        if let Some(w) = self.column_widths.get_mut(column) {
            *w = width;
        }
    }

    pub fn column_widths(&self) -> &[u16] {
        &self.column_widths
    }

    pub fn default_row_height(&self) -> u16 {
        self.default_row_height
    }
}

impl TableSurface for TableLayout {
    fn column_width(&self, column: usize) -> u16 {
        self.column_widths.get(column).copied().unwrap_or(0)
    }

    fn row_height(&self, row: usize) -> u16 {
        self.row_heights
            .get(row)
            .copied()
            .unwrap_or(self.default_row_height)
    }

    fn set_row_height(&mut self, row: usize, height: u16) {
        if row >= self.row_heights.len() {
            self.row_heights.resize(row + 1, self.default_row_height);
        }
        self.row_heights[row] = height;
    }
}

/// Text surface that lays its text out in lines of at most `width` cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WrappingTextArea {
    text: String,
    width: u16,
    lines: Vec<String>,
}

impl WrappingTextArea {
    pub fn set_text(&mut self, text: &str) {
        if self.text != text {
            self.text.clear();
            self.text.push_str(text);
            self.relayout();
        }
    }

    pub fn set_width(&mut self, width: u16) {
        if self.width != width || self.lines.is_empty() {
            self.width = width;
            self.relayout();
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn preferred_height(&self, line_height: u16) -> u16 {
        let lines = u16::try_from(self.lines.len().max(1)).unwrap_or(u16::MAX);
        lines.saturating_mul(line_height.max(1))
    }

    fn relayout(&mut self) {
        self.lines = wrap_to_width(&self.text, self.width as usize);
    }
}

/// Renders message cells word-wrapped to the column width.
///
/// Every render re-measures the text against the current column width and
/// writes the resulting height back to the row, so resizing a column reflows
/// its rows on the next paint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WrappingCellRenderer {
    area: WrappingTextArea,
    line_height: u16,
}

impl WrappingCellRenderer {
    pub fn new(line_height: u16) -> Self {
        Self {
            area: WrappingTextArea::default(),
            line_height: line_height.max(1),
        }
    }

    pub fn line_height(&self) -> u16 {
        self.line_height.max(1)
    }

    pub fn render(
        &mut self,
        table: &mut dyn TableSurface,
        value: &str,
        row: usize,
        column: usize,
    ) -> &WrappingTextArea {
        self.area.set_text(value.trim_end());
        self.area.set_width(table.column_width(column));
        let height = self.area.preferred_height(self.line_height());
        if table.row_height(row) != height {
            table.set_row_height(row, height);
        }
        &self.area
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/table/wrap.rs"]
mod tests;
