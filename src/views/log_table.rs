use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Text;
use ratatui::widgets::{Block, Borders, Cell, Row, Table, Widget};
use unicode_width::UnicodeWidthStr;

use crate::kernel::services::ports::ViewContent;
use crate::kernel::table::{LogGroupTable, LogStreamTable};

const COLUMN_SPACING: u16 = 1;

/// Widths for a two column table: the fixed column fits its widest value
/// (header included), the other one takes what is left.
///
/// `shrink` is taken off the remaining column so a margin can sit next to it.
pub fn fit_column_widths<'a>(
    header: &str,
    values: impl IntoIterator<Item = &'a str>,
    total: u16,
    shrink: u16,
) -> [u16; 2] {
    let fixed = values
        .into_iter()
        .map(UnicodeWidthStr::width)
        .chain(std::iter::once(header.width()))
        .max()
        .unwrap_or(0)
        .min(total as usize) as u16;
    let rest = total
        .saturating_sub(fixed)
        .saturating_sub(COLUMN_SPACING)
        .saturating_sub(shrink);
    [fixed, rest]
}

/// Draws the body of one log tab.
pub struct LogTableWidget<'a> {
    title: &'a str,
    content: &'a mut ViewContent,
    shrink: u16,
}

impl<'a> LogTableWidget<'a> {
    pub fn new(title: &'a str, content: &'a mut ViewContent) -> Self {
        Self {
            title,
            content,
            shrink: 0,
        }
    }

    pub fn shrink(mut self, columns: u16) -> Self {
        self.shrink = columns;
        self
    }
}

impl Widget for LogTableWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::ALL).title(self.title);
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let (headers, rows, widths) = match self.content {
            ViewContent::Group(table) => group_rows(table, inner.width, self.shrink),
            ViewContent::Stream(table) => stream_rows(table, inner.width, self.shrink),
        };

        let header = Row::new(headers).style(Style::default().add_modifier(Modifier::BOLD));
        Table::new(rows, widths.map(Constraint::Length))
            .header(header)
            .column_spacing(COLUMN_SPACING)
            .render(inner, buf);
    }
}

type Laid = (Vec<String>, Vec<Row<'static>>, [u16; 2]);

fn group_rows(table: &LogGroupTable, width: u16, shrink: u16) -> Laid {
    let headers = table.model().headers().to_vec();
    let cells = table.rows();

    // Date is the fixed column; the stream name gets the rest.
    let date_header = headers
        .get(LogGroupTable::DATE_COLUMN)
        .map(String::as_str)
        .unwrap_or_default();
    let [date, name] = fit_column_widths(
        date_header,
        cells
            .iter()
            .filter_map(|row| row.get(LogGroupTable::DATE_COLUMN))
            .map(String::as_str),
        width,
        shrink,
    );

    let rows = cells.into_iter().map(Row::new).collect();
    (headers, rows, [name, date])
}

fn stream_rows(table: &mut LogStreamTable, width: u16, shrink: u16) -> Laid {
    let headers = table.model().headers().to_vec();
    let times: Vec<String> = (0..table.model().row_count())
        .map(|row| table.model().value_at(row, LogStreamTable::TIME_COLUMN))
        .collect();
    let time_header = headers
        .get(LogStreamTable::TIME_COLUMN)
        .map(String::as_str)
        .unwrap_or_default();
    let widths = fit_column_widths(time_header, times.iter().map(String::as_str), width, shrink);

    let rows = table
        .layout_rows(&widths)
        .into_iter()
        .map(|rendered| {
            let cells = rendered
                .cells
                .into_iter()
                .map(|lines| Cell::from(Text::from(lines.join("\n"))));
            Row::new(cells).height(rendered.height.max(1))
        })
        .collect();
    (headers, rows, widths)
}

#[cfg(test)]
#[path = "../../tests/unit/views/log_table.rs"]
mod tests;
