use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Tabs, Widget};

/// One line strip with a title per open tab.
pub struct TabBar<'a> {
    titles: &'a [String],
    active: Option<usize>,
}

impl<'a> TabBar<'a> {
    pub fn new(titles: &'a [String], active: Option<usize>) -> Self {
        Self { titles, active }
    }
}

impl Widget for TabBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.titles.is_empty() || area.height == 0 {
            return;
        }
        Tabs::new(self.titles.iter().map(String::as_str))
            .select(self.active.unwrap_or(0))
            .highlight_style(Style::default().bg(Color::DarkGray))
            .render(area, buf);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/views/tab_bar.rs"]
mod tests;
