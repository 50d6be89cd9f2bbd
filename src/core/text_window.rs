//! Width-aware text helpers for fixed-width table cells.
//!
//! Widths are terminal cells (Unicode display width). Split points always land
//! on grapheme boundaries, so a returned byte offset is a valid `str` index.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Returns how many bytes from the start of `s` fit into `max_width` cells.
pub fn truncate_to_width(s: &str, max_width: usize) -> usize {
    if max_width == 0 || s.is_empty() {
        return 0;
    }

    let mut used = 0usize;
    let mut end = 0usize;
    for (idx, g) in s.grapheme_indices(true) {
        let w = UnicodeWidthStr::width(g);
        if used + w > max_width {
            break;
        }
        used += w;
        end = idx + g.len();
    }

    end
}

/// Like [`truncate_to_width`], but always consumes at least one grapheme so
/// that hard-breaking a word can never stall on a glyph wider than the cell.
fn split_at_width(s: &str, max_width: usize) -> usize {
    let end = truncate_to_width(s, max_width);
    if end > 0 {
        return end;
    }
    s.graphemes(true).next().map(str::len).unwrap_or(0)
}

/// Cells a tab expands to when wrapping.
pub const TAB_WIDTH: usize = 4;

/// Greedy word wrap of `text` into lines no wider than `max_width` cells.
///
/// - `\n` always starts a new line; an empty paragraph yields an empty line.
/// - Whitespace is kept as written (tabs expand to [`TAB_WIDTH`] spaces),
///   except at a wrap point, where it is dropped, and at the end of a line.
/// - A word wider than the line is broken at grapheme boundaries.
///
/// The result is never empty: an empty input wraps to a single empty line.
pub fn wrap_to_width(text: &str, max_width: usize) -> Vec<String> {
    let max_width = max_width.max(1);
    let mut out = Vec::new();
    for paragraph in text.split('\n') {
        let paragraph = paragraph.trim_end_matches('\r');
        if paragraph.contains('\t') {
            let expanded = paragraph.replace('\t', &" ".repeat(TAB_WIDTH));
            wrap_paragraph(&expanded, max_width, &mut out);
        } else {
            wrap_paragraph(paragraph, max_width, &mut out);
        }
    }
    out
}

/// Splits `line` into alternating runs of whitespace and non-whitespace.
fn runs(line: &str) -> impl Iterator<Item = (bool, &str)> {
    let mut rest = line;
    std::iter::from_fn(move || {
        let first = rest.chars().next()?;
        let space = first.is_whitespace();
        let end = rest
            .char_indices()
            .find(|(_, c)| c.is_whitespace() != space)
            .map(|(idx, _)| idx)
            .unwrap_or(rest.len());
        let (run, tail) = rest.split_at(end);
        rest = tail;
        Some((space, run))
    })
}

/// Lines in progress for one paragraph.
struct LineBuilder<'a> {
    out: &'a mut Vec<String>,
    current: String,
    used: usize,
    has_word: bool,
}

impl LineBuilder<'_> {
    fn push(&mut self, text: &str, width: usize) {
        self.current.push_str(text);
        self.used += width;
    }

    fn finish_line(&mut self) {
        let line = std::mem::take(&mut self.current);
        self.out.push(line.trim_end().to_string());
        self.used = 0;
        self.has_word = false;
    }
}

fn wrap_paragraph(line: &str, max_width: usize, out: &mut Vec<String>) {
    let start_len = out.len();
    let mut b = LineBuilder {
        out,
        current: String::new(),
        used: 0,
        has_word: false,
    };

    for (space, run) in runs(line) {
        if space {
            let w = display_width(run);
            if b.used + w <= max_width {
                b.push(run, w);
            } else if b.has_word {
                // Whitespace at a wrap point is dropped.
                b.finish_line();
            } else {
                // Indentation wider than the line is clipped.
                let end = truncate_to_width(run, max_width - b.used);
                b.push(&run[..end], display_width(&run[..end]));
            }
            continue;
        }

        let mut rest = run;
        while !rest.is_empty() {
            let w = display_width(rest);
            if b.used + w <= max_width {
                b.push(rest, w);
                b.has_word = true;
                break;
            }
            if b.has_word {
                b.finish_line();
                continue;
            }

            let room = max_width - b.used;
            if b.used > 0 && truncate_to_width(rest, room) == 0 {
                // Not even one glyph fits after the indentation.
                b.current.clear();
                b.used = 0;
                continue;
            }
            let end = split_at_width(rest, room);
            b.push(&rest[..end], 0);
            b.finish_line();
            rest = &rest[end..];
        }
    }

    if b.has_word || b.out.len() == start_len {
        b.finish_line();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core/text_window.rs"]
mod tests;
