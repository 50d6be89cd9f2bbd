use super::*;

#[test]
fn layout_defaults_row_height() {
    let layout = TableLayout::new(2, 1);
    assert_eq!(layout.row_height(0), 1);
    assert_eq!(layout.row_height(100), 1);
    assert_eq!(layout.column_width(5), 0);
}

#[test]
fn render_grows_the_row_to_fit_wrapped_text() {
    let mut layout = TableLayout::new(2, 1);
    layout.set_column_width(1, 10);
    let mut renderer = WrappingCellRenderer::new(1);

    let area = renderer.render(&mut layout, "the quick brown fox", 3, 1);
    assert_eq!(area.lines(), &["the quick", "brown fox"]);
    assert_eq!(layout.row_height(3), 2);
    assert_eq!(layout.row_height(2), 1);
}

#[test]
fn render_trims_trailing_whitespace() {
    let mut layout = TableLayout::new(1, 1);
    layout.set_column_width(0, 40);
    let mut renderer = WrappingCellRenderer::new(1);

    let area = renderer.render(&mut layout, "done\n\n   \n", 0, 0);
    assert_eq!(area.text(), "done");
    assert_eq!(area.lines(), &["done"]);
    assert_eq!(layout.row_height(0), 1);
}

#[test]
fn empty_message_keeps_a_one_line_row() {
    let mut layout = TableLayout::new(1, 2);
    layout.set_column_width(0, 5);
    layout.set_row_height(0, 9);
    let mut renderer = WrappingCellRenderer::new(2);

    let area = renderer.render(&mut layout, "", 0, 0);
    assert_eq!(area.lines(), &[String::new()]);
    assert_eq!(layout.row_height(0), 2);
}

#[test]
fn line_height_scales_row_height() {
    let mut layout = TableLayout::new(1, 3);
    layout.set_column_width(0, 4);
    let mut renderer = WrappingCellRenderer::new(3);
    renderer.render(&mut layout, "aaaa bbbb cccc", 0, 0);
    assert_eq!(layout.row_height(0), 9);
}

#[test]
fn resizing_the_column_reflows_on_next_render() {
    let mut layout = TableLayout::new(1, 1);
    let mut renderer = WrappingCellRenderer::new(1);
    let text = "one two three four five six";

    layout.set_column_width(0, 9);
    renderer.render(&mut layout, text, 0, 0);
    let narrow = layout.row_height(0);

    layout.set_column_width(0, 40);
    renderer.render(&mut layout, text, 0, 0);
    assert!(layout.row_height(0) < narrow);
    assert_eq!(layout.row_height(0), 1);
}

#[test]
fn row_height_never_grows_as_width_increases() {
    let text = "java.lang.IllegalStateException: connection pool exhausted after 30000ms \
                (active=64, idle=0, waiting=12) at com.example.db.Pool.acquire(Pool.java:118)";
    let mut layout = TableLayout::new(1, 1);
    let mut renderer = WrappingCellRenderer::new(1);
    let mut prev = u16::MAX;
    for width in 1..=160u16 {
        layout.set_column_width(0, width);
        renderer.render(&mut layout, text, 0, 0);
        let height = layout.row_height(0);
        assert!(height <= prev, "width {width}: {height} > {prev}");
        prev = height;
    }
}

struct RecordingSurface {
    width: u16,
    height: u16,
    writes: usize,
}

impl TableSurface for RecordingSurface {
    fn column_width(&self, _column: usize) -> u16 {
        self.width
    }

    fn row_height(&self, _row: usize) -> u16 {
        self.height
    }

    fn set_row_height(&mut self, _row: usize, height: u16) {
        self.height = height;
        self.writes += 1;
    }
}

#[test]
fn row_height_is_only_written_when_it_changes() {
    let mut surface = RecordingSurface {
        width: 20,
        height: 1,
        writes: 0,
    };
    let mut renderer = WrappingCellRenderer::new(1);

    renderer.render(&mut surface, "short", 0, 0);
    assert_eq!(surface.writes, 0);

    renderer.render(&mut surface, "a message that is longer than twenty", 0, 0);
    assert_eq!(surface.writes, 1);
    assert_eq!(surface.height, 2);

    renderer.render(&mut surface, "a message that is longer than twenty", 0, 0);
    assert_eq!(surface.writes, 1);
}
