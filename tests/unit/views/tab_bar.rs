use super::*;

fn line(buf: &Buffer) -> String {
    buf.content.iter().map(|c| c.symbol()).collect()
}

/// Cell index where `needle` starts; cells may hold multi-byte symbols.
fn cell_of(buf: &Buffer, needle: &str) -> Option<usize> {
    let symbols: Vec<&str> = buf.content.iter().map(|c| c.symbol()).collect();
    let len = needle.chars().count();
    (0..symbols.len().saturating_sub(len)).find(|&i| symbols[i..i + len].concat() == needle)
}

#[test]
fn renders_every_title_and_highlights_active() {
    let titles = vec!["my-group".to_string(), "stream-1".to_string()];
    let area = Rect::new(0, 0, 40, 1);
    let mut buf = Buffer::empty(area);

    TabBar::new(&titles, Some(1)).render(area, &mut buf);

    let text = line(&buf);
    assert!(text.contains("my-group"));
    assert!(text.contains("stream-1"));

    let active = cell_of(&buf, "stream-1").unwrap();
    assert_eq!(buf.content[active].bg, Color::DarkGray);
    let other = cell_of(&buf, "my-group").unwrap();
    assert_ne!(buf.content[other].bg, Color::DarkGray);
}

#[test]
fn no_tabs_draws_nothing() {
    let area = Rect::new(0, 0, 10, 1);
    let mut buf = Buffer::empty(area);
    TabBar::new(&[], None).render(area, &mut buf);
    assert_eq!(line(&buf).trim(), "");
}
