//! Directory listing widget.
//!
//! Draws the rows produced by the navigator with the name on the left and
//! the size right-aligned.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::ui::colors::ColorScheme;
use crate::view::Row;

/// Width reserved for the size column ("1023.9 GB").
const SIZE_WIDTH: usize = 9;

/// Truncate a string to at most `max_width` terminal columns.
fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let (budget, ellipsis) = if max_width > 3 {
        (max_width - 3, "...")
    } else {
        (max_width, "")
    };

    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push_str(ellipsis);
    out
}

/// Render the listing inside a bordered block titled `title`.
pub fn render_listing(frame: &mut Frame, area: Rect, rows: &[Row], title: &str, colors: &ColorScheme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .title(format!(" {} ", title));

    if rows.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "(empty)",
            Style::default().fg(colors.hint_fg),
        )))
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let inner_width = area.width.saturating_sub(2) as usize;
    let items: Vec<ListItem> = rows
        .iter()
        .map(|row| ListItem::new(build_row_line(row, inner_width, colors)))
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

/// Build a single line: padded name, a gap, right-aligned size.
fn build_row_line(row: &Row, width: usize, colors: &ColorScheme) -> Line<'static> {
    let size_width = SIZE_WIDTH.min(width);
    let name_width = width.saturating_sub(size_width + 1);

    let name = truncate_to_width(&row.name, name_width);
    let padding = name_width.saturating_sub(name.width());
    let size = format!(" {:>w$}", row.size, w = size_width);

    let name_fg = if row.is_directory { colors.dirs } else { colors.text };
    let (name_style, size_style) = if row.highlighted {
        let selected = if colors.is_monochrome() {
            Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD)
        } else {
            Style::default()
                .fg(colors.selected_fg)
                .bg(colors.selected_bg)
                .add_modifier(Modifier::BOLD)
        };
        (selected, selected)
    } else {
        let mut name_style = Style::default().fg(name_fg);
        if row.is_directory {
            name_style = name_style.add_modifier(Modifier::BOLD);
        }
        (name_style, Style::default().fg(colors.size_fg))
    };

    Line::from(vec![
        Span::styled(format!("{}{}", name, " ".repeat(padding)), name_style),
        Span::styled(size, size_style),
    ])
}
