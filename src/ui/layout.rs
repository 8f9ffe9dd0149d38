//! Main UI layout and rendering for the liberator browser.
//!
//! The screen is the listing, a one-line status bar with the current path,
//! and a one-line footer with either the last error or key hints.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::App;
use crate::ui::colors::ColorScheme;
use crate::ui::listing::render_listing;

/// Application name.
const APP_NAME: &str = "liberator";

/// Key bindings shown in the footer and help overlay.
const KEY_HINTS: [(&str, &str); 6] = [
    ("j/k", "move"),
    ("enter", "open"),
    ("h", "up"),
    ("x", "delete"),
    ("?", "help"),
    ("q", "quit"),
];

/// Main render function that draws the entire UI.
///
/// The listing height is taken from the frame each call, so the navigator
/// re-windows on resize.
pub fn render_ui(frame: &mut Frame, app: &mut App) {
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Listing (borders + at least one row)
            Constraint::Length(1), // Status bar
            Constraint::Length(1), // Footer
        ])
        .split(frame.area());

    let max_rows = main_layout[0].height.saturating_sub(2) as usize;
    let (rows, status) = app.navigator.view(max_rows);

    render_listing(frame, main_layout[0], &rows, APP_NAME, &app.color_scheme);
    render_status_bar(frame, main_layout[1], &status, app);
    render_footer(frame, main_layout[2], app);

    if app.show_help {
        render_help_overlay(frame, frame.area(), &app.color_scheme);
    }
}

fn render_status_bar(frame: &mut Frame, area: Rect, status: &str, app: &App) {
    let colors = &app.color_scheme;
    let count = app.navigator.entries().len();
    let position = if count == 0 {
        "0/0".to_string()
    } else {
        format!("{}/{}", app.navigator.selected_index() + 1, count)
    };

    let path_width = (area.width as usize).saturating_sub(position.len() + 2);
    let path = truncate_path(status, path_width);
    let gap = (area.width as usize).saturating_sub(path.chars().count() + position.len() + 1);

    let line = Line::from(vec![
        Span::styled(
            format!(" {}", path),
            Style::default().fg(colors.path_fg).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" ".repeat(gap)),
        Span::styled(position, Style::default().fg(colors.status_fg)),
    ]);

    frame.render_widget(
        Paragraph::new(line).style(Style::default().bg(colors.status_bg)),
        area,
    );
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let colors = &app.color_scheme;

    let line = match &app.last_error {
        Some(message) => Line::from(Span::styled(
            format!(" {}", message),
            Style::default().fg(colors.error_fg),
        )),
        None => {
            let mut spans = vec![Span::raw(" ")];
            for (key, action) in KEY_HINTS {
                spans.push(Span::styled(key, Style::default().fg(colors.key_fg)));
                spans.push(Span::styled(
                    format!(" {}  ", action),
                    Style::default().fg(colors.hint_fg),
                ));
            }
            Line::from(spans)
        }
    };

    frame.render_widget(Paragraph::new(line), area);
}

fn render_help_overlay(frame: &mut Frame, area: Rect, colors: &ColorScheme) {
    let width = 36.min(area.width);
    let height = (KEY_HINTS.len() as u16 + 4).min(area.height);
    let popup = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    };

    let mut lines = vec![Line::raw("")];
    for (key, action) in KEY_HINTS {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<8}", key), Style::default().fg(colors.key_fg)),
            Span::styled(action, Style::default().fg(colors.text)),
        ]));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .title(" Keys ");

    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

/// Keep the end of a path, which is the part that changes while browsing.
fn truncate_path(path: &str, max_chars: usize) -> String {
    let count = path.chars().count();
    if count <= max_chars {
        return path.to_string();
    }
    if max_chars <= 3 {
        return path.chars().skip(count - max_chars).collect();
    }
    let tail: String = path.chars().skip(count - (max_chars - 3)).collect();
    format!("...{}", tail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::{Navigator, SizeAggregator};
    use crate::input::Command;
    use ratatui::{backend::TestBackend, Terminal};
    use std::fs;
    use tempfile::TempDir;

    fn screen(terminal: &Terminal<TestBackend>) -> Vec<String> {
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect())
            .collect()
    }

    fn app_with_files(count: usize) -> (TempDir, App) {
        let temp_dir = TempDir::new().unwrap();
        for i in 0..count {
            fs::write(temp_dir.path().join(format!("f{}", i)), vec![0u8; i]).unwrap();
        }
        let navigator = Navigator::new(temp_dir.path(), SizeAggregator::new(1).unwrap()).unwrap();
        (temp_dir, App::new(navigator, ColorScheme::default()))
    }

    #[test]
    fn test_truncate_path() {
        assert_eq!(truncate_path("/tmp", 10), "/tmp");
        assert_eq!(truncate_path("/very/long/path/name", 10), "...th/name");
        assert_eq!(truncate_path("/abc", 2), "bc");
    }

    #[test]
    fn test_render_fits_listing_height() {
        let (_guard, mut app) = app_with_files(10);
        let mut terminal = Terminal::new(TestBackend::new(60, 8)).unwrap();

        terminal.draw(|frame| render_ui(frame, &mut app)).unwrap();

        // 8 lines: 2 borders + 4 rows + status + footer.
        assert_eq!(app.navigator.view_window(), (0, 4));
        let lines = screen(&terminal);
        assert!(lines[0].contains(APP_NAME));
        assert!(lines[6].contains("1/10"));
        assert!(lines[7].contains("quit"));
    }

    #[test]
    fn test_render_scrolls_with_selection() {
        let (_guard, mut app) = app_with_files(10);
        let mut terminal = Terminal::new(TestBackend::new(40, 8)).unwrap();

        for _ in 0..6 {
            app.handle_command(Command::SelectNext);
            terminal.draw(|frame| render_ui(frame, &mut app)).unwrap();
        }

        assert_eq!(app.navigator.view_window(), (3, 7));
        let selected = app.navigator.selected_entry().unwrap().name.clone();
        let lines = screen(&terminal);
        assert!(lines[4].contains(&selected));
        assert!(lines[6].contains("7/10"));
    }

    #[test]
    fn test_render_empty_directory_and_error() {
        let (_guard, mut app) = app_with_files(0);
        let mut terminal = Terminal::new(TestBackend::new(40, 6)).unwrap();

        app.handle_command(Command::IntoSelected);
        terminal.draw(|frame| render_ui(frame, &mut app)).unwrap();

        let lines = screen(&terminal);
        assert!(lines[1].contains("(empty)"));
        assert!(lines[4].contains("0/0"));
        assert!(lines[5].contains("no entry selected"));
    }

    #[test]
    fn test_render_help_overlay() {
        let (_guard, mut app) = app_with_files(2);
        let mut terminal = Terminal::new(TestBackend::new(50, 16)).unwrap();

        app.handle_command(Command::ToggleHelp);
        terminal.draw(|frame| render_ui(frame, &mut app)).unwrap();

        let text = screen(&terminal).join("\n");
        assert!(text.contains("Keys"));
        assert!(text.contains("delete"));
    }

    #[test]
    fn test_render_tiny_terminal() {
        let (_guard, mut app) = app_with_files(3);
        let mut terminal = Terminal::new(TestBackend::new(4, 2)).unwrap();

        terminal.draw(|frame| render_ui(frame, &mut app)).unwrap();

        assert_eq!(app.navigator.view_window(), (0, 0));
    }
}
