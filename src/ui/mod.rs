//! User interface rendering.

mod forms;
mod keymap_bar;
mod plane;
mod results;
mod status_bar;
mod theme;
mod workings;

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub use theme::ThemeColors;

/// Draw the UI.
pub fn draw(f: &mut Frame<'_>, app: &App) {
    let colors = ThemeColors::from_theme(&app.theme);

    // Main layout with status bar and key map bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1), Constraint::Length(1)])
        .split(f.area());

    let content = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(46), Constraint::Min(24)])
        .split(chunks[0]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(9),
            Constraint::Min(6),
            Constraint::Length(9),
        ])
        .split(content[0]);

    forms::draw_forms(f, left[0], app, &colors);
    workings::draw_workings(f, left[1], app, &colors);
    results::draw_results(f, left[2], app, &colors);
    plane::draw_plane(f, content[1], app, &colors);

    status_bar::draw_status(f, chunks[1], &app.status, &colors);
    keymap_bar::draw_keymap(f, chunks[2], &colors);

    if app.show_help {
        draw_help(f, &colors);
    }
}

/// Helper to create a centered rect using a fixed size.
fn centered_rect(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + r.width.saturating_sub(width) / 2;
    let y = r.y + r.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

fn draw_help(f: &mut Frame<'_>, colors: &ThemeColors) {
    let area = centered_rect(46, 16, f.area());
    f.render_widget(Clear, area);

    let lines = vec![
        Line::from(Span::styled(
            "Keyboard shortcuts",
            Style::default()
                .fg(colors.heading)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("  1 / 2        - Select input mode"),
        Line::from("  m            - Toggle input mode"),
        Line::from("  Tab, j/k     - Next/previous field"),
        Line::from("  0-9 . - e    - Edit focused field"),
        Line::from("  Backspace    - Delete last character"),
        Line::from("  Esc          - Clear focused field"),
        Line::from("  Enter        - Recompute"),
        Line::from("  c            - Copy HTML attribution"),
        Line::from("  y            - Copy Markdown attribution"),
        Line::from("  T            - Cycle theme"),
        Line::from("  ?            - Close this help"),
        Line::from("  q            - Quit"),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.border))
                .style(Style::default().bg(colors.bg)),
        )
        .style(Style::default().fg(colors.text));

    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{App, Theme};
    use crate::attribution::Attribution;
    use crate::engine::typeset::Typesetter;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn test_app() -> App {
        App::new(
            Attribution::new("Test", "https://example.org/"),
            Typesetter::unicode(),
            Theme::GruvboxDark,
        )
    }

    fn buffer_text(buffer: &Buffer) -> String {
        buffer.content.iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn repainting_the_same_state_yields_an_identical_buffer() {
        let app = test_app();
        let mut terminal = Terminal::new(TestBackend::new(100, 32)).unwrap();

        terminal.draw(|f| draw(f, &app)).unwrap();
        let first = terminal.backend().buffer().clone();
        terminal.draw(|f| draw(f, &app)).unwrap();
        let second = terminal.backend().buffer().clone();

        assert_eq!(first, second);
    }

    #[test]
    fn the_frame_shows_workings_results_and_plot() {
        let app = test_app();
        let mut terminal = Terminal::new(TestBackend::new(100, 32)).unwrap();
        terminal.draw(|f| draw(f, &app)).unwrap();
        let text = buffer_text(terminal.backend().buffer());

        assert!(text.contains("Working Out"));
        assert!(text.contains("Final Results"));
        assert!(text.contains("Line Plot Showing Slope and Angle"));
        assert!(text.contains("Markdown:"));
    }

    #[test]
    fn hovering_a_marker_shows_its_coordinates() {
        let mut app = test_app();
        // plane panel inner area for a 100x32 frame: content splits at
        // column 46, one cell of border on each side
        let inner = Rect::new(47, 1, 52, 28);
        let (col, row) = app.plane.domain_to_cell(inner, 0.0, 0.0).unwrap();
        app.set_pointer(col, row);

        let mut terminal = Terminal::new(TestBackend::new(100, 32)).unwrap();
        terminal.draw(|f| draw(f, &app)).unwrap();
        let text = buffer_text(terminal.backend().buffer());

        assert!(text.contains("(0.00, 0.00)"));
    }

    #[test]
    fn pointer_away_from_markers_shows_no_tooltip() {
        let mut app = test_app();
        app.set_pointer(48, 2); // top-left plane corner, far from both endpoints

        let mut terminal = Terminal::new(TestBackend::new(100, 32)).unwrap();
        terminal.draw(|f| draw(f, &app)).unwrap();
        let text = buffer_text(terminal.backend().buffer());

        assert!(!text.contains("(0.00, 0.00)"));
    }
}
