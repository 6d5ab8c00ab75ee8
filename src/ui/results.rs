//! Final results panel: the summary plus the attribution strings.

use super::ThemeColors;
use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub(super) fn draw_results(f: &mut Frame<'_>, area: Rect, app: &App, colors: &ThemeColors) {
    let mut lines: Vec<Line<'static>> = Vec::new();

    if let Some(ref solution) = app.solution {
        lines.push(Line::from(Span::styled(
            app.typesetter.render(&solution.summary),
            Style::default()
                .fg(colors.value)
                .add_modifier(Modifier::BOLD),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            "no result".to_string(),
            Style::default().fg(colors.warning),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("HTML: ", Style::default().fg(colors.label)),
        Span::styled(app.attribution.html(), Style::default().fg(colors.text)),
    ]));
    lines.push(Line::from(vec![
        Span::styled("Markdown: ", Style::default().fg(colors.label)),
        Span::styled(app.attribution.markdown(), Style::default().fg(colors.text)),
    ]));

    if app.copy_feedback_active() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Copied to clipboard!",
            Style::default()
                .fg(colors.heading)
                .add_modifier(Modifier::BOLD),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Final Results ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.border))
                .style(Style::default().bg(colors.bg)),
        )
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, area);
}
