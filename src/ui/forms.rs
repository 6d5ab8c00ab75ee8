//! Input forms UI component.

use super::ThemeColors;
use crate::app::App;
use crate::forms::InputMode;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub(super) fn draw_forms(f: &mut Frame<'_>, area: Rect, app: &App, colors: &ThemeColors) {
    let mut lines = vec![mode_tabs(app.forms.mode, colors), Line::from("")];

    for (idx, field) in app.forms.active_fields().iter().enumerate() {
        let focused = idx == app.forms.focus;

        let label = Span::styled(
            format!("{:>9}: ", field.label),
            Style::default().fg(colors.label),
        );

        let shown = if focused {
            format!("{}_", field.buffer)
        } else if field.buffer.is_empty() {
            "-".to_string()
        } else {
            field.buffer.clone()
        };
        let value = if focused {
            Span::styled(
                shown,
                Style::default()
                    .fg(colors.focus_fg)
                    .bg(colors.focus_bg)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(shown, Style::default().fg(colors.value))
        };

        lines.push(Line::from(vec![label, value]));
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Inputs ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.border))
                .style(Style::default().bg(colors.bg)),
        )
        .style(Style::default().fg(colors.text));

    f.render_widget(paragraph, area);
}

fn mode_tabs(mode: InputMode, colors: &ThemeColors) -> Line<'static> {
    let tab = |tag: &str, label: InputMode| -> Span<'static> {
        let text = format!(" [{}] {} ", tag, label.name());
        if mode == label {
            Span::styled(
                text,
                Style::default()
                    .fg(colors.focus_fg)
                    .bg(colors.focus_bg)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(text, Style::default().fg(colors.text))
        }
    };

    Line::from(vec![tab("1", InputMode::Points), tab("2", InputMode::Rate)])
}
