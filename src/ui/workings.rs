//! Working-out panel: the narrated derivation, typeset.

use super::ThemeColors;
use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthChar;

pub(super) fn draw_workings(f: &mut Frame<'_>, area: Rect, app: &App, colors: &ThemeColors) {
    let inner_width = area.width.saturating_sub(2) as usize;

    let lines: Vec<Line<'static>> = if let Some(ref error) = app.input_error {
        vec![
            Line::from(""),
            Line::from(Span::styled(
                error.clone(),
                Style::default()
                    .fg(colors.warning)
                    .add_modifier(Modifier::BOLD),
            )),
        ]
    } else if let Some(ref solution) = app.solution {
        solution
            .narration
            .lines(&app.typesetter)
            .into_iter()
            .map(|text| {
                Line::from(Span::styled(
                    truncate_to_width(&text, inner_width),
                    Style::default().fg(colors.text),
                ))
            })
            .collect()
    } else {
        vec![Line::from("")]
    };

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Working Out ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors.border))
            .style(Style::default().bg(colors.bg)),
    );

    f.render_widget(paragraph, area);
}

/// Truncate a typeset line to a display width, appending an ellipsis.
fn truncate_to_width(s: &str, max: usize) -> String {
    let mut width = 0;
    let mut out = String::new();
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > max.saturating_sub(1) {
            out.push('\u{2026}');
            return out;
        }
        width += w;
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncation_respects_display_width() {
        assert_eq!(truncate_to_width("abc", 10), "abc");
        assert_eq!(truncate_to_width("abcdef", 4), "abc\u{2026}");
    }
}
