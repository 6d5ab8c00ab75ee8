//! Plane panel: paints the scene onto a braille canvas, plus the hover
//! tooltip.
//!
//! Painting is a full repaint of the scene every frame; nothing here
//! holds state between calls.

use super::ThemeColors;
use crate::app::App;
use crate::plane::{Scene, PLOT_TITLE};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    symbols::Marker,
    text::{Line as TextLine, Span},
    widgets::{
        canvas::{Canvas, Line as CanvasLine, Points},
        Block, Borders, Clear, Paragraph,
    },
    Frame,
};

/// Dash length, in domain units, of the dashed gridlines.
const DASH: f64 = 0.5;

/// Offsets that fatten an endpoint marker into a visible cross.
const MARKER_OFFSETS: [(f64, f64); 5] = [
    (0.0, 0.0),
    (0.12, 0.0),
    (-0.12, 0.0),
    (0.0, 0.18),
    (0.0, -0.18),
];

pub(super) fn draw_plane(f: &mut Frame<'_>, area: Rect, app: &App, colors: &ThemeColors) {
    let block = Block::default()
        .title(format!(" {} ", PLOT_TITLE))
        .title_style(
            Style::default()
                .fg(colors.heading)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .style(Style::default().bg(colors.bg));
    let inner = block.inner(area);

    let Some(ref scene) = app.scene else {
        let paragraph = Paragraph::new("nothing to plot")
            .block(block)
            .style(Style::default().fg(colors.text));
        f.render_widget(paragraph, area);
        return;
    };

    let cfg = &app.plane;
    let canvas = Canvas::default()
        .block(block)
        .x_bounds([cfg.x_min, cfg.x_max])
        .y_bounds([cfg.y_min, cfg.y_max])
        .marker(Marker::Braille)
        .paint(|ctx| {
            // dashed grid
            for &gx in &scene.grid_x {
                let mut y = cfg.y_min;
                while y < cfg.y_max {
                    ctx.draw(&CanvasLine {
                        x1: gx,
                        y1: y,
                        x2: gx,
                        y2: (y + DASH).min(cfg.y_max),
                        color: colors.grid,
                    });
                    y += 2.0 * DASH;
                }
            }
            for &gy in &scene.grid_y {
                let mut x = cfg.x_min;
                while x < cfg.x_max {
                    ctx.draw(&CanvasLine {
                        x1: x,
                        y1: gy,
                        x2: (x + DASH).min(cfg.x_max),
                        y2: gy,
                        color: colors.grid,
                    });
                    x += 2.0 * DASH;
                }
            }
            ctx.layer();

            // axes through the origin
            ctx.draw(&CanvasLine {
                x1: cfg.x_min,
                y1: 0.0,
                x2: cfg.x_max,
                y2: 0.0,
                color: colors.text,
            });
            ctx.draw(&CanvasLine {
                x1: 0.0,
                y1: cfg.y_min,
                x2: 0.0,
                y2: cfg.y_max,
                color: colors.text,
            });

            // the segment itself
            let (p1, p2) = scene.segment;
            ctx.draw(&CanvasLine {
                x1: p1.x,
                y1: p1.y,
                x2: p2.x,
                y2: p2.y,
                color: colors.accent,
            });

            // endpoint markers
            for marker in &scene.markers {
                let coords: Vec<(f64, f64)> = MARKER_OFFSETS
                    .iter()
                    .map(|(dx, dy)| (marker.at.x + dx, marker.at.y + dy))
                    .collect();
                ctx.draw(&Points {
                    coords: &coords,
                    color: colors.accent,
                });
            }

            // axis tick labels at the domain edges
            let tick = Style::default().fg(colors.grid);
            ctx.print(
                cfg.x_min + 0.2,
                0.3,
                TextLine::from(Span::styled(format!("{}", cfg.x_min), tick)),
            );
            ctx.print(
                cfg.x_max - 1.4,
                0.3,
                TextLine::from(Span::styled(format!("{}", cfg.x_max), tick)),
            );
            ctx.print(
                0.2,
                cfg.y_min + 0.3,
                TextLine::from(Span::styled(format!("{}", cfg.y_min), tick)),
            );
            ctx.print(
                0.2,
                cfg.y_max - 0.5,
                TextLine::from(Span::styled(format!("{}", cfg.y_max), tick)),
            );

            // symbolic point labels, offset from their markers
            for marker in &scene.markers {
                let (lx, ly) = marker.label_at;
                ctx.print(
                    lx,
                    ly,
                    TextLine::from(Span::styled(
                        app.typesetter.render(&marker.symbol),
                        Style::default().fg(colors.label),
                    )),
                );
            }
        });

    f.render_widget(canvas, area);

    draw_tooltip(f, inner, app, scene, colors);
}

/// Floating coordinate tooltip, visible only while the pointer hovers a
/// marker.
fn draw_tooltip(f: &mut Frame<'_>, inner: Rect, app: &App, scene: &Scene, colors: &ThemeColors) {
    let Some((col, row)) = app.pointer else {
        return;
    };
    let Some(marker) = scene.marker_near_cell(&app.plane, inner, col, row) else {
        return;
    };

    let text = format!(" {} ", marker.coords);
    let width = text.len() as u16;
    let frame = f.area();

    // near the pointer, nudged up-right, kept on screen
    let x = (col + 2).min(frame.width.saturating_sub(width));
    let y = row.saturating_sub(1).min(frame.height.saturating_sub(1));
    let area = Rect::new(x, y, width.min(frame.width), 1);

    f.render_widget(Clear, area);
    let tooltip = Paragraph::new(text).style(
        Style::default()
            .fg(colors.tooltip_fg)
            .bg(colors.tooltip_bg)
            .add_modifier(Modifier::BOLD),
    );
    f.render_widget(tooltip, area);
}
