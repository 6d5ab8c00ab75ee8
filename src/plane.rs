//! The coordinate plane: fixed-domain scene building and the
//! cell/domain scale mapping.
//!
//! Scene construction is pure so the geometry can be tested without a
//! terminal; painting lives in `ui::plane`. Every recompute rebuilds the
//! scene from scratch, so a repaint can never accumulate stale elements.

use crate::engine::narration::fixed2;
use crate::engine::Point;
use crate::error::{GradianError, Result};
use ratatui::layout::Rect;

/// Title drawn above the plot.
pub const PLOT_TITLE: &str = "Line Plot Showing Slope and Angle";

/// Fixed plane configuration: domain, grid divisions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneConfig {
    /// Left edge of the domain.
    pub x_min: f64,
    /// Right edge of the domain.
    pub x_max: f64,
    /// Bottom edge of the domain.
    pub y_min: f64,
    /// Top edge of the domain.
    pub y_max: f64,
    /// Grid divisions per axis.
    pub divisions: usize,
}

impl Default for PlaneConfig {
    fn default() -> Self {
        Self {
            x_min: -10.0,
            x_max: 10.0,
            y_min: -10.0,
            y_max: 10.0,
            divisions: 10,
        }
    }
}

impl PlaneConfig {
    /// Gridline positions along one axis, edges included.
    fn gridline_positions(&self, min: f64, max: f64) -> Vec<f64> {
        let step = (max - min) / self.divisions as f64;
        (0..=self.divisions).map(|i| min + step * i as f64).collect()
    }

    /// Map a terminal cell inside `area` to domain coordinates.
    ///
    /// Uses the cell center, mirroring how the canvas widget distributes
    /// the domain across the available columns and rows.
    pub fn cell_to_domain(&self, area: Rect, col: u16, row: u16) -> Option<(f64, f64)> {
        if area.width == 0 || area.height == 0 {
            return None;
        }
        if col < area.x
            || col >= area.x + area.width
            || row < area.y
            || row >= area.y + area.height
        {
            return None;
        }
        let fx = (f64::from(col - area.x) + 0.5) / f64::from(area.width);
        let fy = (f64::from(row - area.y) + 0.5) / f64::from(area.height);
        let x = self.x_min + fx * (self.x_max - self.x_min);
        let y = self.y_max - fy * (self.y_max - self.y_min);
        Some((x, y))
    }

    /// Map domain coordinates to the containing terminal cell, if the
    /// point lies inside the domain.
    pub fn domain_to_cell(&self, area: Rect, x: f64, y: f64) -> Option<(u16, u16)> {
        if area.width == 0 || area.height == 0 {
            return None;
        }
        let x_span = self.x_max - self.x_min;
        let y_span = self.y_max - self.y_min;
        if !(self.x_min..=self.x_max).contains(&x) || !(self.y_min..=self.y_max).contains(&y) {
            return None;
        }
        let fx = (x - self.x_min) / x_span;
        let fy = (self.y_max - y) / y_span;
        let col = ((fx * f64::from(area.width)) as u16).min(area.width - 1);
        let row = ((fy * f64::from(area.height)) as u16).min(area.height - 1);
        Some((area.x + col, area.y + row))
    }

    /// Clamp a coordinate pair into the domain.
    fn clamp(&self, x: f64, y: f64) -> (f64, f64) {
        (
            x.clamp(self.x_min, self.x_max),
            y.clamp(self.y_min, self.y_max),
        )
    }
}

/// An endpoint marker with its labels.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    /// Marker position.
    pub at: Point,
    /// Symbolic label markup, e.g. "(x_1, y_1)".
    pub symbol: String,
    /// Where the symbolic label is printed (offset, clamped to the domain).
    pub label_at: (f64, f64),
    /// Coordinate text for the hover tooltip, two decimals.
    pub coords: String,
}

/// Everything one repaint draws: grid, segment and markers.
///
/// The scene for a given pair of endpoints is always identical, which is
/// what makes the full-repaint model idempotent.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    /// x positions of the vertical gridlines.
    pub grid_x: Vec<f64>,
    /// y positions of the horizontal gridlines.
    pub grid_y: Vec<f64>,
    /// The drawn segment.
    pub segment: (Point, Point),
    /// The two endpoint markers, p1 then p2.
    pub markers: [Marker; 2],
}

impl Scene {
    /// The marker whose cell is within one cell of `(col, row)`, if any.
    pub fn marker_near_cell(
        &self,
        config: &PlaneConfig,
        area: Rect,
        col: u16,
        row: u16,
    ) -> Option<&Marker> {
        self.markers.iter().find(|marker| {
            config
                .domain_to_cell(area, marker.at.x, marker.at.y)
                .is_some_and(|(mc, mr)| {
                    mc.abs_diff(col) <= 1 && mr.abs_diff(row) <= 1
                })
        })
    }
}

/// Build the full scene for one repaint.
///
/// The renderer assumes finite inputs; anything else is rejected here,
/// before a primitive exists.
pub fn build_scene(config: &PlaneConfig, p1: Point, p2: Point) -> Result<Scene> {
    if !p1.is_finite() {
        return Err(GradianError::non_finite("p1", if p1.x.is_finite() { p1.y } else { p1.x }));
    }
    if !p2.is_finite() {
        return Err(GradianError::non_finite("p2", if p2.x.is_finite() { p2.y } else { p2.x }));
    }

    let marker = |at: Point, symbol: &str| -> Marker {
        // label sits up and to the right of the marker, kept in-domain
        let label_at = config.clamp(at.x + 0.4, at.y + 0.8);
        Marker {
            at,
            symbol: symbol.to_string(),
            label_at,
            coords: format!("({}, {})", fixed2(at.x), fixed2(at.y)),
        }
    };

    Ok(Scene {
        grid_x: config.gridline_positions(config.x_min, config.x_max),
        grid_y: config.gridline_positions(config.y_min, config.y_max),
        segment: (p1, p2),
        markers: [marker(p1, "(x_1, y_1)"), marker(p2, "(x_2, y_2)")],
    })
}
