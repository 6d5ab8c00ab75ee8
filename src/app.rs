//! Application state and logic.

use std::time::{Duration, Instant};

use crate::attribution::Attribution;
use crate::clipboard;
use crate::engine::typeset::Typesetter;
use crate::engine::{self, Solution};
use crate::forms::{Forms, InputMode};
use crate::plane::{self, PlaneConfig, Scene};

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Gruvbox dark theme.
    GruvboxDark,
    /// Gruvbox light theme.
    GruvboxLight,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::GruvboxDark => Theme::GruvboxLight,
            Theme::GruvboxLight => Theme::GruvboxDark,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::GruvboxLight => "Gruvbox Light",
        }
    }
}

/// How long the copy confirmation stays visible.
pub const COPY_FEEDBACK_TTL: Duration = Duration::from_secs(2);

/// Application state.
#[derive(Debug)]
pub struct App {
    /// The two input forms plus focus.
    pub forms: Forms,
    /// Fixed plane configuration.
    pub plane: PlaneConfig,
    /// Last successful computation.
    pub solution: Option<Solution>,
    /// Scene built from the last successful computation.
    pub scene: Option<Scene>,
    /// User input error from the last recompute, if it failed.
    pub input_error: Option<String>,
    /// Citation source for the attribution panel.
    pub attribution: Attribution,
    /// Math notation renderer.
    pub typesetter: Typesetter,
    /// When the last successful clipboard copy happened.
    pub copied_at: Option<Instant>,
    /// Last observed pointer cell, for hover tooltips.
    pub pointer: Option<(u16, u16)>,
    /// Status message.
    pub status: String,
    /// Current theme.
    pub theme: Theme,
    /// Key help visibility.
    pub show_help: bool,
}

impl App {
    /// Create a new application instance and run the initial compute, so
    /// the screen never opens empty.
    pub fn new(attribution: Attribution, typesetter: Typesetter, theme: Theme) -> Self {
        let mut app = Self {
            forms: Forms::default(),
            plane: PlaneConfig::default(),
            solution: None,
            scene: None,
            input_error: None,
            attribution,
            typesetter,
            copied_at: None,
            pointer: None,
            status: "Ready".to_string(),
            theme,
            show_help: false,
        };
        app.recompute();
        app
    }

    /// Recompute from a fresh read of the active form.
    ///
    /// On success the solution and scene are replaced wholesale; on a
    /// user input error the previous rendering is left in place and the
    /// error is surfaced instead.
    pub fn recompute(&mut self) {
        let result = match self.forms.mode {
            InputMode::Points => {
                let (x1, y1, x2, y2) = self.forms.read_points();
                engine::solve_two_points(x1, y1, x2, y2)
            }
            InputMode::Rate => {
                let (x1, y1, distance, rate) = self.forms.read_rate();
                engine::solve_point_and_rate(x1, y1, distance, rate)
            }
        };

        match result {
            Ok(solution) => match plane::build_scene(&self.plane, solution.p1, solution.p2) {
                Ok(scene) => {
                    self.status = format!(
                        "{}: {}",
                        self.forms.mode.name(),
                        self.typesetter.render(&solution.summary)
                    );
                    self.scene = Some(scene);
                    self.solution = Some(solution);
                    self.input_error = None;
                }
                Err(e) => {
                    tracing::error!("scene rejected engine output: {}", e);
                    self.input_error = Some(e.to_string());
                    self.status = e.to_string();
                }
            },
            Err(e) => {
                tracing::debug!("recompute failed: {}", e);
                self.status = e.to_string();
                self.input_error = Some(e.to_string());
                self.solution = None;
            }
        }
    }

    /// Switch to a mode and recompute from the now-authoritative form.
    pub fn set_mode(&mut self, mode: InputMode) {
        self.forms.set_mode(mode);
        self.recompute();
    }

    /// Switch to the other mode.
    pub fn toggle_mode(&mut self) {
        self.set_mode(self.forms.mode.toggle());
    }

    /// Type a character into the focused field.
    pub fn input_char(&mut self, c: char) {
        if self.forms.focused_mut().input(c) {
            self.recompute();
        }
    }

    /// Delete the last character of the focused field.
    pub fn backspace(&mut self) {
        self.forms.focused_mut().backspace();
        self.recompute();
    }

    /// Clear the focused field.
    pub fn clear_field(&mut self) {
        self.forms.focused_mut().clear();
        self.recompute();
    }

    /// Move focus to the next field.
    pub fn focus_next(&mut self) {
        self.forms.focus_next();
    }

    /// Move focus to the previous field.
    pub fn focus_prev(&mut self) {
        self.forms.focus_prev();
    }

    /// Copy the HTML attribution to the clipboard.
    pub fn copy_html(&mut self) {
        self.copy(&self.attribution.html(), "HTML");
    }

    /// Copy the Markdown attribution to the clipboard.
    pub fn copy_markdown(&mut self) {
        self.copy(&self.attribution.markdown(), "Markdown");
    }

    fn copy(&mut self, text: &str, which: &str) {
        match clipboard::copy_to_clipboard(text) {
            Ok(()) => {
                self.copied_at = Some(Instant::now());
                self.status = format!("{} attribution copied", which);
            }
            // Recoverable: log it, the confirmation simply never appears.
            Err(e) => tracing::error!("clipboard copy failed: {}", e),
        }
    }

    /// True while the copy confirmation should be visible.
    pub fn copy_feedback_active(&self) -> bool {
        self.copied_at
            .is_some_and(|at| at.elapsed() < COPY_FEEDBACK_TTL)
    }

    /// Periodic maintenance: expire the copy confirmation.
    pub fn tick(&mut self) {
        if self.copied_at.is_some() && !self.copy_feedback_active() {
            self.copied_at = None;
        }
    }

    /// Record the pointer position for hover hit-testing.
    pub fn set_pointer(&mut self, col: u16, row: u16) {
        self.pointer = Some((col, row));
    }

    /// Cycle to the next theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.status = format!("Theme: {}", self.theme.name());
    }

    /// Toggle the key help panel.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Slope;

    fn app() -> App {
        App::new(
            Attribution::new("Test", "https://example.org/"),
            Typesetter::ascii(),
            Theme::GruvboxDark,
        )
    }

    #[test]
    fn startup_computes_from_the_seeded_form() {
        let app = app();
        let sol = app.solution.as_ref().unwrap();
        assert_eq!(sol.relation.slope, Slope::Finite(1.0));
        assert!(app.scene.is_some());
        assert!(app.input_error.is_none());
    }

    #[test]
    fn mode_switch_recomputes_from_the_other_form() {
        let mut app = app();
        app.set_mode(InputMode::Rate);
        // rate form seeds angle = 45, distance = 10
        let sol = app.solution.as_ref().unwrap();
        assert!((sol.p2.x - 7.07).abs() < 0.01);
        assert_eq!(app.forms.mode, InputMode::Rate);
    }

    #[test]
    fn missing_rate_keeps_the_previous_scene() {
        let mut app = app();
        let scene_before = app.scene.clone();
        app.set_mode(InputMode::Rate);
        // blank out both rate fields
        app.forms.rate[3].clear();
        app.forms.rate[4].clear();
        app.recompute();
        assert!(app.input_error.is_some());
        assert!(app.solution.is_none());
        assert_ne!(app.scene, scene_before); // scene from the first rate compute survives
        assert!(app.scene.is_some());
    }

    #[test]
    fn editing_a_field_triggers_recompute() {
        let mut app = app();
        app.forms.focus = 3; // y2
        app.clear_field();
        app.input_char('9');
        let sol = app.solution.as_ref().unwrap();
        assert_eq!(sol.relation.slope, Slope::Finite(9.0 / 5.0));
    }

    #[test]
    fn vertical_input_reaches_the_scene_with_finite_points() {
        let mut app = app();
        // x1 = x2 = 0
        app.forms.points[2].clear();
        app.forms.points[2].input('0');
        app.recompute();
        let sol = app.solution.as_ref().unwrap();
        assert!(sol.relation.slope.is_vertical());
        let scene = app.scene.as_ref().unwrap();
        assert!(scene.segment.0.is_finite() && scene.segment.1.is_finite());
    }
}
