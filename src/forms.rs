//! Input forms: the two entry modes, their field buffers and the
//! numeric parsing policy.
//!
//! Point and distance fields default to 0 when empty or unparseable, a
//! deliberate spreadsheet-style leniency. The slope and angle fields are
//! different: an unparseable buffer means "not supplied", which the
//! engine rejects when neither is given.

use crate::engine::RateSpec;

/// Which form is authoritative for the current computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Two points.
    #[default]
    Points,
    /// One point plus slope/angle and distance.
    Rate,
}

impl InputMode {
    /// The other mode.
    pub fn toggle(self) -> Self {
        match self {
            InputMode::Points => InputMode::Rate,
            InputMode::Rate => InputMode::Points,
        }
    }

    /// Display name of the mode.
    pub fn name(self) -> &'static str {
        match self {
            InputMode::Points => "Two points",
            InputMode::Rate => "Point + rate",
        }
    }
}

/// One editable numeric field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Short label shown next to the buffer.
    pub label: &'static str,
    /// Raw text as typed.
    pub buffer: String,
}

/// Maximum characters a field accepts.
const FIELD_MAX: usize = 16;

impl Field {
    /// Create a field with a seed value.
    pub fn new(label: &'static str, seed: &str) -> Self {
        Self {
            label,
            buffer: seed.to_string(),
        }
    }

    /// Append a character if it could belong to a float literal.
    pub fn input(&mut self, c: char) -> bool {
        let accepted =
            c.is_ascii_digit() || matches!(c, '-' | '+' | '.' | 'e' | 'E');
        if accepted && self.buffer.len() < FIELD_MAX {
            self.buffer.push(c);
            true
        } else {
            false
        }
    }

    /// Delete the last character.
    pub fn backspace(&mut self) {
        self.buffer.pop();
    }

    /// Clear the buffer.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Lenient parse: empty, unparseable or non-finite buffers become 0.
    pub fn value(&self) -> f64 {
        parse_lenient(&self.buffer)
    }

    /// Strict parse for rate fields: None unless the buffer is a finite number.
    pub fn rate_value(&self) -> Option<f64> {
        parse_rate(&self.buffer)
    }
}

/// Parse a point or distance buffer, defaulting to 0.
pub fn parse_lenient(s: &str) -> f64 {
    s.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Parse a slope or angle buffer; None means "not supplied".
pub fn parse_rate(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Indices into the points form.
const POINTS_FIELDS: usize = 4;
/// Indices into the rate form.
const RATE_FIELDS: usize = 5;

/// Both forms plus the focus cursor.
///
/// Switching mode never clears the inactive form's buffers; it only
/// changes which form is read on the next recompute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Forms {
    /// The active mode.
    pub mode: InputMode,
    /// Fields of the two-point form: x1, y1, x2, y2.
    pub points: [Field; POINTS_FIELDS],
    /// Fields of the point-and-rate form: x1, y1, distance, slope, angle.
    pub rate: [Field; RATE_FIELDS],
    /// Focused field index within the active form.
    pub focus: usize,
}

impl Default for Forms {
    fn default() -> Self {
        Self {
            mode: InputMode::Points,
            points: [
                Field::new("x1", "0"),
                Field::new("y1", "0"),
                Field::new("x2", "5"),
                Field::new("y2", "5"),
            ],
            rate: [
                Field::new("x1", "0"),
                Field::new("y1", "0"),
                Field::new("distance", "10"),
                Field::new("slope", ""),
                Field::new("angle", "45"),
            ],
            focus: 0,
        }
    }
}

impl Forms {
    /// Switch to a mode. Idempotent; the focus is clamped to the new form.
    pub fn set_mode(&mut self, mode: InputMode) {
        self.mode = mode;
        self.focus = self.focus.min(self.active_len() - 1);
    }

    /// Switch to the other mode.
    pub fn toggle_mode(&mut self) {
        self.set_mode(self.mode.toggle());
    }

    /// Number of fields in the active form.
    pub fn active_len(&self) -> usize {
        match self.mode {
            InputMode::Points => POINTS_FIELDS,
            InputMode::Rate => RATE_FIELDS,
        }
    }

    /// The active form's fields.
    pub fn active_fields(&self) -> &[Field] {
        match self.mode {
            InputMode::Points => &self.points,
            InputMode::Rate => &self.rate,
        }
    }

    /// The focused field, mutably.
    pub fn focused_mut(&mut self) -> &mut Field {
        let focus = self.focus;
        match self.mode {
            InputMode::Points => &mut self.points[focus],
            InputMode::Rate => &mut self.rate[focus],
        }
    }

    /// Move focus to the next field, wrapping.
    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % self.active_len();
    }

    /// Move focus to the previous field, wrapping.
    pub fn focus_prev(&mut self) {
        self.focus = (self.focus + self.active_len() - 1) % self.active_len();
    }

    /// Fresh read of the two-point form: (x1, y1, x2, y2).
    pub fn read_points(&self) -> (f64, f64, f64, f64) {
        (
            self.points[0].value(),
            self.points[1].value(),
            self.points[2].value(),
            self.points[3].value(),
        )
    }

    /// Fresh read of the rate form: (x1, y1, distance, rate).
    pub fn read_rate(&self) -> (f64, f64, f64, RateSpec) {
        (
            self.rate[0].value(),
            self.rate[1].value(),
            self.rate[2].value(),
            RateSpec {
                slope: self.rate[3].rate_value(),
                angle_deg: self.rate[4].rate_value(),
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lenient_parse_defaults_to_zero() {
        assert_eq!(parse_lenient(""), 0.0);
        assert_eq!(parse_lenient("abc"), 0.0);
        assert_eq!(parse_lenient("1e999"), 0.0);
        assert_eq!(parse_lenient(" 2.5 "), 2.5);
        assert_eq!(parse_lenient("-3"), -3.0);
    }

    #[test]
    fn rate_parse_is_none_when_not_supplied() {
        assert_eq!(parse_rate(""), None);
        assert_eq!(parse_rate("x"), None);
        assert_eq!(parse_rate("1.5"), Some(1.5));
    }

    #[test]
    fn mode_switch_is_idempotent_and_exclusive() {
        let mut forms = Forms::default();
        forms.set_mode(InputMode::Rate);
        let once = forms.clone();
        forms.set_mode(InputMode::Rate);
        assert_eq!(forms, once);
        assert_eq!(forms.mode, InputMode::Rate);
        assert_eq!(forms.active_len(), 5);

        forms.set_mode(InputMode::Points);
        assert_eq!(forms.mode, InputMode::Points);
        assert_eq!(forms.active_len(), 4);
    }

    #[test]
    fn switching_modes_preserves_the_other_forms_buffers() {
        let mut forms = Forms::default();
        forms.points[2].clear();
        forms.points[2].input('7');
        forms.set_mode(InputMode::Rate);
        forms.set_mode(InputMode::Points);
        assert_eq!(forms.points[2].buffer, "7");
    }

    #[test]
    fn focus_clamps_when_switching_to_a_shorter_form() {
        let mut forms = Forms::default();
        forms.set_mode(InputMode::Rate);
        forms.focus = 4;
        forms.set_mode(InputMode::Points);
        assert_eq!(forms.focus, 3);
    }

    #[test]
    fn focus_wraps_both_ways() {
        let mut forms = Forms::default();
        forms.focus = 3;
        forms.focus_next();
        assert_eq!(forms.focus, 0);
        forms.focus_prev();
        assert_eq!(forms.focus, 3);
    }

    #[test]
    fn field_rejects_non_numeric_characters() {
        let mut field = Field::new("x1", "");
        assert!(field.input('3'));
        assert!(field.input('.'));
        assert!(field.input('5'));
        assert!(!field.input('z'));
        assert_eq!(field.buffer, "3.5");
        field.backspace();
        assert_eq!(field.buffer, "3.");
    }

    #[test]
    fn rate_form_reads_both_optional_fields() {
        let forms = Forms::default();
        let (x1, y1, d, rate) = forms.read_rate();
        assert_eq!((x1, y1, d), (0.0, 0.0, 10.0));
        assert_eq!(rate.slope, None);
        assert_eq!(rate.angle_deg, Some(45.0));
    }
}
