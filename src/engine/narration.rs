//! Narrated derivations: labeled formula steps in display markup.
//!
//! Steps carry the symbolic formula, the substituted formula and the
//! numeric result separately; [`Step::markup`] joins them the way the
//! working-out panel shows them. All text here is plain markup (`x_1`,
//! `theta`, `sqrt(`, ...) for the typesetter to render.

use super::{LinearRelation, Point, RateSpec, Slope};
use super::typeset::Typesetter;

/// One labeled derivation step.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    /// Short name of the quantity being derived.
    pub label: &'static str,
    /// Symbolic form, including the quantity ("m = (y_2 - y_1) / (x_2 - x_1)").
    pub symbolic: String,
    /// The same formula with the inputs substituted, when there is one.
    pub substituted: Option<String>,
    /// Final value, or a verdict such as "undefined (vertical line)".
    pub result: String,
}

impl Step {
    fn new(label: &'static str, symbolic: impl Into<String>) -> Self {
        Self {
            label,
            symbolic: symbolic.into(),
            substituted: None,
            result: String::new(),
        }
    }

    fn substituted(mut self, s: impl Into<String>) -> Self {
        self.substituted = Some(s.into());
        self
    }

    fn result(mut self, r: impl Into<String>) -> Self {
        self.result = r.into();
        self
    }

    /// The full markup line for this step.
    pub fn markup(&self) -> String {
        match &self.substituted {
            Some(sub) => format!("{}: {} = {} = {}", self.label, self.symbolic, sub, self.result),
            None => format!("{}: {} = {}", self.label, self.symbolic, self.result),
        }
    }
}

/// An ordered derivation.
#[derive(Debug, Clone, PartialEq)]
pub struct Narration {
    /// The steps, in derivation order.
    pub steps: Vec<Step>,
}

impl Narration {
    /// Render every step through the typesetter, one line per step.
    pub fn lines(&self, typesetter: &Typesetter) -> Vec<String> {
        self.steps
            .iter()
            .map(|s| typesetter.render(&s.markup()))
            .collect()
    }
}

/// Format a computed value for display, two decimal places.
pub fn fixed2(v: f64) -> String {
    let s = format!("{:.2}", v);
    // normalize "-0.00"
    if s == "-0.00" {
        "0.00".to_string()
    } else {
        s
    }
}

/// Format a raw input value the shortest way it round-trips.
pub fn compact(v: f64) -> String {
    format!("{}", v)
}

/// Derivation for the two-point form with a finite slope.
pub fn two_points(p1: Point, p2: Point, m: f64, angle_deg: f64) -> Narration {
    Narration {
        steps: vec![
            Step::new("Slope", "m = (y_2 - y_1) / (x_2 - x_1)")
                .substituted(format!(
                    "({} - {}) / ({} - {})",
                    compact(p2.y),
                    compact(p1.y),
                    compact(p2.x),
                    compact(p1.x)
                ))
                .result(fixed2(m)),
            Step::new("Angle", "theta = atan(m)")
                .substituted(format!("atan({})", fixed2(m)))
                .result(format!("{} deg", fixed2(angle_deg))),
        ],
    }
}

/// Derivation for the two-point form when the x-coordinates coincide.
pub fn two_points_vertical(p1: Point, p2: Point) -> Narration {
    Narration {
        steps: vec![
            Step::new("Slope", "m = (y_2 - y_1) / (x_2 - x_1)")
                .substituted(format!(
                    "({} - {}) / ({} - {})",
                    compact(p2.y),
                    compact(p1.y),
                    compact(p2.x),
                    compact(p1.x)
                ))
                .result("undefined (vertical line)"),
            Step::new("Angle", "theta").result("90 deg (vertical line)"),
        ],
    }
}

/// Derivation for the point-and-rate form with a finite slope.
pub fn point_and_rate(
    rate: RateSpec,
    m: f64,
    distance: f64,
    dx: f64,
    dy: f64,
    p1: Point,
    p2: Point,
) -> Narration {
    let slope_step = if rate.angle_wins() {
        let angle = rate.angle_deg.unwrap_or_default();
        Step::new("Slope", "m = tan(theta)")
            .substituted(format!("tan({} deg)", compact(angle)))
            .result(fixed2(m))
    } else {
        Step::new("Slope", "m").result(format!("{} (given)", fixed2(m)))
    };

    Narration {
        steps: vec![
            slope_step,
            Step::new("Run", "Delta x = d / sqrt(1 + m^2)")
                .substituted(format!(
                    "{} / sqrt(1 + ({})^2)",
                    compact(distance),
                    fixed2(m)
                ))
                .result(fixed2(dx)),
            Step::new("Rise", "Delta y = m * Delta x")
                .substituted(format!("{} * {}", fixed2(m), fixed2(dx)))
                .result(fixed2(dy)),
            Step::new("x_2", "x_2 = x_1 + Delta x")
                .substituted(format!("{} + {}", compact(p1.x), fixed2(dx)))
                .result(fixed2(p2.x)),
            Step::new("y_2", "y_2 = y_1 + Delta y")
                .substituted(format!("{} + {}", compact(p1.y), fixed2(dy)))
                .result(fixed2(p2.y)),
        ],
    }
}

/// Derivation for the point-and-rate form at exactly ±90°.
pub fn vertical_rate(p1: Point, distance: f64, rise: f64, p2: Point) -> Narration {
    let direction = if rise >= 0.0 { "+" } else { "-" };
    Narration {
        steps: vec![
            Step::new("Slope", "m").result("undefined (theta = 90 deg, vertical line)"),
            Step::new("x_2", "x_2 = x_1").result(fixed2(p2.x)),
            Step::new("y_2", format!("y_2 = y_1 {} d", direction))
                .substituted(format!("{} {} {}", compact(p1.y), direction, compact(distance)))
                .result(fixed2(p2.y)),
        ],
    }
}

/// Summary markup for a computed relation (two-point form).
pub fn relation_summary(relation: LinearRelation) -> String {
    match relation.slope {
        Slope::Finite(m) => format!(
            "m = {}, theta = {} deg",
            fixed2(m),
            fixed2(relation.angle_deg)
        ),
        Slope::Vertical => "vertical line: m undefined, theta = 90 deg".to_string(),
    }
}

/// Summary markup for a computed second point (point-and-rate form).
pub fn second_point_summary(p2: Point) -> String {
    format!("(x_2, y_2) = ({}, {})", fixed2(p2.x), fixed2(p2.y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{solve_point_and_rate, solve_two_points};

    #[test]
    fn two_point_steps_substitute_the_inputs() {
        let sol = solve_two_points(0.0, 0.0, 2.0, 4.0).unwrap();
        let lines = sol.narration.lines(&Typesetter::ascii());
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            "Slope: m = (y_2 - y_1) / (x_2 - x_1) = (4 - 0) / (2 - 0) = 2.00"
        );
        assert_eq!(lines[1], "Angle: theta = atan(m) = atan(2.00) = 63.43 deg");
    }

    #[test]
    fn vertical_narration_never_mentions_nan() {
        let sol = solve_two_points(1.0, 1.0, 1.0, 5.0).unwrap();
        let text = sol.narration.lines(&Typesetter::ascii()).join("\n");
        assert!(text.contains("vertical line"));
        assert!(!text.contains("NaN"));
        assert!(!text.contains("inf"));
    }

    #[test]
    fn rate_narration_has_all_five_steps() {
        let rate = RateSpec {
            slope: None,
            angle_deg: Some(45.0),
        };
        let sol = solve_point_and_rate(0.0, 0.0, 10.0, rate).unwrap();
        let lines = sol.narration.lines(&Typesetter::ascii());
        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("Slope: m = tan(theta) = tan(45 deg)"));
        assert!(lines[1].contains("sqrt(1 + (1.00)^2)"));
        assert_eq!(sol.summary, "(x_2, y_2) = (7.07, 7.07)");
    }

    #[test]
    fn given_slope_is_narrated_without_angle_step() {
        let rate = RateSpec {
            slope: Some(2.0),
            angle_deg: None,
        };
        let sol = solve_point_and_rate(1.0, 1.0, 5.0, rate).unwrap();
        let lines = sol.narration.lines(&Typesetter::ascii());
        assert_eq!(lines[0], "Slope: m = 2.00 (given)");
    }

    #[test]
    fn fixed2_normalizes_negative_zero() {
        assert_eq!(fixed2(-0.0001), "0.00");
        assert_eq!(fixed2(-0.006), "-0.01");
        assert_eq!(fixed2(3.14159), "3.14");
    }

    #[test]
    fn compact_round_trips_integers_and_fractions() {
        assert_eq!(compact(4.0), "4");
        assert_eq!(compact(4.5), "4.5");
        assert_eq!(compact(-0.25), "-0.25");
    }
}
