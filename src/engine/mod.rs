//! The slope engine: pure computations from raw inputs to a solved line.
//!
//! Both entry points ([`solve_two_points`] and [`solve_point_and_rate`])
//! return a [`Solution`] carrying the derived relation, the two endpoints
//! and the narrated derivation. Non-finite numbers never escape this
//! module: a coincident-x pair is classified [`Slope::Vertical`] instead
//! of dividing by zero, and a missing rate specification is an error.

pub mod narration;
pub mod typeset;

use self::narration::Narration;
use crate::error::{GradianError, Result};

/// An ordered pair of plane coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Create a new point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// True when both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        ((other.x - self.x).powi(2) + (other.y - self.y).powi(2)).sqrt()
    }
}

/// The slope of a line, with the vertical case made unrepresentable as a
/// number so it cannot leak into narration or rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Slope {
    /// An ordinary finite rate of change.
    Finite(f64),
    /// Coincident x-coordinates; the slope is undefined.
    Vertical,
}

impl Slope {
    /// The finite slope value, if there is one.
    pub fn value(self) -> Option<f64> {
        match self {
            Slope::Finite(m) => Some(m),
            Slope::Vertical => None,
        }
    }

    /// True for the vertical case.
    pub fn is_vertical(self) -> bool {
        matches!(self, Slope::Vertical)
    }

    /// Inclination from the horizontal axis in degrees.
    ///
    /// Finite slopes land in (-90, 90); the vertical case is exactly 90.
    pub fn angle_deg(self) -> f64 {
        match self {
            Slope::Finite(m) => m.atan().to_degrees(),
            Slope::Vertical => 90.0,
        }
    }
}

/// A derived linear relationship: slope plus inclination angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRelation {
    /// The slope.
    pub slope: Slope,
    /// The inclination angle in degrees.
    pub angle_deg: f64,
}

impl LinearRelation {
    /// Derive the relation from a slope.
    pub fn from_slope(slope: Slope) -> Self {
        Self {
            slope,
            angle_deg: slope.angle_deg(),
        }
    }
}

/// The rate specification of the point-and-rate form: an optional slope
/// and an optional angle, exactly as the two fields parsed.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RateSpec {
    /// Direct slope value, if the slope field parsed.
    pub slope: Option<f64>,
    /// Angle in degrees, if the angle field parsed. Takes precedence.
    pub angle_deg: Option<f64>,
}

/// A resolved rate: either a finite slope or a vertical rise direction.
enum Rate {
    Finite(f64),
    Vertical { rise: f64 },
}

impl RateSpec {
    /// Resolve the two optional fields into a usable rate.
    ///
    /// A supplied angle wins over a supplied slope; an angle of exactly
    /// ±90° is the vertical special case. With neither field supplied
    /// there is nothing to compute and the result is `MissingRate`.
    fn resolve(self) -> Result<Rate> {
        if let Some(angle) = self.angle_deg {
            if (angle.abs() - 90.0).abs() < 1e-12 {
                return Ok(Rate::Vertical {
                    rise: angle.signum(),
                });
            }
            return Ok(Rate::Finite(angle.to_radians().tan()));
        }
        if let Some(m) = self.slope {
            return Ok(Rate::Finite(m));
        }
        Err(GradianError::MissingRate)
    }

    /// True when the angle field is the one that will be used.
    pub fn angle_wins(self) -> bool {
        self.angle_deg.is_some()
    }
}

/// The complete outcome of one recompute.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Slope and angle.
    pub relation: LinearRelation,
    /// First endpoint, as supplied.
    pub p1: Point,
    /// Second endpoint, supplied or computed.
    pub p2: Point,
    /// The step-by-step derivation, in display markup.
    pub narration: Narration,
    /// The compact final result, in display markup.
    pub summary: String,
}

/// Solve from two supplied points.
///
/// Slope is `(y2 - y1) / (x2 - x1)`; when the x-coordinates coincide the
/// relation is vertical and reported as such rather than as a non-finite
/// number.
pub fn solve_two_points(x1: f64, y1: f64, x2: f64, y2: f64) -> Result<Solution> {
    let p1 = Point::new(x1, y1);
    let p2 = Point::new(x2, y2);
    ensure_finite("x1", x1)?;
    ensure_finite("y1", y1)?;
    ensure_finite("x2", x2)?;
    ensure_finite("y2", y2)?;

    let slope = if x2 == x1 {
        Slope::Vertical
    } else {
        Slope::Finite((y2 - y1) / (x2 - x1))
    };
    let relation = LinearRelation::from_slope(slope);

    let narration = match slope {
        Slope::Finite(m) => narration::two_points(p1, p2, m, relation.angle_deg),
        Slope::Vertical => narration::two_points_vertical(p1, p2),
    };

    Ok(Solution {
        relation,
        p1,
        p2,
        narration,
        summary: narration::relation_summary(relation),
    })
}

/// Solve from one point, a distance, and a slope or angle.
///
/// The second endpoint lies `distance` away from `(x1, y1)` along the
/// line: `dx = d / sqrt(1 + m^2)`, `dy = m * dx`. An angle of ±90° walks
/// straight up or down instead.
pub fn solve_point_and_rate(x1: f64, y1: f64, distance: f64, rate: RateSpec) -> Result<Solution> {
    let p1 = Point::new(x1, y1);
    ensure_finite("x1", x1)?;
    ensure_finite("y1", y1)?;
    ensure_finite("distance", distance)?;

    match rate.resolve()? {
        Rate::Finite(m) => {
            let dx = distance / (1.0 + m * m).sqrt();
            let dy = m * dx;
            let p2 = Point::new(x1 + dx, y1 + dy);
            let relation = LinearRelation::from_slope(Slope::Finite(m));
            let narration = narration::point_and_rate(rate, m, distance, dx, dy, p1, p2);
            Ok(Solution {
                relation,
                p1,
                p2,
                narration,
                summary: narration::second_point_summary(p2),
            })
        }
        Rate::Vertical { rise } => {
            let p2 = Point::new(x1, y1 + rise * distance);
            let relation = LinearRelation::from_slope(Slope::Vertical);
            let narration = narration::vertical_rate(p1, distance, rise, p2);
            Ok(Solution {
                relation,
                p1,
                p2,
                narration,
                summary: narration::second_point_summary(p2),
            })
        }
    }
}

fn ensure_finite(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(GradianError::non_finite(name, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn slope_matches_rise_over_run() {
        let cases = [
            (0.0, 0.0, 2.0, 4.0),
            (-3.5, 1.0, 7.25, -2.0),
            (1.0, 1.0, 4.0, 1.0),
            (-10.0, -10.0, 10.0, 10.0),
        ];
        for (x1, y1, x2, y2) in cases {
            let sol = solve_two_points(x1, y1, x2, y2).unwrap();
            let expected = (y2 - y1) / (x2 - x1);
            let m = sol.relation.slope.value().unwrap();
            assert!((m - expected).abs() < EPS, "slope for {:?}", (x1, y1, x2, y2));
            assert!((sol.relation.angle_deg - expected.atan().to_degrees()).abs() < EPS);
        }
    }

    #[test]
    fn unit_diagonal_is_45_degrees() {
        let sol = solve_two_points(0.0, 0.0, 1.0, 1.0).unwrap();
        assert_eq!(sol.relation.slope, Slope::Finite(1.0));
        assert!((sol.relation.angle_deg - 45.0).abs() < EPS);
    }

    #[test]
    fn coincident_x_is_vertical_not_nan() {
        let sol = solve_two_points(1.0, 1.0, 1.0, 5.0).unwrap();
        assert!(sol.relation.slope.is_vertical());
        assert_eq!(sol.relation.angle_deg, 90.0);
        assert!(sol.p1.is_finite() && sol.p2.is_finite());
    }

    #[test]
    fn rate_round_trip_preserves_distance_and_slope() {
        for &(m, d) in &[(0.5, 4.0), (-2.0, 10.0), (3.75, 0.5)] {
            let rate = RateSpec {
                slope: Some(m),
                angle_deg: None,
            };
            let sol = solve_point_and_rate(1.0, -2.0, d, rate).unwrap();
            let dist = sol.p1.distance_to(&sol.p2);
            assert!((dist - d).abs() < EPS, "distance for m={m} d={d}");
            let back = (sol.p2.y - sol.p1.y) / (sol.p2.x - sol.p1.x);
            assert!((back - m).abs() < EPS, "slope for m={m} d={d}");
        }
    }

    #[test]
    fn forty_five_degrees_at_distance_ten() {
        let rate = RateSpec {
            slope: None,
            angle_deg: Some(45.0),
        };
        let sol = solve_point_and_rate(0.0, 0.0, 10.0, rate).unwrap();
        let m = sol.relation.slope.value().unwrap();
        assert!((m - 1.0).abs() < EPS);
        assert!((sol.p2.x - 7.071067811865475).abs() < 1e-6);
        assert!((sol.p2.y - 7.071067811865475).abs() < 1e-6);
    }

    #[test]
    fn angle_takes_precedence_over_slope() {
        let rate = RateSpec {
            slope: Some(3.0),
            angle_deg: Some(0.0),
        };
        let sol = solve_point_and_rate(0.0, 0.0, 5.0, rate).unwrap();
        assert_eq!(sol.relation.slope, Slope::Finite(0.0));
        assert_eq!(sol.p2, Point::new(5.0, 0.0));
    }

    #[test]
    fn missing_rate_is_rejected() {
        let err = solve_point_and_rate(0.0, 0.0, 10.0, RateSpec::default()).unwrap_err();
        assert!(matches!(err, GradianError::MissingRate));
        assert!(err.is_input_error());
    }

    #[test]
    fn ninety_degree_angle_walks_straight_up() {
        let rate = RateSpec {
            slope: None,
            angle_deg: Some(90.0),
        };
        let sol = solve_point_and_rate(2.0, 1.0, 4.0, rate).unwrap();
        assert!(sol.relation.slope.is_vertical());
        assert_eq!(sol.p2, Point::new(2.0, 5.0));

        let down = RateSpec {
            slope: None,
            angle_deg: Some(-90.0),
        };
        let sol = solve_point_and_rate(2.0, 1.0, 4.0, down).unwrap();
        assert_eq!(sol.p2, Point::new(2.0, -3.0));
    }

    #[test]
    fn non_finite_inputs_are_rejected() {
        assert!(solve_two_points(f64::NAN, 0.0, 1.0, 1.0).is_err());
        assert!(solve_point_and_rate(0.0, f64::INFINITY, 1.0, RateSpec::default()).is_err());
    }

    #[test]
    fn recompute_is_idempotent() {
        let a = solve_two_points(0.5, -1.25, 3.0, 4.0).unwrap();
        let b = solve_two_points(0.5, -1.25, 3.0, 4.0).unwrap();
        assert_eq!(a, b);
    }
}
