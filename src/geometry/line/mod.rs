mod combine;
mod relation;

use std::fmt;

use approx::{AbsDiffEq, RelativeEq};

use crate::error::{LineError, Result};
use crate::math::{is_zero, Point2, Vector2, TOLERANCE};

/// An infinite 2D line in standard form: `a·x + b·y = c`.
///
/// The coefficients `a` and `b` are never both zero. A `Line` is never
/// mutated; scaling and combining lines produce new values, and every
/// derived quantity (slope, intercepts, intersection) is computed on demand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    a: f64,
    b: f64,
    c: f64,
}

impl Line {
    /// Creates a line from its standard-form coefficients.
    ///
    /// # Errors
    ///
    /// Returns [`LineError::InvalidEquation`] if `a` and `b` are both zero
    /// or any coefficient is not finite.
    pub fn new(a: f64, b: f64, c: f64) -> Result<Self> {
        if !(a.is_finite() && b.is_finite() && c.is_finite()) {
            tracing::debug!(a, b, c, "rejected non-finite coefficients");
            return Err(LineError::InvalidEquation(format!(
                "coefficients must be finite, got ({a}, {b}, {c})"
            )));
        }
        if is_zero(a) && is_zero(b) {
            tracing::debug!(a, b, c, "rejected degenerate line");
            return Err(LineError::InvalidEquation(
                "a and b cannot both be zero".into(),
            ));
        }
        Ok(Self { a, b, c })
    }

    /// Creates the line `y = slope·x + intercept`.
    ///
    /// # Errors
    ///
    /// Returns an error if `slope` or `intercept` is not finite.
    pub fn from_slope_intercept(slope: f64, intercept: f64) -> Result<Self> {
        Self::new(-slope, 1.0, intercept)
    }

    /// Creates the line through `point` with the given slope.
    ///
    /// # Errors
    ///
    /// Returns an error if `slope` or the point coordinates are not finite.
    pub fn from_point_slope(slope: f64, point: Point2) -> Result<Self> {
        Self::new(-slope, 1.0, -slope * point.x + point.y)
    }

    /// Creates the line through two points.
    ///
    /// Points sharing an x coordinate give the vertical line `x = p1.x`.
    ///
    /// # Errors
    ///
    /// Returns [`LineError::InvalidEquation`] if the points are identical.
    pub fn from_two_points(p1: Point2, p2: Point2) -> Result<Self> {
        let dx = p2.x - p1.x;
        let dy = p2.y - p1.y;
        if is_zero(dx) && is_zero(dy) {
            return Err(LineError::InvalidEquation("points are identical".into()));
        }
        if is_zero(dx) {
            return Self::new(1.0, 0.0, p1.x);
        }
        Self::from_point_slope(dy / dx, p1)
    }

    /// Coefficient of `x`.
    #[must_use]
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Coefficient of `y`.
    #[must_use]
    pub fn b(&self) -> f64 {
        self.b
    }

    /// Constant term.
    #[must_use]
    pub fn c(&self) -> f64 {
        self.c
    }

    /// Returns the normal vector `(a, b)`.
    #[must_use]
    pub fn normal(&self) -> Vector2 {
        Vector2::new(self.a, self.b)
    }

    /// Returns the direction vector `(-b, a)`.
    #[must_use]
    pub fn direction(&self) -> Vector2 {
        Vector2::new(-self.b, self.a)
    }

    /// Returns whether the line is parallel to the y axis.
    ///
    /// Measured on the unit normal, so the answer does not depend on scale.
    #[must_use]
    pub fn is_vertical(&self) -> bool {
        is_zero(self.b / self.normal().norm())
    }

    /// Returns whether the line is parallel to the x axis.
    #[must_use]
    pub fn is_horizontal(&self) -> bool {
        is_zero(self.a / self.normal().norm())
    }

    /// Returns the x coordinate of the point on the line at height `y`.
    ///
    /// # Errors
    ///
    /// Returns [`LineError::DegenerateOperation`] for a horizontal line.
    pub fn solve_for_x(&self, y: f64) -> Result<f64> {
        if self.is_horizontal() {
            return Err(LineError::horizontal("solve_for_x"));
        }
        Ok((self.c - self.b * y) / self.a)
    }

    /// Returns the y coordinate of the point on the line at `x`.
    ///
    /// # Errors
    ///
    /// Returns [`LineError::DegenerateOperation`] for a vertical line.
    pub fn solve_for_y(&self, x: f64) -> Result<f64> {
        if self.is_vertical() {
            return Err(LineError::vertical("solve_for_y"));
        }
        Ok((self.c - self.a * x) / self.b)
    }

    /// Returns the slope `-a / b`.
    ///
    /// # Errors
    ///
    /// Returns [`LineError::DegenerateOperation`] for a vertical line.
    pub fn slope(&self) -> Result<f64> {
        if self.is_vertical() {
            return Err(LineError::vertical("slope"));
        }
        Ok(-self.a / self.b)
    }

    /// Returns the y coordinate where the line crosses the y axis.
    ///
    /// # Errors
    ///
    /// Returns [`LineError::DegenerateOperation`] for a vertical line.
    pub fn y_intercept(&self) -> Result<f64> {
        if self.is_vertical() {
            return Err(LineError::vertical("y_intercept"));
        }
        Ok(self.c / self.b)
    }

    /// Returns the x coordinate where the line crosses the x axis.
    ///
    /// # Errors
    ///
    /// Returns [`LineError::DegenerateOperation`] for a horizontal line.
    pub fn x_intercept(&self) -> Result<f64> {
        if self.is_horizontal() {
            return Err(LineError::horizontal("x_intercept"));
        }
        Ok(self.c / self.a)
    }

    /// Returns `a·x + b·y - c` at `point`; zero iff the point lies on the line.
    #[must_use]
    pub fn evaluate(&self, point: &Point2) -> f64 {
        self.a * point.x + self.b * point.y - self.c
    }

    /// Perpendicular distance from `point` to the line.
    #[must_use]
    pub fn distance_to_point(&self, point: &Point2) -> f64 {
        self.evaluate(point).abs() / self.normal().norm()
    }

    /// Returns whether `point` lies on the line, within [`TOLERANCE`] distance.
    #[must_use]
    pub fn contains_point(&self, point: &Point2) -> bool {
        self.distance_to_point(point) < TOLERANCE
    }
}

/// Renders as `ax + by = c`, with the constant at the formatter's
/// precision (two decimals by default).
impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(2);
        let sign = if self.b < 0.0 { '-' } else { '+' };
        write!(
            f,
            "{}x {sign} {}y = {:.precision$}",
            self.a,
            self.b.abs(),
            self.c
        )
    }
}

impl AbsDiffEq for Line {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        TOLERANCE
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.a.abs_diff_eq(&other.a, epsilon)
            && self.b.abs_diff_eq(&other.b, epsilon)
            && self.c.abs_diff_eq(&other.c, epsilon)
    }
}

impl RelativeEq for Line {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.a.relative_eq(&other.a, epsilon, max_relative)
            && self.b.relative_eq(&other.b, epsilon, max_relative)
            && self.c.relative_eq(&other.c, epsilon, max_relative)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn standard_round_trips_coefficients() {
        let line = Line::new(2.0, -3.5, 7.25).unwrap();
        assert_eq!(line.a(), 2.0);
        assert_eq!(line.b(), -3.5);
        assert_eq!(line.c(), 7.25);
    }

    #[test]
    fn standard_accepts_axis_lines() {
        assert!(Line::new(0.0, 1.0, 0.0).is_ok());
        assert!(Line::new(1.0, 0.0, 0.0).is_ok());
    }

    #[test]
    fn standard_rejects_zero_coefficients() {
        crate::init_test_tracing();
        for c in [-1.0, 0.0, 5.0] {
            assert!(matches!(
                Line::new(0.0, 0.0, c),
                Err(LineError::InvalidEquation(_))
            ));
        }
    }

    #[test]
    fn standard_rejects_non_finite() {
        assert!(matches!(
            Line::new(f64::NAN, 1.0, 0.0),
            Err(LineError::InvalidEquation(_))
        ));
        assert!(matches!(
            Line::new(1.0, 1.0, f64::INFINITY),
            Err(LineError::InvalidEquation(_))
        ));
    }

    #[test]
    fn slope_intercept_solves_for_y() {
        let line = Line::from_slope_intercept(2.0, 3.0).unwrap();
        assert_abs_diff_eq!(line.solve_for_y(0.0).unwrap(), 3.0);
        assert_abs_diff_eq!(line.solve_for_y(1.0).unwrap(), 5.0);
        assert_abs_diff_eq!(line.slope().unwrap(), 2.0);
        assert_abs_diff_eq!(line.y_intercept().unwrap(), 3.0);
    }

    #[test]
    fn point_slope_passes_through_point() {
        let point = Point2::new(-2.0, 4.0);
        let line = Line::from_point_slope(0.5, point).unwrap();
        assert!(line.contains_point(&point));
        assert_abs_diff_eq!(line.slope().unwrap(), 0.5);
    }

    #[test]
    fn two_points_slope_and_membership() {
        let p1 = Point2::new(1.0, 3.0);
        let p2 = Point2::new(4.0, 9.0);
        let line = Line::from_two_points(p1, p2).unwrap();
        assert_abs_diff_eq!(line.slope().unwrap(), 2.0);
        assert!(line.contains_point(&p1));
        assert!(line.contains_point(&p2));
    }

    #[test]
    fn two_identical_points_rejected() {
        let p = Point2::new(2.0, 3.0);
        assert!(matches!(
            Line::from_two_points(p, p),
            Err(LineError::InvalidEquation(_))
        ));
    }

    #[test]
    fn two_points_vertical() {
        let line = Line::from_two_points(Point2::new(2.0, -1.0), Point2::new(2.0, 5.0)).unwrap();
        assert_eq!(line, Line::new(1.0, 0.0, 2.0).unwrap());
        assert!(line.is_vertical());
        assert!(line.slope().is_err());
    }

    #[test]
    fn vertical_line_degenerate_queries() {
        let line = Line::new(1.0, 0.0, 3.0).unwrap();
        for x in [-10.0, 0.0, 3.0, 42.0] {
            assert!(matches!(
                line.solve_for_y(x),
                Err(LineError::DegenerateOperation { .. })
            ));
        }
        assert!(matches!(
            line.y_intercept(),
            Err(LineError::DegenerateOperation { .. })
        ));
        assert_abs_diff_eq!(line.solve_for_x(100.0).unwrap(), 3.0);
        assert_abs_diff_eq!(line.x_intercept().unwrap(), 3.0);
    }

    #[test]
    fn horizontal_line_degenerate_queries() {
        let line = Line::new(0.0, 2.0, 4.0).unwrap();
        assert!(line.is_horizontal());
        assert!(matches!(
            line.solve_for_x(1.0),
            Err(LineError::DegenerateOperation { .. })
        ));
        assert!(matches!(
            line.x_intercept(),
            Err(LineError::DegenerateOperation { .. })
        ));
        assert_abs_diff_eq!(line.slope().unwrap(), 0.0);
        assert_abs_diff_eq!(line.y_intercept().unwrap(), 2.0);
    }

    #[test]
    fn solve_for_x_general() {
        // 2x + 3y = 6
        let line = Line::new(2.0, 3.0, 6.0).unwrap();
        assert_abs_diff_eq!(line.solve_for_x(0.0).unwrap(), 3.0);
        assert_abs_diff_eq!(line.solve_for_x(2.0).unwrap(), 0.0);
        assert_abs_diff_eq!(line.x_intercept().unwrap(), 3.0);
        assert_abs_diff_eq!(line.y_intercept().unwrap(), 2.0);
    }

    #[test]
    fn distance_to_point() {
        // y = 0
        let line = Line::new(0.0, 2.0, 0.0).unwrap();
        assert_abs_diff_eq!(line.distance_to_point(&Point2::new(5.0, -3.0)), 3.0);
        // 3x + 4y = 0, distance of (3, 4) is 25 / 5
        let line = Line::new(3.0, 4.0, 0.0).unwrap();
        assert_abs_diff_eq!(line.distance_to_point(&Point2::new(3.0, 4.0)), 5.0);
    }

    #[test]
    fn normal_and_direction_are_orthogonal() {
        let line = Line::new(2.0, 1.0, 6.0).unwrap();
        assert_abs_diff_eq!(line.normal().dot(&line.direction()), 0.0);
    }

    #[test]
    fn display_format() {
        let line = Line::new(2.0, -1.0, 2.0).unwrap();
        assert_eq!(line.to_string(), "2x - 1y = 2.00");
        let line = Line::new(1.5, 3.0, -0.125).unwrap();
        assert_eq!(format!("{line:.3}"), "1.5x + 3y = -0.125");
    }

    #[test]
    fn display_negated_vertical_has_no_minus_zero_term() {
        let line = Line::new(1.0, 0.0, 3.0).unwrap().negate();
        assert_eq!(line.to_string(), "-1x + 0y = -3.00");
    }

    #[test]
    fn slope_constructors_reject_non_finite() {
        assert!(matches!(
            Line::from_slope_intercept(f64::NAN, 1.0),
            Err(LineError::InvalidEquation(_))
        ));
        assert!(matches!(
            Line::from_slope_intercept(1.0, f64::INFINITY),
            Err(LineError::InvalidEquation(_))
        ));
        assert!(matches!(
            Line::from_point_slope(f64::INFINITY, Point2::new(0.0, 0.0)),
            Err(LineError::InvalidEquation(_))
        ));
        assert!(matches!(
            Line::from_point_slope(1.0, Point2::new(f64::NAN, 0.0)),
            Err(LineError::InvalidEquation(_))
        ));
    }

    #[test]
    fn two_points_overflowing_slope_rejected() {
        // dx is above tolerance but dy / dx overflows to infinity.
        let p1 = Point2::new(0.0, 0.0);
        let p2 = Point2::new(1e-9, f64::MAX);
        assert!(matches!(
            Line::from_two_points(p1, p2),
            Err(LineError::InvalidEquation(_))
        ));
    }

    #[test]
    fn axis_checks_ignore_scale() {
        // Slope -20: steep but not vertical, at any scale.
        let line = Line::new(1e-9, 5e-11, 0.0).unwrap();
        assert!(!line.is_vertical());
        assert!(line.slope().is_ok());
        let line = Line::new(1e-15, 1e-3, 0.0).unwrap();
        assert!(line.is_horizontal());
        assert!(!line.is_vertical());
        let line = Line::new(1e-6, 0.0, 1e-6).unwrap();
        assert!(line.is_vertical());
        assert!(!line.is_horizontal());
    }
}
