use crate::error::{LineError, Result};
use crate::math::intersect_2d::{cos_between, sin_between, solve_2x2};
use crate::math::{is_zero, Point2, TOLERANCE};

use super::Line;

impl Line {
    /// Returns whether the two lines are parallel.
    ///
    /// Compares the sine of the angle between the normals, so vertical lines
    /// need no special case and scaling either line does not change the
    /// answer. Coincident lines count as parallel.
    #[must_use]
    pub fn is_parallel_to(&self, other: &Line) -> bool {
        is_zero(sin_between(self.a, self.b, other.a, other.b))
    }

    /// Returns whether the two lines are perpendicular (cosine of the angle
    /// between the normals is zero).
    #[must_use]
    pub fn is_perpendicular_to(&self, other: &Line) -> bool {
        is_zero(cos_between(self.a, self.b, other.a, other.b))
    }

    /// Returns whether both lines describe the same set of points.
    #[must_use]
    pub fn is_coincident_with(&self, other: &Line) -> bool {
        self.is_parallel_to(other)
            && self.distance_to_point(&other.closest_to_origin()) < TOLERANCE
    }

    /// Computes the single point shared by both lines.
    ///
    /// Uses the same parallel test as [`Line::is_parallel_to`].
    ///
    /// # Errors
    ///
    /// Returns [`LineError::ParallelLines`] if the lines are parallel,
    /// including when they coincide.
    pub fn intersection(&self, other: &Line) -> Result<Point2> {
        solve_2x2(self.a, self.b, self.c, other.a, other.b, other.c).ok_or_else(|| {
            tracing::debug!(first = %self, second = %other, "no unique intersection");
            LineError::ParallelLines
        })
    }

    /// Returns the line through `point` parallel to this one.
    ///
    /// # Errors
    ///
    /// Returns [`LineError::InvalidEquation`] if `point` is not finite.
    pub fn parallel_through(&self, point: &Point2) -> Result<Line> {
        Line::new(self.a, self.b, self.a * point.x + self.b * point.y)
    }

    /// Returns the line through `point` perpendicular to this one.
    ///
    /// # Errors
    ///
    /// Returns [`LineError::InvalidEquation`] if `point` is not finite.
    pub fn perpendicular_through(&self, point: &Point2) -> Result<Line> {
        Line::new(-self.b, self.a, -self.b * point.x + self.a * point.y)
    }

    /// Foot of the perpendicular from the origin: `n · c / |n|²`.
    fn closest_to_origin(&self) -> Point2 {
        Point2::from(self.normal() * (self.c / self.normal().norm_squared()))
    }
}
