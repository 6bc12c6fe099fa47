use super::{is_zero, Point2};

/// 2D cross product of `(a1, b1)` and `(a2, b2)`: `a1 * b2 - a2 * b1`.
///
/// For two lines in standard form this is the determinant of their
/// coefficient matrix, zero iff the lines are parallel.
#[must_use]
pub fn cross_2d(a1: f64, b1: f64, a2: f64, b2: f64) -> f64 {
    a1 * b2 - a2 * b1
}

/// 2D dot product of `(a1, b1)` and `(a2, b2)`.
#[must_use]
pub fn dot_2d(a1: f64, b1: f64, a2: f64, b2: f64) -> f64 {
    a1 * a2 + b1 * b2
}

/// Sine of the angle between `(a1, b1)` and `(a2, b2)`.
///
/// Independent of the vectors' lengths; both must be non-zero.
#[must_use]
pub fn sin_between(a1: f64, b1: f64, a2: f64, b2: f64) -> f64 {
    cross_2d(a1, b1, a2, b2) / (a1.hypot(b1) * a2.hypot(b2))
}

/// Cosine of the angle between `(a1, b1)` and `(a2, b2)`.
///
/// Independent of the vectors' lengths; both must be non-zero.
#[must_use]
pub fn cos_between(a1: f64, b1: f64, a2: f64, b2: f64) -> f64 {
    dot_2d(a1, b1, a2, b2) / (a1.hypot(b1) * a2.hypot(b2))
}

/// Solves the system `a1·x + b1·y = c1`, `a2·x + b2·y = c2` by Cramer's rule.
///
/// Returns `None` if the normals `(a1, b1)` and `(a2, b2)` are parallel, i.e.
/// [`sin_between`] is zero within tolerance.
#[must_use]
pub fn solve_2x2(a1: f64, b1: f64, c1: f64, a2: f64, b2: f64, c2: f64) -> Option<Point2> {
    if is_zero(sin_between(a1, b1, a2, b2)) {
        return None;
    }
    let det = cross_2d(a1, b1, a2, b2);
    let x = cross_2d(c1, b1, c2, b2) / det;
    let y = cross_2d(a1, c1, a2, c2) / det;
    Some(Point2::new(x, y))
}
