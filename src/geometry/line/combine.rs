use std::ops::{Add, Mul, Neg, Sub};

use crate::error::{LineError, Result};
use crate::math::is_zero;

use super::Line;

impl Line {
    /// Multiplies every coefficient by `factor`. The result describes the
    /// same set of points.
    ///
    /// # Errors
    ///
    /// Returns [`LineError::InvalidEquation`] if `factor` is zero or the
    /// scaled coefficients no longer form a line.
    pub fn scale(&self, factor: f64) -> Result<Line> {
        if is_zero(factor) {
            tracing::debug!(line = %self, factor, "rejected zero scale factor");
            return Err(LineError::InvalidEquation("scale factor is zero".into()));
        }
        Line::new(self.a * factor, self.b * factor, self.c * factor)
    }

    /// Adds the coefficients of both equations.
    ///
    /// # Errors
    ///
    /// Returns [`LineError::InvalidEquation`] if the sum has `a` and `b`
    /// both zero, e.g. when adding a line to its negation.
    pub fn add(&self, other: &Line) -> Result<Line> {
        Line::new(self.a + other.a, self.b + other.b, self.c + other.c)
    }

    /// Subtracts the coefficients of `other` from this equation.
    ///
    /// # Errors
    ///
    /// Returns [`LineError::InvalidEquation`] if the difference has `a` and
    /// `b` both zero.
    pub fn subtract(&self, other: &Line) -> Result<Line> {
        Line::new(self.a - other.a, self.b - other.b, self.c - other.c)
    }

    /// Returns `-a·x - b·y = -c`, the same line with every sign flipped.
    ///
    /// Operators (`+`, `-`, `*`, unary `-`) are implemented on `&Line`.
    #[must_use]
    pub fn negate(&self) -> Line {
        Line {
            a: -self.a,
            b: -self.b,
            c: -self.c,
        }
    }
}

impl Add for &Line {
    type Output = Result<Line>;

    fn add(self, rhs: Self) -> Result<Line> {
        Line::add(self, rhs)
    }
}

impl Sub for &Line {
    type Output = Result<Line>;

    fn sub(self, rhs: Self) -> Result<Line> {
        self.subtract(rhs)
    }
}

impl Mul<f64> for &Line {
    type Output = Result<Line>;

    fn mul(self, rhs: f64) -> Result<Line> {
        self.scale(rhs)
    }
}

impl Neg for &Line {
    type Output = Line;

    fn neg(self) -> Line {
        self.negate()
    }
}
