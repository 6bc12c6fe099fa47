pub mod intersect_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Returns whether `value` is zero within [`TOLERANCE`].
#[must_use]
pub fn is_zero(value: f64) -> bool {
    value.abs() < TOLERANCE
}
