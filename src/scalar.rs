//! Scalar math helpers.

/// Tolerance used for approximate vector and matrix comparisons and for
/// deciding whether a vector is normalized.
pub const VEC_PRECISION: f32 = 0.005;

/// Machine epsilon for `f32`.
pub const EPSILON_FLOAT: f32 = f32::EPSILON;

/// Computes the square root of `value`. Negative input gives NaN.
#[inline]
pub fn sqrt(value: f32) -> f32 {
    value.sqrt()
}

/// Computes the sine of `radians`.
#[inline]
pub fn sin(radians: f32) -> f32 {
    radians.sin()
}

/// Computes the cosine of `radians`.
#[inline]
pub fn cos(radians: f32) -> f32 {
    radians.cos()
}

/// Computes the tangent of `radians`.
#[inline]
pub fn tan(radians: f32) -> f32 {
    radians.tan()
}

/// Computes the absolute value of `value`.
#[inline]
pub fn abs(value: f32) -> f32 {
    value.abs()
}

/// Restricts `value` to the range from `min` to `max`, both inclusive.
///
/// A NaN `value` is passed through unchanged. Unlike [`f32::clamp`], the
/// bounds are only checked in debug builds.
///
/// # Panics
/// In debug builds, if `min` is larger than `max` or either bound is NaN.
#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    debug_assert!(min <= max, "invalid clamp bounds [{min}, {max}]");
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}
