//! Degenerate-input handling for the math kernel.
//!
//! The kernel never signals failure. Zero-length vectors and singular
//! matrices are handled in exactly two ways, both defined here:
//!
//! * `normalize` skips the write when the magnitude is degenerate, leaving
//!   the output buffer at whatever it held before.
//! * Everything else divides through [`unguarded_reciprocal`], so a zero
//!   denominator turns into `inf`/`NaN` in the result instead of a panic.

/// Magnitudes at or below this are treated as zero by `normalize`.
pub const MAGNITUDE_EPSILON: f32 = 1e-5;

/// True when `magnitude` is too small to divide by (NaN counts as degenerate).
#[inline]
pub fn is_degenerate_magnitude(magnitude: f32) -> bool {
    !(magnitude > MAGNITUDE_EPSILON)
}

/// `1 / x` with no guard. Zero gives `inf`, which then spreads as `inf`/`NaN`.
#[inline]
pub fn unguarded_reciprocal(x: f32) -> f32 {
    1.0 / x
}
