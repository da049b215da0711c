//! Numeric container capability required of every conforming backend
//!
//! The contract does not compute with arrays beyond summing density
//! parameters, so the capability is deliberately thin: anything that clones
//! and supports elementwise arithmetic qualifies. Scalars (`f64`), fixed-size
//! arrays wrapped in a newtype, or full tensor types from an external
//! numerics crate all satisfy it the same way.

use std::ops::{Add, Div, Mul, Sub};

/// Capability bound for the numeric container every quantity is expressed in
///
/// This is a bound alias, not an interface to implement by hand: the blanket
/// impl covers every type with elementwise `+`, `-`, `*`, `/` returning the
/// same type. The crate itself only ever uses `Clone` and `Add` (for the
/// total-density summation law); the remaining operators are part of the
/// contract so generic algorithms written against it can do real arithmetic.
///
/// # Examples
///
/// ```
/// use cosmology_api::Array;
///
/// fn sum_of<A: Array>(a: A, b: A) -> A {
///     a + b
/// }
///
/// assert_eq!(sum_of(0.3, 0.7), 1.0);
/// ```
pub trait Array:
    Clone
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Sized
{
}

impl<T> Array for T where
    T: Clone
        + Add<Output = T>
        + Sub<Output = T>
        + Mul<Output = T>
        + Div<Output = T>
        + Sized
{
}

/// Elementwise comparison within an absolute tolerance
///
/// Used by the invariant checks to compare quantities produced by a
/// conforming implementation. Shape mismatch compares as unequal rather than
/// panicking, since candidates are opaque to this crate.
pub trait ApproxEq {
    /// Returns true when every element of `self` is within `tol` of the
    /// corresponding element of `other`.
    fn approx_eq(&self, other: &Self, tol: f64) -> bool;
}

impl ApproxEq for f64 {
    fn approx_eq(&self, other: &Self, tol: f64) -> bool {
        (self - other).abs() <= tol
    }
}

impl ApproxEq for f32 {
    fn approx_eq(&self, other: &Self, tol: f64) -> bool {
        (f64::from(*self) - f64::from(*other)).abs() <= tol
    }
}

impl ApproxEq for Vec<f64> {
    fn approx_eq(&self, other: &Self, tol: f64) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other.iter())
                .all(|(a, b)| a.approx_eq(b, tol))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_within_tolerance() {
        assert!(1.0_f64.approx_eq(&1.0000001, 1e-6));
        assert!(!1.0_f64.approx_eq(&1.01, 1e-6));
    }

    #[test]
    fn nan_is_never_equal() {
        assert!(!f64::NAN.approx_eq(&f64::NAN, 1e-6));
    }

    #[test]
    fn vector_elementwise() {
        let a = vec![0.3, 0.7];
        let b = vec![0.3, 0.7 + 1e-9];
        assert!(a.approx_eq(&b, 1e-8));
        assert!(!a.approx_eq(&vec![0.3], 1e-8));
    }
}
