//! Two's-complement integer addition.

/// Adds two integers, wrapping on overflow like native `int` arithmetic.
#[inline]
pub fn add(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}
