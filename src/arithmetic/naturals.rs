//! Sum of the natural numbers below a bound.
//!
//! Both forms compute `0 + 1 + ... + (n - 1)`, yield 0 for `n <= 0`, and wrap
//! on overflow. They agree for every `i32`.

/// Accumulates `0..n` one term at a time. O(n).
pub fn sum_of_naturals_iterative(n: i32) -> i32 {
    let mut sum: i32 = 0;
    for i in 0..n {
        sum = sum.wrapping_add(i);
    }
    sum
}

/// Evaluates `n * (n - 1) / 2` in O(1).
///
/// The product is exact in 64 bits for any `n < 2^31`, and truncating the
/// quotient to 32 bits is the same reduction mod 2^32 that the iterative
/// accumulation performs.
#[inline]
pub fn sum_of_naturals_closed_form(n: i32) -> i32 {
    if n <= 0 {
        return 0;
    }
    let n = i64::from(n);
    (n * (n - 1) / 2) as i32
}
