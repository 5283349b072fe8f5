//! Exported arithmetic symbols.

use crate::arithmetic;

/// Returns `a + b`, wrapping on overflow.
#[no_mangle]
pub extern "C" fn add(a: i32, b: i32) -> i32 {
    arithmetic::add(a, b)
}

/// Returns the sum of all natural numbers strictly below `n`.
///
/// Yields 0 when `n <= 0`. Wraps on overflow.
#[no_mangle]
pub extern "C" fn sum_of_naturals(n: i32) -> i32 {
    arithmetic::sum_of_naturals_closed_form(n)
}
