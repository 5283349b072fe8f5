//! Pure integer arithmetic behind the exported symbols.
//!
//! Everything here is safe Rust with no state. The FFI layer in `ffi/` calls
//! these functions.

pub mod add;
pub mod naturals;

pub use add::add;
pub use naturals::{sum_of_naturals_closed_form, sum_of_naturals_iterative};
