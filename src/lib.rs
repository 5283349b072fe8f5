//! PyDll - Native Arithmetic Library
//!
//! A shared library exposing integer arithmetic over the C ABI, loaded by
//! host processes through their dynamic loader (e.g. Python `ctypes`).

// Pure logic
pub mod arithmetic;

// C ABI exports
pub mod ffi;

pub use ffi::{add, sum_of_naturals};
