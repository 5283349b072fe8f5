//! C ABI surface of the shared library.
//!
//! Every function here is `#[no_mangle]` and `extern "C"` (or `"system"` for
//! the loader hook). They are thin wrappers: the logic lives in `arithmetic`.

pub mod arithmetic;
pub mod lifecycle;

pub use arithmetic::{add, sum_of_naturals};
pub use lifecycle::{on_loader_event, LoaderEvent};
