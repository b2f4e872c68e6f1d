//! Core data structures for Torus (pure Rust)
//!
//! Storage formats for 2D sparse matrices with `f64` values and `i64`
//! indices, plus the axis selector and error type shared by the kernels.

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod axis;
mod compressed;
pub mod coo;
pub mod csc;
pub mod csr;
pub mod error;

pub use axis::Axis;
pub use coo::Coo;
pub use csc::Csc;
pub use csr::Csr;
pub use error::{Error, Result};
