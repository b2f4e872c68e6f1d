//! Sparse matrix type definitions
//!
//! `#[pyclass]` wrappers around the `torus_core` compressed formats. Each
//! type is a thin wrapper; the work happens in `torus_kernels`.

pub mod csc;
pub mod csr;

pub use csc::Csc64;
pub use csr::Csr64;
