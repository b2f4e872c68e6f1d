//! Kernels for Torus (pure Rust, parallel ready)
//!
//! The central operation is the sparse circular shift
//! ([`circshift_csc_f64_i64`] and its CSR/COO siblings) built on the index
//! wrapper [`wrap_indices`]. Format conversions, transpose and densify are
//! provided for callers and for cross-checking against dense rotation.

pub mod data_type_functions;
pub mod linalg;
pub mod manipulation;
pub mod utility;

pub use data_type_functions::astype::{
    TripletOptions, coo_to_csc_f64_i64, coo_to_csr_f64_i64, csc_to_coo_f64_i64,
    csc_to_csr_f64_i64, csr_to_coo_f64_i64, csr_to_csc_f64_i64, triplets_to_csc_f64_i64,
    triplets_to_csr_f64_i64,
};
pub use data_type_functions::dense::{todense_coo_f64_i64, todense_csc_f64_i64, todense_csr_f64_i64};
pub use linalg::matrix_transpose::{
    transpose_coo_f64_i64, transpose_csc_f64_i64, transpose_csr_f64_i64,
};
pub use manipulation::circshift::{
    CircShift, circshift_coo_f64_i64, circshift_coo_wrapping_f64_i64, circshift_csc_f64_i64,
    circshift_csc_wrapping_f64_i64, circshift_csr_f64_i64, circshift_csr_wrapping_f64_i64,
};
pub use manipulation::wrap::{wrap_indices, wrap_indices_euclid};
pub use utility::eliminate_zeros::{eliminate_zeros_coo, eliminate_zeros_csc, eliminate_zeros_csr};

/// Configure rayon's global pool.
///
/// `None` keeps rayon's default (which honours `RAYON_NUM_THREADS`). The
/// global pool can only be built once; later calls return the build error.
///
/// # Errors
/// Returns the rayon error if the global pool was already initialized.
pub fn init_parallel(num_threads: Option<usize>) -> Result<(), rayon::ThreadPoolBuildError> {
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = num_threads {
        builder = builder.num_threads(n);
    }
    builder.build_global()?;
    tracing::debug!(threads = rayon::current_num_threads(), "rayon pool initialized");
    Ok(())
}
