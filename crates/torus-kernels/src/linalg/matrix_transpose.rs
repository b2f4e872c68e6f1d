//! Matrix transpose kernels for CSR, CSC, and COO formats.
//!
//! The compressed arrays of a CSC matrix are exactly the CSR arrays of its
//! transpose (and vice versa), so both compressed transposes reinterpret the
//! input and convert back to the original format.

use crate::data_type_functions::astype::{csc_to_csr_f64_i64, csr_to_csc_f64_i64};
use torus_core::{Coo, Csc, Csr, Result};

/// Transposes a CSC matrix: A (nrows x ncols) -> A^T (ncols x nrows) in CSC.
///
/// # Errors
/// [`torus_core::Error::IndexOutOfBounds`] if a stored row index is outside
/// the matrix.
pub fn transpose_csc_f64_i64(a: &Csc<f64, i64>) -> Result<Csc<f64, i64>> {
    let as_csr_t = Csr::from_parts_unchecked(
        a.ncols,
        a.nrows,
        a.indptr.clone(),
        a.indices.clone(),
        a.data.clone(),
    );
    csr_to_csc_f64_i64(&as_csr_t)
}

/// Transposes a CSR matrix: A (nrows x ncols) -> A^T (ncols x nrows) in CSR.
///
/// # Errors
/// Same as [`transpose_csc_f64_i64`], for column indices.
pub fn transpose_csr_f64_i64(a: &Csr<f64, i64>) -> Result<Csr<f64, i64>> {
    let as_csc_t = Csc::from_parts_unchecked(
        a.ncols,
        a.nrows,
        a.indptr.clone(),
        a.indices.clone(),
        a.data.clone(),
    );
    csc_to_csr_f64_i64(&as_csc_t)
}

/// Transposes a COO matrix by swapping coordinates.
#[must_use]
pub fn transpose_coo_f64_i64(a: &Coo<f64, i64>) -> Coo<f64, i64> {
    Coo::from_parts_unchecked(
        a.ncols,
        a.nrows,
        a.col.clone(),
        a.row.clone(),
        a.data.clone(),
    )
}
