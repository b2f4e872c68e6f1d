//! Densify sparse matrices into row-major buffers
//!
//! Coordinates are bounds-checked on the way in: a matrix built without the
//! per-entry check may hold indices that would otherwise land in the wrong
//! cell.

use torus_core::{Axis, Coo, Csc, Csr, Error, Result};

/// Position of `index` along `axis`, or the out-of-bounds error.
fn position(index: i64, axis: Axis, shape: (usize, usize)) -> Result<usize> {
    let size = axis.len_of(shape);
    usize::try_from(index)
        .ok()
        .filter(|&p| p < size)
        .ok_or(Error::IndexOutOfBounds {
            axis: axis.coordinate(),
            index,
            size,
        })
}

fn fill(
    shape: (usize, usize),
    entries: impl Iterator<Item = (i64, i64, f64)>,
) -> Result<Vec<f64>> {
    let (nrows, ncols) = shape;
    let mut out = vec![0.0f64; nrows * ncols];
    for (i, j, v) in entries {
        let r = position(i, Axis::Rows, shape)?;
        let c = position(j, Axis::Columns, shape)?;
        out[r * ncols + c] += v;
    }
    Ok(out)
}

/// Dense row-major copy of a CSC matrix (`nrows * ncols` values).
///
/// # Errors
/// [`Error::IndexOutOfBounds`] if a stored row index is outside the matrix.
pub fn todense_csc_f64_i64(a: &Csc<f64, i64>) -> Result<Vec<f64>> {
    fill(a.shape(), a.iter())
}

/// Dense row-major copy of a CSR matrix.
///
/// # Errors
/// [`Error::IndexOutOfBounds`] if a stored column index is outside the matrix.
pub fn todense_csr_f64_i64(a: &Csr<f64, i64>) -> Result<Vec<f64>> {
    fill(a.shape(), a.iter())
}

/// Dense row-major copy of a COO matrix; repeated coordinates are summed.
///
/// # Errors
/// [`Error::IndexOutOfBounds`] for a coordinate outside the matrix.
pub fn todense_coo_f64_i64(a: &Coo<f64, i64>) -> Result<Vec<f64>> {
    let entries = a
        .row
        .iter()
        .zip(&a.col)
        .zip(&a.data)
        .map(|((&i, &j), &v)| (i, j, v));
    fill(a.shape(), entries)
}
