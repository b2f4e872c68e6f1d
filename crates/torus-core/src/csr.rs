//! CSR format definitions and constructors

use crate::compressed::{self, slice_entries, CSR_NAMES};
use crate::error::Result;

/// Compressed sparse row matrix, the row-major mirror of [`crate::Csc`].
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub struct Csr<T, I> {
    pub nrows: usize,
    pub ncols: usize,
    pub indptr: Vec<I>,
    pub indices: Vec<I>,
    pub data: Vec<T>,
}

impl<T, I> Csr<T, I> {
    #[inline]
    #[must_use]
    pub const fn shape(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }
    #[inline]
    #[must_use]
    pub const fn nnz(&self) -> usize {
        self.data.len()
    }
}

impl Csr<f64, i64> {
    pub fn from_parts(
        nrows: usize,
        ncols: usize,
        indptr: Vec<i64>,
        indices: Vec<i64>,
        data: Vec<f64>,
        check: bool,
    ) -> Result<Self> {
        compressed::validate(nrows, ncols, &indptr, &indices, &data, check, CSR_NAMES)?;
        Ok(Self {
            nrows,
            ncols,
            indptr,
            indices,
            data,
        })
    }

    #[inline]
    #[must_use]
    pub const fn from_parts_unchecked(
        nrows: usize,
        ncols: usize,
        indptr: Vec<i64>,
        indices: Vec<i64>,
        data: Vec<f64>,
    ) -> Self {
        Self {
            nrows,
            ncols,
            indptr,
            indices,
            data,
        }
    }

    #[must_use]
    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        Self::from_parts_unchecked(nrows, ncols, vec![0; nrows + 1], Vec::new(), Vec::new())
    }

    /// Iterate `(row, col, value)` in storage (row-major) order.
    pub fn iter(&self) -> impl Iterator<Item = (i64, i64, f64)> + '_ {
        self.indptr
            .windows(2)
            .enumerate()
            .flat_map(move |(i, w)| {
                let row = i64::try_from(i).unwrap_or(i64::MAX);
                slice_entries(w, &self.indices, &self.data).map(move |(j, v)| (row, j, v))
            })
    }
}
