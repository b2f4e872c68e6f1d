//! CSC format definitions and constructors

use crate::compressed::{self, slice_entries, CSC_NAMES};
use crate::error::Result;

/// Compressed sparse column matrix.
///
/// Entries are stored column-major: column `j` owns
/// `indices[indptr[j]..indptr[j + 1]]`, with strictly increasing row indices.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub struct Csc<T, I> {
    pub data: Vec<T>,
    pub indices: Vec<I>, // row indices per column
    pub indptr: Vec<I>,  // column pointer, length ncols + 1
    pub ncols: usize,
    pub nrows: usize,
}

impl<T, I> Csc<T, I> {
    #[inline]
    #[must_use]
    pub const fn nnz(&self) -> usize {
        self.data.len()
    }
    #[inline]
    #[must_use]
    pub const fn shape(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }
}

impl Csc<f64, i64> {
    #[inline]
    pub fn from_parts(
        nrows: usize,
        ncols: usize,
        indptr: Vec<i64>,
        indices: Vec<i64>,
        data: Vec<f64>,
        check: bool,
    ) -> Result<Self> {
        compressed::validate(ncols, nrows, &indptr, &indices, &data, check, CSC_NAMES)?;
        Ok(Self {
            data,
            indices,
            indptr,
            ncols,
            nrows,
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
            data,
            indices,
            indptr,
            ncols,
            nrows,
        }
    }

    /// Empty matrix of the given shape
    #[must_use]
    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        Self::from_parts_unchecked(nrows, ncols, vec![0; ncols + 1], Vec::new(), Vec::new())
    }

    /// Iterate `(row, col, value)` in storage (column-major) order.
    pub fn iter(&self) -> impl Iterator<Item = (i64, i64, f64)> + '_ {
        self.indptr
            .windows(2)
            .enumerate()
            .flat_map(move |(j, w)| {
                let col = i64::try_from(j).unwrap_or(i64::MAX);
                slice_entries(w, &self.indices, &self.data).map(move |(i, v)| (i, col, v))
            })
    }
}
