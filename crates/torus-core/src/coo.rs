//! COO format definitions and constructors

use crate::error::{Error, Result};

/// Coordinate-format matrix: parallel `row`/`col`/`data` arrays.
///
/// No ordering is implied. Kernels also use it as the coordinate list they
/// extract from the compressed formats.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub struct Coo<T, I> {
    pub data: Vec<T>,
    pub row: Vec<I>, // length nnz
    pub col: Vec<I>, // length nnz
    pub ncols: usize,
    pub nrows: usize,
}

impl<T, I> Coo<T, I> {
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

impl Coo<f64, i64> {
    #[inline]
    pub fn from_parts(
        nrows: usize,
        ncols: usize,
        row: Vec<i64>,
        col: Vec<i64>,
        data: Vec<f64>,
        check: bool,
    ) -> Result<Self> {
        if row.len() != data.len() || col.len() != data.len() {
            return Err(Error::LengthMismatch {
                what: "row/col/data must have equal length",
            });
        }
        if check {
            for (&i, &j) in row.iter().zip(&col) {
                if !usize::try_from(i).is_ok_and(|ii| ii < nrows) {
                    return Err(Error::IndexOutOfBounds {
                        axis: "row",
                        index: i,
                        size: nrows,
                    });
                }
                if !usize::try_from(j).is_ok_and(|jj| jj < ncols) {
                    return Err(Error::IndexOutOfBounds {
                        axis: "column",
                        index: j,
                        size: ncols,
                    });
                }
            }
        }
        Ok(Self {
            data,
            row,
            col,
            ncols,
            nrows,
        })
    }

    #[inline]
    #[must_use]
    pub const fn from_parts_unchecked(
        nrows: usize,
        ncols: usize,
        row: Vec<i64>,
        col: Vec<i64>,
        data: Vec<f64>,
    ) -> Self {
        Self {
            data,
            row,
            col,
            ncols,
            nrows,
        }
    }
}
