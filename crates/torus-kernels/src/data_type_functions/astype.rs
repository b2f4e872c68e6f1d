//! Sparse matrix format conversions (astype in Array API sense).
//!
//! This module provides:
//! - Triplet -> CSC/CSR reconstruction with explicit ordering and zero flags
//! - CSR <-> CSC
//! - CSR/CSC -> COO (coordinate list extraction in storage order)
//! - COO -> CSR/CSC (sorting, duplicate entries summed)
//!
//! All conversions preserve the nonzero values. Conversions that index by
//! caller-provided coordinates check them and return
//! [`Error::IndexOutOfBounds`] instead of panicking.

#![allow(
    clippy::many_single_char_names,
    reason = "Math kernels conventionally use i/j/k/p for indices"
)]

use crate::utility::util::{SMALL_NNZ_LIMIT, expand_indptr, i64_to_usize, usize_to_i64};
use rayon::prelude::*;
use torus_core::{Axis, Coo, Csc, Csr, Error, Result};

/// Flags for rebuilding a compressed matrix from `(row, col, value)` triples.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TripletOptions {
    /// Triples are in arbitrary order and must be sorted. When `false` the
    /// caller states they already follow the target layout order; triples
    /// that turn out not to are sorted anyway.
    pub sort_locations: bool,
    /// Drop entries whose value is exactly zero.
    pub check_for_zeros: bool,
}

impl TripletOptions {
    /// Triples already in layout order, no zeros to drop.
    pub const PRESORTED: Self = Self {
        sort_locations: false,
        check_for_zeros: false,
    };
    /// Triples in arbitrary order, no zeros to drop.
    pub const UNSORTED: Self = Self {
        sort_locations: true,
        check_for_zeros: false,
    };
}

/// Compressed arrays produced by [`compress`]
pub(crate) struct Compressed {
    pub indptr: Vec<i64>,
    pub indices: Vec<i64>,
    pub data: Vec<f64>,
}

/// First index outside `[0, size)` along `axis`, as an error.
fn check_bounds(indices: &[i64], axis: Axis, size: usize) -> Result<()> {
    match indices
        .iter()
        .find(|&&i| !usize::try_from(i).is_ok_and(|u| u < size))
    {
        Some(&index) => Err(Error::IndexOutOfBounds {
            axis: axis.coordinate(),
            index,
            size,
        }),
        None => Ok(()),
    }
}

/// Layout-order check for the presorted path: major non-decreasing and minor
/// strictly increasing inside each major slice.
fn in_layout_order(major: &[i64], minor: &[i64]) -> bool {
    major
        .windows(2)
        .zip(minor.windows(2))
        .all(|(ma, mi)| ma[0] < ma[1] || (ma[0] == ma[1] && mi[0] < mi[1]))
}

/// Build `indptr` for `nmajor` slices from the major index of every entry.
fn count_major(nmajor: usize, major_axis: Axis, major: &[i64]) -> Result<Vec<i64>> {
    check_bounds(major, major_axis, nmajor)?;
    let mut indptr = vec![0i64; nmajor + 1];
    for &m in major {
        indptr[i64_to_usize(m) + 1] += 1;
    }
    for m in 0..nmajor {
        indptr[m + 1] += indptr[m];
    }
    Ok(indptr)
}

/// Compress triples given as (major, minor, value) into a compressed layout
/// with `nmajor` slices along `major_axis`.
///
/// Presorted input is counted straight into place. Unsorted input is
/// bucketed by major index (stable scatter), each bucket is sorted by minor
/// index, and repeated coordinates are summed. Minor indices are carried
/// through unchecked.
///
/// # Errors
/// [`Error::IndexOutOfBounds`] if a major index is outside `[0, nmajor)`.
pub(crate) fn compress(
    nmajor: usize,
    major_axis: Axis,
    major: &[i64],
    minor: &[i64],
    data: &[f64],
    opts: TripletOptions,
) -> Result<Compressed> {
    debug_assert_eq!(major.len(), data.len());
    debug_assert_eq!(minor.len(), data.len());

    if opts.check_for_zeros && data.iter().any(|&v| v == 0.0) {
        let keep: Vec<usize> = (0..data.len()).filter(|&p| data[p] != 0.0).collect();
        let major: Vec<i64> = keep.iter().map(|&p| major[p]).collect();
        let minor: Vec<i64> = keep.iter().map(|&p| minor[p]).collect();
        let data: Vec<f64> = keep.iter().map(|&p| data[p]).collect();
        let opts = TripletOptions {
            check_for_zeros: false,
            ..opts
        };
        return compress(nmajor, major_axis, &major, &minor, &data, opts);
    }

    let counts = count_major(nmajor, major_axis, major)?;
    if !opts.sort_locations {
        if in_layout_order(major, minor) {
            return Ok(Compressed {
                indptr: counts,
                indices: minor.to_vec(),
                data: data.to_vec(),
            });
        }
        tracing::debug!(nnz = data.len(), "presorted triples out of order, sorting");
    }

    let nnz = data.len();
    let mut next: Vec<usize> = counts.iter().copied().map(i64_to_usize).collect();
    let mut pairs: Vec<(i64, f64)> = vec![(0, 0.0); nnz];
    for p in 0..nnz {
        let m = i64_to_usize(major[p]);
        pairs[next[m]] = (minor[p], data[p]);
        next[m] += 1;
    }

    // Sort each major slice by minor index.
    let mut buckets: Vec<&mut [(i64, f64)]> = Vec::with_capacity(nmajor);
    let mut rest = pairs.as_mut_slice();
    for m in 0..nmajor {
        let len = i64_to_usize(counts[m + 1] - counts[m]);
        let (head, tail) = std::mem::take(&mut rest).split_at_mut(len);
        buckets.push(head);
        rest = tail;
    }
    if nnz < SMALL_NNZ_LIMIT {
        for b in buckets {
            b.sort_unstable_by_key(|x| x.0);
        }
    } else {
        buckets
            .into_par_iter()
            .for_each(|b| b.sort_unstable_by_key(|x| x.0));
    }

    // Unzip, summing repeated coordinates.
    let mut indptr = vec![0i64; nmajor + 1];
    let mut indices: Vec<i64> = Vec::with_capacity(nnz);
    let mut out: Vec<f64> = Vec::with_capacity(nnz);
    for m in 0..nmajor {
        let s = i64_to_usize(counts[m]);
        let e = i64_to_usize(counts[m + 1]);
        let start = indices.len();
        for &(i, v) in &pairs[s..e] {
            if indices.len() > start && indices.last() == Some(&i) {
                if let Some(acc) = out.last_mut() {
                    *acc += v;
                }
            } else {
                indices.push(i);
                out.push(v);
            }
        }
        indptr[m + 1] = usize_to_i64(indices.len());
    }
    Ok(Compressed {
        indptr,
        indices,
        data: out,
    })
}

/// Builds a CSC matrix from `(row, col, value)` triples.
///
/// With `opts.sort_locations == false` the triples are expected to be
/// column-major already (by column, then strictly increasing row).
///
/// # Errors
/// [`Error::LengthMismatch`] if the three slices differ in length,
/// [`Error::IndexOutOfBounds`] for a coordinate outside the matrix.
pub fn triplets_to_csc_f64_i64(
    nrows: usize,
    ncols: usize,
    row: &[i64],
    col: &[i64],
    data: &[f64],
    opts: TripletOptions,
) -> Result<Csc<f64, i64>> {
    check_triplets(row, col, data)?;
    check_bounds(row, Axis::Rows, nrows)?;
    let c = compress(ncols, Axis::Columns, col, row, data, opts)?;
    Ok(Csc::from_parts_unchecked(nrows, ncols, c.indptr, c.indices, c.data))
}

/// Builds a CSR matrix from `(row, col, value)` triples.
///
/// With `opts.sort_locations == false` the triples are expected to be
/// row-major already (by row, then strictly increasing column).
///
/// # Errors
/// Same as [`triplets_to_csc_f64_i64`].
pub fn triplets_to_csr_f64_i64(
    nrows: usize,
    ncols: usize,
    row: &[i64],
    col: &[i64],
    data: &[f64],
    opts: TripletOptions,
) -> Result<Csr<f64, i64>> {
    check_triplets(row, col, data)?;
    check_bounds(col, Axis::Columns, ncols)?;
    let c = compress(nrows, Axis::Rows, row, col, data, opts)?;
    Ok(Csr::from_parts_unchecked(nrows, ncols, c.indptr, c.indices, c.data))
}

fn check_triplets(row: &[i64], col: &[i64], data: &[f64]) -> Result<()> {
    if row.len() != data.len() || col.len() != data.len() {
        return Err(Error::LengthMismatch {
            what: "row/col/data must have equal length",
        });
    }
    Ok(())
}

/// Converts CSC to COO, keeping the column-major storage order.
#[must_use]
pub fn csc_to_coo_f64_i64(a: &Csc<f64, i64>) -> Coo<f64, i64> {
    let col = expand_indptr(&a.indptr);
    Coo::from_parts_unchecked(a.nrows, a.ncols, a.indices.clone(), col, a.data.clone())
}

/// Converts CSR to COO, keeping the row-major storage order.
#[must_use]
pub fn csr_to_coo_f64_i64(a: &Csr<f64, i64>) -> Coo<f64, i64> {
    let row = expand_indptr(&a.indptr);
    Coo::from_parts_unchecked(a.nrows, a.ncols, row, a.indices.clone(), a.data.clone())
}

/// Converts COO to CSC. Duplicate coordinates are summed.
///
/// # Errors
/// [`Error::IndexOutOfBounds`] for a coordinate outside the matrix, which
/// only an unchecked [`Coo`] can hold.
pub fn coo_to_csc_f64_i64(a: &Coo<f64, i64>) -> Result<Csc<f64, i64>> {
    triplets_to_csc_f64_i64(
        a.nrows,
        a.ncols,
        &a.row,
        &a.col,
        &a.data,
        TripletOptions::UNSORTED,
    )
}

/// Converts COO to CSR. Duplicate coordinates are summed.
///
/// # Errors
/// Same as [`coo_to_csc_f64_i64`].
pub fn coo_to_csr_f64_i64(a: &Coo<f64, i64>) -> Result<Csr<f64, i64>> {
    triplets_to_csr_f64_i64(
        a.nrows,
        a.ncols,
        &a.row,
        &a.col,
        &a.data,
        TripletOptions::UNSORTED,
    )
}

/// Converts CSR to CSC.
///
/// # Errors
/// [`Error::IndexOutOfBounds`] if a column index is outside the matrix,
/// which only a CSR built without the per-row check can hold.
pub fn csr_to_csc_f64_i64(a: &Csr<f64, i64>) -> Result<Csc<f64, i64>> {
    let row = expand_indptr(&a.indptr);
    let c = compress(
        a.ncols,
        Axis::Columns,
        &a.indices,
        &row,
        &a.data,
        TripletOptions::UNSORTED,
    )?;
    Ok(Csc::from_parts_unchecked(a.nrows, a.ncols, c.indptr, c.indices, c.data))
}

/// Converts CSC to CSR.
///
/// # Errors
/// [`Error::IndexOutOfBounds`] if a row index is outside the matrix.
pub fn csc_to_csr_f64_i64(a: &Csc<f64, i64>) -> Result<Csr<f64, i64>> {
    let col = expand_indptr(&a.indptr);
    let c = compress(
        a.nrows,
        Axis::Rows,
        &a.indices,
        &col,
        &a.data,
        TripletOptions::UNSORTED,
    )?;
    Ok(Csr::from_parts_unchecked(a.nrows, a.ncols, c.indptr, c.indices, c.data))
}
