//! Circular shift (wrap-around rotation) of sparse matrices along one axis.
//!
//! The matrix is never densified. Coordinates are extracted in storage
//! order, the coordinate of the shifted axis is offset and wrapped, and a new
//! matrix is rebuilt from the triples.
//!
//! Rebuild strategy depends on the layout:
//! - Shifting along the **major** axis (columns for CSC, rows for CSR) keeps
//!   each wrapped and unwrapped group in order; the only change is that the
//!   wrapped group moves from one end of the entry list to the other. The
//!   entry list is rotated by the rotation count and compressed without
//!   sorting.
//! - Shifting along the **minor** axis can interleave entries inside a major
//!   slice, so the triples are rebuilt through the sorting path.
//!
//! Shift amounts must satisfy `|shift| <= size` (one wrap at most). The
//! `*_wrapping_*` variants reduce any amount modulo `size` first.

use crate::data_type_functions::astype::{
    Compressed, TripletOptions, compress, csc_to_coo_f64_i64, csr_to_coo_f64_i64,
};
use crate::manipulation::wrap::{add_offset, wrap_indices};
use torus_core::{Axis, Coo, Csc, Csr, Error, Result};

/// Validate a shift descriptor and return the axis size as `i64`.
fn checked_size(shift: i64, size: usize) -> Result<i64> {
    let size_i = i64::try_from(size).map_err(|_| Error::Overflow {
        what: "axis size does not fit in i64",
    })?;
    if shift.unsigned_abs() > size_i.unsigned_abs() {
        return Err(Error::ShiftOutOfRange { shift, size });
    }
    Ok(size_i)
}

/// Reduce `shift` into `[0, size)`; zero-sized axes map everything to 0.
fn normalized_shift(shift: i64, size: usize) -> i64 {
    i64::try_from(size)
        .ok()
        .filter(|&s| s > 0)
        .map_or(0, |s| shift.rem_euclid(s))
}

/// Rotate the parallel triple arrays by `rotation` entry positions.
///
/// Positive `rotation` moves the last `rotation` entries to the front,
/// negative moves the first `|rotation|` entries to the back.
fn rotate_entries(major: &mut [i64], minor: &mut [i64], data: &mut [f64], rotation: i64) {
    let nnz = data.len();
    if nnz == 0 || rotation == 0 {
        return;
    }
    let steps = usize::try_from(rotation.unsigned_abs()).map_or(0, |r| r % nnz);
    if rotation > 0 {
        major.rotate_right(steps);
        minor.rotate_right(steps);
        data.rotate_right(steps);
    } else {
        major.rotate_left(steps);
        minor.rotate_left(steps);
        data.rotate_left(steps);
    }
}

/// Shift a coordinate list given in compressed-layout order and compress it
/// back into that layout. `along_major` selects which coordinate moves.
#[allow(clippy::too_many_arguments)]
fn shift_compressed(
    major_axis: Axis,
    nmajor: usize,
    nminor: usize,
    mut major: Vec<i64>,
    mut minor: Vec<i64>,
    mut data: Vec<f64>,
    shift: i64,
    along_major: bool,
) -> Result<Compressed> {
    let size = if along_major { nmajor } else { nminor };
    let size_i = checked_size(shift, size)?;

    let moved = if along_major { &mut major } else { &mut minor };
    add_offset(moved, shift);
    let rotation = wrap_indices(moved, size_i);

    let out = if along_major {
        rotate_entries(&mut major, &mut minor, &mut data, rotation);
        compress(nmajor, major_axis, &major, &minor, &data, TripletOptions::PRESORTED)?
    } else {
        compress(nmajor, major_axis, &major, &minor, &data, TripletOptions::UNSORTED)?
    };
    tracing::debug!(
        nmajor,
        nminor,
        nnz = data.len(),
        shift,
        rotation,
        path = if along_major { "rotate" } else { "sort" },
        "circular shift"
    );
    Ok(out)
}

/// Circularly shifts a CSC matrix by `shift` positions along `axis`.
///
/// Positive shifts move entries toward larger indices (down for
/// [`Axis::Rows`], right for [`Axis::Columns`]). The input is not modified;
/// the result has the same shape and nnz.
///
/// # Errors
/// [`Error::ShiftOutOfRange`] if `|shift|` exceeds the axis size.
pub fn circshift_csc_f64_i64(
    a: &Csc<f64, i64>,
    shift: i64,
    axis: Axis,
) -> Result<Csc<f64, i64>> {
    let (nrows, ncols) = a.shape();
    if axis.len_of(a.shape()) == 0 {
        return Ok(a.clone());
    }
    let Coo { row, col, data, .. } = csc_to_coo_f64_i64(a);
    let along_major = axis == Axis::Columns;
    let c = shift_compressed(Axis::Columns, ncols, nrows, col, row, data, shift, along_major)?;
    Ok(Csc::from_parts_unchecked(nrows, ncols, c.indptr, c.indices, c.data))
}

/// Circularly shifts a CSR matrix by `shift` positions along `axis`.
///
/// Same contract as [`circshift_csc_f64_i64`]; the rotation shortcut applies
/// to row shifts here.
///
/// # Errors
/// [`Error::ShiftOutOfRange`] if `|shift|` exceeds the axis size.
pub fn circshift_csr_f64_i64(
    a: &Csr<f64, i64>,
    shift: i64,
    axis: Axis,
) -> Result<Csr<f64, i64>> {
    let (nrows, ncols) = a.shape();
    if axis.len_of(a.shape()) == 0 {
        return Ok(a.clone());
    }
    let Coo { row, col, data, .. } = csr_to_coo_f64_i64(a);
    let along_major = axis == Axis::Rows;
    let c = shift_compressed(Axis::Rows, nrows, ncols, row, col, data, shift, along_major)?;
    Ok(Csr::from_parts_unchecked(nrows, ncols, c.indptr, c.indices, c.data))
}

/// Circularly shifts a COO matrix by `shift` positions along `axis`.
///
/// Entry order is kept; only the selected coordinate changes.
///
/// # Errors
/// [`Error::ShiftOutOfRange`] if `|shift|` exceeds the axis size.
pub fn circshift_coo_f64_i64(
    a: &Coo<f64, i64>,
    shift: i64,
    axis: Axis,
) -> Result<Coo<f64, i64>> {
    let size = axis.len_of(a.shape());
    if size == 0 {
        return Ok(a.clone());
    }
    let size_i = checked_size(shift, size)?;
    let mut row = a.row.clone();
    let mut col = a.col.clone();
    let moved = match axis {
        Axis::Rows => &mut row,
        Axis::Columns => &mut col,
    };
    add_offset(moved, shift);
    let rotation = wrap_indices(moved, size_i);
    tracing::debug!(
        nrows = a.nrows,
        ncols = a.ncols,
        nnz = a.nnz(),
        %axis,
        shift,
        rotation,
        "circular shift (coo)"
    );
    Ok(Coo::from_parts_unchecked(a.nrows, a.ncols, row, col, a.data.clone()))
}

/// [`circshift_csc_f64_i64`] for any shift amount, reduced modulo the axis size.
#[must_use]
pub fn circshift_csc_wrapping_f64_i64(
    a: &Csc<f64, i64>,
    shift: i64,
    axis: Axis,
) -> Csc<f64, i64> {
    let s = normalized_shift(shift, axis.len_of(a.shape()));
    circshift_csc_f64_i64(a, s, axis)
        .unwrap_or_else(|_| unreachable!("normalized shift and indptr-derived indices in range"))
}

/// [`circshift_csr_f64_i64`] for any shift amount, reduced modulo the axis size.
#[must_use]
pub fn circshift_csr_wrapping_f64_i64(
    a: &Csr<f64, i64>,
    shift: i64,
    axis: Axis,
) -> Csr<f64, i64> {
    let s = normalized_shift(shift, axis.len_of(a.shape()));
    circshift_csr_f64_i64(a, s, axis)
        .unwrap_or_else(|_| unreachable!("normalized shift and indptr-derived indices in range"))
}

/// [`circshift_coo_f64_i64`] for any shift amount, reduced modulo the axis size.
#[must_use]
pub fn circshift_coo_wrapping_f64_i64(
    a: &Coo<f64, i64>,
    shift: i64,
    axis: Axis,
) -> Coo<f64, i64> {
    let s = normalized_shift(shift, axis.len_of(a.shape()));
    circshift_coo_f64_i64(a, s, axis)
        .unwrap_or_else(|_| unreachable!("normalized shift and indptr-derived indices in range"))
}

/// Circular shift for every sparse format.
pub trait CircShift: Sized {
    /// Checked shift, see [`circshift_csc_f64_i64`].
    ///
    /// # Errors
    /// [`Error::ShiftOutOfRange`] if `|shift|` exceeds the axis size.
    fn circshift(&self, shift: i64, axis: Axis) -> Result<Self>;

    /// Shift by any amount, reduced modulo the axis size.
    #[must_use]
    fn circshift_wrapping(&self, shift: i64, axis: Axis) -> Self;
}

impl CircShift for Csc<f64, i64> {
    #[inline]
    fn circshift(&self, shift: i64, axis: Axis) -> Result<Self> {
        circshift_csc_f64_i64(self, shift, axis)
    }
    #[inline]
    fn circshift_wrapping(&self, shift: i64, axis: Axis) -> Self {
        circshift_csc_wrapping_f64_i64(self, shift, axis)
    }
}

impl CircShift for Csr<f64, i64> {
    #[inline]
    fn circshift(&self, shift: i64, axis: Axis) -> Result<Self> {
        circshift_csr_f64_i64(self, shift, axis)
    }
    #[inline]
    fn circshift_wrapping(&self, shift: i64, axis: Axis) -> Self {
        circshift_csr_wrapping_f64_i64(self, shift, axis)
    }
}

impl CircShift for Coo<f64, i64> {
    #[inline]
    fn circshift(&self, shift: i64, axis: Axis) -> Result<Self> {
        circshift_coo_f64_i64(self, shift, axis)
    }
    #[inline]
    fn circshift_wrapping(&self, shift: i64, axis: Axis) -> Self {
        circshift_coo_wrapping_f64_i64(self, shift, axis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotate_positive_moves_tail_to_front() {
        let mut ma = vec![0i64, 1, 2, 3];
        let mut mi = vec![10i64, 11, 12, 13];
        let mut d = vec![0.0, 1.0, 2.0, 3.0];
        rotate_entries(&mut ma, &mut mi, &mut d, 1);
        assert_eq!(ma, vec![3, 0, 1, 2]);
        assert_eq!(mi, vec![13, 10, 11, 12]);
        assert_eq!(d, vec![3.0, 0.0, 1.0, 2.0]);
    }

    #[test]
    fn rotate_negative_moves_head_to_back() {
        let mut ma = vec![0i64, 1, 2];
        let mut mi = vec![5i64, 6, 7];
        let mut d = vec![0.5, 1.5, 2.5];
        rotate_entries(&mut ma, &mut mi, &mut d, -2);
        assert_eq!(ma, vec![2, 0, 1]);
        assert_eq!(d, vec![2.5, 0.5, 1.5]);
    }

    #[test]
    fn rotate_full_cycle_is_identity() {
        let mut ma = vec![0i64, 1, 2];
        let mut mi = vec![0i64, 0, 0];
        let mut d = vec![1.0, 2.0, 3.0];
        rotate_entries(&mut ma, &mut mi, &mut d, 3);
        assert_eq!(ma, vec![0, 1, 2]);
        rotate_entries(&mut ma, &mut mi, &mut d, -3);
        assert_eq!(ma, vec![0, 1, 2]);
    }

    #[test]
    fn shift_range() {
        assert_eq!(checked_size(5, 5), Ok(5));
        assert_eq!(checked_size(-5, 5), Ok(5));
        assert_eq!(
            checked_size(6, 5),
            Err(Error::ShiftOutOfRange { shift: 6, size: 5 })
        );
        assert!(checked_size(i64::MIN, 5).is_err());
    }

    #[test]
    fn normalize() {
        assert_eq!(normalized_shift(-1, 5), 4);
        assert_eq!(normalized_shift(12, 5), 2);
        assert_eq!(normalized_shift(7, 0), 0);
    }
}
