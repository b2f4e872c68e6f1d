//! Structural validation shared by the compressed formats

use crate::axis::Axis;
use crate::error::{Error, Result};

/// Axis names for error messages: (minor index name, major slice name)
pub(crate) type AxisNames = (&'static str, &'static str);

pub(crate) const CSC_NAMES: AxisNames = (Axis::Rows.coordinate(), Axis::Columns.coordinate());
pub(crate) const CSR_NAMES: AxisNames = (Axis::Columns.coordinate(), Axis::Rows.coordinate());

/// Validate `indptr`/`indices`/`data` for a compressed layout with `nmajor`
/// slices of `nminor` possible positions each.
///
/// The O(nmajor) `indptr` checks always run, so every accepted matrix has
/// slices that lie inside `indices`. The O(nnz) per-slice bounds and
/// ordering checks only run when `check` is set.
pub(crate) fn validate(
    nmajor: usize,
    nminor: usize,
    indptr: &[i64],
    indices: &[i64],
    data: &[f64],
    check: bool,
    names: AxisNames,
) -> Result<()> {
    let (minor_name, major_name) = names;
    let Some(expected_len) = nmajor.checked_add(1) else {
        return Err(Error::Overflow {
            what: "major dimension + 1",
        });
    };
    if indptr.len() != expected_len {
        return Err(Error::InvalidIndptr {
            reason: "length must be major dimension + 1",
        });
    }
    if indices.len() != data.len() {
        return Err(Error::LengthMismatch {
            what: "indices and data must have equal length",
        });
    }
    let nnz = indices.len();
    if usize::try_from(indptr.last().copied().unwrap_or(0)).ok() != Some(nnz) {
        return Err(Error::InvalidIndptr {
            reason: "last element must equal nnz",
        });
    }
    if indptr.first().copied().unwrap_or(0) != 0 {
        return Err(Error::InvalidIndptr {
            reason: "first element must be 0",
        });
    }
    for (&start_i, &end_i) in indptr.iter().zip(indptr.iter().skip(1)) {
        if start_i < 0 || end_i < 0 {
            return Err(Error::InvalidIndptr {
                reason: "elements must be non-negative",
            });
        }
        if start_i > end_i {
            return Err(Error::InvalidIndptr {
                reason: "must be non-decreasing",
            });
        }
    }
    if !check {
        return Ok(());
    }
    for (&start_i, &end_i) in indptr.iter().zip(indptr.iter().skip(1)) {
        let (Ok(start), Ok(end)) = (usize::try_from(start_i), usize::try_from(end_i)) else {
            return Err(Error::InvalidIndptr {
                reason: "elements must be within [0, nnz]",
            });
        };
        let Some(slice) = indices.get(start..end) else {
            return Err(Error::InvalidIndptr {
                reason: "elements must be within [0, nnz]",
            });
        };
        let mut prev = -1_i64;
        for &i in slice {
            let out_of_bounds = usize::try_from(i).map_or(true, |ii| ii >= nminor);
            if out_of_bounds {
                return Err(Error::IndexOutOfBounds {
                    axis: minor_name,
                    index: i,
                    size: nminor,
                });
            }
            if i <= prev {
                return Err(Error::UnsortedIndices {
                    axis: minor_name,
                    major: major_name,
                });
            }
            prev = i;
        }
    }
    Ok(())
}

/// `(minor, value)` pairs of the slice bounded by the pointer pair `w`.
///
/// A range that does not fit inside `indices`/`data` yields nothing, so
/// matrices assembled with `from_parts_unchecked` never index out of bounds.
pub(crate) fn slice_entries<'a>(
    w: &[i64],
    indices: &'a [i64],
    data: &'a [f64],
) -> impl Iterator<Item = (i64, f64)> + 'a {
    let start = usize::try_from(w[0]).unwrap_or(0);
    let end = usize::try_from(w[1]).unwrap_or(0);
    let minor = indices.get(start..end).unwrap_or_default();
    let values = data.get(start..end).unwrap_or_default();
    minor.iter().copied().zip(values.iter().copied())
}
