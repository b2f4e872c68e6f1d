//! Wrap shifted coordinates back into `[0, size)`.
//!
//! Both wrappers mutate the index slice in place and return the signed
//! rotation count: wraps past the upper bound minus wraps past the lower one.

use crate::utility::util::{SMALL_NNZ_LIMIT, STRIPE};
use rayon::prelude::*;

#[inline]
fn wrap_serial(indices: &mut [i64], size: i64) -> i64 {
    let mut shifted = 0i64;
    for v in indices.iter_mut() {
        if *v >= size {
            *v -= size;
            shifted += 1;
        } else if *v < 0 {
            *v += size;
            shifted -= 1;
        }
    }
    shifted
}

/// Single-step wrap of every index into `[0, size)`.
///
/// Values `>= size` lose one `size` (+1 to the count), negative values gain
/// one `size` (-1 to the count), others are untouched. Only inputs in
/// `[-size, 2 * size)` are guaranteed to land in range; anything further out
/// is moved by exactly one `size` and no more. Use [`wrap_indices_euclid`]
/// for arbitrary offsets.
pub fn wrap_indices(indices: &mut [i64], size: i64) -> i64 {
    let len = indices.len();
    let rotation = if len < SMALL_NNZ_LIMIT {
        wrap_serial(indices, size)
    } else {
        indices
            .par_chunks_mut(STRIPE)
            .map(|chunk| wrap_serial(chunk, size))
            .sum()
    };
    tracing::trace!(len, size, rotation, "wrapped indices");
    rotation
}

/// Modular wrap of every index into `[0, size)`, for any offset.
///
/// Returns the sum of `v.div_euclid(size)` over all inputs, which equals the
/// [`wrap_indices`] count whenever every value is in `[-size, 2 * size)`.
///
/// # Panics
/// Panics if `size <= 0`.
pub fn wrap_indices_euclid(indices: &mut [i64], size: i64) -> i64 {
    assert!(size > 0, "size must be positive");
    let wrap = |chunk: &mut [i64]| -> i64 {
        let mut shifted = 0i64;
        for v in chunk.iter_mut() {
            shifted += v.div_euclid(size);
            *v = v.rem_euclid(size);
        }
        shifted
    };
    let rotation = if indices.len() < SMALL_NNZ_LIMIT {
        wrap(indices)
    } else {
        indices.par_chunks_mut(STRIPE).map(wrap).sum()
    };
    tracing::trace!(len = indices.len(), size, rotation, "wrapped indices (euclid)");
    rotation
}

/// Add `offset` to every index.
pub(crate) fn add_offset(indices: &mut [i64], offset: i64) {
    if offset == 0 {
        return;
    }
    if indices.len() < SMALL_NNZ_LIMIT {
        for v in indices.iter_mut() {
            *v += offset;
        }
    } else {
        indices.par_iter_mut().for_each(|v| *v += offset);
    }
}
