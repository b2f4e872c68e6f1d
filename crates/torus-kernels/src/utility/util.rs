//! Utility constants and index conversions shared by the kernels
//
// Thresholds decide when a kernel switches from a serial loop to rayon.
// Below them the thread handoff costs more than the work.

/// Stripe size for parallel passes over index arrays
pub const STRIPE: usize = 8192;
/// Entry count below which kernels stay serial
pub const SMALL_NNZ_LIMIT: usize = 32 * 1024;

/// Convert i64 to usize, asserting non-negativity.
#[inline]
#[must_use]
pub fn i64_to_usize(x: i64) -> usize {
    debug_assert!(x >= 0, "value must be non-negative");
    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    {
        x as usize
    }
}

/// Convert usize to i64, asserting the value fits.
#[inline]
#[must_use]
pub fn usize_to_i64(x: usize) -> i64 {
    debug_assert!(i64::try_from(x).is_ok(), "value must fit in i64");
    #[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
    {
        x as i64
    }
}

/// Expand a compressed pointer array into one major index per stored entry.
///
/// Entry `p` with `indptr[m] <= p < indptr[m + 1]` gets `m`. `indptr` must
/// start at 0 and be non-decreasing, which `from_parts` always verifies.
///
/// # Panics
/// Panics if `indptr` decreases or overshoots its last element, which is
/// only possible for matrices assembled with `from_parts_unchecked`.
#[must_use]
pub fn expand_indptr(indptr: &[i64]) -> Vec<i64> {
    use rayon::prelude::*;

    let nnz = indptr.last().copied().map_or(0, i64_to_usize);
    let mut out = vec![0i64; nnz];
    // Each major slice owns the disjoint range indptr[m]..indptr[m + 1].
    let mut slices: Vec<&mut [i64]> = Vec::with_capacity(indptr.len().saturating_sub(1));
    let mut rest = out.as_mut_slice();
    for w in indptr.windows(2) {
        let len = w[1]
            .checked_sub(w[0])
            .and_then(|d| usize::try_from(d).ok())
            .filter(|&d| d <= rest.len())
            .unwrap_or_else(|| {
                panic!("indptr must be non-decreasing up to nnz, got {} then {}", w[0], w[1])
            });
        let (head, tail) = std::mem::take(&mut rest).split_at_mut(len);
        slices.push(head);
        rest = tail;
    }
    if nnz < SMALL_NNZ_LIMIT {
        for (m, slice) in slices.into_iter().enumerate() {
            slice.fill(usize_to_i64(m));
        }
    } else {
        slices
            .into_par_iter()
            .enumerate()
            .for_each(|(m, slice)| slice.fill(usize_to_i64(m)));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expand_small() {
        assert_eq!(expand_indptr(&[0, 2, 2, 3]), vec![0, 0, 2]);
        assert!(expand_indptr(&[0]).is_empty());
        assert!(expand_indptr(&[]).is_empty());
    }

    #[test]
    fn expand_parallel_matches_serial() {
        let nmajor = 5_000usize;
        let indptr: Vec<i64> = (0..=nmajor).map(|m| usize_to_i64(m * 9)).collect();
        let out = expand_indptr(&indptr);
        assert_eq!(out.len(), nmajor * 9);
        assert!(out.len() >= SMALL_NNZ_LIMIT);
        for (p, &m) in out.iter().enumerate() {
            assert_eq!(m, usize_to_i64(p / 9));
        }
    }

    #[test]
    #[should_panic(expected = "non-decreasing up to nnz")]
    fn expand_rejects_overshooting_pointer() {
        let _ = expand_indptr(&[0, 4_000_000, 40_000]);
    }

    #[test]
    #[should_panic(expected = "non-decreasing up to nnz")]
    fn expand_rejects_decreasing_pointer() {
        let _ = expand_indptr(&[0, 5, 3]);
    }
}
