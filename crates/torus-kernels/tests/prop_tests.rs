//! Property-based tests for the index wrapper and the sparse circular shift.

mod common;

use proptest::prelude::*;
use torus_core::{Axis, Coo, Csc};
use torus_kernels::*;

/// Random CSC matrix up to 12x12 with roughly a quarter of entries nonzero.
fn sparse_matrix() -> impl Strategy<Value = Csc<f64, i64>> {
    (1usize..12, 1usize..12).prop_flat_map(|(nrows, ncols)| {
        proptest::collection::vec(
            prop_oneof![3 => Just(0.0f64), 1 => (1i32..100).prop_map(f64::from)],
            nrows * ncols,
        )
        .prop_map(move |cells| {
            let mut row = Vec::new();
            let mut col = Vec::new();
            let mut data = Vec::new();
            for (k, &v) in cells.iter().enumerate() {
                if v != 0.0 {
                    row.push((k / ncols) as i64);
                    col.push((k % ncols) as i64);
                    data.push(v);
                }
            }
            let coo = Coo::from_parts(nrows, ncols, row, col, data, true).unwrap();
            coo_to_csc_f64_i64(&coo).unwrap()
        })
    })
}

fn any_axis() -> impl Strategy<Value = Axis> {
    prop_oneof![Just(Axis::Rows), Just(Axis::Columns)]
}

/// Matrix, axis and one in-range shift.
fn shifted_case() -> impl Strategy<Value = (Csc<f64, i64>, Axis, i64)> {
    (sparse_matrix(), any_axis()).prop_flat_map(|(a, axis)| {
        let size = axis.len_of(a.shape()) as i64;
        (Just(a), Just(axis), -size..=size)
    })
}

proptest! {
    /// For v in [-size, 2*size): result is v mod size, count is +1/-1/0.
    #[test]
    fn prop_wrap_single_value((size, v) in (1i64..1000).prop_flat_map(|s| (Just(s), -s..2 * s))) {
        let mut idx = [v];
        let k = wrap_indices(&mut idx, size);
        prop_assert_eq!(idx[0], v.rem_euclid(size));
        let expected = if v >= size { 1 } else if v < 0 { -1 } else { 0 };
        prop_assert_eq!(k, expected);
    }

    /// Euclid wrap lands in range for any offset and reports whole laps.
    #[test]
    fn prop_wrap_euclid(
        size in 1i64..500,
        values in proptest::collection::vec(-10_000i64..10_000, 0..64),
    ) {
        let mut idx = values.clone();
        let k = wrap_indices_euclid(&mut idx, size);
        for (&w, &v) in idx.iter().zip(&values) {
            prop_assert!((0..size).contains(&w));
            prop_assert_eq!(w, v.rem_euclid(size));
        }
        let laps: i64 = values.iter().map(|v| v.div_euclid(size)).sum();
        prop_assert_eq!(k, laps);
    }

    /// Shape and nnz are preserved and the output is a valid CSC matrix.
    #[test]
    fn prop_shape_preserved((a, axis, s) in shifted_case()) {
        let out = circshift_csc_f64_i64(&a, s, axis).unwrap();
        prop_assert_eq!(out.shape(), a.shape());
        prop_assert_eq!(out.nnz(), a.nnz());
        common::assert_valid_csc(&out);
    }

    /// shift(shift(M, s1), s2) == shift(M, s1 + s2) for in-range amounts.
    #[test]
    fn prop_group_law(
        (a, axis, s1, s2) in (sparse_matrix(), any_axis()).prop_flat_map(|(a, axis)| {
            let size = axis.len_of(a.shape()) as i64;
            (Just(a), Just(axis), -size..=size, -size..=size)
        })
    ) {
        let size = axis.len_of(a.shape()) as i64;
        prop_assume!((s1 + s2).abs() <= size);
        let first = circshift_csc_f64_i64(&a, s1, axis).unwrap();
        let twice = circshift_csc_f64_i64(&first, s2, axis).unwrap();
        let once = circshift_csc_f64_i64(&a, s1 + s2, axis).unwrap();
        prop_assert_eq!(twice, once);
    }

    /// Zero shift and full cycles return the input.
    #[test]
    fn prop_identity_and_full_cycle((a, axis) in (sparse_matrix(), any_axis())) {
        let size = axis.len_of(a.shape()) as i64;
        prop_assert_eq!(&circshift_csc_f64_i64(&a, 0, axis).unwrap(), &a);
        prop_assert_eq!(&circshift_csc_f64_i64(&a, size, axis).unwrap(), &a);
        prop_assert_eq!(&circshift_csc_f64_i64(&a, -size, axis).unwrap(), &a);
    }

    /// Shifting rows then transposing equals transposing then shifting columns.
    #[test]
    fn prop_row_column_symmetry((a, s) in sparse_matrix().prop_flat_map(|a| {
        let n = a.nrows as i64;
        (Just(a), -n..=n)
    })) {
        let shifted = circshift_csc_f64_i64(&a, s, Axis::Rows).unwrap();
        let left = transpose_csc_f64_i64(&shifted).unwrap();
        let at = transpose_csc_f64_i64(&a).unwrap();
        let right = circshift_csc_f64_i64(&at, s, Axis::Columns).unwrap();
        prop_assert_eq!(left, right);
    }

    /// Densified result equals the dense rotation.
    #[test]
    fn prop_matches_dense_rotation((a, axis, s) in shifted_case()) {
        let (nr, nc) = a.shape();
        let before = todense_csc_f64_i64(&a).unwrap();
        let shifted = circshift_csc_f64_i64(&a, s, axis).unwrap();
        let after = todense_csc_f64_i64(&shifted).unwrap();
        for i in 0..nr {
            for j in 0..nc {
                let (ti, tj) = match axis {
                    Axis::Rows => (((i as i64 + s).rem_euclid(nr as i64)) as usize, j),
                    Axis::Columns => (i, ((j as i64 + s).rem_euclid(nc as i64)) as usize),
                };
                prop_assert_eq!(after[ti * nc + tj], before[i * nc + j]);
            }
        }
    }

    /// CSR and COO variants agree with the CSC kernel.
    #[test]
    fn prop_formats_agree((a, axis, s) in shifted_case()) {
        let expected = circshift_csc_f64_i64(&a, s, axis).unwrap();
        let via_csr = circshift_csr_f64_i64(&csc_to_csr_f64_i64(&a).unwrap(), s, axis).unwrap();
        prop_assert_eq!(csr_to_csc_f64_i64(&via_csr).unwrap(), expected.clone());
        let via_coo = circshift_coo_f64_i64(&csc_to_coo_f64_i64(&a), s, axis).unwrap();
        prop_assert_eq!(coo_to_csc_f64_i64(&via_coo).unwrap(), expected);
    }

    /// Wrapping variant accepts any amount and agrees with the checked one.
    #[test]
    fn prop_wrapping_agrees((a, axis, s) in shifted_case(), laps in -3i64..=3) {
        let size = axis.len_of(a.shape()) as i64;
        let checked = circshift_csc_f64_i64(&a, s, axis).unwrap();
        prop_assert_eq!(circshift_csc_wrapping_f64_i64(&a, s + laps * size, axis), checked);
    }
}
