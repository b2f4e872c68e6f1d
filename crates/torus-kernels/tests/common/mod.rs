#![allow(dead_code)]

use torus_core::{Coo, Csc};
use torus_kernels::coo_to_csc_f64_i64;

/// Square `n x n` matrix with constant diagonals given as `(offset, value)`.
/// Positive offsets are above the main diagonal.
pub fn banded_csc(n: usize, diagonals: &[(i64, f64)]) -> Csc<f64, i64> {
    let mut row = Vec::new();
    let mut col = Vec::new();
    let mut data = Vec::new();
    let n_i = n as i64;
    for &(offset, value) in diagonals {
        for i in 0..n_i {
            let j = i + offset;
            if (0..n_i).contains(&j) {
                row.push(i);
                col.push(j);
                data.push(value);
            }
        }
    }
    let coo = Coo::from_parts(n, n, row, col, data, true).unwrap();
    coo_to_csc_f64_i64(&coo).unwrap()
}

/// 10x10 test matrix: diagonals 0, +-1 at 1.0, +-2 at 1.5, +-5 at 2.5.
pub fn demo_matrix(n: usize) -> Csc<f64, i64> {
    banded_csc(
        n,
        &[
            (0, 1.0),
            (1, 1.0),
            (-1, 1.0),
            (2, 1.5),
            (-2, 1.5),
            (5, 2.5),
            (-5, 2.5),
        ],
    )
}

/// A = [[1,0,2],[0,3,0]] in CSC
pub fn simple_csc() -> Csc<f64, i64> {
    Csc::from_parts(
        2,
        3,
        vec![0i64, 1, 2, 3],
        vec![0i64, 1, 0],
        vec![1.0f64, 3.0, 2.0],
        true,
    )
    .unwrap()
}

/// Re-validate a kernel output with the full structural check.
pub fn assert_valid_csc(a: &Csc<f64, i64>) {
    let checked = Csc::from_parts(
        a.nrows,
        a.ncols,
        a.indptr.clone(),
        a.indices.clone(),
        a.data.clone(),
        true,
    );
    assert!(checked.is_ok(), "invalid CSC output: {:?}", checked.err());
}
