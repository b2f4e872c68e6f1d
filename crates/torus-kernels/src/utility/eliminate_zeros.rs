//! Eliminate explicit zeros (utility function, not standard Array API)

use crate::utility::util::{i64_to_usize, usize_to_i64};
use torus_core::{Coo, Csc, Csr};

/// Filter every major slice, keeping storage order.
fn drop_zeros(indptr: &[i64], indices: &[i64], data: &[f64]) -> (Vec<i64>, Vec<i64>, Vec<f64>) {
    let mut out_ptr = Vec::with_capacity(indptr.len());
    let mut out_idx = Vec::with_capacity(indices.len());
    let mut out_data = Vec::with_capacity(data.len());
    out_ptr.push(0i64);
    for w in indptr.windows(2) {
        let range = i64_to_usize(w[0])..i64_to_usize(w[1]);
        let minor = indices.get(range.clone()).unwrap_or_default();
        let values = data.get(range).unwrap_or_default();
        for (&i, &v) in minor.iter().zip(values) {
            if v != 0.0 {
                out_idx.push(i);
                out_data.push(v);
            }
        }
        out_ptr.push(usize_to_i64(out_idx.len()));
    }
    (out_ptr, out_idx, out_data)
}

#[must_use]
pub fn eliminate_zeros_csc(a: &Csc<f64, i64>) -> Csc<f64, i64> {
    let (indptr, indices, data) = drop_zeros(&a.indptr, &a.indices, &a.data);
    Csc::from_parts_unchecked(a.nrows, a.ncols, indptr, indices, data)
}

#[must_use]
pub fn eliminate_zeros_csr(a: &Csr<f64, i64>) -> Csr<f64, i64> {
    let (indptr, indices, data) = drop_zeros(&a.indptr, &a.indices, &a.data);
    Csr::from_parts_unchecked(a.nrows, a.ncols, indptr, indices, data)
}

#[must_use]
pub fn eliminate_zeros_coo(a: &Coo<f64, i64>) -> Coo<f64, i64> {
    let keep = a.data.iter().map(|&v| v != 0.0);
    let mut row = Vec::with_capacity(a.nnz());
    let mut col = Vec::with_capacity(a.nnz());
    let mut data = Vec::with_capacity(a.nnz());
    for (k, kept) in keep.enumerate() {
        if kept {
            row.push(a.row[k]);
            col.push(a.col[k]);
            data.push(a.data[k]);
        }
    }
    Coo::from_parts_unchecked(a.nrows, a.ncols, row, col, data)
}
