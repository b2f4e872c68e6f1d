//! Circular shift bindings operating on raw array parts

use numpy::{PyArray1, PyReadonlyArray1};
use pyo3::prelude::*;

use torus_core::{Coo, Csc, Csr};
use torus_kernels::{
    circshift_coo_f64_i64, circshift_csc_f64_i64, circshift_csr_f64_i64, wrap_indices,
    wrap_indices_euclid,
};

use super::helpers::{CompressedParts, convert_axis, csc_parts, csr_parts, value_error};

/// Wrap indices into `[0, size)`; returns the wrapped copy and the rotation count
#[pyfunction]
#[pyo3(name = "wrap_indices", signature = (indices, size, euclid = false))]
pub(crate) fn wrap_indices_py<'py>(
    py: Python<'py>,
    indices: PyReadonlyArray1<'py, i64>,
    size: i64,
    euclid: bool,
) -> PyResult<(Bound<'py, PyArray1<i64>>, i64)> {
    if euclid && size <= 0 {
        return Err(PyErr::new::<pyo3::exceptions::PyValueError, _>(
            "size must be positive",
        ));
    }
    let mut out: Vec<i64> = indices.as_slice()?.to_vec();
    let rotation = py.detach(|| {
        if euclid {
            wrap_indices_euclid(&mut out, size)
        } else {
            wrap_indices(&mut out, size)
        }
    });
    Ok((PyArray1::from_vec(py, out), rotation))
}

/// Circular shift of a CSC matrix given by parts
#[pyfunction]
#[allow(clippy::too_many_arguments)]
pub(crate) fn circshift_from_parts<'py>(
    py: Python<'py>,
    nrows: usize,
    ncols: usize,
    indptr: PyReadonlyArray1<'py, i64>,
    indices: PyReadonlyArray1<'py, i64>,
    data: PyReadonlyArray1<'py, f64>,
    shift: i64,
    axis: i64,
    check: bool,
) -> PyResult<CompressedParts<'py>> {
    let axis = convert_axis(axis)?;
    let a = Csc::from_parts(
        nrows,
        ncols,
        indptr.as_slice()?.to_vec(),
        indices.as_slice()?.to_vec(),
        data.as_slice()?.to_vec(),
        check,
    )
    .map_err(value_error)?;
    let c = py
        .detach(|| circshift_csc_f64_i64(&a, shift, axis))
        .map_err(value_error)?;
    Ok(csc_parts(py, c))
}

/// Circular shift of a CSR matrix given by parts
#[pyfunction]
#[allow(clippy::too_many_arguments)]
pub(crate) fn circshift_csr_from_parts<'py>(
    py: Python<'py>,
    nrows: usize,
    ncols: usize,
    indptr: PyReadonlyArray1<'py, i64>,
    indices: PyReadonlyArray1<'py, i64>,
    data: PyReadonlyArray1<'py, f64>,
    shift: i64,
    axis: i64,
    check: bool,
) -> PyResult<CompressedParts<'py>> {
    let axis = convert_axis(axis)?;
    let a = Csr::from_parts(
        nrows,
        ncols,
        indptr.as_slice()?.to_vec(),
        indices.as_slice()?.to_vec(),
        data.as_slice()?.to_vec(),
        check,
    )
    .map_err(value_error)?;
    let c = py
        .detach(|| circshift_csr_f64_i64(&a, shift, axis))
        .map_err(value_error)?;
    Ok(csr_parts(py, c))
}

/// Circular shift of a COO matrix given by parts; returns `(row, col, data, nrows, ncols)`
#[pyfunction]
#[allow(clippy::too_many_arguments)]
pub(crate) fn circshift_coo_from_parts<'py>(
    py: Python<'py>,
    nrows: usize,
    ncols: usize,
    row: PyReadonlyArray1<'py, i64>,
    col: PyReadonlyArray1<'py, i64>,
    data: PyReadonlyArray1<'py, f64>,
    shift: i64,
    axis: i64,
    check: bool,
) -> PyResult<CompressedParts<'py>> {
    let axis = convert_axis(axis)?;
    let a = Coo::from_parts(
        nrows,
        ncols,
        row.as_slice()?.to_vec(),
        col.as_slice()?.to_vec(),
        data.as_slice()?.to_vec(),
        check,
    )
    .map_err(value_error)?;
    let c = py
        .detach(|| circshift_coo_f64_i64(&a, shift, axis))
        .map_err(value_error)?;
    Ok((
        PyArray1::from_vec(py, c.row),
        PyArray1::from_vec(py, c.col),
        PyArray1::from_vec(py, c.data),
        c.nrows,
        c.ncols,
    ))
}
